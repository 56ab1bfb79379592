//! Test documents built with lopdf's object API.
//!
//! Every page carries one line of Courier text, which both engines can read.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

/// Write a PDF with one page per entry of `pages`.
pub fn write_pdf(path: &Path, pages: &[&str]) -> lopdf::Result<()> {
    let count = pages.len() as i64;
    build(pages, count, PageTree::Present)?.save(path)?;
    Ok(())
}

/// Write a PDF whose page tree declares `/Count` as `declared` regardless of
/// how many pages it actually holds.
pub fn write_pdf_with_count(path: &Path, pages: &[&str], declared: i64) -> lopdf::Result<()> {
    build(pages, declared, PageTree::Present)?.save(path)?;
    Ok(())
}

/// Write a PDF whose catalog points `/Pages` at an object that doesn't exist.
pub fn write_pdf_without_page_tree(path: &Path) -> lopdf::Result<()> {
    build(&["Unreachable"], 1, PageTree::Dangling)?.save(path)?;
    Ok(())
}

enum PageTree {
    Present,
    Dangling,
}

fn build(pages: &[&str], declared: i64, tree: PageTree) -> lopdf::Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => declared,
        }),
    );

    let catalog_pages: ObjectId = match tree {
        PageTree::Present => pages_id,
        PageTree::Dangling => (pages_id.0 + 1000, 0),
    };
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => catalog_pages,
    });
    doc.trailer.set("Root", catalog_id);
    Ok(doc)
}
