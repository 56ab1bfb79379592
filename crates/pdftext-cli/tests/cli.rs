//! End-to-end tests that run the `pdftext` binary.

use std::path::Path;
use std::process::{Command, Output};

use pdftext_fixtures::write_pdf;

fn pdftext(path: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdftext"))
        .args(extra)
        .arg(path)
        .env_remove("PDFTEXT_STRICT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run pdftext")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_pages_in_order_without_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    write_pdf(&path, &["Alpha page", "Beta page", "Gamma page"]).unwrap();

    let output = pdftext(&path, &[]);
    assert!(output.status.success());

    let out = stdout(&output);
    let alpha = out.find("Alpha page").expect("page 1 missing");
    let beta = out.find("Beta page").expect("page 2 missing");
    let gamma = out.find("Gamma page").expect("page 3 missing");
    assert!(alpha < beta && beta < gamma);
    assert!(!out.contains(" failed: "));
    // The fallback engine did not run, so each page appears once.
    assert_eq!(out.matches("Alpha page").count(), 1);
}

#[test]
fn missing_file_prints_two_diagnostics_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.pdf");

    let output = pdftext(&path, &[]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected output: {out:?}");
    assert!(lines[0].starts_with("MuPDF failed: "));
    assert!(lines[1].starts_with("lopdf failed: "));
}

#[test]
fn strict_flag_sets_failure_status() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.pdf");

    let output = pdftext(&path, &["--strict"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).lines().count(), 2);
}

#[test]
fn strict_env_sets_failure_status() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.pdf");

    let output = Command::new(env!("CARGO_BIN_EXE_pdftext"))
        .arg(&path)
        .env("PDFTEXT_STRICT", "1")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn strict_does_not_affect_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    write_pdf(&path, &["Only page"]).unwrap();

    let output = pdftext(&path, &["--strict"]);
    assert!(output.status.success());
}

#[test]
fn repeated_runs_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    write_pdf(&path, &["Same text", "Every time"]).unwrap();

    let first = pdftext(&path, &[]);
    let second = pdftext(&path, &[]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn path_is_required() {
    let output = Command::new(env!("CARGO_BIN_EXE_pdftext")).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
