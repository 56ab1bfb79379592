use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pdftext_core::FallbackRunner;
use pdftext_lopdf::LopdfBackend;
use pdftext_mupdf::MupdfBackend;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::Settings;
use output::ColorMode;

/// Print the text of every page of a PDF, falling back to a second engine on failure
#[derive(Parser, Debug)]
#[command(name = "pdftext", version, about, long_about = None)]
struct Cli {
    /// Path to the PDF file
    file_path: PathBuf,

    /// Exit with status 1 when no engine could read the document
    #[arg(long)]
    strict: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let settings = Settings::resolve(cli.strict, cli.no_color, stdout.is_terminal(), |key| {
        std::env::var(key).ok()
    });
    let color = ColorMode(settings.color);
    let mut writer = stdout.lock();

    let runner = FallbackRunner::new(Box::new(MupdfBackend::new()), Box::new(LopdfBackend::new()));
    let result = runner.run(&cli.file_path, |event| {
        output::print_event(&mut writer, &event, color)
    });
    let result = result.and_then(|report| writer.flush().map(|()| report));

    let report = match result {
        Ok(report) => report,
        // Reader went away (e.g. piped into `head`); nothing left to say.
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => return Ok(ExitCode::SUCCESS),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        succeeded_with = report.succeeded_with.unwrap_or("none"),
        pages = report.pages_written,
        failures = report.failures.len(),
        "run finished"
    );

    if exits_with_failure(report.succeeded(), settings.strict) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Logs go to stderr so stdout carries only page text and diagnostics.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Without `--strict` a run that read nothing still exits successfully.
fn exits_with_failure(succeeded: bool, strict: bool) -> bool {
    strict && !succeeded
}
