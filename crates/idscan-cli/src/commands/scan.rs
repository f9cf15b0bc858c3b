//! Scan command - run OCR on a document image and extract its fields.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use idscan_core::DocumentScanner;

use super::config::load_config;
use super::extract::{fail, format_record, OutputFormat};
use crate::recognizer::CommandRecognizer;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Document image (PNG, JPEG, ...)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// OCR command overriding the configured one; `{input}` is the image path
    #[arg(long, num_args = 1.., value_delimiter = ' ')]
    ocr_command: Option<Vec<String>>,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let command = args
        .ocr_command
        .as_deref()
        .unwrap_or(&config.scanner.ocr_command);
    let recognizer = CommandRecognizer::new(command)?;
    let scanner = DocumentScanner::with_config(recognizer, &config);

    info!("Scanning file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Running OCR...");

    let input = args.input.clone();
    let result = tokio::task::spawn_blocking(move || scanner.scan_file(&input)).await?;
    pb.finish_and_clear();

    let record = match result {
        Ok(record) => record,
        Err(e) => {
            debug!("Scan failed: {}", e);
            eprintln!("{} {}", style("ℹ").blue(), e);
            return fail(e.kind());
        }
    };

    let output = format_record(&record, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
