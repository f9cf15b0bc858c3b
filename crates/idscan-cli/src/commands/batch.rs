//! Batch command for many OCR text files.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use idscan_core::{DocumentExtractor, ExtractedRecord, RuleBasedExtractor};

use super::config::load_config;
use super::extract::{format_record, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching OCR text files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    record: Option<ExtractedRecord>,
    error: Option<String>,
    processing_time_us: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        check_output_names(&files)?;
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );

    let extractor = Arc::new(RuleBasedExtractor::with_config(&config.extraction));

    let mut pending = stream::iter(files)
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            async move {
                let file_start = Instant::now();
                let result = process_single_file(&path, &extractor).await;
                (path, result, file_start.elapsed().as_micros() as u64)
            }
        })
        .buffered(args.jobs.max(1));

    let mut results = Vec::new();
    while let Some((path, result, processing_time_us)) = pending.next().await {
        pb.inc(1);
        match result {
            Ok(record) => results.push(ProcessResult {
                path,
                record: Some(record),
                error: None,
                processing_time_us,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        record: None,
                        error: Some(error_msg),
                        processing_time_us,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }
    }

    pb.finish_and_clear();

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            if let Some(record) = &result.record {
                let output_name = result.path.file_stem().unwrap_or_default().to_string_lossy();
                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, format_record(record, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Per-file outputs are named by file stem, so two inputs with the same stem
/// would overwrite each other.
fn check_output_names(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::new();
    for path in files {
        let stem = path.file_stem().unwrap_or_default();
        if let Some(previous) = seen.insert(stem, path) {
            anyhow::bail!(
                "{} and {} share the output name '{}'",
                previous.display(),
                path.display(),
                stem.to_string_lossy()
            );
        }
    }
    Ok(())
}

async fn process_single_file(
    path: &Path,
    extractor: &RuleBasedExtractor,
) -> anyhow::Result<ExtractedRecord> {
    let text = tokio::fs::read_to_string(path).await?;
    extractor
        .extract(&text)
        .map_err(|e| anyhow::anyhow!("{}", e.kind().code()))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "name",
        "document_number",
        "expiration_date",
        "document_type",
        "processing_time_us",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let elapsed = result.processing_time_us.to_string();

        if let Some(record) = &result.record {
            let expiry = record.expiration_date.to_string();
            wtr.write_record([
                filename,
                "success",
                record.name.as_str(),
                record.document_number.as_str(),
                expiry.as_str(),
                record.document_type.map(|t| t.code()).unwrap_or_default(),
                elapsed.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                elapsed.as_str(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
