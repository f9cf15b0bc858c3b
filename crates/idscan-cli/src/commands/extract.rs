//! Extract command - pull document fields out of OCR text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use idscan_core::{
    DocumentExtractor, ErrorKind, ExtractedRecord, ExtractionReport, RuleBasedExtractor,
};

use super::config::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// OCR text file (`-` or omitted reads stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the full extraction report (always JSON) instead of the record
    #[arg(long)]
    report: bool,

    /// Only accept labelled names, never a guess from capitalized words
    #[arg(long)]
    strict_names: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(args.input.as_ref())?;
    debug!("Read {} characters of OCR text", text.len());

    let mut extractor = RuleBasedExtractor::with_config(&config.extraction);
    if args.strict_names {
        extractor = extractor.with_generic_name_fallback(false);
    }

    if args.report {
        let report = extractor.analyze(&text);
        write_output(args.output.as_ref(), &format_report(&report)?)?;
        return Ok(());
    }

    match extractor.extract(&text) {
        Ok(record) => {
            info!("Extracted {}", record.type_label());
            write_output(args.output.as_ref(), &format_record(&record, args.format)?)
        }
        Err(e) => fail(e.kind()),
    }
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(output: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Print the retry prompt for a failure kind and exit with an error.
pub fn fail(kind: ErrorKind) -> anyhow::Result<()> {
    eprintln!("{} {}", style("✗").red(), style(kind.title()).red().bold());
    eprintln!("  {}", kind.hint());
    anyhow::bail!("{}", kind.code())
}

pub fn format_record(record: &ExtractedRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_report(report: &ExtractionReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn format_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "name",
        "document_number",
        "expiration_date",
        "document_type",
    ])?;

    wtr.write_record([
        record.name.as_str(),
        record.document_number.as_str(),
        record.expiration_date.to_string().as_str(),
        record.document_type.map(|t| t.code()).unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractedRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", record.type_label()));
    output.push_str(&format!("  Name:    {}\n", record.name));
    output.push_str(&format!("  Number:  {}\n", record.document_number));
    if record.expiration_date.is_never() {
        output.push_str("  Expires: never\n");
    } else {
        output.push_str(&format!("  Expires: {}\n", record.expiration_date));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use idscan_core::extract_document;

    const PAN: &str = "INCOME TAX DEPARTMENT\nPERMANENT ACCOUNT NUMBER\nJOHN SMITH\nAAAPL1234C";

    #[test]
    fn test_csv_output() {
        let record = extract_document(PAN).unwrap();
        let csv = format_record(&record, OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "name,document_number,expiration_date,document_type\n\
             John Smith,AAAPL1234C,9999-12-31,PAN\n"
        );
    }

    #[test]
    fn test_text_output() {
        let record = extract_document(PAN).unwrap();
        let text = format_record(&record, OutputFormat::Text).unwrap();
        assert!(text.starts_with("PAN Card\n"));
        assert!(text.contains("Expires: never"));
    }
}
