//! Batch command - extract contacts from many text files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use kontakt_core::extract::ContactParser;
use kontakt_core::filename::contact_filename;
use kontakt_core::{ImpressumParser, VCardData, VCardWriter};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input glob pattern (e.g. "imprints/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory for the .vcf files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write summary.csv to the output directory
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    contact: Option<VCardData>,
    output: Option<PathBuf>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    fs::create_dir_all(&args.output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = ImpressumParser::from_config(&config.extraction);
    let writer = VCardWriter::new().with_charset(config.vcard.emit_charset);
    let today = Local::now().date_naive();
    let mut used_names = HashSet::new();
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = fs::read_to_string(&path).map_err(anyhow::Error::from).and_then(|text| {
            if text.trim().is_empty() {
                anyhow::bail!("File is empty");
            }
            Ok(parser.parse(&text).record.to_vcard_data())
        });
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(contact) => {
                let stem =
                    unique_stem(contact_filename(&contact, today), &args.output_dir, &mut used_names);
                let output_path = args.output_dir.join(format!("{}.vcf", stem));
                fs::write(&output_path, writer.write(&contact))?;
                debug!("Wrote {}", output_path.display());

                results.push(FileResult {
                    path,
                    contact: Some(contact),
                    output: Some(output_path),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
                warn!("Failed to process {}: {}", path.display(), error_msg);
                results.push(FileResult {
                    path,
                    contact: None,
                    output: None,
                    error: Some(error_msg),
                    processing_time_ms,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_path = args.output_dir.join("summary.csv");
        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Append `_2`, `_3`, ... when the name was already taken in this run or
/// a `.vcf` of that name exists in `dir`.
fn unique_stem(stem: String, dir: &Path, used: &mut HashSet<String>) -> String {
    let mut candidate = stem.clone();
    let mut counter = 2;
    while used.contains(&candidate) || dir.join(format!("{}.vcf", candidate)).exists() {
        candidate = format!("{}_{}", stem, counter);
        counter += 1;
    }
    used.insert(candidate.clone());
    candidate
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "name",
        "organization",
        "phone",
        "email",
        "output",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        let output = result
            .output
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or("");

        match &result.contact {
            Some(contact) => wtr.write_record([
                filename,
                "success",
                contact.full_name.as_deref().unwrap_or(""),
                contact.org.as_deref().unwrap_or(""),
                contact.tel.first().map(|t| t.value.as_str()).unwrap_or(""),
                contact.email.first().map(|e| e.value.as_str()).unwrap_or(""),
                output,
                &result.processing_time_ms.to_string(),
                "",
            ])?,
            None => wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?,
        }
    }

    wtr.flush()?;
    Ok(())
}
