//! Batch command - parse every request line of one or more files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use tripspec_core::{ParseResponse, TripParser, TripRequestParser};

use super::{build_parser, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// JSON Lines output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a per-request summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Date treated as today for year-less dates (YYYY-MM-DD)
    #[arg(long)]
    reference_date: Option<String>,

    /// Continue on unreadable files
    #[arg(long)]
    continue_on_error: bool,
}

/// One parsed request line.
struct RequestResult {
    path: PathBuf,
    line: usize,
    response: ParseResponse,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = build_parser(&config, args.reference_date.as_deref())?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::new();
    let mut failed: Vec<(PathBuf, String)> = Vec::new();

    for path in files {
        match parse_file(&path, &parser) {
            Ok(parsed) => {
                debug!("Parsed {} requests from {}", parsed.len(), path.display());
                results.extend(parsed);
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), error_msg);
                    failed.push((path, error_msg));
                } else {
                    error!("Failed to read {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    match &args.output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            write_json_lines(BufWriter::new(File::create(output_path)?), &results)?;
            eprintln!(
                "{} Output written to {}",
                style("✓").green(),
                output_path.display()
            );
        }
        None => write_json_lines(std::io::stdout().lock(), &results)?,
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    eprintln!(
        "{} Parsed {} requests in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );

    if !failed.is_empty() {
        eprintln!("{}", style("Failed files:").red());
        for (path, error_msg) in &failed {
            eprintln!("  - {}: {}", path.display(), error_msg);
        }
    }

    Ok(())
}

/// Parse each non-empty line of a file as one request.
fn parse_file(path: &Path, parser: &TripRequestParser) -> anyhow::Result<Vec<RequestResult>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| RequestResult {
            path: path.to_path_buf(),
            line: i + 1,
            response: parser.parse_response(line),
        })
        .collect())
}

fn write_json_lines<W: Write>(mut writer: W, results: &[RequestResult]) -> anyhow::Result<()> {
    for result in results {
        serde_json::to_writer(&mut writer, &result.response)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn write_summary(path: &Path, results: &[RequestResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "line",
        "destination",
        "departure_city",
        "start_date",
        "end_date",
        "month",
        "duration_days",
        "adults",
        "children",
        "budget_amount",
        "budget_currency",
        "budget_tag",
        "interests",
        "constraints",
    ])?;

    for result in results {
        let spec = &result.response.spec;
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let interests: Vec<&str> = spec.interests.iter().map(|i| i.as_str()).collect();

        wtr.write_record([
            filename,
            &result.line.to_string(),
            spec.destination.as_deref().unwrap_or(""),
            spec.departure_city.as_deref().unwrap_or(""),
            &optional(spec.start_date),
            &optional(spec.end_date),
            &optional(spec.month),
            &optional(spec.duration_days),
            &optional(spec.travelers.adults),
            &spec.travelers.children.to_string(),
            &optional(spec.budget.amount),
            &optional(spec.budget.currency),
            spec.budget.tag.map(|t| t.as_str()).unwrap_or(""),
            &interests.join(";"),
            &spec.constraints.join("; "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
