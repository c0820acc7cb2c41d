//! ocr2txt - Reconstruct readable text from raw OCR output dumps
//!
//! A command line tool that takes the JSON an OCR engine dumped for one or
//! more images (any of the shapes the normalizer recognizes) and writes
//! ordered plain text, a normalized fragment dump, or a Markdown report.

use clap::{ArgAction, Parser, ValueEnum};
use renglon_core::api::high_level::reconstruct_with_params;
use renglon_core::convert::{fragments_to_json, fragments_to_markdown};
use renglon_core::error::{ReconstructError, Result};
use renglon_core::ingest::extract_fragments;
use renglon_core::layout::LayoutParams;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Output type for the reconstructed content.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Reconstructed plain text (default)
    #[default]
    Text,
    /// Normalized fragment dump as JSON
    Json,
    /// Markdown report with per-fragment confidence
    Markdown,
}

impl OutputType {
    fn extension(self) -> &'static str {
        match self {
            OutputType::Text => "txt",
            OutputType::Json => "json",
            OutputType::Markdown => "md",
        }
    }
}

/// A command line tool for reconstructing reading order and table
/// structure from raw OCR result dumps.
#[derive(Parser, Debug)]
#[command(name = "ocr2txt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to raw OCR dump files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Maximum vertical distance in pixels for two fragments to share a line
    #[arg(short = 'T', long = "line-threshold", default_value = "15.0")]
    line_threshold: f64,

    /// Path to file where combined output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Directory to write one result file per input instead of combined output
    #[arg(short = 'O', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "text")]
    output_type: OutputType,
}

/// Reads one dump and renders it according to the requested output type.
fn process_file(path: &Path, output_type: OutputType, params: &LayoutParams) -> Result<String> {
    let data = std::fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&data)?;

    let fragments = extract_fragments(&raw);
    debug!(file = %path.display(), fragments = fragments.len(), "normalized dump");

    match output_type {
        OutputType::Text => Ok(reconstruct_with_params(&fragments, params)),
        OutputType::Json => fragments_to_json(&fragments),
        OutputType::Markdown => {
            let title = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("ocr result");
            Ok(fragments_to_markdown(title, &fragments))
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("?")
        .to_string()
}

/// Writes one result file per input under the output directory.
fn run_per_file(args: &Args, output_dir: &Path, params: &LayoutParams) -> Result<usize> {
    std::fs::create_dir_all(output_dir)?;

    let mut failed = 0;
    for path in &args.files {
        match process_file(path, args.output_type, params) {
            Ok(content) => {
                let stem = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("result");
                let target =
                    output_dir.join(format!("{stem}.{}", args.output_type.extension()));
                let mut writer = BufWriter::new(File::create(&target)?);
                writer.write_all(content.as_bytes())?;
                writer.write_all(b"\n")?;
                info!(file = %target.display(), "wrote result");
            }
            Err(err) => {
                let err = ReconstructError::NoOutput(format!("{}: {err}", path.display()));
                error!("{err}");
                failed += 1;
            }
        }
    }
    Ok(failed)
}

/// Writes all results into one writer, with per-file headers when more
/// than one input was given.
fn run_combined(args: &Args, params: &LayoutParams) -> Result<usize> {
    let mut writer: Box<dyn Write> = if args.outfile == "-" {
        Box::new(io::stdout().lock())
    } else {
        Box::new(BufWriter::new(File::create(&args.outfile)?))
    };

    let single = args.files.len() == 1;
    if !single {
        writeln!(writer, "OCR reconstruction summary")?;
        writeln!(
            writer,
            "Generated: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(writer, "{}\n", "=".repeat(80))?;
    }

    let mut failed = 0;
    for (idx, path) in args.files.iter().enumerate() {
        match process_file(path, args.output_type, params) {
            Ok(content) => {
                if single {
                    writeln!(writer, "{content}")?;
                } else {
                    writeln!(writer, "\n[file {}] {}", idx + 1, display_name(path))?;
                    writeln!(writer, "{}", "-".repeat(60))?;
                    writeln!(writer, "{content}")?;
                    writeln!(writer, "{}", "=".repeat(80))?;
                }
            }
            Err(err) => {
                let err = ReconstructError::NoOutput(format!("{}: {err}", path.display()));
                error!("{err}");
                failed += 1;
            }
        }
    }
    writer.flush()?;
    Ok(failed)
}

fn run(args: &Args) -> Result<usize> {
    let params = LayoutParams::new(args.line_threshold);
    match &args.output_dir {
        Some(output_dir) => run_per_file(args, output_dir, &params),
        None => run_combined(args, &params),
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if !args.line_threshold.is_finite() || args.line_threshold < 0.0 {
        error!("line threshold must be a non-negative finite number");
        std::process::exit(2);
    }

    match run(&args) {
        Ok(failed) => {
            let total = args.files.len();
            if failed > 0 {
                info!(
                    succeeded = total - failed,
                    failed, "batch finished with failures"
                );
            }
            if failed == total {
                std::process::exit(1);
            }
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
