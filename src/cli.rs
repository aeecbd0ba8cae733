//! CLI argument parsing for build-report

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the rendered report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Record convention used by the compilation wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    /// Detect from the first parseable line (default)
    Auto,
    /// Key-value lines: unit=… elapsed_ms=… cache=…
    Kv,
    /// Tab-separated lines: unit, seconds, hit/miss
    Tsv,
}

#[derive(Parser, Debug)]
#[command(name = "build-report")]
#[command(version)]
#[command(about = "Report compile times and cache hit rates for a build", long_about = None)]
pub struct Cli {
    /// Record source: a metrics file or a directory of per-unit record files
    /// (default: build-metrics.log, then .build-metrics/)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output format (text, json, or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Record convention of the input source
    #[arg(long = "record-format", value_enum, default_value = "auto")]
    pub record_format: RecordFormat,

    /// Number of slowest units to display
    #[arg(long = "top-n", value_name = "N", default_value = "10")]
    pub top_n: usize,

    /// Print aggregate totals only, without the slowest-unit listing
    #[arg(long = "summary-only")]
    pub summary_only: bool,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
