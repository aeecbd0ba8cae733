//! Locating and reading the build record source
//!
//! The source is either a single record file or a directory of per-unit
//! record files. When no path is given the conventional locations are tried:
//! `build-metrics.log`, then the `.build-metrics/` directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::RecordFormat;
use crate::error::ReportError;
use crate::record::{detect_parser, BuildRecord, KeyValueParser, RecordParser, TsvParser};

/// Conventional record file written by the compilation wrapper
pub const DEFAULT_RECORD_FILE: &str = "build-metrics.log";

/// Conventional directory of per-unit record files
pub const DEFAULT_RECORD_DIR: &str = ".build-metrics";

/// Result of the collect pass
#[derive(Debug, Default)]
pub struct Collected {
    /// Records that parsed cleanly
    pub records: Vec<BuildRecord>,
    /// Lines skipped because they failed to parse
    pub skipped: usize,
}

/// Locate and parse the record source.
///
/// A missing source (explicit or conventional) is `DataUnavailable`; callers
/// treat it the same as an empty build. Any other filesystem failure is
/// `UnexpectedIo` and fatal. Malformed lines are skipped with a warning.
pub fn collect(path: Option<&Path>, format: RecordFormat) -> Result<Collected, ReportError> {
    let source = match path {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(ReportError::DataUnavailable(explicit.to_path_buf()));
            }
            explicit.to_path_buf()
        }
        None => locate_default()?,
    };

    debug!(source = %source.display(), "collecting build records");

    let mut collected = Collected::default();
    if source.is_dir() {
        for file in record_files(&source)? {
            parse_file(&file, format, &mut collected)?;
        }
    } else {
        parse_file(&source, format, &mut collected)?;
    }

    debug!(
        records = collected.records.len(),
        skipped = collected.skipped,
        "collect pass complete"
    );
    Ok(collected)
}

/// Try the conventional locations in order
fn locate_default() -> Result<PathBuf, ReportError> {
    let file = PathBuf::from(DEFAULT_RECORD_FILE);
    if file.exists() {
        return Ok(file);
    }
    let dir = PathBuf::from(DEFAULT_RECORD_DIR);
    if dir.exists() {
        return Ok(dir);
    }
    Err(ReportError::DataUnavailable(file))
}

/// Regular files in a record directory, sorted by name so warning output is
/// reproducible across runs
fn record_files(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let entries = fs::read_dir(dir).map_err(|source| io_error(dir, source))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| io_error(dir, source))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn parse_file(
    path: &Path,
    format: RecordFormat,
    collected: &mut Collected,
) -> Result<(), ReportError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        // The source vanished between the existence check and the read.
        // Equivalent to it never existing: tolerated as absence.
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ReportError::DataUnavailable(path.to_path_buf()));
        }
        Err(source) => return Err(io_error(path, source)),
    };

    parse_lines(&content, format, path, collected);
    Ok(())
}

/// Parse record lines, skipping malformed ones with a warning
fn parse_lines(content: &str, format: RecordFormat, path: &Path, collected: &mut Collected) {
    let mut parser: Option<Box<dyn RecordParser>> = match format {
        RecordFormat::Kv => Some(Box::new(KeyValueParser)),
        RecordFormat::Tsv => Some(Box::new(TsvParser)),
        RecordFormat::Auto => None,
    };

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if parser.is_none() {
            parser = detect_parser(line);
        }
        let active = match &parser {
            Some(active) => active,
            None => {
                warn!(source = %path.display(), line, "unrecognized record format, skipping line");
                collected.skipped += 1;
                continue;
            }
        };

        match active.parse_line(line) {
            Ok(record) => collected.records.push(record),
            Err(e) => {
                warn!(source = %path.display(), "skipping record: {e}");
                collected.skipped += 1;
            }
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::UnexpectedIo {
        path: path.to_path_buf(),
        source,
    }
}
