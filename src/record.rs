//! Build records and the pluggable record parsers
//!
//! The record wire format is an informal convention owned by the compilation
//! wrapper that writes the metrics, so parsing goes through the
//! [`RecordParser`] trait. Two conventions ship here:
//! - key-value lines: `unit=src/a.cpp elapsed_ms=2000 cache=hit status=0`
//! - tab-separated lines: `src/a.cpp<TAB>2.0<TAB>hit[<TAB>0]` (seconds)

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ReportError;

/// Whether a compilation unit was served from the build cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheOutcome {
    Hit,
    Miss,
}

impl CacheOutcome {
    /// Parse a hit/miss token as written by the compilation wrapper
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "hit" => Some(Self::Hit),
            "miss" => Some(Self::Miss),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
        }
    }
}

/// One per-compilation-unit timing/cache datum
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRecord {
    /// Unit identifier (source file path)
    pub unit: String,
    /// Elapsed wall time for the compilation
    pub elapsed: Duration,
    /// Cache outcome for the unit
    pub cache: CacheOutcome,
    /// Compiler exit status, when the wrapper recorded one
    pub exit_status: Option<i32>,
}

/// Parser for one line of the record source
pub trait RecordParser {
    /// Parse a single non-empty line into a record
    fn parse_line(&self, line: &str) -> Result<BuildRecord, ReportError>;
}

/// Parser for `key=value` records: `unit=… elapsed_ms=… cache=… [status=…]`
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValueParser;

impl KeyValueParser {
    fn field<'a>(line: &'a str, key: &str) -> Option<&'a str> {
        line.split_whitespace()
            .find_map(|token| token.strip_prefix(key).and_then(|t| t.strip_prefix('=')))
    }
}

impl RecordParser for KeyValueParser {
    fn parse_line(&self, line: &str) -> Result<BuildRecord, ReportError> {
        let unit = Self::field(line, "unit")
            .ok_or_else(|| ReportError::malformed("missing unit field", line))?;
        if unit.is_empty() {
            return Err(ReportError::malformed("empty unit field", line));
        }

        let elapsed_ms = Self::field(line, "elapsed_ms")
            .ok_or_else(|| ReportError::malformed("missing elapsed_ms field", line))?;
        let elapsed_ms: f64 = elapsed_ms
            .parse()
            .map_err(|_| ReportError::malformed("elapsed_ms is not a number", line))?;
        // try_from rejects negative, non-finite, and overflowing values
        let elapsed = Duration::try_from_secs_f64(elapsed_ms / 1000.0)
            .map_err(|_| ReportError::malformed("elapsed_ms out of range", line))?;

        let cache = Self::field(line, "cache")
            .ok_or_else(|| ReportError::malformed("missing cache field", line))?;
        let cache = CacheOutcome::parse(cache)
            .ok_or_else(|| ReportError::malformed("cache must be hit or miss", line))?;

        let exit_status = match Self::field(line, "status") {
            Some(status) => Some(
                status
                    .parse()
                    .map_err(|_| ReportError::malformed("status is not an integer", line))?,
            ),
            None => None,
        };

        Ok(BuildRecord {
            unit: unit.to_string(),
            elapsed,
            cache,
            exit_status,
        })
    }
}

/// Parser for tab-separated records: `unit<TAB>seconds<TAB>hit|miss[<TAB>status]`
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvParser;

impl RecordParser for TsvParser {
    fn parse_line(&self, line: &str) -> Result<BuildRecord, ReportError> {
        let mut fields = line.split('\t');

        let unit = fields
            .next()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ReportError::malformed("missing unit column", line))?;

        let seconds = fields
            .next()
            .ok_or_else(|| ReportError::malformed("missing seconds column", line))?;
        let seconds: f64 = seconds
            .trim()
            .parse()
            .map_err(|_| ReportError::malformed("seconds column is not a number", line))?;
        let elapsed = Duration::try_from_secs_f64(seconds)
            .map_err(|_| ReportError::malformed("seconds column out of range", line))?;

        let cache = fields
            .next()
            .ok_or_else(|| ReportError::malformed("missing cache column", line))?;
        let cache = CacheOutcome::parse(cache)
            .ok_or_else(|| ReportError::malformed("cache column must be hit or miss", line))?;

        let exit_status = match fields.next() {
            Some(status) => Some(status.trim().parse().map_err(|_| {
                ReportError::malformed("status column is not an integer", line)
            })?),
            None => None,
        };

        Ok(BuildRecord {
            unit: unit.trim().to_string(),
            elapsed,
            cache,
            exit_status,
        })
    }
}

/// Detect the record convention from the first non-empty line of a source.
///
/// Key-value lines always carry a `unit=` token; anything with tab separators
/// falls back to the TSV convention. Returns `None` when the line matches
/// neither, in which case the caller treats the line as malformed.
pub fn detect_parser(line: &str) -> Option<Box<dyn RecordParser>> {
    if line.split_whitespace().any(|token| token.starts_with("unit=")) {
        Some(Box::new(KeyValueParser))
    } else if line.contains('\t') {
        Some(Box::new(TsvParser))
    } else {
        None
    }
}
