//! Error taxonomy for the report pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting and parsing build records
#[derive(Error, Debug)]
pub enum ReportError {
    /// The record source is missing. Tolerated at the top level: an absent
    /// source is reported as "no data", not as a failure.
    #[error("record source not found: {}", .0.display())]
    DataUnavailable(PathBuf),

    /// A single record failed to parse. Recovered locally: the record is
    /// skipped with a warning and processing continues.
    #[error("malformed record: {reason}: {line:?}")]
    MalformedRecord { reason: String, line: String },

    /// A filesystem failure unrelated to simple absence. Fatal: propagates to
    /// the top level and terminates the process with a non-zero exit.
    #[error("failed to read {}: {source}", .path.display())]
    UnexpectedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Build a `MalformedRecord` for a given input line
    pub fn malformed(reason: impl Into<String>, line: &str) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
            line: line.to_string(),
        }
    }
}
