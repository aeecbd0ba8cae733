//! JSON output format for build reports

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::record::CacheOutcome;
use crate::report::Report;

/// One ranked unit in the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonUnit {
    /// Unit identifier (source file path)
    pub unit: String,
    /// Elapsed wall time in seconds
    pub seconds: f64,
    /// Cache outcome for the unit
    pub cache: CacheOutcome,
    /// Compiler exit status (absent when the wrapper did not record one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_status: Option<i32>,
}

/// Serializable view of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Number of compilation units
    pub units: usize,
    /// Total elapsed wall time in seconds
    pub total_seconds: f64,
    /// Units served from the cache
    pub cache_hits: usize,
    /// Units that were recompiled
    pub cache_misses: usize,
    /// Hit rate in [0, 1]; absent when there is no data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_rate: Option<f64>,
    /// Slowest units, slowest first
    pub slowest: Vec<JsonUnit>,
}

impl JsonReport {
    /// Build the JSON view of a report, listing at most `top_n` units
    pub fn from_report(report: &Report, top_n: usize) -> Self {
        Self {
            units: report.count,
            total_seconds: report.total_elapsed.as_secs_f64(),
            cache_hits: report.hits,
            cache_misses: report.misses,
            hit_rate: report.hit_rate(),
            slowest: report
                .slowest(top_n)
                .iter()
                .map(|r| JsonUnit {
                    unit: r.unit.clone(),
                    seconds: r.elapsed.as_secs_f64(),
                    cache: r.cache,
                    exit_status: r.exit_status,
                })
                .collect(),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
