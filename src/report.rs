//! Aggregation of build records into a report

use std::time::Duration;

use crate::record::{BuildRecord, CacheOutcome};

/// Aggregate view over all build records for one build invocation
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Total elapsed wall time across all units
    pub total_elapsed: Duration,
    /// Number of compilation units
    pub count: usize,
    /// Units served from the build cache
    pub hits: usize,
    /// Units that were recompiled
    pub misses: usize,
    /// All records, ranked slowest-first
    ranked: Vec<BuildRecord>,
}

impl Report {
    /// Fold a record sequence into aggregate totals.
    ///
    /// Pure and deterministic: the totals are order-independent, and the
    /// ranking is a stable descending sort by elapsed time with ties broken
    /// by lexical unit identifier so output is reproducible across runs.
    pub fn from_records(records: Vec<BuildRecord>) -> Self {
        let mut total_elapsed = Duration::ZERO;
        let mut hits = 0;
        let mut misses = 0;

        for record in &records {
            total_elapsed += record.elapsed;
            match record.cache {
                CacheOutcome::Hit => hits += 1,
                CacheOutcome::Miss => misses += 1,
            }
        }

        let mut ranked = records;
        ranked.sort_by(|a, b| b.elapsed.cmp(&a.elapsed).then_with(|| a.unit.cmp(&b.unit)));

        Self {
            total_elapsed,
            count: ranked.len(),
            hits,
            misses,
            ranked,
        }
    }

    /// True when no valid records were collected
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Cache hit rate in [0, 1]. Defined only when at least one record exists.
    pub fn hit_rate(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.hits as f64 / self.count as f64)
        }
    }

    /// The `n` slowest units, slowest first
    pub fn slowest(&self, n: usize) -> &[BuildRecord] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// All units in ranking order
    pub fn ranked(&self) -> &[BuildRecord] {
        &self.ranked
    }
}
