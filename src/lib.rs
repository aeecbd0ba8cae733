//! build-report - build time and cache hit-rate reporting
//!
//! This library parses per-compilation-unit timing records written by build
//! tooling, aggregates them into a report (total time, cache hit rate,
//! slowest units), and renders the report as text, JSON, or CSV.

pub mod cli;
pub mod collect;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod record;
pub mod report;
pub mod text_output;
