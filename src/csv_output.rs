//! CSV output format for build reports
//!
//! Lists every unit in ranking order so spreadsheet analysis is not limited
//! to the slowest-N view the text report shows.

use crate::report::Report;

/// CSV renderer for the per-unit report rows
#[derive(Debug, Default)]
pub struct CsvOutput;

impl CsvOutput {
    pub fn new() -> Self {
        Self
    }

    /// Escape a CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Render the report as CSV with a header row
    pub fn render(&self, report: &Report) -> String {
        let mut output = String::from("unit,seconds,cache,status\n");

        for record in report.ranked() {
            output.push_str(&Self::escape_field(&record.unit));
            output.push(',');
            output.push_str(&format!("{:.3}", record.elapsed.as_secs_f64()));
            output.push(',');
            output.push_str(record.cache.as_str());
            output.push(',');
            if let Some(status) = record.exit_status {
                output.push_str(&status.to_string());
            }
            output.push('\n');
        }

        output
    }
}
