//! Plain-text report rendering

use crate::report::Report;

/// Text renderer with display options
#[derive(Debug)]
pub struct TextOutput {
    top_n: usize,
    summary_only: bool,
}

impl TextOutput {
    pub fn new(top_n: usize, summary_only: bool) -> Self {
        Self {
            top_n,
            summary_only,
        }
    }

    /// Render the report as a human-readable summary
    pub fn render(&self, report: &Report) -> String {
        if report.is_empty() {
            return "No build records available.\n".to_string();
        }

        let mut out = String::new();

        out.push_str("Build summary\n");
        out.push_str("=============\n");
        out.push_str(&format!("  units:     {}\n", report.count));
        out.push_str(&format!(
            "  total:     {:.3}s\n",
            report.total_elapsed.as_secs_f64()
        ));
        // hit_rate is Some: the empty case returned above
        if let Some(rate) = report.hit_rate() {
            out.push_str(&format!(
                "  hit rate:  {:.1}% ({} hits, {} misses)\n",
                rate * 100.0,
                report.hits,
                report.misses
            ));
        }

        if self.summary_only {
            return out;
        }

        out.push_str("\nSlowest units\n");
        out.push_str("=============\n");
        out.push_str(" seconds  cache  unit\n");
        out.push_str("-------- ------ ----------------\n");
        for record in report.slowest(self.top_n) {
            out.push_str(&format!(
                "{:>8.3} {:>6}  {}\n",
                record.elapsed.as_secs_f64(),
                record.cache.as_str(),
                record.unit
            ));
        }

        out
    }
}
