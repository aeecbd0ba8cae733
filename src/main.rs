use anyhow::Result;
use build_report::cli::{Cli, OutputFormat};
use build_report::collect;
use build_report::csv_output::CsvOutput;
use build_report::error::ReportError;
use build_report::json_output::JsonReport;
use build_report::report::Report;
use build_report::text_output::TextOutput;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for warning/debug output
fn init_tracing(verbose: bool) {
    let default_directives = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Render the report in the requested output format
fn render(report: &Report, args: &Cli) -> Result<String> {
    let rendered = match args.format {
        OutputFormat::Text => TextOutput::new(args.top_n, args.summary_only).render(report),
        OutputFormat::Json => {
            let mut json = JsonReport::from_report(report, args.top_n).to_json()?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => CsvOutput::new().render(report),
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    // Collect: an absent source is a valid outcome (an empty or not-yet-run
    // build), so it degrades to an empty record set. Everything else fatal.
    let collected = match collect::collect(args.input.as_deref(), args.record_format) {
        Ok(collected) => collected,
        Err(ReportError::DataUnavailable(path)) => {
            info!(source = %path.display(), "record source not found, reporting no data");
            collect::Collected::default()
        }
        Err(e) => return Err(e.into()),
    };

    if collected.skipped > 0 {
        eprintln!(
            "warning: skipped {} malformed record(s)",
            collected.skipped
        );
    }

    let report = Report::from_records(collected.records);
    print!("{}", render(&report, &args)?);

    Ok(())
}
