//! `moodlens check`: ad hoc data-quality counts for both inputs.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::csv::CsvSource;
use crate::application::pipeline;
use crate::application::quality::QualityReport;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Print the quality report. Findings are warnings, never failures.
pub fn execute(config: &Config) -> Result<()> {
    let source = CsvSource::new(&config.input.sentiment, &config.input.trades);
    let reports = pipeline::check(&source)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check",
            "tables": serde_json::to_value(&reports)?,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    for report in &reports {
        render(report);
    }
    Ok(())
}

fn render(report: &QualityReport) {
    output::section(&format!("{} table", report.table));
    output::field("Records", report.records);
    output::field("Columns", report.columns.join(", "));
    match &report.date_range {
        Some((first, last)) => output::field("Date range", format!("{first} .. {last}")),
        None => output::field("Date range", output::muted("none")),
    }

    if report.null_cells > 0 {
        output::warning(&format!("{} empty cells", report.null_cells));
    }
    if report.duplicate_rows > 0 {
        output::warning(&format!("{} duplicated rows", report.duplicate_rows));
    }
    for (key, count) in &report.duplicate_keys {
        output::warning(&format!("date {key} appears {count} times"));
    }
    if report.is_clean() {
        output::success("no nulls or duplicates");
    }
}
