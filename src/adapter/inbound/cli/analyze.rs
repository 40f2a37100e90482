//! `moodlens analyze`: the full report.

use crate::adapter::inbound::cli::chart::TerminalChartSink;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::csv::{CsvSink, CsvSource};
use crate::application::pipeline::{self, Pipeline};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::ReportSink;

use super::classifier;

/// Run every stage, print the report and write all four tables.
pub fn execute(config: &Config) -> Result<()> {
    let source = CsvSource::new(&config.input.sentiment, &config.input.trades);
    let pipeline = Pipeline::new().with_classifier(classifier(config));

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Sentiment", config.input.sentiment.display());
    output::field("Trades", config.input.trades.display());
    output::field("Method", config.segmentation.method);

    let report = pipeline.run(&source)?;
    output::field("Merged rows", report.merged_rows);

    let mut terminal = TerminalChartSink;
    let mut csv = CsvSink::new(&config.output.dir);
    let mut sinks: [&mut dyn ReportSink; 2] = [&mut terminal, &mut csv];
    pipeline::publish(&report, &mut sinks)?;

    output::section("Output");
    for path in csv.written() {
        output::action_done("Wrote", &path.display().to_string());
    }
    Ok(())
}
