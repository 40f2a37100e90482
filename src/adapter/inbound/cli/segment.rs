//! `moodlens segment`: trader profiles and archetypes only.

use crate::adapter::inbound::cli::chart::TerminalChartSink;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::csv::{CsvSink, CsvSource};
use crate::application::Pipeline;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::ReportSink;

use super::classifier;

/// Profile and classify accounts, then write the profile table.
pub fn execute(config: &Config) -> Result<()> {
    let source = CsvSource::new(&config.input.sentiment, &config.input.trades);
    let pipeline = Pipeline::new().with_classifier(classifier(config));

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Method", config.segmentation.method);

    let report = pipeline.run_segment(&source)?;
    let segmentation = report.segmentation.as_ref();

    TerminalChartSink.profiles(&report.profiles, segmentation)?;
    let mut csv = CsvSink::new(&config.output.dir);
    csv.profiles(&report.profiles, segmentation)?;

    output::section("Output");
    for path in csv.written() {
        output::action_done("Wrote", &path.display().to_string());
    }
    Ok(())
}
