//! One batch run: load, merge, aggregate, profile, classify.
//!
//! Every table is computed before anything is handed to a sink, so an input
//! error never leaves partial output behind.

use tracing::info;

use crate::domain::{AnalysisReport, SentimentRecord, TradeRecord};
use crate::error::Result;
use crate::port::{DataSource, ReportSink};

use super::classifier::{self, ArchetypeClassifier};
use super::quality::{self, QualityReport};
use super::{daily, leverage, merge, profile, summary};

/// The analysis pipeline with an optional archetype classifier.
pub struct Pipeline {
    classifier: Option<Box<dyn ArchetypeClassifier>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// A pipeline that computes profiles but assigns no archetypes.
    #[must_use]
    pub fn new() -> Self {
        Self { classifier: None }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: Box<dyn ArchetypeClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Compute every output table from in-memory records.
    #[must_use]
    pub fn analyze(&self, sentiment: &[SentimentRecord], trades: &[TradeRecord]) -> AnalysisReport {
        let merged = merge::merge(trades, sentiment);
        let daily_metrics = daily::daily_metrics(&merged);
        let sentiment_summary = summary::sentiment_summary(&daily_metrics);
        let leverage = leverage::segment_by_leverage(&daily_metrics);
        let profiles = profile::build_profiles(&merged);
        let segmentation = self
            .classifier
            .as_deref()
            .map(|c| classifier::segment(c, &profiles));

        info!(
            merged = merged.len(),
            daily_rows = daily_metrics.len(),
            classifications = sentiment_summary.len(),
            accounts = profiles.len(),
            "analysis complete"
        );

        AnalysisReport {
            merged_rows: merged.len(),
            daily_metrics,
            sentiment_summary,
            leverage,
            profiles,
            segmentation,
        }
    }

    /// Profile and classify accounts only; the daily tables stay empty.
    #[must_use]
    pub fn segment(&self, sentiment: &[SentimentRecord], trades: &[TradeRecord]) -> AnalysisReport {
        let merged = merge::merge(trades, sentiment);
        let profiles = profile::build_profiles(&merged);
        let segmentation = self
            .classifier
            .as_deref()
            .map(|c| classifier::segment(c, &profiles));

        AnalysisReport {
            merged_rows: merged.len(),
            profiles,
            segmentation,
            ..AnalysisReport::default()
        }
    }

    /// Load both tables from `source` and run [`Pipeline::analyze`].
    pub fn run(&self, source: &dyn DataSource) -> Result<AnalysisReport> {
        let (sentiment, trades) = load(source)?;
        Ok(self.analyze(&sentiment, &trades))
    }

    /// Load both tables from `source` and run [`Pipeline::segment`].
    pub fn run_segment(&self, source: &dyn DataSource) -> Result<AnalysisReport> {
        let (sentiment, trades) = load(source)?;
        Ok(self.segment(&sentiment, &trades))
    }
}

fn load(source: &dyn DataSource) -> Result<(Vec<SentimentRecord>, Vec<TradeRecord>)> {
    let sentiment = source.sentiment()?;
    let trades = source.trades()?;
    info!(
        sentiment = sentiment.len(),
        trades = trades.len(),
        "loaded input tables"
    );
    Ok((sentiment, trades))
}

/// Hand a finished report to every sink, in order.
pub fn publish(report: &AnalysisReport, sinks: &mut [&mut dyn ReportSink]) -> Result<()> {
    for sink in sinks.iter_mut() {
        sink.publish(report)?;
        info!(sink = sink.name(), "report published");
    }
    Ok(())
}

/// Data-quality report for both raw input tables.
pub fn check(source: &dyn DataSource) -> Result<Vec<QualityReport>> {
    let sentiment = source.raw_sentiment()?;
    let trades = source.raw_trades()?;
    Ok(vec![
        quality::assess(&sentiment, "date", Some("date")),
        quality::assess(&trades, "time", None),
    ])
}
