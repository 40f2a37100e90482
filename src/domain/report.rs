//! The full set of tables produced by one analysis run.

use serde::Serialize;

use super::archetype::Segmentation;
use super::metric::{DailyMetric, LeverageSegmentation, SentimentSummary};
use super::profile::TraderProfile;

/// Every output table of a run, computed before anything is published.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Trades that survived the inner join with the sentiment index.
    pub merged_rows: usize,
    pub daily_metrics: Vec<DailyMetric>,
    pub sentiment_summary: Vec<SentimentSummary>,
    pub leverage: LeverageSegmentation,
    pub profiles: Vec<TraderProfile>,
    pub segmentation: Option<Segmentation>,
}
