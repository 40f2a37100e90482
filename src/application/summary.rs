//! Daily metrics averaged per sentiment classification.

use std::collections::BTreeMap;

use tracing::info;

use crate::domain::stats::mean;
use crate::domain::{DailyMetric, SentimentSummary};

/// One row per classification present in `metrics`, each attribute the plain
/// mean over that classification's (account, date) rows.
pub fn sentiment_summary(metrics: &[DailyMetric]) -> Vec<SentimentSummary> {
    let mut groups: BTreeMap<&str, Vec<&DailyMetric>> = BTreeMap::new();
    for metric in metrics {
        groups
            .entry(metric.classification.as_str())
            .or_default()
            .push(metric);
    }

    let summary: Vec<SentimentSummary> = groups
        .into_iter()
        .filter_map(|(classification, rows)| {
            let column = |f: fn(&DailyMetric) -> f64| {
                mean(&rows.iter().map(|r| f(r)).collect::<Vec<_>>())
            };
            Some(SentimentSummary {
                classification: classification.to_owned(),
                daily_pnl: column(|r| r.daily_pnl)?,
                trades_count: column(|r| r.trades_count as f64)?,
                avg_leverage: column(|r| r.avg_leverage)?,
                avg_size: column(|r| r.avg_size)?,
                win_rate: column(|r| r.win_rate)?,
            })
        })
        .collect();

    info!(classifications = summary.len(), "computed sentiment summary");
    summary
}
