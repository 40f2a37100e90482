//! High/low leverage cohorts and their mean daily PnL per classification.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::domain::stats::{mean, median};
use crate::domain::{DailyMetric, LeverageCohort, LeverageSegmentation, SegmentMatrix, SegmentRow};

/// Split daily metrics at the median of `avg_leverage` and average
/// `daily_pnl` per (cohort, classification).
///
/// Matrix columns are every classification present in `metrics`; rows are
/// the cohorts that received at least one metric. Cells with no
/// contributing rows are 0.
pub fn segment_by_leverage(metrics: &[DailyMetric]) -> LeverageSegmentation {
    let leverages: Vec<f64> = metrics.iter().map(|m| m.avg_leverage).collect();
    let Some(median_leverage) = median(&leverages) else {
        return LeverageSegmentation::default();
    };

    let classifications: Vec<String> = metrics
        .iter()
        .map(|m| m.classification.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells: BTreeMap<LeverageCohort, BTreeMap<&str, Vec<f64>>> = BTreeMap::new();
    for metric in metrics {
        cells
            .entry(LeverageCohort::classify(metric.avg_leverage, median_leverage))
            .or_default()
            .entry(metric.classification.as_str())
            .or_default()
            .push(metric.daily_pnl);
    }

    let rows = cells
        .into_iter()
        .map(|(cohort, by_class)| SegmentRow {
            cohort,
            values: classifications
                .iter()
                .map(|c| {
                    by_class
                        .get(c.as_str())
                        .and_then(|pnls| mean(pnls))
                        .unwrap_or(0.0)
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    info!(
        median_leverage,
        cohorts = rows.len(),
        classifications = classifications.len(),
        "segmented daily metrics by leverage"
    );

    LeverageSegmentation {
        median_leverage: Some(median_leverage),
        matrix: SegmentMatrix {
            classifications,
            rows,
        },
    }
}
