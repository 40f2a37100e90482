//! Aggregate tables derived from the merged trade log.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::id::AccountId;

/// Per-account, per-day, per-classification trading summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMetric {
    pub account: AccountId,
    pub date: NaiveDate,
    pub classification: String,
    pub daily_pnl: f64,
    pub trades_count: usize,
    pub avg_leverage: f64,
    pub avg_size: f64,
    pub win_rate: f64,
}

/// Unweighted mean of every [`DailyMetric`] attribute for one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub classification: String,
    pub daily_pnl: f64,
    pub trades_count: f64,
    pub avg_leverage: f64,
    pub avg_size: f64,
    pub win_rate: f64,
}

/// Leverage cohort of a daily metric row relative to the global median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LeverageCohort {
    High,
    Low,
}

impl LeverageCohort {
    /// `High` only when strictly above the median; ties go to `Low`.
    #[must_use]
    pub fn classify(avg_leverage: f64, median: f64) -> Self {
        if avg_leverage > median {
            Self::High
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Leverage",
            Self::Low => "Low Leverage",
        }
    }
}

impl fmt::Display for LeverageCohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cohort row of the segment matrix; `values` align with
/// [`SegmentMatrix::classifications`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRow {
    pub cohort: LeverageCohort,
    pub values: Vec<f64>,
}

/// Mean daily PnL by (cohort, classification). Dense: cells without
/// contributing rows hold 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SegmentMatrix {
    pub classifications: Vec<String>,
    pub rows: Vec<SegmentRow>,
}

impl SegmentMatrix {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell. `None` when the cohort or classification is not part
    /// of the matrix at all.
    #[must_use]
    pub fn get(&self, cohort: LeverageCohort, classification: &str) -> Option<f64> {
        let col = self
            .classifications
            .iter()
            .position(|c| c == classification)?;
        self.rows
            .iter()
            .find(|row| row.cohort == cohort)
            .map(|row| row.values[col])
    }
}

/// Result of splitting daily metrics by median leverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeverageSegmentation {
    /// Median of `avg_leverage` over all daily metric rows; `None` when there
    /// are no rows.
    pub median_leverage: Option<f64>,
    pub matrix: SegmentMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_with_median_go_low() {
        assert_eq!(LeverageCohort::classify(2.0, 2.0), LeverageCohort::Low);
        assert_eq!(LeverageCohort::classify(2.0001, 2.0), LeverageCohort::High);
    }

    #[test]
    fn cohort_labels_sort_high_first() {
        assert!(LeverageCohort::High < LeverageCohort::Low);
        assert_eq!(LeverageCohort::High.to_string(), "High Leverage");
    }

    #[test]
    fn matrix_lookup() {
        let matrix = SegmentMatrix {
            classifications: vec!["Fear".into(), "Greed".into()],
            rows: vec![SegmentRow {
                cohort: LeverageCohort::Low,
                values: vec![1.5, 0.0],
            }],
        };
        assert_eq!(matrix.get(LeverageCohort::Low, "Greed"), Some(0.0));
        assert_eq!(matrix.get(LeverageCohort::High, "Fear"), None);
        assert_eq!(matrix.get(LeverageCohort::Low, "Neutral"), None);
    }
}
