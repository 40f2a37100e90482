//! Daily market-sentiment index records.

use chrono::NaiveDate;
use serde::Serialize;

/// Token whose presence in a classification label marks a fear day.
///
/// Matching is case-sensitive, so both "Fear" and "Extreme Fear" qualify.
pub const FEAR_TOKEN: &str = "Fear";

/// One row of the daily sentiment index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentRecord {
    /// Calendar day the classification applies to.
    pub date: NaiveDate,
    /// Category label such as "Fear" or "Extreme Greed"; `None` when the
    /// source cell was empty.
    pub classification: Option<String>,
}

impl SentimentRecord {
    pub fn new(date: NaiveDate, classification: impl Into<String>) -> Self {
        Self {
            date,
            classification: Some(classification.into()),
        }
    }

    /// A record whose classification cell was empty.
    pub fn unclassified(date: NaiveDate) -> Self {
        Self {
            date,
            classification: None,
        }
    }
}

/// Whether a classification label belongs to the fear side.
#[must_use]
pub fn is_fear(label: &str) -> bool {
    label.contains(FEAR_TOKEN)
}
