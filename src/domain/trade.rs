//! Trade log records, before and after the sentiment join.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::id::AccountId;
use super::sentiment::is_fear;

/// One closed trade from the trade log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRecord {
    pub account: AccountId,
    pub time: NaiveDateTime,
    /// Realised PnL of the trade (signed).
    pub closed_pnl: f64,
    pub leverage: f64,
    pub size: f64,
}

impl TradeRecord {
    /// Calendar day of the trade, used as the join key.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }
}

/// A trade extended with the sentiment classification of its day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedTrade {
    pub trade: TradeRecord,
    pub classification: Option<String>,
}

impl MergedTrade {
    #[must_use]
    pub fn account(&self) -> &AccountId {
        &self.trade.account
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.trade.date()
    }

    /// `Some(true)` on fear days, `Some(false)` otherwise, `None` when the
    /// classification is missing.
    #[must_use]
    pub fn fear_side(&self) -> Option<bool> {
        self.classification.as_deref().map(is_fear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(pnl: f64) -> TradeRecord {
        TradeRecord {
            account: AccountId::from("A"),
            time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(23, 59, 0)
                .unwrap(),
            closed_pnl: pnl,
            leverage: 2.0,
            size: 10.0,
        }
    }

    #[test]
    fn date_drops_time_of_day() {
        assert_eq!(trade(1.0).date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn fear_side_is_none_without_classification() {
        let merged = MergedTrade {
            trade: trade(1.0),
            classification: None,
        };
        assert_eq!(merged.fear_side(), None);

        let merged = MergedTrade {
            trade: trade(1.0),
            classification: Some("Extreme Fear".into()),
        };
        assert_eq!(merged.fear_side(), Some(true));
    }
}
