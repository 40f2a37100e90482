//! Inner join of the trade log with the daily sentiment index.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::{MergedTrade, SentimentRecord, TradeRecord};

/// Join trades to sentiment on calendar date.
///
/// Trades on days without a sentiment row are dropped. A day with several
/// sentiment rows yields one merged row per sentiment row. Trade order is
/// preserved.
pub fn merge(trades: &[TradeRecord], sentiment: &[SentimentRecord]) -> Vec<MergedTrade> {
    let mut by_date: HashMap<NaiveDate, Vec<Option<&str>>> = HashMap::new();
    for record in sentiment {
        by_date
            .entry(record.date)
            .or_default()
            .push(record.classification.as_deref());
    }

    let merged: Vec<MergedTrade> = trades
        .iter()
        .flat_map(|trade| {
            by_date
                .get(&trade.date())
                .into_iter()
                .flatten()
                .map(move |classification| MergedTrade {
                    trade: trade.clone(),
                    classification: classification.map(str::to_owned),
                })
        })
        .collect();

    let dropped = trades
        .iter()
        .filter(|t| !by_date.contains_key(&t.date()))
        .count();

    if merged.is_empty() && !trades.is_empty() {
        warn!(
            trades = trades.len(),
            sentiment_days = by_date.len(),
            "join produced no rows; trade and sentiment dates do not overlap"
        );
    }
    info!(
        trades = trades.len(),
        merged = merged.len(),
        dropped,
        "merged trades with sentiment"
    );

    merged
}
