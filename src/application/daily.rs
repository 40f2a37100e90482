//! Per-account daily aggregation of merged trades.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::stats::{mean, win_rate};
use crate::domain::{AccountId, DailyMetric, MergedTrade, TradeRecord};

type DailyKey = (AccountId, NaiveDate, String);

/// Build one [`DailyMetric`] per distinct (account, date, classification).
///
/// Rows without a classification take part in no group. Output is sorted by
/// account, then date, then classification.
pub fn daily_metrics(merged: &[MergedTrade]) -> Vec<DailyMetric> {
    let mut groups: BTreeMap<DailyKey, Vec<&TradeRecord>> = BTreeMap::new();
    let mut unclassified = 0usize;

    for row in merged {
        let Some(classification) = &row.classification else {
            unclassified += 1;
            continue;
        };
        groups
            .entry((row.account().clone(), row.date(), classification.clone()))
            .or_default()
            .push(&row.trade);
    }

    if unclassified > 0 {
        debug!(unclassified, "skipped merged rows without classification");
    }

    let metrics: Vec<DailyMetric> = groups
        .into_iter()
        .filter_map(|((account, date, classification), trades)| {
            summarize(account, date, classification, &trades)
        })
        .collect();

    info!(rows = metrics.len(), "computed daily metrics");
    metrics
}

fn summarize(
    account: AccountId,
    date: NaiveDate,
    classification: String,
    trades: &[&TradeRecord],
) -> Option<DailyMetric> {
    let pnls: Vec<f64> = trades.iter().map(|t| t.closed_pnl).collect();
    let leverages: Vec<f64> = trades.iter().map(|t| t.leverage).collect();
    let sizes: Vec<f64> = trades.iter().map(|t| t.size).collect();

    Some(DailyMetric {
        account,
        date,
        classification,
        daily_pnl: pnls.iter().sum(),
        trades_count: trades.len(),
        avg_leverage: mean(&leverages)?,
        avg_size: mean(&sizes)?,
        win_rate: win_rate(&pnls)?,
    })
}
