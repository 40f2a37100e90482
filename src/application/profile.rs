//! Per-account trader profiles over the merged trade log.

use std::collections::BTreeMap;

use tracing::info;

use crate::domain::stats::{mean, sample_std, win_rate};
use crate::domain::{AccountId, MergedTrade, TraderProfile};

/// Build one profile per account appearing in `merged`, sorted by account.
pub fn build_profiles(merged: &[MergedTrade]) -> Vec<TraderProfile> {
    let mut by_account: BTreeMap<&AccountId, Vec<&MergedTrade>> = BTreeMap::new();
    for row in merged {
        by_account.entry(row.account()).or_default().push(row);
    }

    let profiles: Vec<TraderProfile> = by_account
        .into_iter()
        .filter_map(|(account, rows)| profile(account, &rows))
        .collect();

    info!(accounts = profiles.len(), "built trader profiles");
    profiles
}

fn profile(account: &AccountId, rows: &[&MergedTrade]) -> Option<TraderProfile> {
    let pnls: Vec<f64> = rows.iter().map(|r| r.trade.closed_pnl).collect();
    let leverages: Vec<f64> = rows.iter().map(|r| r.trade.leverage).collect();
    let sizes: Vec<f64> = rows.iter().map(|r| r.trade.size).collect();

    Some(TraderProfile {
        account: account.clone(),
        total_pnl: pnls.iter().sum(),
        avg_pnl: mean(&pnls)?,
        std_pnl: sample_std(&pnls),
        avg_leverage: mean(&leverages)?,
        avg_size: mean(&sizes)?,
        trade_count: rows.len(),
        win_rate: win_rate(&pnls)?,
        sentiment_reaction: sentiment_reaction(rows),
    })
}

/// Mean leverage on fear days minus mean leverage on all other classified
/// days. Rows without a classification are ignored; 0 when either side is
/// empty.
pub fn sentiment_reaction(rows: &[&MergedTrade]) -> f64 {
    let (fear, other): (Vec<_>, Vec<_>) = rows
        .iter()
        .filter_map(|r| r.fear_side().map(|side| (side, r.trade.leverage)))
        .partition(|(is_fear, _)| *is_fear);

    let side_mean = |side: &[(bool, f64)]| mean(&side.iter().map(|(_, l)| *l).collect::<Vec<_>>());

    match (side_mean(&fear), side_mean(&other)) {
        (Some(fear), Some(other)) => fear - other,
        _ => 0.0,
    }
}
