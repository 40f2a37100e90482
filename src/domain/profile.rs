//! Per-account behavioural profile.

use serde::Serialize;

use super::id::AccountId;

/// Number of features used for distance-based grouping.
pub const FEATURE_COUNT: usize = 5;

/// Feature names, in the order of [`TraderProfile::features`].
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "avg_leverage",
    "trade_count",
    "win_rate",
    "sentiment_reaction",
    "avg_pnl",
];

/// Aggregate of an account's whole trade history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraderProfile {
    pub account: AccountId,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    /// Sample standard deviation of PnL; undefined for single-trade accounts.
    pub std_pnl: Option<f64>,
    pub avg_leverage: f64,
    pub avg_size: f64,
    pub trade_count: usize,
    pub win_rate: f64,
    /// Mean leverage on fear days minus mean leverage on other days.
    pub sentiment_reaction: f64,
}

impl TraderProfile {
    /// Clustering feature vector. Non-finite values are replaced with 0.
    #[must_use]
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.avg_leverage,
            self.trade_count as f64,
            self.win_rate,
            self.sentiment_reaction,
            self.avg_pnl,
        ]
        .map(|v| if v.is_finite() { v } else { 0.0 })
    }
}
