//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for sentiment rows, trades and
//! profiles so tests focus on assertions rather than construction
//! boilerplate. Builders panic on malformed literals.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{AccountId, MergedTrade, SentimentRecord, TradeRecord, TraderProfile};

/// Parse a `YYYY-MM-DD` literal.
pub fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid YYYY-MM-DD literal")
}

/// Parse a `YYYY-MM-DDTHH:MM` literal.
pub fn at(time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M").expect("valid YYYY-MM-DDTHH:MM literal")
}

/// Create a classified [`SentimentRecord`].
pub fn sentiment(date: &str, classification: &str) -> SentimentRecord {
    SentimentRecord::new(day(date), classification)
}

/// Create a [`TradeRecord`].
pub fn trade(account: &str, time: &str, pnl: f64, leverage: f64, size: f64) -> TradeRecord {
    TradeRecord {
        account: AccountId::from(account),
        time: at(time),
        closed_pnl: pnl,
        leverage,
        size,
    }
}

/// Create a [`MergedTrade`] directly, bypassing the join.
pub fn merged(account: &str, classification: Option<&str>, pnl: f64, leverage: f64) -> MergedTrade {
    MergedTrade {
        trade: trade(account, "2024-01-01T12:00", pnl, leverage, 1.0),
        classification: classification.map(str::to_owned),
    }
}

/// Create a [`TraderProfile`] from the fields the classifiers read.
///
/// PnL fields are filled with neutral values.
pub fn profile(
    account: &str,
    avg_leverage: f64,
    trade_count: usize,
    win_rate: f64,
    sentiment_reaction: f64,
) -> TraderProfile {
    TraderProfile {
        account: AccountId::from(account),
        total_pnl: 0.0,
        avg_pnl: 0.0,
        std_pnl: None,
        avg_leverage,
        avg_size: 1.0,
        trade_count,
        win_rate,
        sentiment_reaction,
    }
}

/// The three-trade, two-day fixture: one Fear day with a loss and a win,
/// one Greed day with a single win.
pub fn two_day_fixture() -> (Vec<SentimentRecord>, Vec<TradeRecord>) {
    (
        vec![
            sentiment("2024-01-01", "Fear"),
            sentiment("2024-01-02", "Greed"),
        ],
        vec![
            trade("A", "2024-01-01T10:00", -5.0, 2.0, 100.0),
            trade("A", "2024-01-01T11:00", 10.0, 2.0, 100.0),
            trade("A", "2024-01-02T09:00", 3.0, 4.0, 50.0),
        ],
    )
}
