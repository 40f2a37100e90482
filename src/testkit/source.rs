//! In-memory data source built from CSV text.

use crate::adapter::outbound::csv::table::{
    read_table, sentiment_records, trade_records, SENTIMENT_TABLE, TRADES_TABLE,
};
use crate::domain::{SentimentRecord, TradeRecord};
use crate::error::Result;
use crate::port::{DataSource, RawTable};

/// Sentiment and trade tables for tests, parsed exactly as files would be.
pub const TWO_DAY_SENTIMENT: &str = "date,classification\n2024-01-01,Fear\n2024-01-02,Greed\n";

pub const TWO_DAY_TRADES: &str = "account,time,closedPnL,leverage,size\n\
A,2024-01-01 10:00,-5,2,100\n\
A,2024-01-01 11:00,10,2,100\n\
A,2024-01-02 09:00,3,4,50\n";

/// A [`DataSource`] over CSV strings.
#[derive(Debug, Clone)]
pub struct MemorySource {
    sentiment: RawTable,
    trades: RawTable,
}

impl MemorySource {
    /// Parse both tables.
    ///
    /// # Panics
    ///
    /// Panics if either text is not CSV.
    pub fn from_csv(sentiment: &str, trades: &str) -> Self {
        Self {
            sentiment: read_table(SENTIMENT_TABLE, sentiment.as_bytes()).expect("sentiment CSV"),
            trades: read_table(TRADES_TABLE, trades.as_bytes()).expect("trades CSV"),
        }
    }

    /// The three-trade, two-day fixture.
    pub fn two_day() -> Self {
        Self::from_csv(TWO_DAY_SENTIMENT, TWO_DAY_TRADES)
    }
}

impl DataSource for MemorySource {
    fn sentiment(&self) -> Result<Vec<SentimentRecord>> {
        sentiment_records(&self.sentiment)
    }

    fn trades(&self) -> Result<Vec<TradeRecord>> {
        trade_records(&self.trades)
    }

    fn raw_sentiment(&self) -> Result<RawTable> {
        Ok(self.sentiment.clone())
    }

    fn raw_trades(&self) -> Result<RawTable> {
        Ok(self.trades.clone())
    }
}
