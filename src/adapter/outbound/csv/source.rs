//! CSV-file data source.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::table::{self, SENTIMENT_TABLE, TRADES_TABLE};
use crate::domain::{SentimentRecord, TradeRecord};
use crate::error::{InputError, Result};
use crate::port::{DataSource, RawTable};

/// Reads the sentiment index and the trade log from two CSV files.
#[derive(Debug, Clone)]
pub struct CsvSource {
    sentiment: PathBuf,
    trades: PathBuf,
}

impl CsvSource {
    #[must_use]
    pub fn new(sentiment: impl Into<PathBuf>, trades: impl Into<PathBuf>) -> Self {
        Self {
            sentiment: sentiment.into(),
            trades: trades.into(),
        }
    }

    fn read(name: &'static str, path: &Path) -> Result<RawTable> {
        let file = File::open(path).map_err(|source| InputError::Open {
            table: name,
            path: path.display().to_string(),
            source,
        })?;
        let table = table::read_table(name, file)?;
        debug!(
            table = name,
            path = %path.display(),
            rows = table.rows.len(),
            columns = table.headers.len(),
            "read CSV table"
        );
        Ok(table)
    }
}

impl DataSource for CsvSource {
    fn sentiment(&self) -> Result<Vec<SentimentRecord>> {
        table::sentiment_records(&self.raw_sentiment()?)
    }

    fn trades(&self) -> Result<Vec<TradeRecord>> {
        table::trade_records(&self.raw_trades()?)
    }

    fn raw_sentiment(&self) -> Result<RawTable> {
        Self::read(SENTIMENT_TABLE, &self.sentiment)
    }

    fn raw_trades(&self) -> Result<RawTable> {
        Self::read(TRADES_TABLE, &self.trades)
    }
}
