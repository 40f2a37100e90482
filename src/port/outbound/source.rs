//! Tabular data source contract.

use crate::domain::{SentimentRecord, TradeRecord};
use crate::error::Result;

/// Untyped view of an input table, used for data-quality checks.
///
/// Cells are kept as the raw strings from the source; an empty string is a
/// null cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub name: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of a column by exact header name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Values of one column, in row order.
    pub fn values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map_or("", String::as_str))
    }
}

/// Provider of the two input tables.
///
/// Implementations fail with an input-contract error when a required column
/// is absent; no partial table is ever returned.
pub trait DataSource {
    /// Load the daily sentiment index.
    fn sentiment(&self) -> Result<Vec<SentimentRecord>>;

    /// Load the trade log.
    fn trades(&self) -> Result<Vec<TradeRecord>>;

    /// Load the sentiment table without typing its cells.
    fn raw_sentiment(&self) -> Result<RawTable>;

    /// Load the trade table without typing its cells.
    fn raw_trades(&self) -> Result<RawTable>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_read_as_null() {
        let table = RawTable {
            name: "t",
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into()], vec!["2".into(), "x".into()]],
        };
        let b = table.column("b").unwrap();
        assert_eq!(table.values(b).collect::<Vec<_>>(), vec!["", "x"]);
        assert_eq!(table.column("c"), None);
    }
}
