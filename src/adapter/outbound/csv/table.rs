//! Reading CSV text into raw tables and typing their rows.
//!
//! Column names are a fixed contract: `date` and `classification` for the
//! sentiment index; `account`, `time`, `closedPnL`, `leverage` and `size` for
//! the trade log. Extra columns are ignored.

use std::io::Read;

use csv::{ReaderBuilder, Trim};

use crate::domain::time::{parse_date, parse_timestamp};
use crate::domain::{AccountId, SentimentRecord, TradeRecord};
use crate::error::{InputError, Result};
use crate::port::RawTable;

pub const SENTIMENT_TABLE: &str = "sentiment";
pub const TRADES_TABLE: &str = "trades";

/// Read a headed CSV stream. Ragged rows are kept as-is.
pub fn read_table<R: Read>(name: &'static str, reader: R) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(reader);

    let headers = reader.headers()?.iter().map(str::to_owned).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_owned).collect());
    }

    Ok(RawTable {
        name,
        headers,
        rows,
    })
}

/// Type the sentiment table.
pub fn sentiment_records(table: &RawTable) -> Result<Vec<SentimentRecord>> {
    let date = require(table, "date")?;
    let classification = require(table, "classification")?;

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| -> Result<SentimentRecord> {
            let cells = Cells { table, row, index: i };
            let date = cells.parse("date", date, parse_date)?;
            Ok(match cells.get(classification) {
                "" => SentimentRecord::unclassified(date),
                label => SentimentRecord::new(date, label),
            })
        })
        .collect()
}

/// Type the trade table.
pub fn trade_records(table: &RawTable) -> Result<Vec<TradeRecord>> {
    let account = require(table, "account")?;
    let time = require(table, "time")?;
    let pnl = require(table, "closedPnL")?;
    let leverage = require(table, "leverage")?;
    let size = require(table, "size")?;

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| -> Result<TradeRecord> {
            let cells = Cells { table, row, index: i };
            let account = match cells.get(account) {
                "" => return Err(cells.invalid("account", "").into()),
                id => AccountId::from(id),
            };
            Ok(TradeRecord {
                account,
                time: cells.parse("time", time, parse_timestamp)?,
                closed_pnl: cells.parse("closedPnL", pnl, parse_number)?,
                leverage: cells.parse("leverage", leverage, parse_number)?,
                size: cells.parse("size", size, parse_number)?,
            })
        })
        .collect()
}

fn require(table: &RawTable, column: &'static str) -> Result<usize> {
    table.column(column).ok_or_else(|| {
        InputError::MissingColumn {
            table: table.name,
            column,
        }
        .into()
    })
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// One data row, for error reporting.
struct Cells<'a> {
    table: &'a RawTable,
    row: &'a [String],
    index: usize,
}

impl Cells<'_> {
    fn get(&self, column: usize) -> &str {
        self.row.get(column).map_or("", String::as_str)
    }

    fn parse<T>(
        &self,
        name: &'static str,
        column: usize,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        let value = self.get(column);
        parse(value).ok_or_else(|| self.invalid(name, value).into())
    }

    fn invalid(&self, column: &'static str, value: &str) -> InputError {
        InputError::InvalidValue {
            table: self.table.name,
            // 1-based, counting the header line.
            line: self.index as u64 + 2,
            column,
            value: value.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testkit::domain::{at, day};

    fn table(name: &'static str, text: &str) -> RawTable {
        read_table(name, text.as_bytes()).unwrap()
    }

    #[test]
    fn reads_headers_and_ragged_rows() {
        let t = table("t", "a,b\n1,2\n3\n");
        assert_eq!(t.headers, vec!["a", "b"]);
        assert_eq!(t.rows, vec![vec!["1", "2"], vec!["3"]]);
    }

    #[test]
    fn types_sentiment_rows() {
        let t = table(
            SENTIMENT_TABLE,
            "timestamp,value,classification,date\n1,20,Fear,2024-01-01\n2,50,,2024-01-02\n",
        );
        let records = sentiment_records(&t).unwrap();
        assert_eq!(records[0], SentimentRecord::new(day("2024-01-01"), "Fear"));
        assert_eq!(records[1], SentimentRecord::unclassified(day("2024-01-02")));
    }

    #[test]
    fn types_trade_rows() {
        let t = table(
            TRADES_TABLE,
            "account,coin,time,closedPnL,leverage,size\nA,BTC,02-01-2024 10:30,-1.5,3,100\n",
        );
        let trades = trade_records(&t).unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].account.as_str(), "A");
        assert_eq!(trades[0].time, at("2024-01-02T10:30"));
        assert_eq!(trades[0].closed_pnl, -1.5);
    }

    #[test]
    fn missing_column_is_fatal() {
        let t = table(TRADES_TABLE, "account,time,closedPnL,size\nA,2024-01-01,1,1\n");
        match trade_records(&t) {
            Err(Error::Input(InputError::MissingColumn { table, column })) => {
                assert_eq!(table, "trades");
                assert_eq!(column, "leverage");
            }
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn header_lookup_is_case_sensitive() {
        let t = table(SENTIMENT_TABLE, "Date,classification\n2024-01-01,Fear\n");
        assert!(sentiment_records(&t).is_err());
    }

    #[test]
    fn bad_cell_names_line_and_column() {
        let t = table(
            TRADES_TABLE,
            "account,time,closedPnL,leverage,size\nA,2024-01-01,1,2,3\nB,2024-01-01,1,high,3\n",
        );
        match trade_records(&t) {
            Err(Error::Input(InputError::InvalidValue {
                line, column, value, ..
            })) => {
                assert_eq!(line, 3);
                assert_eq!(column, "leverage");
                assert_eq!(value, "high");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn empty_numeric_cell_is_invalid() {
        let t = table(TRADES_TABLE, "account,time,closedPnL,leverage,size\nA,2024-01-01,,2,3\n");
        assert!(trade_records(&t).is_err());
    }
}
