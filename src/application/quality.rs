//! Ad hoc data-quality counts over raw input tables.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::domain::time::parse_timestamp;
use crate::port::RawTable;

/// Quality counts for one raw table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub table: &'static str,
    pub records: usize,
    pub columns: Vec<String>,
    /// Number of empty cells across all columns.
    pub null_cells: usize,
    /// Rows identical to an earlier row.
    pub duplicate_rows: usize,
    /// Earliest and latest value of the date/time column.
    pub date_range: Option<(String, String)>,
    /// Key values that occur more than once, with their counts.
    pub duplicate_keys: Vec<(String, usize)>,
}

impl QualityReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.null_cells == 0 && self.duplicate_rows == 0 && self.duplicate_keys.is_empty()
    }
}

/// Assess a raw table.
///
/// `date_column` drives the date range; `key_column` is checked for
/// repeated values (the sentiment table's `date` should be unique).
#[must_use]
pub fn assess(table: &RawTable, date_column: &str, key_column: Option<&str>) -> QualityReport {
    let width = table.headers.len();
    let null_cells = table
        .rows
        .iter()
        .map(|row| {
            (0..width)
                .filter(|&i| row.get(i).map_or(true, |c| c.trim().is_empty()))
                .count()
        })
        .sum();

    let mut seen = HashSet::new();
    let duplicate_rows = table.rows.iter().filter(|row| !seen.insert(*row)).count();

    let date_range = table
        .column(date_column)
        .and_then(|i| date_range(table.values(i).filter(|v| !v.trim().is_empty())));

    let duplicate_keys = key_column
        .and_then(|key| table.column(key))
        .map(|i| {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for value in table.values(i) {
                *counts.entry(value).or_default() += 1;
            }
            counts
                .into_iter()
                .filter(|(_, n)| *n > 1)
                .map(|(v, n)| (v.to_owned(), n))
                .collect()
        })
        .unwrap_or_default();

    QualityReport {
        table: table.name,
        records: table.rows.len(),
        columns: table.headers.clone(),
        null_cells,
        duplicate_rows,
        date_range,
        duplicate_keys,
    }
}

/// Chronological min/max when every value parses as a timestamp, otherwise
/// lexicographic.
fn date_range<'a>(values: impl Iterator<Item = &'a str>) -> Option<(String, String)> {
    let values: Vec<&str> = values.collect();
    let parsed: Option<Vec<_>> = values.iter().map(|v| parse_timestamp(v)).collect();

    let (min, max) = match parsed {
        Some(times) => {
            let min = values.iter().zip(&times).min_by_key(|(_, t)| **t)?.0;
            let max = values.iter().zip(&times).max_by_key(|(_, t)| **t)?.0;
            (*min, *max)
        }
        None => (*values.iter().min()?, *values.iter().max()?),
    };
    Some((min.to_owned(), max.to_owned()))
}
