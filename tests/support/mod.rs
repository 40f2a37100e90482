#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use moodlens::testkit::source::{TWO_DAY_SENTIMENT, TWO_DAY_TRADES};

/// Six accounts in three well-separated behaviours over four days:
/// A and B trade high leverage and mostly lose, C and D trade low leverage
/// and mostly win, E and F double their leverage on fear days.
pub const POPULATION_SENTIMENT: &str = "date,classification\n\
2024-03-01,Extreme Fear\n\
2024-03-02,Fear\n\
2024-03-03,Greed\n\
2024-03-04,Extreme Greed\n";

pub const POPULATION_TRADES: &str = "account,time,closedPnL,leverage,size\n\
A,2024-03-01 09:00,-40,5,100\n\
A,2024-03-02 09:00,-10,5,100\n\
A,2024-03-03 09:00,15,5,100\n\
A,2024-03-04 09:00,-5,5,100\n\
B,2024-03-01 10:00,-30,5.5,120\n\
B,2024-03-02 10:00,-20,5.5,120\n\
B,2024-03-03 10:00,-10,5.5,120\n\
B,2024-03-04 10:00,25,5.5,120\n\
C,2024-03-01 11:00,5,1.2,40\n\
C,2024-03-02 11:00,6,1.2,40\n\
C,2024-03-03 11:00,4,1.2,40\n\
C,2024-03-04 11:00,-1,1.2,40\n\
D,2024-03-01 12:00,3,1.5,50\n\
D,2024-03-02 12:00,2,1.5,50\n\
D,2024-03-03 12:00,5,1.5,50\n\
D,2024-03-04 12:00,4,1.5,50\n\
E,2024-03-01 13:00,8,4,80\n\
E,2024-03-02 13:00,-6,4,80\n\
E,2024-03-03 13:00,2,2,80\n\
E,2024-03-04 13:00,-1,2,80\n\
F,2024-03-01 14:00,-3,4.5,90\n\
F,2024-03-02 14:00,7,4.5,90\n\
F,2024-03-03 14:00,1,2.25,90\n\
F,2024-03-04 14:00,-2,2.25,90\n";

/// Write `sentiment.csv` and `trades.csv` into `dir`.
pub fn write_inputs(dir: &Path, sentiment: &str, trades: &str) -> (PathBuf, PathBuf) {
    let sentiment_path = dir.join("sentiment.csv");
    let trades_path = dir.join("trades.csv");
    fs::write(&sentiment_path, sentiment).expect("write sentiment");
    fs::write(&trades_path, trades).expect("write trades");
    (sentiment_path, trades_path)
}

pub fn write_two_day(dir: &Path) -> (PathBuf, PathBuf) {
    write_inputs(dir, TWO_DAY_SENTIMENT, TWO_DAY_TRADES)
}

pub fn write_population(dir: &Path) -> (PathBuf, PathBuf) {
    write_inputs(dir, POPULATION_SENTIMENT, POPULATION_TRADES)
}

/// Reverse the data rows of a CSV text, keeping the header first.
pub fn reverse_rows(text: &str) -> String {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    let mut rows: Vec<&str> = lines.collect();
    rows.reverse();

    let mut out = String::from(header);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}
