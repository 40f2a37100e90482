//! Input and output locations.

use std::path::PathBuf;

use serde::Deserialize;

/// `[input]` section: paths of the two source tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    /// Daily sentiment index (`date`, `classification`).
    #[serde(default = "default_sentiment")]
    pub sentiment: PathBuf,

    /// Trade log (`account`, `time`, `closedPnL`, `leverage`, `size`).
    #[serde(default = "default_trades")]
    pub trades: PathBuf,
}

fn default_sentiment() -> PathBuf {
    PathBuf::from("fear_greed.csv")
}

fn default_trades() -> PathBuf {
    PathBuf::from("hyperliquid_trades.csv")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sentiment: default_sentiment(),
            trades: default_trades(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the CSV tables; created when missing.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from("outputs")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}
