//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use std::path::Path;

use crate::domain::SegmentationMethod;
use crate::infrastructure::config::{Config, InputConfig, OutputConfig};

/// Config reading `sentiment.csv` and `trades.csv` from `dir` and writing to
/// `dir/outputs`.
pub fn in_dir(dir: &Path) -> Config {
    Config {
        input: InputConfig {
            sentiment: dir.join("sentiment.csv"),
            trades: dir.join("trades.csv"),
        },
        output: OutputConfig {
            dir: dir.join("outputs"),
        },
        ..Config::default()
    }
}

/// TOML text pointing both inputs into `dir`.
pub fn toml_in_dir(dir: &Path, method: SegmentationMethod) -> String {
    format!(
        "[input]\nsentiment = {:?}\ntrades = {:?}\n\n\
         [output]\ndir = {:?}\n\n\
         [segmentation]\nmethod = \"{}\"\n",
        dir.join("sentiment.csv").display().to_string(),
        dir.join("trades.csv").display().to_string(),
        dir.join("outputs").display().to_string(),
        method,
    )
}
