//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section has defaults, so the configuration file is optional.
//!
//! # Example
//!
//! ```no_run
//! use moodlens::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("moodlens.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::io::{InputConfig, OutputConfig};
use super::logging::LoggingConfig;
use super::segmentation::SegmentationConfig;
use crate::domain::SegmentationMethod;
use crate::error::{ConfigError, Result};

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "moodlens.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Source table locations.
    #[serde(default)]
    pub input: InputConfig,

    /// Where output tables are written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Archetype classification settings.
    #[serde(default)]
    pub segmentation: SegmentationConfig,
}

/// Command-line values that replace configured ones when present.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub sentiment: Option<PathBuf>,
    pub trades: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub method: Option<SegmentationMethod>,
    pub clusters: Option<usize>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides and re-validate.
    #[allow(clippy::result_large_err)]
    pub fn apply(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(path) = overrides.sentiment {
            self.input.sentiment = path;
        }
        if let Some(path) = overrides.trades {
            self.input.trades = path;
        }
        if let Some(dir) = overrides.output {
            self.output.dir = dir;
        }
        if let Some(method) = overrides.method {
            self.segmentation.method = method;
        }
        if let Some(clusters) = overrides.clusters {
            self.segmentation.clustering.clusters = clusters;
        }
        if let Some(seed) = overrides.seed {
            self.segmentation.clustering.seed = seed;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.json_logs {
            self.logging.format = "json".into();
        }
        self.validate()?;
        Ok(self)
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.input.sentiment.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "input.sentiment",
            }
            .into());
        }
        if self.input.trades.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "input.trades",
            }
            .into());
        }
        if self.output.dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "output.dir" }.into());
        }
        self.logging.validate()?;
        self.segmentation.clustering.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.input.sentiment, PathBuf::from("fear_greed.csv"));
        assert_eq!(config.input.trades, PathBuf::from("hyperliquid_trades.csv"));
        assert_eq!(config.output.dir, PathBuf::from("outputs"));
        assert_eq!(config.segmentation.method, SegmentationMethod::Rules);
        assert_eq!(config.segmentation.clustering.clusters, 3);
    }

    #[test]
    fn parses_every_section() {
        let config = Config::parse_toml(
            r#"
            [input]
            sentiment = "data/fg.csv"
            trades = "data/trades.csv"

            [output]
            dir = "out"

            [logging]
            level = "debug"
            format = "json"

            [segmentation]
            method = "clustering"

            [segmentation.clustering]
            clusters = 4
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.input.sentiment, PathBuf::from("data/fg.csv"));
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.segmentation.method, SegmentationMethod::Clustering);
        assert_eq!(config.segmentation.clustering.clusters, 4);
        assert_eq!(config.segmentation.clustering.seed, 7);
        assert_eq!(config.segmentation.clustering.restarts, 10);
    }

    #[test]
    fn unknown_method_is_a_parse_error() {
        let err = Config::parse_toml("[segmentation]\nmethod = \"dbscan\"\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"), "{err}");
    }

    #[test]
    fn empty_input_path_is_missing() {
        let err = Config::parse_toml("[input]\ntrades = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("input.trades"), "{err}");
    }

    #[test]
    fn overrides_replace_and_revalidate() {
        let config = Config::default()
            .apply(Overrides {
                trades: Some("t.csv".into()),
                method: Some(SegmentationMethod::Clustering),
                clusters: Some(2),
                json_logs: true,
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(config.input.trades, PathBuf::from("t.csv"));
        assert_eq!(config.segmentation.clustering.clusters, 2);
        assert_eq!(config.logging.format, "json");

        let err = Config::default()
            .apply(Overrides {
                clusters: Some(0),
                ..Overrides::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("clusters"), "{err}");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/nonexistent/moodlens.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
