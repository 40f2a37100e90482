//! Command-line interface definitions.
//!
//! Defines the CLI structure for moodlens using `clap`. Global flags control
//! presentation; per-command flags override the configuration file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::SegmentationMethod;
use crate::infrastructure::config::{Overrides, DEFAULT_CONFIG_PATH};

/// Trader behaviour versus market sentiment: batch analysis and segmentation
#[derive(Parser, Debug)]
#[command(name = "moodlens")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: daily metrics, sentiment summary, leverage
    /// cohorts, trader profiles and archetypes
    Analyze(RunArgs),

    /// Build trader profiles and assign archetypes only
    Segment(RunArgs),

    /// Report nulls, duplicates and date ranges of both input tables
    Check(RunArgs),
}

impl Commands {
    #[must_use]
    pub fn args(&self) -> &RunArgs {
        match self {
            Self::Analyze(args) | Self::Segment(args) | Self::Check(args) => args,
        }
    }
}

/// Arguments shared by every subcommand.
///
/// All optional fields override the corresponding configuration file values.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to the configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Sentiment index CSV (date, classification)
    #[arg(long, value_name = "PATH")]
    pub sentiment: Option<PathBuf>,

    /// Trade log CSV (account, time, closedPnL, leverage, size)
    #[arg(long, value_name = "PATH")]
    pub trades: Option<PathBuf>,

    /// Output directory for the CSV tables
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Archetype classifier
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// Number of k-means clusters
    #[arg(long)]
    pub clusters: Option<usize>,

    /// Random seed for k-means initialisation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level filter (e.g. "info", "moodlens=debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Archetype classifier selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MethodArg {
    /// Ordered threshold rules
    Rules,
    /// k-means over standardised features
    Clustering,
}

impl From<MethodArg> for SegmentationMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Rules => Self::Rules,
            MethodArg::Clustering => Self::Clustering,
        }
    }
}

impl RunArgs {
    /// Configuration overrides carried by these flags.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            sentiment: self.sentiment.clone(),
            trades: self.trades.clone(),
            output: self.output.clone(),
            method: self.method.map(Into::into),
            clusters: self.clusters,
            seed: self.seed,
            log_level: self.log_level.clone(),
            json_logs: self.json_logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name() {
        assert_eq!(Cli::command().get_name(), "moodlens");
    }

    #[test]
    fn parse_analyze_defaults() {
        let cli = Cli::try_parse_from(["moodlens", "analyze"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze(_)));
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);

        let args = cli.command.args();
        assert_eq!(args.config, PathBuf::from("moodlens.toml"));
        assert!(args.method.is_none());
        assert!(!args.json_logs);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["moodlens", "segment", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn overrides_carry_flags() {
        let cli = Cli::try_parse_from([
            "moodlens",
            "segment",
            "--trades",
            "t.csv",
            "--method",
            "clustering",
            "--clusters",
            "4",
            "--seed",
            "9",
        ])
        .unwrap();
        let overrides = cli.command.args().overrides();
        assert_eq!(overrides.trades, Some(PathBuf::from("t.csv")));
        assert_eq!(overrides.method, Some(SegmentationMethod::Clustering));
        assert_eq!(overrides.clusters, Some(4));
        assert_eq!(overrides.seed, Some(9));
        assert_eq!(overrides.sentiment, None);
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(Cli::try_parse_from(["moodlens", "analyze", "--method", "dbscan"]).is_err());
    }

    #[test]
    fn parse_color_never() {
        let cli = Cli::try_parse_from(["moodlens", "--color", "never", "check"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
    }
}
