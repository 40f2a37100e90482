//! Command-line adapter: argument parsing, dispatch and rendering.

pub mod analyze;
pub mod chart;
pub mod check;
pub mod command;
pub mod diagnostic;
pub mod output;
pub mod segment;

use tracing::debug;

use crate::application::classifier::{classifier_for, ArchetypeClassifier};
use crate::error::Result;
use crate::infrastructure::config::Config;

use self::command::{Cli, Commands};
use self::output::OutputConfig;

/// Configure output, load configuration, start logging and run the command.
pub fn run(cli: &Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose).with_color(cli.color));

    let args = cli.command.args();
    let mut overrides = args.overrides();
    if overrides.log_level.is_none() {
        overrides.log_level = verbosity_level(cli.verbose);
    }
    let config = Config::load_or_default(&args.config)?.apply(overrides)?;
    config.init_logging();
    debug!(?config, "configuration loaded");

    match &cli.command {
        Commands::Analyze(_) => analyze::execute(&config),
        Commands::Segment(_) => segment::execute(&config),
        Commands::Check(_) => check::execute(&config),
    }
}

/// `-v` raises the log level to debug, `-vv` to trace.
fn verbosity_level(verbose: u8) -> Option<String> {
    match verbose {
        0 => None,
        1 => Some("debug".into()),
        _ => Some("trace".into()),
    }
}

fn classifier(config: &Config) -> Box<dyn ArchetypeClassifier> {
    classifier_for(
        config.segmentation.method,
        config.segmentation.clustering.to_kmeans(),
    )
}
