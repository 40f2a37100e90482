use std::process::ExitCode;

use clap::Parser;

use moodlens::adapter::inbound::cli::command::Cli;
use moodlens::adapter::inbound::cli::{self, diagnostic, output};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if output::is_json() {
                output::error(&err.to_string());
            } else {
                let report = diagnostic::diagnose(&err, &cli.command.args().config);
                eprintln!("{report:?}");
            }
            ExitCode::FAILURE
        }
    }
}
