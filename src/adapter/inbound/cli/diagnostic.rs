//! Miette-based error diagnostics for CLI error presentation.
//!
//! Maps crate errors to rich diagnostics with a help hint and, for TOML
//! parse errors, the offending span of the configuration file.

use std::fmt::Display;
use std::path::Path;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error, InputError};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(moodlens::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Any other fatal error, with an optional hint.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RunDiagnostic {
    pub message: String,
    pub code: &'static str,
    pub help: Option<String>,
}

impl Diagnostic for RunDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn Display + 'a>)
    }
}

/// Build a renderable report for `err`.
///
/// `config_path` is re-read to show the span of a TOML parse error.
#[must_use]
pub fn diagnose(err: &Error, config_path: &Path) -> miette::Report {
    if let Error::Config(ConfigError::Parse(parse)) = err {
        if let (Some(span), Ok(src)) = (parse.span(), std::fs::read_to_string(config_path)) {
            let diagnostic = ConfigDiagnostic::new(
                format!("invalid configuration: {}", parse.message()),
                src,
                span.start,
                span.end.saturating_sub(span.start),
            )
            .with_help(format!("check {}", config_path.display()));
            return miette::Report::new(diagnostic);
        }
    }

    let (code, help) = match err {
        Error::Config(_) => (
            "moodlens::config",
            Some(format!("check {} or the command-line overrides", config_path.display())),
        ),
        Error::Input(InputError::MissingColumn { table, .. }) => (
            "moodlens::input",
            Some(match *table {
                "sentiment" => "the sentiment table needs columns: date, classification".into(),
                _ => "the trade table needs columns: account, time, closedPnL, leverage, size"
                    .into(),
            }),
        ),
        Error::Input(InputError::Open { .. }) => (
            "moodlens::input",
            Some("point --sentiment/--trades or [input] at existing CSV files".into()),
        ),
        Error::Input(InputError::InvalidValue { .. }) => (
            "moodlens::input",
            Some("numeric cells must be numbers and times must be dates or timestamps".into()),
        ),
        Error::Csv(_) => ("moodlens::csv", None),
        Error::Json(_) => ("moodlens::json", None),
        Error::Io(_) => ("moodlens::io", None),
    };

    miette::Report::new(RunDiagnostic {
        message: err.to_string(),
        code,
        help,
    })
}
