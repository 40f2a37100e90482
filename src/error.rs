use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Input-table contract violations.
///
/// Any of these aborts the run before a single output table is written.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("{table} table, line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        table: &'static str,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("failed to open {table} table at {path}: {source}")]
    Open {
        table: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error comes from the shape or content of an input table.
    #[must_use]
    pub fn is_input_contract(&self) -> bool {
        matches!(self, Error::Input(_))
    }
}
