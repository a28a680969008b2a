use std::path::PathBuf;

use thiserror::Error;

/// Faults at the crate boundary. Skipped attributes, unresolved identifiers and
/// exempt elements are not errors; they never surface here.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options for rule `{rule}`: {source}")]
    InvalidOptions {
        rule: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid lint configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, LintError>;
