use std::path::PathBuf;

use lostfound_core::error::CoreError;

/// Errors surfaced by the command-line harness.
///
/// Wraps [`CoreError`] for domain parsing failures and adds input-loading
/// variants. Validation failures of a report are results, not errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type CliResult<T> = Result<T, CliError>;
