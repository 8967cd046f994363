use std::io;
use std::path::PathBuf;

use prngs::{ParseAlgorithmError, StateError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown option {0}")]
    UnknownOption(String),

    #[error("unknown command {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown generator {name:?}")]
    UnknownGenerator {
        name: String,
        #[source]
        source: ParseAlgorithmError,
    },

    #[error("failed to read config {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Errors caused by how the tool was invoked (exit status 2).
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::MissingValue(_)
                | CliError::InvalidValue { .. }
                | CliError::UnknownOption(_)
                | CliError::UnknownCommand(_)
                | CliError::Usage(_)
                | CliError::UnknownGenerator { .. }
        )
    }
}
