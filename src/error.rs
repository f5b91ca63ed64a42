//! Error types for marga-nav.
//!
//! The decision engine itself has no fatal errors (every degradation is
//! handled by making a locally valid move); errors exist only at the
//! configuration and maze-loading boundary.

use thiserror::Error;

/// Marga-nav error type.
#[derive(Error, Debug)]
pub enum MargaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Maze parse error: {0}")]
    MazeParse(String),
}

impl From<toml::de::Error> for MargaError {
    fn from(e: toml::de::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MargaError>;
