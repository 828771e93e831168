//! Error types for faux-floors-script

use thiserror::Error;

/// Content loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error(transparent)]
    Database(#[from] faux_floors_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
