//! Error types for faux-floors-gen
//!
//! None of these escape [`crate::add_implied_faux_floors`]: a failing rock
//! is logged and skipped, and the pass carries on with the next one.

use faux_floors_core::DefId;
use thiserror::Error;

/// Result type for faux-floors-gen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating floors
#[derive(Debug, Error)]
pub enum Error {
    /// Source rock without a name
    #[error("rock definition has no def_name")]
    MissingRockName,

    /// Source thing is not a natural, non-resource rock
    #[error("{0} is not a natural, non-resource rock")]
    NotNaturalRock(DefId),

    /// No stone blocks could be resolved for the rock
    #[error("couldn't find stone blocks for {0}")]
    NoBlocks(DefId),

    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] ron::error::SpannedError),

    /// Host database error
    #[error("host error: {0}")]
    Core(#[from] faux_floors_core::Error),
}
