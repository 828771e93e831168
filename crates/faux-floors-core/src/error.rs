//! Error types for faux-floors-core

use crate::{DefCategory, DefId, ShortHash};
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate {category} definition: {name}")]
    DuplicateDefinition { category: DefCategory, name: DefId },

    #[error("Short hash {hash} of {category} {name} is already used by {existing}")]
    ShortHashTaken {
        category: DefCategory,
        name: DefId,
        hash: ShortHash,
        existing: DefId,
    },

    #[error("No free short hash left for {0} definitions")]
    ShortHashesExhausted(DefCategory),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
