//! Faux Floors Script - RON content loader
//!
//! Builds an in-memory host database from RON content files:
//! - Thing definitions (rocks, stone blocks, ...)
//! - Terrain definitions
//! - Translation keys
//!
//! Used to stand up a host snapshot for tooling and tests without the game.

mod error;
mod loader;
mod schema;

pub use error::{Error, Result};
pub use loader::Loader;
pub use schema::ContentFile;
