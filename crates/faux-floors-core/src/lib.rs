//! Faux Floors Core - Host definition model and capability contracts
//!
//! This crate describes the slice of the host game's definition database
//! that floor generation reads and writes:
//! - Definition names, categories and 16-bit short hashes
//! - Thing definitions (rocks, stone blocks, blueprints, frames)
//! - Terrain definitions and designator dropdown groups
//! - The host's stable string hash
//! - Read ([`DefDatabase`]) and write ([`DefRegistrar`]) contracts
//!
//! [`MemoryDatabase`] implements both contracts in memory, for tools and
//! tests that run without the game.

mod database;
mod error;
pub mod graphic;
pub mod hash;
mod identity;
pub mod stat;
pub mod terrain;
pub mod thing;

pub use database::{DefDatabase, DefRegistrar, Host, ImpliedDef, MemoryDatabase};
pub use error::{Error, Result};
pub use graphic::{Color, GraphicData, ShaderType};
pub use identity::{DefCategory, DefId, ShortHash};
pub use stat::StatModifier;
pub use terrain::{
    DesignatorDropdownGroupDef, FilthSourceFlags, TerrainAffordance, TerrainDef, TerrainEdgeType,
};
pub use thing::{
    AltitudeLayer, BuildingProperties, CompProperties, DrawerType, ThingCategory, ThingDef,
    ThingDefCount, Traversability, STONE_BLOCKS,
};
