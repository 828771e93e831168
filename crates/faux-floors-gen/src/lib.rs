//! Faux Floors Gen - Faux stone floor synthesis
//!
//! For every natural, non-resource rock the host knows about, this crate
//! generates three floors that look like the rock's natural terrain but can
//! be built anywhere:
//!
//! ```text
//! Granite ──► BlocksGranite (cost: 6)
//!  │
//!  ├── Granite_RoughFaux ──────┐   + Blueprint_ / Frame_
//!  ├── Granite_RoughHewnFaux ──┤   + Blueprint_ / Frame_
//!  └── Granite_SmoothFaux ◄────┘   smoothing target
//! ```
//!
//! ## Key Components
//!
//! - [`BlocksResolver`]: finds the stone blocks a rock's floors cost
//! - [`Synthesizer`]: builds the linked floor set for each rock
//! - [`hash::ShortHashAllocator`]: collision-free 16-bit short hashes
//! - [`add_implied_faux_floors`]: the whole pass against a [`Host`]
//!
//! [`Host`]: faux_floors_core::Host

mod config;
mod derive;
mod error;
mod floor;
pub mod hash;
mod pipeline;
mod resolver;
mod synth;

pub use config::{FauxFloorsConfig, ShortHashMode, DEFAULT_SATURATION_WARNING};
pub use derive::{derive_blueprint, derive_frame, BLUEPRINT_PREFIX, FRAME_PREFIX};
pub use error::{Error, Result};
pub use floor::{build_floor, FloorKind, BUILD_COST, FLOORS_CATEGORY};
pub use pipeline::{add_implied_faux_floors, GenerationReport};
pub use resolver::{BlocksResolver, MaterialRef, ResolvedVia};
pub use synth::{
    FloorSet, GeneratedFloor, SkipReason, SkippedRock, Synthesis, Synthesizer, ROUGH_DROPDOWN,
    ROUGH_HEWN_DROPDOWN,
};
