//! Identity types for host definitions

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Compact 16-bit identifier the host uses to serialize definition references.
///
/// Zero is reserved for "unassigned".
pub type ShortHash = u16;

/// Unique name of a host definition (`defName` on the host side)
///
/// Names are unique within the host database, so every name derived from
/// one by appending a fixed suffix is unique as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefId(pub String);

impl DefId {
    /// Create a new definition ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty (never valid for a registered def)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Derive a new name by appending `suffix`
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self(format!("{}{}", self.0, suffix))
    }

    /// Derive a new name by prepending `prefix`
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self(format!("{}{}", prefix, self.0))
    }
}

impl fmt::Display for DefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DefId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DefId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for DefId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DefId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DefId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The host keeps a separate database, and a separate short-hash space,
/// per definition type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DefCategory {
    /// Items, buildings, blueprints and frames
    Thing,
    /// Floors and natural terrain
    Terrain,
}

impl fmt::Display for DefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefCategory::Thing => write!(f, "ThingDef"),
            DefCategory::Terrain => write!(f, "TerrainDef"),
        }
    }
}
