//! Content file schema
//!
//! One RON file may carry any mix of thing defs, terrain defs and
//! translation keys. Missing sections default to empty.

use faux_floors_core::{TerrainDef, ThingDef};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A host content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub things: Vec<ThingDef>,
    #[serde(default)]
    pub terrains: Vec<TerrainDef>,
    /// Translation key to localized text
    #[serde(default)]
    pub translations: IndexMap<String, String>,
}

impl ContentFile {
    pub fn is_empty(&self) -> bool {
        self.things.is_empty() && self.terrains.is_empty() && self.translations.is_empty()
    }
}
