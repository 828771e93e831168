//! Host definition database contracts
//!
//! The host owns every definition. This add-on only reads from it through
//! [`DefDatabase`] and hands new definitions back through [`DefRegistrar`].
//! [`MemoryDatabase`] is a self-contained host used by tooling and tests.

use crate::error::{Error, Result};
use crate::hash::{self, short_hash_seed};
use crate::terrain::TerrainDef;
use crate::thing::ThingDef;
use crate::{DefCategory, DefId, ShortHash};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A definition synthesized at load time, ready to be registered
#[derive(Debug, Clone, PartialEq)]
pub enum ImpliedDef {
    Terrain(TerrainDef),
    Thing(ThingDef),
}

impl ImpliedDef {
    pub fn def_name(&self) -> &DefId {
        match self {
            ImpliedDef::Terrain(def) => &def.def_name,
            ImpliedDef::Thing(def) => &def.def_name,
        }
    }

    pub fn category(&self) -> DefCategory {
        match self {
            ImpliedDef::Terrain(_) => DefCategory::Terrain,
            ImpliedDef::Thing(_) => DefCategory::Thing,
        }
    }

    pub fn short_hash(&self) -> ShortHash {
        match self {
            ImpliedDef::Terrain(def) => def.short_hash,
            ImpliedDef::Thing(def) => def.short_hash,
        }
    }

    fn set_short_hash(&mut self, hash: ShortHash) {
        match self {
            ImpliedDef::Terrain(def) => def.short_hash = hash,
            ImpliedDef::Thing(def) => def.short_hash = hash,
        }
    }
}

impl From<TerrainDef> for ImpliedDef {
    fn from(def: TerrainDef) -> Self {
        ImpliedDef::Terrain(def)
    }
}

impl From<ThingDef> for ImpliedDef {
    fn from(def: ThingDef) -> Self {
        ImpliedDef::Thing(def)
    }
}

/// Read-only queries against the host's loaded definitions
///
/// The database is static for the duration of a generation pass.
pub trait DefDatabase {
    /// All thing definitions, in load order
    fn things(&self) -> Box<dyn Iterator<Item = &ThingDef> + '_>;

    fn thing_named(&self, name: &str) -> Option<&ThingDef>;

    fn terrain_named(&self, name: &str) -> Option<&TerrainDef>;

    /// Name of the definition holding `hash` in `category`, if any
    fn def_by_short_hash(&self, category: DefCategory, hash: ShortHash) -> Option<&DefId>;

    fn short_hash_taken(&self, category: DefCategory, hash: ShortHash) -> bool {
        self.def_by_short_hash(category, hash).is_some()
    }

    fn is_registered(&self, category: DefCategory, name: &str) -> bool {
        match category {
            DefCategory::Thing => self.thing_named(name).is_some(),
            DefCategory::Terrain => self.terrain_named(name).is_some(),
        }
    }

    /// The host's stable string hash (see [`hash::stable_string_hash`])
    fn stable_string_hash(&self, text: &str) -> i32 {
        hash::stable_string_hash(text)
    }

    /// Localized text for a translation key
    fn translate(&self, key: &str) -> String;
}

/// Write side of the host database
pub trait DefRegistrar {
    /// Register a definition synthesized at load time
    fn add_implied_def(&mut self, def: ImpliedDef) -> Result<()>;

    /// Resolve name references held by a designation category and the
    /// defs listed under it. Sibling defs must already be registered.
    fn resolve_references(&mut self, designation_category: &DefId);

    /// Drop cached per-terrain wealth data so new floors get a market value
    fn reset_wealth_static_data(&mut self);
}

/// A full host: queryable and accepting registrations
pub trait Host: DefDatabase + DefRegistrar {}

impl<T: DefDatabase + DefRegistrar + ?Sized> Host for T {}

/// In-memory host database
///
/// Definitions inserted with a zero short hash get one assigned the way the
/// host assigns them. Registration order, resolve calls and wealth resets
/// are recorded for inspection.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    things: IndexMap<DefId, ThingDef>,
    terrains: IndexMap<DefId, TerrainDef>,
    short_hashes: HashMap<(DefCategory, ShortHash), DefId>,
    translations: HashMap<String, String>,
    implied: Vec<(DefCategory, DefId)>,
    resolved: Vec<DefId>,
    wealth_resets: usize,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an authored thing definition
    pub fn insert_thing(&mut self, mut def: ThingDef) -> Result<ShortHash> {
        if self.things.contains_key(&def.def_name) {
            return Err(Error::DuplicateDefinition {
                category: DefCategory::Thing,
                name: def.def_name,
            });
        }
        def.short_hash = self.claim_short_hash(DefCategory::Thing, &def.def_name, def.short_hash)?;
        let hash = def.short_hash;
        self.things.insert(def.def_name.clone(), def);
        Ok(hash)
    }

    /// Add an authored terrain definition
    pub fn insert_terrain(&mut self, mut def: TerrainDef) -> Result<ShortHash> {
        if self.terrains.contains_key(&def.def_name) {
            return Err(Error::DuplicateDefinition {
                category: DefCategory::Terrain,
                name: def.def_name,
            });
        }
        def.short_hash =
            self.claim_short_hash(DefCategory::Terrain, &def.def_name, def.short_hash)?;
        let hash = def.short_hash;
        self.terrains.insert(def.def_name.clone(), def);
        Ok(hash)
    }

    pub fn add_translation(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.translations.insert(key.into(), text.into());
    }

    pub fn terrains(&self) -> impl Iterator<Item = &TerrainDef> {
        self.terrains.values()
    }

    /// Implied defs in the order they were registered
    pub fn implied_defs(&self) -> &[(DefCategory, DefId)] {
        &self.implied
    }

    /// Designation categories passed to `resolve_references`, in call order
    pub fn resolved_categories(&self) -> &[DefId] {
        &self.resolved
    }

    pub fn wealth_resets(&self) -> usize {
        self.wealth_resets
    }

    pub fn thing_count(&self) -> usize {
        self.things.len()
    }

    pub fn terrain_count(&self) -> usize {
        self.terrains.len()
    }

    /// Reserve `requested`, or pick a free hash when it is zero
    fn claim_short_hash(
        &mut self,
        category: DefCategory,
        name: &DefId,
        requested: ShortHash,
    ) -> Result<ShortHash> {
        let hash = if requested == 0 {
            self.free_short_hash(category, name)?
        } else {
            if let Some(existing) = self.short_hashes.get(&(category, requested)) {
                return Err(Error::ShortHashTaken {
                    category,
                    name: name.clone(),
                    hash: requested,
                    existing: existing.clone(),
                });
            }
            requested
        };
        self.short_hashes.insert((category, hash), name.clone());
        Ok(hash)
    }

    /// Linear probe upwards from the name's seed, skipping zero
    fn free_short_hash(&self, category: DefCategory, name: &DefId) -> Result<ShortHash> {
        let mut candidate = short_hash_seed(self.stable_string_hash(name.as_str()));
        for _ in 0..=u16::MAX as u32 {
            if candidate != 0 && !self.short_hashes.contains_key(&(category, candidate)) {
                return Ok(candidate);
            }
            candidate = candidate.wrapping_add(1);
        }
        Err(Error::ShortHashesExhausted(category))
    }
}

impl DefDatabase for MemoryDatabase {
    fn things(&self) -> Box<dyn Iterator<Item = &ThingDef> + '_> {
        Box::new(self.things.values())
    }

    fn thing_named(&self, name: &str) -> Option<&ThingDef> {
        self.things.get(name)
    }

    fn terrain_named(&self, name: &str) -> Option<&TerrainDef> {
        self.terrains.get(name)
    }

    fn def_by_short_hash(&self, category: DefCategory, hash: ShortHash) -> Option<&DefId> {
        self.short_hashes.get(&(category, hash))
    }

    fn translate(&self, key: &str) -> String {
        // The host falls back to the raw key for missing translations
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

impl DefRegistrar for MemoryDatabase {
    fn add_implied_def(&mut self, def: ImpliedDef) -> Result<()> {
        let category = def.category();
        let name = def.def_name().clone();
        if self.is_registered(category, name.as_str()) {
            return Err(Error::DuplicateDefinition { category, name });
        }

        let mut def = def;
        let hash = self.claim_short_hash(category, &name, def.short_hash())?;
        def.set_short_hash(hash);
        match def {
            ImpliedDef::Terrain(def) => {
                self.terrains.insert(name.clone(), def);
            }
            ImpliedDef::Thing(def) => {
                self.things.insert(name.clone(), def);
            }
        }
        self.implied.push((category, name));
        Ok(())
    }

    fn resolve_references(&mut self, designation_category: &DefId) {
        self.resolved.push(designation_category.clone());
    }

    fn reset_wealth_static_data(&mut self) {
        self.wealth_resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut db = MemoryDatabase::new();
        let hash = db.insert_thing(ThingDef::new("BlocksGranite")).unwrap();
        assert_ne!(hash, 0);
        assert!(db.thing_named("BlocksGranite").is_some());
        assert!(db.is_registered(DefCategory::Thing, "BlocksGranite"));
        assert!(!db.is_registered(DefCategory::Terrain, "BlocksGranite"));
        assert_eq!(
            db.def_by_short_hash(DefCategory::Thing, hash),
            Some(&DefId::new("BlocksGranite"))
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut db = MemoryDatabase::new();
        db.insert_thing(ThingDef::new("Granite")).unwrap();
        let err = db.insert_thing(ThingDef::new("Granite")).unwrap_err();
        assert!(matches!(err, Error::DuplicateDefinition { .. }));
    }

    #[test]
    fn test_explicit_hash_conflict_rejected() {
        let mut db = MemoryDatabase::new();
        db.insert_thing(ThingDef {
            short_hash: 7,
            ..ThingDef::new("Granite")
        })
        .unwrap();
        let err = db
            .insert_thing(ThingDef {
                short_hash: 7,
                ..ThingDef::new("Marble")
            })
            .unwrap_err();
        assert!(matches!(err, Error::ShortHashTaken { hash: 7, .. }));
    }

    #[test]
    fn test_categories_have_separate_hash_spaces() {
        let mut db = MemoryDatabase::new();
        db.insert_thing(ThingDef {
            short_hash: 7,
            ..ThingDef::new("Granite")
        })
        .unwrap();
        db.insert_terrain(TerrainDef {
            short_hash: 7,
            ..TerrainDef::new("Granite_Rough")
        })
        .unwrap();
        assert!(db.short_hash_taken(DefCategory::Thing, 7));
        assert!(db.short_hash_taken(DefCategory::Terrain, 7));
    }

    #[test]
    fn test_host_assigned_hash_probes_past_collision() {
        let mut db = MemoryDatabase::new();
        let seed = short_hash_seed(hash::stable_string_hash("Granite"));
        db.insert_thing(ThingDef {
            short_hash: seed,
            ..ThingDef::new("Squatter")
        })
        .unwrap();
        let hash = db.insert_thing(ThingDef::new("Granite")).unwrap();
        assert_eq!(hash, seed + 1);
    }

    #[test]
    fn test_implied_defs_recorded_in_order() {
        let mut db = MemoryDatabase::new();
        db.add_implied_def(TerrainDef::new("Granite_RoughFaux").into())
            .unwrap();
        db.add_implied_def(ThingDef::new("Blueprint_Granite_RoughFaux").into())
            .unwrap();
        db.resolve_references(&DefId::new("Floors"));
        db.reset_wealth_static_data();

        assert_eq!(
            db.implied_defs(),
            &[
                (DefCategory::Terrain, DefId::new("Granite_RoughFaux")),
                (DefCategory::Thing, DefId::new("Blueprint_Granite_RoughFaux")),
            ]
        );
        assert_eq!(db.resolved_categories(), &[DefId::new("Floors")]);
        assert_eq!(db.wealth_resets(), 1);
        assert_ne!(db.terrain_named("Granite_RoughFaux").unwrap().short_hash, 0);
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let mut db = MemoryDatabase::new();
        db.add_translation("BlueprintLabelExtra", " (blueprint)");
        assert_eq!(db.translate("BlueprintLabelExtra"), " (blueprint)");
        assert_eq!(db.translate("FrameLabelExtra"), "FrameLabelExtra");
    }
}
