//! Terrain definitions and the UI groupings floors are listed under

use crate::graphic::Color;
use crate::stat::{self, StatModifier};
use crate::thing::ThingDefCount;
use crate::{DefId, ShortHash};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainAffordance {
    Light,
    Medium,
    Heavy,
    SmoothableStone,
}

/// How a terrain blends into its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TerrainEdgeType {
    #[default]
    Hard,
    Fade,
    FadeRough,
    Water,
}

bitflags! {
    /// Sources of filth a terrain accepts
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FilthSourceFlags: u8 {
        const TERRAIN = 1;
        const NATURAL = 1 << 1;
        const UNNATURAL = 1 << 2;
        const PAWN = 1 << 3;
        const ANY = Self::TERRAIN.bits() | Self::NATURAL.bits() | Self::UNNATURAL.bits() | Self::PAWN.bits();
    }
}

impl Default for FilthSourceFlags {
    fn default() -> Self {
        FilthSourceFlags::ANY
    }
}

/// Dropdown that collapses several build designators into one UI button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignatorDropdownGroupDef {
    pub def_name: DefId,
    pub label: String,
    /// Synthesized at load time rather than authored
    pub generated: bool,
}

/// Host terrain definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainDef {
    pub def_name: DefId,
    pub label: String,
    pub description: String,
    pub short_hash: ShortHash,
    pub texture_path: String,
    pub edge_type: TerrainEdgeType,
    pub color: Color,
    pub path_cost: u32,
    pub fertility: f32,
    pub layerable: bool,
    pub affordances: Vec<TerrainAffordance>,
    pub terrain_affordance_needed: Option<TerrainAffordance>,
    pub tags: Vec<String>,
    /// Build menu category; `None` means players cannot place it directly
    pub designation_category: Option<DefId>,
    /// Shared between all floors of the same kind
    #[serde(skip)]
    pub designator_dropdown: Option<Rc<DesignatorDropdownGroupDef>>,
    pub construct_effect: Option<DefId>,
    pub filth_acceptance_mask: FilthSourceFlags,
    pub research_prerequisites: Vec<DefId>,
    pub construction_skill_prerequisite: u32,
    pub artistic_skill_prerequisite: u32,
    pub mod_content_pack: Option<String>,
    pub cost_list: Vec<ThingDefCount>,
    pub stat_bases: Vec<StatModifier>,
    /// Terrain this one becomes when smoothed
    pub smoothed_terrain: Option<DefId>,
    pub blueprint_def: Option<DefId>,
    pub frame_def: Option<DefId>,
}

impl Default for TerrainDef {
    fn default() -> Self {
        Self {
            def_name: DefId::new(""),
            label: String::new(),
            description: String::new(),
            short_hash: 0,
            texture_path: String::new(),
            edge_type: TerrainEdgeType::Hard,
            color: Color::WHITE,
            path_cost: 0,
            fertility: 1.0,
            layerable: false,
            affordances: Vec::new(),
            terrain_affordance_needed: None,
            tags: Vec::new(),
            designation_category: None,
            designator_dropdown: None,
            construct_effect: None,
            filth_acceptance_mask: FilthSourceFlags::ANY,
            research_prerequisites: Vec::new(),
            construction_skill_prerequisite: 0,
            artistic_skill_prerequisite: 0,
            mod_content_pack: None,
            cost_list: Vec::new(),
            stat_bases: Vec::new(),
            smoothed_terrain: None,
            blueprint_def: None,
            frame_def: None,
        }
    }
}

impl TerrainDef {
    pub fn new(def_name: impl Into<DefId>) -> Self {
        Self {
            def_name: def_name.into(),
            ..Self::default()
        }
    }

    /// Players can place this terrain from the build menu
    pub fn buildable_by_player(&self) -> bool {
        self.designation_category.is_some()
    }

    pub fn stat_base(&self, stat: &str) -> Option<f32> {
        stat::stat_value(&self.stat_bases, stat)
    }

    pub fn set_stat_base(&mut self, stat: &str, value: f32) {
        stat::set_stat_value(&mut self.stat_bases, stat, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buildable_follows_designation_category() {
        let mut def = TerrainDef::new("Granite_RoughFaux");
        assert!(!def.buildable_by_player());
        def.designation_category = Some(DefId::new("Floors"));
        assert!(def.buildable_by_player());
    }

    #[test]
    fn test_filth_any_covers_all_sources() {
        let rough = FilthSourceFlags::TERRAIN | FilthSourceFlags::UNNATURAL;
        assert!(FilthSourceFlags::ANY.contains(rough));
        assert!(!rough.contains(FilthSourceFlags::PAWN));
    }

    #[test]
    fn test_stat_bases() {
        let mut def = TerrainDef::new("Granite_SmoothFaux");
        def.set_stat_base(stat::BEAUTY, 2.0);
        def.set_stat_base(stat::MARKET_VALUE, 8.0);
        assert_eq!(def.stat_base(stat::BEAUTY), Some(2.0));
        assert_eq!(def.stat_base(stat::MARKET_VALUE), Some(8.0));
        assert_eq!(def.stat_base(stat::WORK_TO_BUILD), None);
    }
}
