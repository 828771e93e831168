//! Thing definitions: rocks, stone blocks, blueprints and frames

use crate::graphic::{Color, GraphicData};
use crate::stat::StatModifier;
use crate::{DefId, ShortHash};
use serde::{Deserialize, Serialize};

/// Thing category that stone-block materials belong to
pub const STONE_BLOCKS: &str = "StoneBlocks";

/// Broad kind of a thing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThingCategory {
    #[default]
    Item,
    Building,
    Plant,
    /// Not a physical object (blueprints, frames, designations)
    Ethereal,
}

/// Drawing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AltitudeLayer {
    Terrain,
    Floor,
    #[default]
    Item,
    Building,
    Blueprint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Traversability {
    #[default]
    Standable,
    PassThroughOnly,
    Impassable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawerType {
    #[default]
    MapMeshOnly,
    RealtimeOnly,
    MapMeshAndRealTime,
}

/// Component attached to a thing def
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompProperties {
    Forbiddable,
    Other(String),
}

/// Building-specific properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingProperties {
    pub is_natural_rock: bool,
    pub is_resource_rock: bool,
    pub is_edifice: bool,
    pub artificial_for_meditation_purposes: bool,
}

impl Default for BuildingProperties {
    fn default() -> Self {
        Self {
            is_natural_rock: false,
            is_resource_rock: false,
            is_edifice: true,
            artificial_for_meditation_purposes: true,
        }
    }
}

/// A quantity of some thing, used for costs and byproducts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThingDefCount {
    pub thing_def: DefId,
    pub count: u32,
}

impl ThingDefCount {
    pub fn new(thing_def: impl Into<DefId>, count: u32) -> Self {
        Self {
            thing_def: thing_def.into(),
            count,
        }
    }
}

/// Host thing definition
///
/// Only the attributes this add-on reads or writes are modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThingDef {
    pub def_name: DefId,
    pub label: String,
    pub description: String,
    pub short_hash: ShortHash,
    pub category: ThingCategory,
    /// Host class instantiated for this def, e.g. `Frame`
    pub thing_class: String,
    pub thing_categories: Vec<DefId>,
    pub graphic_data: Option<GraphicData>,
    pub building: Option<BuildingProperties>,
    /// Things produced when this thing is cut up
    pub butcher_products: Vec<ThingDefCount>,
    pub mod_content_pack: Option<String>,
    pub altitude_layer: AltitudeLayer,
    pub use_hit_points: bool,
    pub selectable: bool,
    pub see_through_fog: bool,
    pub clear_building_area: bool,
    pub scatterable_on_map_gen: bool,
    pub leave_resources_when_killed: bool,
    pub fill_percent: f32,
    pub passability: Traversability,
    pub drawer_type: DrawerType,
    pub construct_effect: Option<DefId>,
    pub construction_skill_prerequisite: u32,
    pub artistic_skill_prerequisite: u32,
    /// Def this blueprint or frame turns into once built
    pub entity_def_to_build: Option<DefId>,
    pub comps: Vec<CompProperties>,
    pub stat_bases: Vec<StatModifier>,
    #[serde(rename = "is_frame")]
    pub is_frame_int: bool,
}

impl Default for ThingDef {
    fn default() -> Self {
        Self {
            def_name: DefId::new(""),
            label: String::new(),
            description: String::new(),
            short_hash: 0,
            category: ThingCategory::Item,
            thing_class: "Thing".to_string(),
            thing_categories: Vec::new(),
            graphic_data: None,
            building: None,
            butcher_products: Vec::new(),
            mod_content_pack: None,
            altitude_layer: AltitudeLayer::Item,
            use_hit_points: true,
            selectable: false,
            see_through_fog: false,
            clear_building_area: true,
            scatterable_on_map_gen: true,
            leave_resources_when_killed: false,
            fill_percent: 0.0,
            passability: Traversability::Standable,
            drawer_type: DrawerType::MapMeshOnly,
            construct_effect: None,
            construction_skill_prerequisite: 0,
            artistic_skill_prerequisite: 0,
            entity_def_to_build: None,
            comps: Vec::new(),
            stat_bases: Vec::new(),
            is_frame_int: false,
        }
    }
}

impl ThingDef {
    /// Create a def with the given name and host defaults for everything else
    pub fn new(def_name: impl Into<DefId>) -> Self {
        Self {
            def_name: def_name.into(),
            ..Self::default()
        }
    }

    /// Naturally occurring rock that is not itself a minable resource
    pub fn is_natural_rock(&self) -> bool {
        self.building
            .as_ref()
            .is_some_and(|b| b.is_natural_rock && !b.is_resource_rock)
    }

    /// Whether this thing is listed in the given thing category
    pub fn in_category(&self, category: &str) -> bool {
        self.thing_categories.iter().any(|c| c == category)
    }

    /// Frame marker, as read back by the host's construction logic
    pub fn is_frame(&self) -> bool {
        self.is_frame_int
    }

    /// Base color of the def's graphic (white when it has none)
    pub fn color(&self) -> Color {
        self.graphic_data
            .as_ref()
            .map(|g| g.color)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock(natural: bool, resource: bool) -> ThingDef {
        ThingDef {
            building: Some(BuildingProperties {
                is_natural_rock: natural,
                is_resource_rock: resource,
                ..Default::default()
            }),
            ..ThingDef::new("Granite")
        }
    }

    #[test]
    fn test_natural_rock_predicate() {
        assert!(rock(true, false).is_natural_rock());
        assert!(!rock(true, true).is_natural_rock());
        assert!(!rock(false, false).is_natural_rock());
        assert!(!ThingDef::new("BlocksGranite").is_natural_rock());
    }

    #[test]
    fn test_thing_def_ron_defaults() {
        let def: ThingDef = ron::from_str(
            r#"(
                def_name: "BlocksGranite",
                label: "granite blocks",
                thing_categories: ["StoneBlocks"],
            )"#,
        )
        .unwrap();
        assert!(def.in_category(STONE_BLOCKS));
        assert!(def.use_hit_points);
        assert!(!def.is_frame());
        assert_eq!(def.color(), Color::WHITE);
    }
}
