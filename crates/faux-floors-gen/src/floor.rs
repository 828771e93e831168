//! Faux stone floor construction
//!
//! Each natural rock gets three floors that look like its natural terrain:
//! rough, rough-hewn and smooth. All three share the common attributes set
//! by [`floor_base`]; [`FloorKind`] holds the fixed per-variant table.

use crate::error::{Error, Result};
use faux_floors_core::stat::{BEAUTY, MARKET_VALUE, WORK_TO_BUILD};
use faux_floors_core::{
    DefId, FilthSourceFlags, TerrainAffordance, TerrainDef, TerrainEdgeType, ThingDef,
    ThingDefCount,
};

/// Blocks needed to build any faux floor
pub const BUILD_COST: u32 = 6;

/// Build menu category the buildable floors are listed under
pub const FLOORS_CATEGORY: &str = "Floors";

const STONECUTTING: &str = "Stonecutting";
const CONSTRUCT_DIRT: &str = "ConstructDirt";
const CONSTRUCTION_SKILL: u32 = 3;
const BUILD_WORK: f32 = 500.0;

/// The three floors generated per rock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloorKind {
    Rough,
    RoughHewn,
    Smooth,
}

impl FloorKind {
    pub const ALL: [FloorKind; 3] = [FloorKind::Rough, FloorKind::RoughHewn, FloorKind::Smooth];

    /// Suffix appended to the rock's name
    pub fn suffix(self) -> &'static str {
        match self {
            FloorKind::Rough => "_RoughFaux",
            FloorKind::RoughHewn => "_RoughHewnFaux",
            FloorKind::Smooth => "_SmoothFaux",
        }
    }

    /// Unique name of this floor for `rock`
    pub fn def_name(self, rock: &DefId) -> DefId {
        rock.with_suffix(self.suffix())
    }

    fn label_prefix(self) -> &'static str {
        match self {
            FloorKind::Rough => "faux rough ",
            FloorKind::RoughHewn => "faux rough-hewn ",
            FloorKind::Smooth => "faux smooth ",
        }
    }

    fn description(self) -> &'static str {
        match self {
            FloorKind::Rough => {
                "Made to mimic ugly natural rock. Since these floors are not made for their beauty, they can be made faster but require slightly more material than regular stone tiles. Can be smoothed."
            }
            FloorKind::RoughHewn => {
                "Made to mimic ugly natural rough-hewn rock. Since these floors are not made for their beauty, they can be made faster but require slightly more material than regular stone tiles. Can be smoothed."
            }
            FloorKind::Smooth => {
                "Originally made to mimic ugly natural rock, this floor has been polished to a shiny, smooth surface."
            }
        }
    }

    fn texture_path(self) -> &'static str {
        match self {
            FloorKind::Rough => "Terrain/Surfaces/RoughStone",
            FloorKind::RoughHewn => "Terrain/Surfaces/RoughHewnRock",
            FloorKind::Smooth => "Terrain/Surfaces/SmoothStone",
        }
    }

    pub fn path_cost(self) -> u32 {
        match self {
            FloorKind::Rough => 2,
            FloorKind::RoughHewn | FloorKind::Smooth => 1,
        }
    }

    fn filth_acceptance(self) -> FilthSourceFlags {
        match self {
            FloorKind::Rough => FilthSourceFlags::TERRAIN | FilthSourceFlags::UNNATURAL,
            FloorKind::RoughHewn | FloorKind::Smooth => FilthSourceFlags::ANY,
        }
    }

    /// Placed from the build menu; smooth floors only come from smoothing
    pub fn buildable(self) -> bool {
        !matches!(self, FloorKind::Smooth)
    }
}

/// Attributes shared by every faux floor
fn floor_base() -> TerrainDef {
    TerrainDef {
        layerable: true,
        affordances: vec![
            TerrainAffordance::Light,
            TerrainAffordance::Medium,
            TerrainAffordance::Heavy,
        ],
        tags: vec!["Floor".to_string()],
        designation_category: Some(DefId::new(FLOORS_CATEGORY)),
        fertility: 0.0,
        construct_effect: Some(DefId::new(CONSTRUCT_DIRT)),
        terrain_affordance_needed: Some(TerrainAffordance::Heavy),
        edge_type: TerrainEdgeType::FadeRough,
        research_prerequisites: vec![DefId::new(STONECUTTING)],
        construction_skill_prerequisite: CONSTRUCTION_SKILL,
        ..TerrainDef::default()
    }
}

/// Build one faux floor of `kind` for `rock`, costing `blocks`
///
/// Cross references (smoothing target, dropdown, blueprint, frame) and the
/// short hash are left for the caller to fill in.
pub fn build_floor(
    kind: FloorKind,
    rock: &ThingDef,
    blocks: &DefId,
    content_pack: Option<&str>,
) -> Result<TerrainDef> {
    if rock.def_name.is_empty() {
        return Err(Error::MissingRockName);
    }
    if !rock.is_natural_rock() {
        return Err(Error::NotNaturalRock(rock.def_name.clone()));
    }

    let mut floor = TerrainDef {
        def_name: kind.def_name(&rock.def_name),
        label: format!("{}{}", kind.label_prefix(), rock.label),
        description: kind.description().to_string(),
        texture_path: kind.texture_path().to_string(),
        path_cost: kind.path_cost(),
        filth_acceptance_mask: kind.filth_acceptance(),
        color: rock.color(),
        mod_content_pack: content_pack
            .map(str::to_string)
            .or_else(|| rock.mod_content_pack.clone()),
        cost_list: vec![ThingDefCount::new(blocks.clone(), BUILD_COST)],
        ..floor_base()
    };

    match kind {
        FloorKind::Rough | FloorKind::RoughHewn => {
            floor.affordances.push(TerrainAffordance::SmoothableStone);
            floor.set_stat_base(WORK_TO_BUILD, BUILD_WORK);
            floor.set_stat_base(BEAUTY, -1.0);
        }
        FloorKind::Smooth => {
            floor.designation_category = None;
            floor.set_stat_base(BEAUTY, 2.0);
            floor.set_stat_base(MARKET_VALUE, 8.0);
        }
    }

    Ok(floor)
}
