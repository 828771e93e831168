//! Floor synthesis
//!
//! Walks the host's natural rocks and builds a linked floor set for each
//! one: rough and rough-hewn floors that smooth into the smooth floor, the
//! blueprint and frame of both buildable floors, and their short hashes
//! when allocation happens inline.

use crate::config::{FauxFloorsConfig, ShortHashMode};
use crate::derive::{derive_blueprint, derive_frame};
use crate::error::{Error, Result};
use crate::floor::{build_floor, FloorKind};
use crate::hash::ShortHashAllocator;
use crate::resolver::{BlocksResolver, MaterialRef};
use faux_floors_core::{
    DefCategory, DefDatabase, DefId, DesignatorDropdownGroupDef, ImpliedDef, ShortHash, TerrainDef,
    ThingDef,
};
use std::fmt;
use std::rc::Rc;

pub const ROUGH_DROPDOWN: &str = "FloorRoughStoneFaux";
pub const ROUGH_HEWN_DROPDOWN: &str = "FloorRoughHewnStoneFaux";

/// One generated floor with the defs it owns
#[derive(Debug, Clone)]
pub struct GeneratedFloor {
    pub terrain: TerrainDef,
    pub blueprint: Option<ThingDef>,
    pub frame: Option<ThingDef>,
}

impl GeneratedFloor {
    /// Defs in registration order: the floor before its blueprint and frame
    pub fn into_implied_defs(self) -> impl Iterator<Item = ImpliedDef> {
        std::iter::once(ImpliedDef::from(self.terrain))
            .chain(self.blueprint.map(ImpliedDef::from))
            .chain(self.frame.map(ImpliedDef::from))
    }
}

/// The three floors generated for one rock
#[derive(Debug, Clone)]
pub struct FloorSet {
    pub rock: DefId,
    pub material: MaterialRef,
    pub rough: GeneratedFloor,
    pub rough_hewn: GeneratedFloor,
    pub smooth: GeneratedFloor,
}

impl FloorSet {
    pub fn floors(&self) -> [&GeneratedFloor; 3] {
        [&self.rough, &self.rough_hewn, &self.smooth]
    }

    pub fn into_implied_defs(self) -> impl Iterator<Item = ImpliedDef> {
        self.rough
            .into_implied_defs()
            .chain(self.rough_hewn.into_implied_defs())
            .chain(self.smooth.into_implied_defs())
    }
}

/// Why a natural rock got no floors
#[derive(Debug)]
pub enum SkipReason {
    /// Its floors are already registered in the host
    AlreadyGenerated,
    Failed(Error),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyGenerated => write!(f, "floors already registered"),
            SkipReason::Failed(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug)]
pub struct SkippedRock {
    pub rock: DefId,
    pub reason: SkipReason,
}

/// Outcome of one synthesis pass
#[derive(Debug, Default)]
pub struct Synthesis {
    /// Floor sets in rock load order
    pub sets: Vec<FloorSet>,
    pub skipped: Vec<SkippedRock>,
    /// Natural rocks on the ignore list
    pub ignored: usize,
    /// Natural rocks seen, ignored ones included
    pub considered: usize,
}

impl Synthesis {
    pub fn def_count(&self) -> usize {
        self.sets
            .iter()
            .flat_map(FloorSet::floors)
            .map(|floor| 1 + usize::from(floor.blueprint.is_some()) + usize::from(floor.frame.is_some()))
            .sum()
    }
}

/// Builds floor sets for one pass
///
/// Dropdown groups and the short-hash allocator live exactly as long as the
/// synthesizer, and [`Synthesizer::synthesize`] consumes it.
pub struct Synthesizer<'a> {
    config: &'a FauxFloorsConfig,
    resolver: BlocksResolver<'a>,
    rough_dropdown: Rc<DesignatorDropdownGroupDef>,
    rough_hewn_dropdown: Rc<DesignatorDropdownGroupDef>,
    allocator: Option<ShortHashAllocator>,
}

impl<'a> Synthesizer<'a> {
    pub fn new(config: &'a FauxFloorsConfig) -> Self {
        let allocator = match config.short_hashes() {
            ShortHashMode::Inline => Some(ShortHashAllocator::with_warning_after(
                config.saturation_warning_after(),
            )),
            ShortHashMode::Host => None,
        };

        Self {
            config,
            resolver: BlocksResolver::new(config),
            rough_dropdown: dropdown(ROUGH_DROPDOWN, "faux rough floor"),
            rough_hewn_dropdown: dropdown(ROUGH_HEWN_DROPDOWN, "faux rough-hewn floor"),
            allocator,
        }
    }

    /// Generate floors for every eligible rock in `db`
    ///
    /// A rock that fails is recorded in [`Synthesis::skipped`] and the pass
    /// carries on.
    pub fn synthesize<D: DefDatabase + ?Sized>(mut self, db: &D) -> Synthesis {
        let mut synthesis = Synthesis::default();

        for rock in db.things().filter(|thing| thing.is_natural_rock()) {
            synthesis.considered += 1;

            if self.config.is_ignored(rock.def_name.as_str()) {
                synthesis.ignored += 1;
                continue;
            }

            let rough_name = FloorKind::Rough.def_name(&rock.def_name);
            if db.is_registered(DefCategory::Terrain, rough_name.as_str()) {
                log::debug!(
                    "[FauxStoneFloors] {} already registered, skipping {}",
                    rough_name,
                    rock.def_name
                );
                synthesis.skipped.push(SkippedRock {
                    rock: rock.def_name.clone(),
                    reason: SkipReason::AlreadyGenerated,
                });
                continue;
            }

            log::debug!("[FauxStoneFloors] Generating floors for {}", rock.def_name);
            match self.synthesize_rock(db, rock) {
                Ok(set) => synthesis.sets.push(set),
                Err(e) => {
                    log::warn!(
                        "[FauxStoneFloors] Skipping {}: {}",
                        display_name(&rock.def_name),
                        e
                    );
                    synthesis.skipped.push(SkippedRock {
                        rock: rock.def_name.clone(),
                        reason: SkipReason::Failed(e),
                    });
                }
            }
        }

        synthesis
    }

    fn synthesize_rock<D: DefDatabase + ?Sized>(
        &mut self,
        db: &D,
        rock: &ThingDef,
    ) -> Result<FloorSet> {
        let material = self
            .resolver
            .resolve(db, rock)?
            .ok_or_else(|| Error::NoBlocks(rock.def_name.clone()))?;

        let rough = self.generate_floor(db, FloorKind::Rough, rock, &material.blocks)?;
        let rough_hewn = self.generate_floor(db, FloorKind::RoughHewn, rock, &material.blocks)?;
        let smooth = self.generate_floor(db, FloorKind::Smooth, rock, &material.blocks)?;

        Ok(FloorSet {
            rock: rock.def_name.clone(),
            material,
            rough,
            rough_hewn,
            smooth,
        })
    }

    fn generate_floor<D: DefDatabase + ?Sized>(
        &mut self,
        db: &D,
        kind: FloorKind,
        rock: &ThingDef,
        blocks: &DefId,
    ) -> Result<GeneratedFloor> {
        let mut terrain = build_floor(kind, rock, blocks, self.config.content_pack())?;
        let dropdown = match kind {
            FloorKind::Rough => Some(Rc::clone(&self.rough_dropdown)),
            FloorKind::RoughHewn => Some(Rc::clone(&self.rough_hewn_dropdown)),
            FloorKind::Smooth => None,
        };

        let mut floor = GeneratedFloor {
            terrain: TerrainDef::default(),
            blueprint: None,
            frame: None,
        };

        if kind.buildable() {
            terrain.smoothed_terrain = Some(FloorKind::Smooth.def_name(&rock.def_name));
            terrain.designator_dropdown = dropdown;

            let mut blueprint = derive_blueprint(&terrain, db);
            blueprint.short_hash = self.short_hash(db, DefCategory::Thing, &blueprint.def_name)?;
            let mut frame = derive_frame(&terrain, db);
            frame.short_hash = self.short_hash(db, DefCategory::Thing, &frame.def_name)?;

            terrain.blueprint_def = Some(blueprint.def_name.clone());
            terrain.frame_def = Some(frame.def_name.clone());
            floor.blueprint = Some(blueprint);
            floor.frame = Some(frame);
        }

        terrain.short_hash = self.short_hash(db, DefCategory::Terrain, &terrain.def_name)?;
        floor.terrain = terrain;
        Ok(floor)
    }

    /// Hash for a new def, or 0 when the host assigns it
    fn short_hash<D: DefDatabase + ?Sized>(
        &mut self,
        db: &D,
        category: DefCategory,
        name: &DefId,
    ) -> Result<ShortHash> {
        match self.allocator.as_mut() {
            Some(allocator) => Ok(allocator.allocate(db, category, name)?),
            None => Ok(0),
        }
    }
}

fn dropdown(name: &str, label: &str) -> Rc<DesignatorDropdownGroupDef> {
    Rc::new(DesignatorDropdownGroupDef {
        def_name: DefId::new(name),
        label: label.to_string(),
        generated: true,
    })
}

fn display_name(name: &DefId) -> &str {
    if name.is_empty() {
        "<unnamed rock>"
    } else {
        name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faux_floors_core::{
        BuildingProperties, Color, GraphicData, MemoryDatabase, TerrainDef, STONE_BLOCKS,
    };
    use std::collections::HashSet;

    fn rock(name: &str, color: Color) -> ThingDef {
        ThingDef {
            label: name.to_lowercase(),
            building: Some(BuildingProperties {
                is_natural_rock: true,
                ..Default::default()
            }),
            graphic_data: Some(GraphicData {
                color,
                ..Default::default()
            }),
            ..ThingDef::new(name)
        }
    }

    fn blocks(name: &str) -> ThingDef {
        ThingDef {
            thing_categories: vec![DefId::new(STONE_BLOCKS)],
            ..ThingDef::new(name)
        }
    }

    fn quarry() -> MemoryDatabase {
        let mut db = MemoryDatabase::new();
        db.insert_thing(rock("Granite", Color::rgb(0.41, 0.4, 0.38))).unwrap();
        db.insert_thing(rock("Marble", Color::rgb(0.62, 0.6, 0.58))).unwrap();
        db.insert_thing(blocks("BlocksGranite")).unwrap();
        db.insert_thing(blocks("BlocksMarble")).unwrap();
        db
    }

    fn run(db: &MemoryDatabase, config: &FauxFloorsConfig) -> Synthesis {
        Synthesizer::new(config).synthesize(db)
    }

    #[test]
    fn test_one_set_per_rock() {
        let db = quarry();
        let synthesis = run(&db, &FauxFloorsConfig::default());

        assert_eq!(synthesis.considered, 2);
        assert_eq!(synthesis.ignored, 0);
        assert!(synthesis.skipped.is_empty());
        assert_eq!(synthesis.sets.len(), 2);
        // 2 buildable floors with blueprint and frame, plus the smooth floor
        assert_eq!(synthesis.def_count(), 2 * 7);

        let granite = &synthesis.sets[0];
        assert_eq!(granite.rock, "Granite");
        assert_eq!(granite.rough.terrain.def_name, "Granite_RoughFaux");
        assert_eq!(granite.rough_hewn.terrain.def_name, "Granite_RoughHewnFaux");
        assert_eq!(granite.smooth.terrain.def_name, "Granite_SmoothFaux");
    }

    #[test]
    fn test_set_shares_material_and_color() {
        let db = quarry();
        let synthesis = run(&db, &FauxFloorsConfig::default());

        for set in &synthesis.sets {
            let expected_blocks = set.rock.with_prefix("Blocks");
            let color = db.thing_named(set.rock.as_str()).unwrap().color();
            for floor in set.floors() {
                assert_eq!(floor.terrain.cost_list.len(), 1);
                assert_eq!(floor.terrain.cost_list[0].thing_def, expected_blocks);
                assert_eq!(floor.terrain.cost_list[0].count, 6);
                assert_eq!(floor.terrain.color, color);
            }
        }
    }

    #[test]
    fn test_smooths_into_same_rock() {
        let db = quarry();
        let synthesis = run(&db, &FauxFloorsConfig::default());

        for set in &synthesis.sets {
            let smooth = &set.smooth.terrain.def_name;
            assert_eq!(set.rough.terrain.smoothed_terrain.as_ref(), Some(smooth));
            assert_eq!(set.rough_hewn.terrain.smoothed_terrain.as_ref(), Some(smooth));
            assert_eq!(set.smooth.terrain.smoothed_terrain, None);
        }
    }

    #[test]
    fn test_dropdowns_shared_across_rocks() {
        let db = quarry();
        let synthesis = run(&db, &FauxFloorsConfig::default());
        let (granite, marble) = (&synthesis.sets[0], &synthesis.sets[1]);

        let rough = granite.rough.terrain.designator_dropdown.as_ref().unwrap();
        let rough_hewn = granite.rough_hewn.terrain.designator_dropdown.as_ref().unwrap();
        assert!(Rc::ptr_eq(
            rough,
            marble.rough.terrain.designator_dropdown.as_ref().unwrap()
        ));
        assert!(Rc::ptr_eq(
            rough_hewn,
            marble.rough_hewn.terrain.designator_dropdown.as_ref().unwrap()
        ));
        assert!(!Rc::ptr_eq(rough, rough_hewn));

        assert_eq!(rough.def_name, ROUGH_DROPDOWN);
        assert_eq!(rough.label, "faux rough floor");
        assert!(rough.generated);
        assert_eq!(rough_hewn.def_name, ROUGH_HEWN_DROPDOWN);
        assert_eq!(rough_hewn.label, "faux rough-hewn floor");
        assert!(granite.smooth.terrain.designator_dropdown.is_none());
        assert!(marble.smooth.terrain.designator_dropdown.is_none());
    }

    #[test]
    fn test_buildable_floors_own_blueprint_and_frame() {
        let db = quarry();
        let synthesis = run(&db, &FauxFloorsConfig::default());
        let granite = &synthesis.sets[0];

        for floor in [&granite.rough, &granite.rough_hewn] {
            let blueprint = floor.blueprint.as_ref().unwrap();
            let frame = floor.frame.as_ref().unwrap();
            assert_eq!(floor.terrain.blueprint_def.as_ref(), Some(&blueprint.def_name));
            assert_eq!(floor.terrain.frame_def.as_ref(), Some(&frame.def_name));
            assert_eq!(blueprint.entity_def_to_build.as_ref(), Some(&floor.terrain.def_name));
            assert_eq!(frame.entity_def_to_build.as_ref(), Some(&floor.terrain.def_name));
        }
        assert!(granite.smooth.blueprint.is_none());
        assert!(granite.smooth.frame.is_none());
        assert_eq!(granite.smooth.terrain.blueprint_def, None);
    }

    #[test]
    fn test_implied_def_order() {
        let db = quarry();
        let mut synthesis = run(&db, &FauxFloorsConfig::default());
        let names: Vec<_> = synthesis
            .sets
            .remove(0)
            .into_implied_defs()
            .map(|def| def.def_name().to_string())
            .collect();

        assert_eq!(
            names,
            [
                "Granite_RoughFaux",
                "Blueprint_Granite_RoughFaux",
                "Frame_Granite_RoughFaux",
                "Granite_RoughHewnFaux",
                "Blueprint_Granite_RoughHewnFaux",
                "Frame_Granite_RoughHewnFaux",
                "Granite_SmoothFaux",
            ]
        );
    }

    #[test]
    fn test_inline_hashes_unique_and_nonzero() {
        let mut db = quarry();
        // Squat on the seed of one generated terrain
        db.insert_terrain(TerrainDef {
            short_hash: 32919,
            ..TerrainDef::new("Squatter")
        })
        .unwrap();
        let synthesis = run(&db, &FauxFloorsConfig::default());

        let mut seen = HashSet::new();
        for def in synthesis.sets.into_iter().flat_map(FloorSet::into_implied_defs) {
            let hash = def.short_hash();
            assert_ne!(hash, 0);
            assert!(!db.short_hash_taken(def.category(), hash), "{}", def.def_name());
            assert!(seen.insert((def.category(), hash)), "{}", def.def_name());
        }
    }

    #[test]
    fn test_known_hash_values() {
        let db = quarry();
        let synthesis = run(&db, &FauxFloorsConfig::default());
        let granite = &synthesis.sets[0];

        assert_eq!(granite.rough.terrain.short_hash, 32381);
        assert_eq!(granite.rough_hewn.terrain.short_hash, 60834);
        assert_eq!(granite.smooth.terrain.short_hash, 32919);
        assert_eq!(granite.rough.blueprint.as_ref().unwrap().short_hash, 34369);
        assert_eq!(granite.rough.frame.as_ref().unwrap().short_hash, 30121);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let db = quarry();
        let config = FauxFloorsConfig::default();
        let hashes = |synthesis: Synthesis| {
            synthesis
                .sets
                .into_iter()
                .flat_map(FloorSet::into_implied_defs)
                .map(|def| (def.def_name().clone(), def.short_hash()))
                .collect::<Vec<_>>()
        };

        assert_eq!(hashes(run(&db, &config)), hashes(run(&db, &config)));
    }

    #[test]
    fn test_host_mode_leaves_hashes_unset() {
        let db = quarry();
        let config = FauxFloorsConfig::default().with_short_hashes(ShortHashMode::Host);
        let synthesis = run(&db, &config);

        assert_eq!(synthesis.sets.len(), 2);
        assert!(synthesis
            .sets
            .into_iter()
            .flat_map(FloorSet::into_implied_defs)
            .all(|def| def.short_hash() == 0));
    }

    #[test]
    fn test_ignored_rock_is_silent() {
        let mut db = quarry();
        db.insert_thing(rock("GU_AncientMetals", Color::WHITE)).unwrap();
        db.insert_thing(blocks("GU_BlocksAncientMetals")).unwrap();
        let synthesis = run(&db, &FauxFloorsConfig::default());

        assert_eq!(synthesis.considered, 3);
        assert_eq!(synthesis.ignored, 1);
        assert!(synthesis.skipped.is_empty());
        assert!(synthesis.sets.iter().all(|set| set.rock != "GU_AncientMetals"));
    }

    #[test]
    fn test_missing_blocks_skips_rock() {
        let mut db = quarry();
        db.insert_thing(rock("Sandstone", Color::WHITE)).unwrap();
        let synthesis = run(&db, &FauxFloorsConfig::default());

        assert_eq!(synthesis.sets.len(), 2);
        assert_eq!(synthesis.skipped.len(), 1);
        let skipped = &synthesis.skipped[0];
        assert_eq!(skipped.rock, "Sandstone");
        assert!(matches!(
            skipped.reason,
            SkipReason::Failed(Error::NoBlocks(ref name)) if name == "Sandstone"
        ));
    }

    #[test]
    fn test_non_rocks_are_not_considered() {
        let mut db = quarry();
        db.insert_thing(ThingDef {
            building: Some(BuildingProperties {
                is_natural_rock: true,
                is_resource_rock: true,
                ..Default::default()
            }),
            ..ThingDef::new("MineableSteel")
        })
        .unwrap();
        let synthesis = run(&db, &FauxFloorsConfig::default());

        assert_eq!(synthesis.considered, 2);
        assert_eq!(synthesis.sets.len(), 2);
    }

    #[test]
    fn test_already_generated_rock_is_skipped() {
        let mut db = quarry();
        db.insert_terrain(TerrainDef::new("Granite_RoughFaux")).unwrap();
        let synthesis = run(&db, &FauxFloorsConfig::default());

        assert_eq!(synthesis.sets.len(), 1);
        assert_eq!(synthesis.sets[0].rock, "Marble");
        assert!(matches!(
            synthesis.skipped[0].reason,
            SkipReason::AlreadyGenerated
        ));
    }
}
