//! Blueprint and frame derivation for buildable floors
//!
//! The host's construction state machine places a blueprint, turns it into
//! a frame once work starts, and replaces the frame with the finished
//! terrain. Both are ethereal things derived from the floor's attributes.

use faux_floors_core::{
    AltitudeLayer, BuildingProperties, CompProperties, DefDatabase, DefId, DrawerType,
    GraphicData, ShaderType, TerrainDef, ThingCategory, ThingDef, Traversability,
};

pub const BLUEPRINT_PREFIX: &str = "Blueprint_";
pub const FRAME_PREFIX: &str = "Frame_";

const TERRAIN_BLUEPRINT_GRAPHIC_PATH: &str = "Things/Special/TerrainBlueprint";

/// Blueprint placed when a player designates `floor` for construction
pub fn derive_blueprint<D: DefDatabase + ?Sized>(floor: &TerrainDef, db: &D) -> ThingDef {
    ThingDef {
        def_name: floor.def_name.with_prefix(BLUEPRINT_PREFIX),
        label: format!("{}{}", floor.label, db.translate("BlueprintLabelExtra")),
        category: ThingCategory::Ethereal,
        altitude_layer: AltitudeLayer::Blueprint,
        use_hit_points: false,
        selectable: true,
        see_through_fog: true,
        thing_class: "Blueprint_Build".to_string(),
        graphic_data: Some(GraphicData {
            tex_path: TERRAIN_BLUEPRINT_GRAPHIC_PATH.to_string(),
            graphic_class: "Graphic_Single".to_string(),
            shader_type: ShaderType::MetaOverlay,
            ..GraphicData::default()
        }),
        construction_skill_prerequisite: floor.construction_skill_prerequisite,
        artistic_skill_prerequisite: floor.artistic_skill_prerequisite,
        clear_building_area: false,
        mod_content_pack: floor.mod_content_pack.clone(),
        entity_def_to_build: Some(floor.def_name.clone()),
        drawer_type: DrawerType::MapMeshAndRealTime,
        comps: vec![CompProperties::Forbiddable],
        ..ThingDef::default()
    }
}

/// Frame standing in for `floor` while it is under construction
pub fn derive_frame<D: DefDatabase + ?Sized>(floor: &TerrainDef, db: &D) -> ThingDef {
    let frame = ThingDef {
        def_name: floor.def_name.with_prefix(FRAME_PREFIX),
        label: format!("{}{}", floor.label, db.translate("FrameLabelExtra")),
        description: "Terrain building in progress.".to_string(),
        is_frame_int: true,
        thing_class: "Frame".to_string(),
        altitude_layer: AltitudeLayer::Building,
        building: Some(BuildingProperties {
            artificial_for_meditation_purposes: false,
            is_edifice: false,
            ..BuildingProperties::default()
        }),
        scatterable_on_map_gen: false,
        leave_resources_when_killed: true,
        use_hit_points: false,
        fill_percent: 0.0,
        passability: Traversability::Standable,
        selectable: true,
        construct_effect: floor.construct_effect.clone(),
        construction_skill_prerequisite: floor.construction_skill_prerequisite,
        artistic_skill_prerequisite: floor.artistic_skill_prerequisite,
        clear_building_area: false,
        mod_content_pack: floor.mod_content_pack.clone(),
        category: ThingCategory::Ethereal,
        entity_def_to_build: Some(floor.def_name.clone()),
        comps: vec![CompProperties::Forbiddable],
        ..ThingDef::default()
    };

    // The host only treats things carrying the marker as frames
    if !frame.is_frame() {
        log::error!("[FauxStoneFloors] Framedef is not frame: {}", frame.def_name);
    }

    frame
}
