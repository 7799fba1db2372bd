//! Single-room stand-in for worlds that have no authored chunk layout.
//!
//! Picks one entrance tile and places it at the origin. This is not a
//! dungeon layout generator.

use glam::{Vec2, Vec3};
use rand::Rng;
use scenegraft_assets::{AssetLookup, SceneTemplate, TileInfo, TileType, WorldTemplate};
use scenegraft_common::{
    GameRef, MiniMapVisibility, Rotation, SceneCachedValues, SceneSpecification, SnoId,
};
use scenegraft_kernel::{ActorPopulator, NewScene, World};
use std::collections::BTreeMap;
use tracing::{info, info_span};

use crate::config::{FallbackConfig, GeneratorConfig};
use crate::error::GenerationError;
use crate::rng::pick_uniform;

/// Group a tile catalog by tile type, keeping catalog order within a type.
pub fn tiles_by_type(tiles: &[TileInfo]) -> BTreeMap<TileType, Vec<&TileInfo>> {
    let mut grouped: BTreeMap<TileType, Vec<&TileInfo>> = BTreeMap::new();
    for tile in tiles {
        grouped.entry(tile.tile_type).or_default().push(tile);
    }
    grouped
}

/// Specification given to the fallback room: placeholder level area and
/// weather, everything else unset, bounds from the entrance scene.
pub fn baseline_specification(
    fallback: &FallbackConfig,
    scene: &SceneTemplate,
) -> SceneSpecification {
    SceneSpecification {
        cell: Vec2::ZERO,
        cell_z: 0,
        level_areas: [fallback.level_area, SnoId::NONE, SnoId::NONE, SnoId::NONE],
        weather: fallback.weather,
        cluster_id: -1,
        reserved: [14, 5, -1, 0],
        cached: SceneCachedValues {
            reserved: [63, 96, 96],
            aabb_bounds: scene.aabb_bounds,
            aabb_marker_set_bounds: scene.aabb_marker_set_bounds,
            reserved_tail: [0; 4],
        },
        ..SceneSpecification::unset()
    }
}

/// Build a one-scene world from the template's entrance tiles.
///
/// Fails if the catalog has no entrance tile or the chosen tile's scene
/// template is missing; no world is produced in either case.
pub fn generate_fallback<A, P, R>(
    assets: &A,
    populator: &mut P,
    rng: &mut R,
    config: &GeneratorConfig,
    game: GameRef,
    world_id: SnoId,
    template: &WorldTemplate,
) -> Result<World, GenerationError>
where
    A: AssetLookup + ?Sized,
    P: ActorPopulator + ?Sized,
    R: Rng + ?Sized,
{
    let _span = info_span!("generate_fallback", world = %world_id).entered();

    let grouped = tiles_by_type(&template.tiles);
    let entrance = grouped
        .get(&TileType::Entrance)
        .and_then(|tiles| pick_uniform(rng, tiles))
        .copied()
        .ok_or(GenerationError::NoEntranceTile(world_id))?;
    let scene_template = assets
        .scene(entrance.scene)
        .ok_or(GenerationError::SceneTemplateNotFound(entrance.scene))?;

    let mut world = World::new(game, world_id);
    let scene = world.add_scene(NewScene {
        template: entrance.scene,
        position: Vec3::ZERO,
        rotation: Rotation {
            axis: Vec3::ZERO,
            amount: 1.0,
        },
        minimap: MiniMapVisibility::Visited,
        specification: baseline_specification(&config.fallback, scene_template),
    });
    populator.load_actors(&world, scene);

    info!(world = %world_id, entrance = %entrance.scene, "generated single-room fallback world");
    Ok(world)
}
