//! A small bundled catalog for the CLI demo and for tests.
//!
//! Holds one authored world using two clusters and one dynamic world that
//! only carries a tile catalog.

use glam::{Quat, Vec3};
use scenegraft_common::{Aabb, PrTransform, SceneSpecification, SnoId};

use crate::{
    AssetStore, ClusterTemplate, Marker, MarkerSetTemplate, SUBSCENE_ANCHOR_KIND, SceneChunk,
    SceneTemplate, SubSceneEntry, SubSceneGroup, TileInfo, TileType, WorldTemplate,
};

pub const AUTHORED_WORLD: SnoId = SnoId(71150);
pub const DYNAMIC_WORLD: SnoId = SnoId(50585);

pub const ANCHORED_MARKERS: SnoId = SnoId(3001);
pub const PLAIN_MARKERS: SnoId = SnoId(3002);

/// Offset of the anchor marker inside every anchored demo scene.
pub const ANCHOR_OFFSET: Vec3 = Vec3::new(60.0, 60.0, 0.0);

fn chunk(scene: i32, x: f32, y: f32, cluster_id: i32) -> SceneChunk {
    SceneChunk {
        scene: SnoId(scene),
        transform: PrTransform {
            rotation: Quat::IDENTITY,
            position: Vec3::new(x, y, 0.0),
        },
        specification: SceneSpecification {
            level_areas: [SnoId(19780), SnoId::NONE, SnoId::NONE, SnoId::NONE],
            cluster_id,
            ..SceneSpecification::unset()
        },
    }
}

fn entry(scene: i32, probability: f32) -> SubSceneEntry {
    SubSceneEntry {
        scene: SnoId(scene),
        probability,
    }
}

fn bounds(size: f32) -> Aabb {
    Aabb {
        min: Vec3::ZERO,
        max: Vec3::new(size, size, 40.0),
    }
}

pub fn demo_store() -> AssetStore {
    let mut store = AssetStore::new();

    let authored = WorldTemplate {
        name: "demo_town".into(),
        chunks: vec![
            chunk(1001, 2880.0, 2400.0, 1),
            chunk(1002, 3120.0, 2400.0, 1),
            chunk(1003, 2880.0, 2640.0, -1),
            chunk(1004, 3120.0, 2640.0, 2),
        ],
        clusters: vec![
            ClusterTemplate {
                id: 1,
                groups: vec![SubSceneGroup {
                    required_minimum: 1,
                    entries: vec![entry(2001, 1.0), entry(2002, 3.0)],
                }],
                default: SubSceneGroup {
                    required_minimum: 0,
                    entries: vec![entry(2003, 1.0)],
                },
            },
            ClusterTemplate {
                id: 2,
                groups: vec![SubSceneGroup {
                    required_minimum: 1,
                    entries: vec![entry(2004, 1.0)],
                }],
                default: SubSceneGroup::default(),
            },
        ],
        tiles: Vec::new(),
    };
    store.insert_world(AUTHORED_WORLD, authored);

    let dynamic = WorldTemplate {
        name: "demo_cellar".into(),
        chunks: Vec::new(),
        clusters: Vec::new(),
        tiles: vec![
            TileInfo {
                tile_type: TileType::Entrance,
                scene: SnoId(1101),
            },
            TileInfo {
                tile_type: TileType::Entrance,
                scene: SnoId(1102),
            },
            TileInfo {
                tile_type: TileType::Exit,
                scene: SnoId(1103),
            },
        ],
    };
    store.insert_world(DYNAMIC_WORLD, dynamic);

    for id in [1001, 1002, 1004] {
        store.insert_scene(
            SnoId(id),
            SceneTemplate {
                name: format!("town_block_{id}"),
                aabb_bounds: bounds(240.0),
                aabb_marker_set_bounds: bounds(240.0),
                marker_sets: vec![PLAIN_MARKERS, ANCHORED_MARKERS],
            },
        );
    }
    store.insert_scene(
        SnoId(1003),
        SceneTemplate {
            name: "town_square".into(),
            aabb_bounds: bounds(240.0),
            aabb_marker_set_bounds: bounds(240.0),
            marker_sets: vec![PLAIN_MARKERS],
        },
    );
    for id in 2001..=2004 {
        store.insert_scene(
            SnoId(id),
            SceneTemplate {
                name: format!("town_filler_{id}"),
                aabb_bounds: bounds(120.0),
                aabb_marker_set_bounds: bounds(120.0),
                marker_sets: Vec::new(),
            },
        );
    }
    for id in 1101..=1103 {
        store.insert_scene(
            SnoId(id),
            SceneTemplate {
                name: format!("cellar_tile_{id}"),
                aabb_bounds: bounds(96.0),
                aabb_marker_set_bounds: bounds(90.0),
                marker_sets: Vec::new(),
            },
        );
    }

    store.insert_marker_set(
        PLAIN_MARKERS,
        MarkerSetTemplate {
            markers: vec![
                Marker {
                    kind: 0,
                    position: Vec3::new(10.0, 10.0, 0.0),
                },
                Marker {
                    kind: 3,
                    position: Vec3::new(20.0, 5.0, 0.0),
                },
            ],
        },
    );
    store.insert_marker_set(
        ANCHORED_MARKERS,
        MarkerSetTemplate {
            markers: vec![
                Marker {
                    kind: 1,
                    position: Vec3::new(5.0, 5.0, 0.0),
                },
                Marker {
                    kind: SUBSCENE_ANCHOR_KIND,
                    position: ANCHOR_OFFSET,
                },
            ],
        },
    );

    store
}
