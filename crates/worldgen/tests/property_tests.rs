//! Property-based tests using proptest
//!
//! Invariants that must hold for any authored layout and any seed:
//! - Scene count = chunks + attached subscenes
//! - Pool sizes match per-cluster chunk counts
//! - Pool draws never hand out an entry twice
//! - Fixed seed → identical world
//! - Lowest authored X and Y land on zero

use glam::{Quat, Vec3};
use proptest::prelude::*;
use scenegraft_assets::{
    AssetStore, ClusterTemplate, Marker, MarkerSetTemplate, SUBSCENE_ANCHOR_KIND, SceneChunk,
    SceneTemplate, SubSceneEntry, SubSceneGroup, WorldTemplate,
};
use scenegraft_common::{GameRef, PrTransform, SceneSpecification, SnoId};
use scenegraft_kernel::{NoopPopulator, World};
use scenegraft_worldgen::{
    GeneratorConfig, SelectionPool, build_pools, cluster_counts, generate, index_clusters,
    seeded_rng,
};

const WORLD: SnoId = SnoId(1);
const SCENE: SnoId = SnoId(10);

/// Cluster ids chunks may reference: -1 is none, 9 is never defined.
const CLUSTER_REFS: [i32; 4] = [-1, 1, 2, 9];

fn well_formed_cluster(id: i32, required: u32) -> ClusterTemplate {
    ClusterTemplate {
        id,
        groups: vec![SubSceneGroup {
            required_minimum: required,
            entries: vec![
                SubSceneEntry {
                    scene: SnoId(id * 100),
                    probability: 1.0,
                },
                SubSceneEntry {
                    scene: SnoId(id * 100 + 1),
                    probability: 3.0,
                },
            ],
        }],
        default: SubSceneGroup {
            required_minimum: 0,
            entries: vec![SubSceneEntry {
                scene: SnoId(id * 100 + 50),
                probability: 1.0,
            }],
        },
    }
}

fn store_for(layout: &[(f32, f32, f32, usize)], required: u32) -> AssetStore {
    let chunks = layout
        .iter()
        .map(|&(x, y, z, cluster)| SceneChunk {
            scene: SCENE,
            transform: PrTransform {
                rotation: Quat::IDENTITY,
                position: Vec3::new(x, y, z),
            },
            specification: SceneSpecification {
                cluster_id: CLUSTER_REFS[cluster],
                ..SceneSpecification::unset()
            },
        })
        .collect();

    let mut store = AssetStore::new();
    store.insert_world(
        WORLD,
        WorldTemplate {
            name: "prop".into(),
            chunks,
            clusters: vec![well_formed_cluster(1, required), well_formed_cluster(2, required)],
            tiles: Vec::new(),
        },
    );
    store.insert_scene(
        SCENE,
        SceneTemplate {
            marker_sets: vec![SnoId(20)],
            ..SceneTemplate::default()
        },
    );
    store.insert_marker_set(
        SnoId(20),
        MarkerSetTemplate {
            markers: vec![Marker {
                kind: SUBSCENE_ANCHOR_KIND,
                position: Vec3::new(8.0, 8.0, 0.0),
            }],
        },
    );
    store
}

fn run(store: &AssetStore, seed: u64) -> World {
    generate(
        store,
        &mut NoopPopulator,
        &mut seeded_rng(seed),
        &GeneratorConfig::default(),
        GameRef(0),
        WORLD,
    )
    .unwrap()
}

fn layout_strategy() -> impl Strategy<Value = Vec<(f32, f32, f32, usize)>> {
    prop::collection::vec(
        (
            -5000.0f32..5000.0,
            -5000.0f32..5000.0,
            -100.0f32..100.0,
            0usize..CLUSTER_REFS.len(),
        ),
        1..24,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_scene_count_is_chunks_plus_subscenes(
        layout in layout_strategy(),
        required in 0u32..4,
        seed in any::<u64>()
    ) {
        let store = store_for(&layout, required);
        let world = run(&store, seed);

        let cluster_chunks = layout.iter().filter(|c| matches!(CLUSTER_REFS[c.3], 1 | 2)).count();
        let subscenes = world.scenes().filter(|s| s.parent.is_some()).count();
        prop_assert_eq!(world.roots().count(), layout.len());
        // every cluster chunk is anchored and every pool is full
        prop_assert_eq!(subscenes, cluster_chunks);
        prop_assert_eq!(world.scene_count(), layout.len() + subscenes);
    }

    #[test]
    fn prop_generation_is_deterministic(
        layout in layout_strategy(),
        seed in any::<u64>()
    ) {
        let store = store_for(&layout, 2);
        let a = run(&store, seed);
        let b = run(&store, seed);
        prop_assert_eq!(a.state_hash(), b.state_hash());
        let templates = |w: &World| w.scenes().map(|s| s.template).collect::<Vec<_>>();
        prop_assert_eq!(templates(&a), templates(&b));
    }

    #[test]
    fn prop_lowest_chunk_lands_on_zero(layout in layout_strategy(), seed in any::<u64>()) {
        let store = store_for(&layout, 1);
        let world = run(&store, seed);
        let min_x = world.roots().map(|s| s.position.x).fold(f32::INFINITY, f32::min);
        let min_y = world.roots().map(|s| s.position.y).fold(f32::INFINITY, f32::min);
        prop_assert_eq!(min_x, 0.0);
        prop_assert_eq!(min_y, 0.0);

        // Z is never shifted
        let template = store.require_world(WORLD).unwrap();
        for (scene, chunk) in world.roots().zip(&template.chunks) {
            prop_assert_eq!(scene.position.z, chunk.transform.position.z);
        }
    }

    #[test]
    fn prop_pool_sizes_match_counts(
        layout in layout_strategy(),
        required in 0u32..4,
        seed in any::<u64>()
    ) {
        let store = store_for(&layout, required);
        let template = store.require_world(WORLD).unwrap();
        let index = index_clusters(&template.clusters);
        let counts = cluster_counts(&template.chunks, &index);
        let pools = build_pools(&index, &counts, &mut seeded_rng(seed));

        for (id, count) in &counts {
            prop_assert_eq!(pools[id].len(), *count);
        }
        let expected: usize = layout.iter().filter(|c| matches!(CLUSTER_REFS[c.3], 1 | 2)).count();
        prop_assert_eq!(counts.values().sum::<usize>(), expected);
    }

    #[test]
    fn prop_draws_are_without_replacement(
        count in 0usize..40,
        required in 0u32..10,
        seed in any::<u64>()
    ) {
        let cluster = well_formed_cluster(3, required);
        let mut rng = seeded_rng(seed);
        let mut pool = SelectionPool::build(&cluster, count, &mut rng);
        prop_assert_eq!(pool.len(), count);

        let mut remaining: Vec<i32> = pool.entries().iter().map(|e| e.scene.0).collect();
        while let Some(entry) = pool.draw(&mut rng) {
            let pos = remaining.iter().position(|s| *s == entry.scene.0);
            prop_assert!(pos.is_some(), "drew {} which was not left in the pool", entry.scene);
            remaining.swap_remove(pos.unwrap());
        }
        prop_assert!(remaining.is_empty());
        prop_assert!(pool.draw(&mut rng).is_none());
    }
}
