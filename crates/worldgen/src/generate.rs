//! World assembly: turns an authored world template into a placed scene tree.

use glam::Vec3;
use rand::Rng;
use scenegraft_assets::{AssetLookup, SceneChunk};
use scenegraft_common::{GameRef, MiniMapVisibility, Rotation, SnoId};
use scenegraft_kernel::{ActorPopulator, NewScene, NoopPopulator, SceneId, World};
use tracing::{debug, error, info, info_span, warn};

use crate::anchor::find_anchor;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::fallback::generate_fallback;
use crate::pool::{ClusterIndex, ClusterPools, build_pools, cluster_counts, index_clusters};
use crate::rng::{GenRng, entropy_rng, seeded_rng};

/// Offset that moves the lowest authored X and Y to zero. Z is never shifted.
pub fn normalization_offset(chunks: &[SceneChunk]) -> Vec3 {
    if chunks.is_empty() {
        return Vec3::ZERO;
    }
    let (min_x, min_y) = chunks.iter().fold((f32::INFINITY, f32::INFINITY), |(x, y), c| {
        (x.min(c.transform.position.x), y.min(c.transform.position.y))
    });
    Vec3::new(min_x, min_y, 0.0)
}

/// Generate the world `world_id` from `assets`.
///
/// Only a missing world template (or an unusable fallback catalog) fails.
/// Per-chunk problems such as an unknown cluster, an exhausted pool or a
/// missing anchor marker are logged and only drop that chunk's subscene.
pub fn generate<A, P, R>(
    assets: &A,
    populator: &mut P,
    rng: &mut R,
    config: &GeneratorConfig,
    game: GameRef,
    world_id: SnoId,
) -> Result<World, GenerationError>
where
    A: AssetLookup + ?Sized,
    P: ActorPopulator + ?Sized,
    R: Rng + ?Sized,
{
    let _span = info_span!("generate_world", world = %world_id).entered();

    let Some(template) = assets.world(world_id) else {
        error!(world = %world_id, "can't find a valid world definition");
        return Err(GenerationError::TemplateNotFound(world_id));
    };

    if template.is_dynamic() {
        info!(
            world = %world_id,
            name = %template.name,
            "world has no authored layout, using single-room fallback"
        );
        return generate_fallback(assets, populator, rng, config, game, world_id, template);
    }

    let clusters = index_clusters(&template.clusters);
    let offset = normalization_offset(&template.chunks);
    let counts = cluster_counts(&template.chunks, &clusters);
    let mut pools = build_pools(&clusters, &counts, rng);

    let mut assembly = Assembly {
        assets,
        config,
        world_id,
        clusters: &clusters,
        pools: &mut pools,
        world: World::new(game, world_id),
    };
    for chunk in &template.chunks {
        assembly.place_chunk(chunk, offset, populator, rng);
    }

    let world = assembly.world;
    info!(
        world = %world_id,
        chunks = template.chunks.len(),
        scenes = world.scene_count(),
        "world generated"
    );
    Ok(world)
}

/// State shared across chunks while one world is being placed.
struct Assembly<'a, A: ?Sized> {
    assets: &'a A,
    config: &'a GeneratorConfig,
    world_id: SnoId,
    clusters: &'a ClusterIndex<'a>,
    pools: &'a mut ClusterPools,
    world: World,
}

impl<A> Assembly<'_, A>
where
    A: AssetLookup + ?Sized,
{
    fn place_chunk<P, R>(
        &mut self,
        chunk: &SceneChunk,
        offset: Vec3,
        populator: &mut P,
        rng: &mut R,
    )
    where
        P: ActorPopulator + ?Sized,
        R: Rng + ?Sized,
    {
        let position = chunk.transform.position - offset;
        let scene = self.world.add_scene(NewScene {
            template: chunk.scene,
            position,
            rotation: Rotation::from_quat_fields(chunk.transform.rotation),
            minimap: MiniMapVisibility::Visited,
            specification: chunk.specification.clone(),
        });

        if let Some(cluster_id) = chunk.specification.cluster() {
            if self.clusters.contains_key(&cluster_id) {
                self.attach_subscene(scene, position, cluster_id, chunk, populator, rng);
            } else {
                warn!(
                    cluster = cluster_id,
                    chunk = %chunk.scene,
                    world = %self.world_id,
                    "referenced cluster not found"
                );
            }
        }

        populator.load_actors(&self.world, scene);
    }

    /// Draw from the cluster pool, then resolve the anchor. The drawn entry is
    /// spent even when no anchor is found.
    fn attach_subscene<P, R>(
        &mut self,
        parent: SceneId,
        parent_position: Vec3,
        cluster_id: i32,
        chunk: &SceneChunk,
        populator: &mut P,
        rng: &mut R,
    ) -> Option<SceneId>
    where
        P: ActorPopulator + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(entry) = self.pools.get_mut(&cluster_id).and_then(|pool| pool.draw(rng)) else {
            error!(cluster = cluster_id, world = %self.world_id, "no subscenes left for cluster");
            return None;
        };

        let kind = self.config.anchor_marker_kind;
        let Some(anchor) = find_anchor(self.assets, chunk.scene, kind) else {
            error!(scene = %chunk.scene, "no subscene position marker found");
            return None;
        };

        let child = self.world.attach_subscene(
            parent,
            NewScene {
                template: entry.scene,
                position: parent_position + anchor,
                rotation: Rotation::from_quat_fields(chunk.transform.rotation),
                minimap: MiniMapVisibility::Visited,
                specification: chunk.specification.clone(),
            },
        )?;
        debug!(parent = parent.0, child = child.0, subscene = %entry.scene, "attached subscene");
        populator.load_actors(&self.world, child);
        Some(child)
    }
}

/// Owns a random source, config and populator, and generates worlds from one
/// asset lookup.
pub struct Generator<'a, A: ?Sized, P = NoopPopulator> {
    assets: &'a A,
    populator: P,
    rng: GenRng,
    config: GeneratorConfig,
}

impl<'a, A> Generator<'a, A>
where
    A: AssetLookup + ?Sized,
{
    /// Seeds from `config.seed` when set, otherwise from entropy.
    pub fn new(assets: &'a A, config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        };
        Self {
            assets,
            populator: NoopPopulator,
            rng,
            config,
        }
    }
}

impl<'a, A, P> Generator<'a, A, P>
where
    A: AssetLookup + ?Sized,
    P: ActorPopulator,
{
    /// Swap in a different population hook.
    pub fn with_populator<Q: ActorPopulator>(self, populator: Q) -> Generator<'a, A, Q> {
        Generator {
            assets: self.assets,
            populator,
            rng: self.rng,
            config: self.config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn populator(&self) -> &P {
        &self.populator
    }

    pub fn into_populator(self) -> P {
        self.populator
    }

    pub fn generate(&mut self, game: GameRef, world_id: SnoId) -> Result<World, GenerationError> {
        generate(
            self.assets,
            &mut self.populator,
            &mut self.rng,
            &self.config,
            game,
            world_id,
        )
    }
}
