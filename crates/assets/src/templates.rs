//! Authored template records. Read-only once loaded.

use glam::Vec3;
use scenegraft_common::{Aabb, PrTransform, SceneSpecification, SnoId};
use serde::{Deserialize, Serialize};

/// Marker kind tagging the position a cluster subscene is attached at.
pub const SUBSCENE_ANCHOR_KIND: i32 = 16;

/// One placed scene in an authored world layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneChunk {
    pub scene: SnoId,
    pub transform: PrTransform,
    pub specification: SceneSpecification,
}

/// A candidate sub-layout inside a cluster group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubSceneEntry {
    pub scene: SnoId,
    pub probability: f32,
}

/// Weighted entries plus how many of them a cluster must take before falling
/// back to its default group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubSceneGroup {
    pub required_minimum: u32,
    pub entries: Vec<SubSceneEntry>,
}

/// A set of interchangeable subscenes shared by every chunk that names it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterTemplate {
    pub id: i32,
    pub groups: Vec<SubSceneGroup>,
    pub default: SubSceneGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileType {
    Exit,
    Entrance,
    Filler,
    EventExit,
    EventEntrance,
}

/// A tile usable by the randomized-layout path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileInfo {
    pub tile_type: TileType,
    pub scene: SnoId,
}

/// Authored world: a chunk layout, its clusters, and a tile catalog used when
/// the layout is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldTemplate {
    pub name: String,
    pub chunks: Vec<SceneChunk>,
    pub clusters: Vec<ClusterTemplate>,
    pub tiles: Vec<TileInfo>,
}

impl WorldTemplate {
    /// Worlds without an authored layout are generated from their tiles.
    pub fn is_dynamic(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneTemplate {
    pub name: String,
    pub aabb_bounds: Aabb,
    pub aabb_marker_set_bounds: Aabb,
    pub marker_sets: Vec<SnoId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: i32,
    pub position: Vec3,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkerSetTemplate {
    pub markers: Vec<Marker>,
}
