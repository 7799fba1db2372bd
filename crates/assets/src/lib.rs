//! Asset lookup: immutable template records keyed by (group, id).
//!
//! Templates are parsed elsewhere and handed to the store already decoded.
//! The store can be persisted to disk as JSON for inspection and for the CLI.

pub mod demo;
mod templates;

pub use templates::{
    ClusterTemplate, Marker, MarkerSetTemplate, SUBSCENE_ANCHOR_KIND, SceneChunk, SceneTemplate,
    SubSceneEntry, SubSceneGroup, TileInfo, TileType, WorldTemplate,
};

use scenegraft_common::SnoId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Asset groups the generator reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetGroup {
    Worlds,
    Scenes,
    MarkerSets,
}

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset not found: {group:?} {id}")]
    NotFound { group: AssetGroup, id: SnoId },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read access to loaded templates.
///
/// Absence is an ordinary answer, so every lookup returns an `Option`.
pub trait AssetLookup {
    fn world(&self, id: SnoId) -> Option<&WorldTemplate>;
    fn scene(&self, id: SnoId) -> Option<&SceneTemplate>;
    fn marker_set(&self, id: SnoId) -> Option<&MarkerSetTemplate>;

    fn contains(&self, group: AssetGroup, id: SnoId) -> bool {
        match group {
            AssetGroup::Worlds => self.world(id).is_some(),
            AssetGroup::Scenes => self.scene(id).is_some(),
            AssetGroup::MarkerSets => self.marker_set(id).is_some(),
        }
    }
}

/// In-memory template registry, one map per asset group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetStore {
    worlds: BTreeMap<SnoId, WorldTemplate>,
    scenes: BTreeMap<SnoId, SceneTemplate>,
    marker_sets: BTreeMap<SnoId, MarkerSetTemplate>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a world template, replacing any previous one with this id.
    pub fn insert_world(&mut self, id: SnoId, world: WorldTemplate) -> &mut Self {
        self.worlds.insert(id, world);
        self
    }

    pub fn insert_scene(&mut self, id: SnoId, scene: SceneTemplate) -> &mut Self {
        self.scenes.insert(id, scene);
        self
    }

    pub fn insert_marker_set(&mut self, id: SnoId, set: MarkerSetTemplate) -> &mut Self {
        self.marker_sets.insert(id, set);
        self
    }

    /// Fetch a world template, treating absence as an error.
    pub fn require_world(&self, id: SnoId) -> Result<&WorldTemplate, AssetError> {
        self.worlds.get(&id).ok_or(AssetError::NotFound {
            group: AssetGroup::Worlds,
            id,
        })
    }

    /// Ids of all registered worlds, ascending.
    pub fn world_ids(&self) -> impl Iterator<Item = SnoId> + '_ {
        self.worlds.keys().copied()
    }

    /// Total number of registered templates across groups.
    pub fn len(&self) -> usize {
        self.worlds.len() + self.scenes.len() + self.marker_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Save the registry to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let file = std::fs::File::open(path)?;
        let store: Self = serde_json::from_reader(file)?;
        tracing::debug!(
            worlds = store.worlds.len(),
            scenes = store.scenes.len(),
            marker_sets = store.marker_sets.len(),
            "loaded asset store"
        );
        Ok(store)
    }
}

impl AssetLookup for AssetStore {
    fn world(&self, id: SnoId) -> Option<&WorldTemplate> {
        self.worlds.get(&id)
    }

    fn scene(&self, id: SnoId) -> Option<&SceneTemplate> {
        self.scenes.get(&id)
    }

    fn marker_set(&self, id: SnoId) -> Option<&MarkerSetTemplate> {
        self.marker_sets.get(&id)
    }
}

pub fn crate_info() -> &'static str {
    "scenegraft-assets v0.1.0"
}
