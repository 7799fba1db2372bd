//! Shared value types: asset ids, transforms, scene specifications.
//!
//! Everything here is plain data. Templates in `scenegraft-assets` and placed
//! scenes in `scenegraft-kernel` are built from these types.

mod types;

pub use types::{
    Aabb, GameRef, MiniMapVisibility, PrTransform, Rotation, SceneCachedValues,
    SceneSpecification, SnoId,
};
