use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Numeric identifier of an authored asset (world, scene, marker set, ...).
///
/// `SnoId::NONE` (-1) is the authored "unset" value and doubles as the
/// "no cluster" reference on scene chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnoId(pub i32);

impl SnoId {
    pub const NONE: SnoId = SnoId(-1);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl Default for SnoId {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::fmt::Display for SnoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to the game session a world belongs to. Never dereferenced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameRef(pub u32);

/// Authored position + orientation pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrTransform {
    pub rotation: Quat,
    pub position: Vec3,
}

impl Default for PrTransform {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            position: Vec3::ZERO,
        }
    }
}

/// Rotation as stored on a placed scene: an axis vector and a scalar amount.
///
/// Taken field-for-field from an authored quaternion (`xyz` -> axis,
/// `w` -> amount). This is not an axis-angle decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub axis: Vec3,
    pub amount: f32,
}

impl Rotation {
    pub fn from_quat_fields(q: Quat) -> Self {
        Self {
            axis: Vec3::new(q.x, q.y, q.z),
            amount: q.w,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            axis: Vec3::ZERO,
            amount: 1.0,
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// How a scene shows up on the client minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MiniMapVisibility {
    #[default]
    Hidden,
    Revealed,
    Visited,
}

/// Values cached alongside a scene specification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneCachedValues {
    pub reserved: [i32; 3],
    pub aabb_bounds: Aabb,
    pub aabb_marker_set_bounds: Aabb,
    pub reserved_tail: [i32; 4],
}

/// Per-scene environment data: level areas, audio, weather, links, cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSpecification {
    pub cell: Vec2,
    pub cell_z: i32,
    pub level_areas: [SnoId; 4],
    pub music: SnoId,
    pub combat_music: SnoId,
    pub ambient: SnoId,
    pub reverb: SnoId,
    pub weather: SnoId,
    pub prev_level_area: SnoId,
    pub next_level_area: SnoId,
    pub prev_world: SnoId,
    pub next_world: SnoId,
    pub preset_world: SnoId,
    pub cluster_id: i32,
    pub reserved: [i32; 4],
    pub cached: SceneCachedValues,
}

impl SceneSpecification {
    /// A specification with every id unset and no cluster.
    pub fn unset() -> Self {
        Self {
            cell: Vec2::ZERO,
            cell_z: 0,
            level_areas: [SnoId::NONE; 4],
            music: SnoId::NONE,
            combat_music: SnoId::NONE,
            ambient: SnoId::NONE,
            reverb: SnoId::NONE,
            weather: SnoId::NONE,
            prev_level_area: SnoId::NONE,
            next_level_area: SnoId::NONE,
            prev_world: SnoId::NONE,
            next_world: SnoId::NONE,
            preset_world: SnoId::NONE,
            cluster_id: -1,
            reserved: [0; 4],
            cached: SceneCachedValues::default(),
        }
    }

    /// Cluster this chunk draws a subscene from, if any.
    pub fn cluster(&self) -> Option<i32> {
        (self.cluster_id != -1).then_some(self.cluster_id)
    }
}

impl Default for SceneSpecification {
    fn default() -> Self {
        Self::unset()
    }
}
