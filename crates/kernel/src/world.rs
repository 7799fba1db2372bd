use glam::Vec3;
use scenegraft_common::{GameRef, MiniMapVisibility, Rotation, SceneSpecification, SnoId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index of a scene inside its world. Assigned sequentially in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SceneId(pub u32);

/// Everything needed to place a scene. The world fills in id and hierarchy.
#[derive(Debug, Clone)]
pub struct NewScene {
    pub template: SnoId,
    pub position: Vec3,
    pub rotation: Rotation,
    pub minimap: MiniMapVisibility,
    pub specification: SceneSpecification,
}

/// A placed instance of a scene template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub template: SnoId,
    /// World-space position.
    pub position: Vec3,
    pub rotation: Rotation,
    pub minimap: MiniMapVisibility,
    pub scene_group: SnoId,
    /// Non-owning back-reference; `None` for root scenes.
    pub parent: Option<SceneId>,
    /// Attached subscenes, in attachment order.
    pub subscenes: Vec<SceneId>,
    pub specification: SceneSpecification,
}

impl Scene {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A generated world.
///
/// Scenes live in an arena keyed by `SceneId`. Parents list their children by
/// id; children point back at their parent by id only, so the hierarchy is a
/// strict tree with no shared ownership.
///
/// Uses BTreeMap for deterministic iteration order across all platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    game: GameRef,
    template: SnoId,
    scenes: BTreeMap<SceneId, Scene>,
    next_scene_id: u32,
}

impl World {
    /// Create an empty world for the given game session and template.
    pub fn new(game: GameRef, template: SnoId) -> Self {
        Self {
            game,
            template,
            scenes: BTreeMap::new(),
            next_scene_id: 0,
        }
    }

    pub fn game(&self) -> GameRef {
        self.game
    }

    /// Template this world was generated from.
    pub fn template(&self) -> SnoId {
        self.template
    }

    /// Number of scenes, subscenes included.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(&id)
    }

    /// All scenes in creation order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// Scenes without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values().filter(|s| s.is_root())
    }

    /// Children of `id`, in attachment order. Empty if `id` is unknown.
    pub fn subscenes_of(&self, id: SceneId) -> impl Iterator<Item = &Scene> {
        self.scenes
            .get(&id)
            .map(|s| s.subscenes.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.scenes.get(child))
    }

    /// Place a root scene. Returns its id.
    pub fn add_scene(&mut self, desc: NewScene) -> SceneId {
        self.insert(desc, None)
    }

    /// Place a scene as a child of `parent`. Returns `None` if the parent
    /// does not exist.
    pub fn attach_subscene(&mut self, parent: SceneId, desc: NewScene) -> Option<SceneId> {
        if !self.scenes.contains_key(&parent) {
            return None;
        }
        let id = self.insert(desc, Some(parent));
        if let Some(p) = self.scenes.get_mut(&parent) {
            p.subscenes.push(id);
        }
        Some(id)
    }

    fn insert(&mut self, desc: NewScene, parent: Option<SceneId>) -> SceneId {
        let id = SceneId(self.next_scene_id);
        self.next_scene_id += 1;
        self.scenes.insert(
            id,
            Scene {
                id,
                template: desc.template,
                position: desc.position,
                rotation: desc.rotation,
                minimap: desc.minimap,
                scene_group: SnoId::NONE,
                parent,
                subscenes: Vec::new(),
                specification: desc.specification,
            },
        );
        id
    }

    /// Compute a deterministic hash of the placed scenes for comparison.
    /// Covers template, hierarchy, position and rotation in arena order.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.template.0.to_le_bytes());
        for (id, scene) in &self.scenes {
            mix(&mut h, &id.0.to_le_bytes());
            mix(&mut h, &scene.template.0.to_le_bytes());
            let parent = scene.parent.map_or(u32::MAX, |p| p.0);
            mix(&mut h, &parent.to_le_bytes());
            for v in [scene.position, scene.rotation.axis] {
                mix(&mut h, &v.x.to_le_bytes());
                mix(&mut h, &v.y.to_le_bytes());
                mix(&mut h, &v.z.to_le_bytes());
            }
            mix(&mut h, &scene.rotation.amount.to_le_bytes());
        }
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(template: i32, x: f32) -> NewScene {
        NewScene {
            template: SnoId(template),
            position: Vec3::new(x, 0.0, 0.0),
            rotation: Rotation::default(),
            minimap: MiniMapVisibility::Visited,
            specification: SceneSpecification::unset(),
        }
    }

    #[test]
    fn world_starts_empty() {
        let w = World::new(GameRef(1), SnoId(10));
        assert_eq!(w.scene_count(), 0);
        assert_eq!(w.template(), SnoId(10));
        assert_eq!(w.game(), GameRef(1));
    }

    #[test]
    fn ids_are_sequential() {
        let mut w = World::new(GameRef(0), SnoId(1));
        assert_eq!(w.add_scene(desc(1, 0.0)), SceneId(0));
        assert_eq!(w.add_scene(desc(2, 0.0)), SceneId(1));
    }

    #[test]
    fn attach_links_both_directions() {
        let mut w = World::new(GameRef(0), SnoId(1));
        let parent = w.add_scene(desc(1, 0.0));
        let child = w.attach_subscene(parent, desc(2, 5.0)).unwrap();

        assert_eq!(w.scene(child).unwrap().parent, Some(parent));
        assert_eq!(w.scene(parent).unwrap().subscenes, vec![child]);
        assert_eq!(w.roots().count(), 1);
        let kids: Vec<SceneId> = w.subscenes_of(parent).map(|s| s.id).collect();
        assert_eq!(kids, vec![child]);
    }

    #[test]
    fn attach_to_missing_parent_is_rejected() {
        let mut w = World::new(GameRef(0), SnoId(1));
        assert!(w.attach_subscene(SceneId(7), desc(2, 0.0)).is_none());
        assert_eq!(w.scene_count(), 0);
    }

    #[test]
    fn new_scenes_have_no_scene_group() {
        let mut w = World::new(GameRef(0), SnoId(1));
        let id = w.add_scene(desc(1, 0.0));
        assert!(w.scene(id).unwrap().scene_group.is_none());
    }

    #[test]
    fn state_hash_deterministic() {
        let build = || {
            let mut w = World::new(GameRef(0), SnoId(1));
            let p = w.add_scene(desc(1, 3.0));
            w.attach_subscene(p, desc(2, 4.0));
            w
        };
        assert_eq!(build().state_hash(), build().state_hash());
    }

    #[test]
    fn state_hash_sees_positions() {
        let mut a = World::new(GameRef(0), SnoId(1));
        a.add_scene(desc(1, 0.0));
        let mut b = World::new(GameRef(0), SnoId(1));
        b.add_scene(desc(1, 1.0));
        assert_ne!(a.state_hash(), b.state_hash());
    }
}
