use glam::Vec3;
use scenegraft_common::SnoId;
use scenegraft_kernel::{SceneId, World};
use std::fmt::Write;

/// World inspector for developer tooling.
///
/// Provides read-only queries against a generated world for debugging and
/// the CLI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world.
    pub fn summary(world: &World) -> WorldSummary {
        let root_count = world.roots().count();
        let (min, max) = world.scenes().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), s| (min.min(s.position), max.max(s.position)),
        );
        let extent = (world.scene_count() > 0).then_some((min, max));
        WorldSummary {
            template: world.template(),
            scene_count: world.scene_count(),
            root_count,
            subscene_count: world.scene_count() - root_count,
            extent,
        }
    }

    /// Details of a single scene.
    pub fn inspect_scene(world: &World, id: SceneId) -> Option<SceneInfo> {
        world.scene(id).map(|s| SceneInfo {
            id,
            template: s.template,
            parent: s.parent,
            position: s.position.to_array(),
            rotation_axis: s.rotation.axis.to_array(),
            rotation_amount: s.rotation.amount,
            subscene_count: s.subscenes.len(),
        })
    }

    /// List all scene ids in creation order.
    pub fn list_scenes(world: &World) -> Vec<SceneId> {
        world.scenes().map(|s| s.id).collect()
    }

    /// Indented dump of the scene tree, one scene per line.
    pub fn render_tree(world: &World) -> String {
        let mut out = String::new();
        for root in world.roots() {
            Self::render_node(world, root.id, 0, &mut out);
        }
        out
    }

    fn render_node(world: &World, id: SceneId, depth: usize, out: &mut String) {
        let Some(info) = Self::inspect_scene(world, id) else {
            return;
        };
        let _ = writeln!(out, "{}{info}", "  ".repeat(depth));
        for child in world.subscenes_of(id) {
            Self::render_node(world, child.id, depth + 1, out);
        }
    }
}

/// Summary of a generated world for the inspector.
#[derive(Debug, Clone)]
pub struct WorldSummary {
    pub template: SnoId,
    pub scene_count: usize,
    pub root_count: usize,
    pub subscene_count: usize,
    /// Min and max scene position; `None` for an empty world.
    pub extent: Option<(Vec3, Vec3)>,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World {}: scenes={} roots={} subscenes={}",
            self.template, self.scene_count, self.root_count, self.subscene_count
        )?;
        if let Some((min, max)) = self.extent {
            write!(
                f,
                " extent=({:.1}, {:.1}, {:.1})..({:.1}, {:.1}, {:.1})",
                min.x, min.y, min.z, max.x, max.y, max.z
            )?;
        }
        Ok(())
    }
}

/// Detailed info about a single scene.
#[derive(Debug, Clone)]
pub struct SceneInfo {
    pub id: SceneId,
    pub template: SnoId,
    pub parent: Option<SceneId>,
    pub position: [f32; 3],
    pub rotation_axis: [f32; 3],
    pub rotation_amount: f32,
    pub subscene_count: usize,
}

impl std::fmt::Display for SceneInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene #{} [{}] pos=({:.2}, {:.2}, {:.2}) rot=({:.2}, {:.2}, {:.2}; {:.2})",
            self.id.0,
            self.template,
            self.position[0],
            self.position[1],
            self.position[2],
            self.rotation_axis[0],
            self.rotation_axis[1],
            self.rotation_axis[2],
            self.rotation_amount,
        )
    }
}
