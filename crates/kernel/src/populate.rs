use crate::world::{SceneId, World};

/// Hook invoked once per placed scene so actors can be spawned into it.
///
/// Called after the scene is in the world, so `world.scene(scene)` always
/// resolves. Subscenes are populated before their parent.
pub trait ActorPopulator {
    fn load_actors(&mut self, world: &World, scene: SceneId);
}

/// Populator that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPopulator;

impl ActorPopulator for NoopPopulator {
    fn load_actors(&mut self, _world: &World, _scene: SceneId) {}
}

/// Records the order in which scenes were populated.
#[derive(Debug, Clone, Default)]
pub struct PopulationLog {
    pub populated: Vec<SceneId>,
}

impl PopulationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, scene: SceneId) -> bool {
        self.populated.contains(&scene)
    }
}

impl ActorPopulator for PopulationLog {
    fn load_actors(&mut self, world: &World, scene: SceneId) {
        if let Some(s) = world.scene(scene) {
            tracing::trace!(scene = scene.0, template = %s.template, "load actors");
        }
        self.populated.push(scene);
    }
}
