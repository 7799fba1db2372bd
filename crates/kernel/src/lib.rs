//! World Kernel: the generated world, its scene hierarchy, and the population hook.
//!
//! # Invariants
//! - Scenes form a strict tree; parents own children through the arena.
//! - A world is only handed out once generation has finished with it.

pub mod populate;
pub mod world;

pub use populate::{ActorPopulator, NoopPopulator, PopulationLog};
pub use world::{NewScene, Scene, SceneId, World};
