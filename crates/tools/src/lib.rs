//! Developer Tooling: read-only inspection of generated worlds.
//!
//! # Invariants
//! - Tools never mutate the world they inspect.

mod inspector;

pub use inspector::{SceneInfo, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    "scenegraft-tools v0.1.0"
}
