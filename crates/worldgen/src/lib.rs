//! World generation: assembles placed scene hierarchies from authored templates.
//!
//! # Invariants
//! - Every random draw goes through the caller's `Rng`; a fixed seed gives a
//!   bit-identical world.
//! - A selection pool starts with one entry per chunk drawing from its
//!   cluster, and entries are never handed out twice.
//! - Only a missing world template aborts generation. Per-chunk problems drop
//!   that chunk's subscene and nothing else.

pub mod anchor;
pub mod config;
pub mod error;
pub mod fallback;
pub mod generate;
pub mod pool;
pub mod rng;

pub use anchor::find_anchor;
pub use config::{FallbackConfig, GeneratorConfig};
pub use error::{ConfigError, GenerationError};
pub use fallback::generate_fallback;
pub use generate::{Generator, generate, normalization_offset};
pub use pool::{SelectionPool, build_pools, cluster_counts, index_clusters};
pub use rng::{GenRng, entropy_rng, seeded_rng};

pub fn crate_info() -> &'static str {
    "scenegraft-worldgen v0.1.0"
}
