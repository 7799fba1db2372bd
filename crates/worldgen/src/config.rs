use scenegraft_assets::SUBSCENE_ANCHOR_KIND;
use scenegraft_common::SnoId;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Generator settings. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Marker kind searched for when placing a cluster subscene.
    pub anchor_marker_kind: i32,
    /// Seed for the `Generator` random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub fallback: FallbackConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            anchor_marker_kind: SUBSCENE_ANCHOR_KIND,
            seed: None,
            fallback: FallbackConfig::default(),
        }
    }
}

/// Placeholder environment for the single-room fallback world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub level_area: SnoId,
    pub weather: SnoId,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            level_area: SnoId(154588),
            weather: SnoId(50542),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
