// config.rs - Construction-time settings for a simulation

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};
use crate::patterns::{find_pattern, SeedPattern};
use crate::grid::Grid;
use crate::seed::{check_probability, origin_within, DEFAULT_LIVE_PROBABILITY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,           // Pixels per cell, rendering only
    pub live_probability: f64,
    pub random_seed: Option<u64>,
    pub pattern: Option<String>,  // Built-in pattern name; random seeding when unset
    pub update_interval_ms: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            cell_size: 15.0,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            random_seed: None,
            pattern: None,
            update_interval_ms: 200,
        }
    }
}

impl LifeConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LifeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Resolves the configured pattern, if any.
    pub fn seed_pattern(&self) -> Result<Option<SeedPattern>> {
        self.pattern
            .as_deref()
            .map(|name| find_pattern(name)?.seed())
            .transpose()
    }

    pub fn validate(&self) -> Result<()> {
        Grid::cell_count(self.width, self.height)?;
        check_probability(self.live_probability)?;
        if let Some(pattern) = self.seed_pattern()? {
            origin_within(self.width, self.height, &pattern)?;
        }
        Ok(())
    }
}
