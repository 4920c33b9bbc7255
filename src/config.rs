//! Advice configuration
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn default_consider_ceiling() -> f64 {
    3000.0
}

fn default_comparison_horizons() -> Vec<f64> {
    vec![1.0, 3.0, 5.0, 10.0]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdviceConfig {
    /// Largest positive net cost still classed as "consider" rather than "buy now"
    #[serde(default = "default_consider_ceiling")]
    pub consider_ceiling: f64,

    /// Delay horizons (years) evaluated by the scenario comparison
    #[serde(default = "default_comparison_horizons")]
    pub comparison_horizons: Vec<f64>,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            consider_ceiling: default_consider_ceiling(),
            comparison_horizons: default_comparison_horizons(),
        }
    }
}

impl AdviceConfig {
    /// Parse from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening config file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_json_path(path)?;
                log::info!("loaded advice config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
