//! Demo runner configuration
//!
//! Only the headless driver reads these; the simulation core takes no
//! configuration beyond its compiled constants.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a headless demo run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Launch-direction seed; wall clock when absent
    pub seed: Option<u64>,
    /// Tick budget per round before the run gives up
    pub max_ticks: u64,
    /// Reverse the shield every this many ticks (0 = never)
    pub reverse_period: u64,
    /// How many rounds to play back to back
    pub rounds: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: 100_000,
            reverse_period: 180,
            rounds: 1,
        }
    }
}

impl DemoSettings {
    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read settings {}: {err}", path.display());
                Self::default()
            }
        }
    }
}
