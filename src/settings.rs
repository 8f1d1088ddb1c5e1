//! Board settings
//!
//! Loaded from an optional JSON file; every field falls back to the
//! reference configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{BoardConfig, SimError, SimulationState};

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board width in cells
    pub width: u32,
    /// Board height in cells
    pub height: u32,
    /// Generation seed
    pub seed: u64,
    /// Linear index of the goal cell. Unset means 39 when the board is
    /// large enough, otherwise no goal.
    pub goal_index: Option<usize>,
    /// Linear index of the collectible cell, 42 by the same rule
    pub collectible_index: Option<usize>,
    /// Roll speed (radians per second)
    pub roll_rate: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: DEFAULT_SEED,
            goal_index: None,
            collectible_index: None,
            roll_rate: ROLL_RATE,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::Settings(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::Settings(e.to_string()))
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SimError::Settings(format!("{}: {e}", path.display())))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`Settings::load`], but falls back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({e})");
                Self::default()
            }
        }
    }

    /// Explicit indices are kept as given and checked when the board is built
    pub fn board_config(&self) -> BoardConfig {
        let reference = BoardConfig::reference(self.width, self.height, self.seed);
        BoardConfig {
            goal_index: self.goal_index.or(reference.goal_index),
            collectible_index: self.collectible_index.or(reference.collectible_index),
            ..reference
        }
    }

    /// Construct a simulation from these settings
    pub fn build(&self) -> Result<SimulationState, SimError> {
        let mut state = SimulationState::new(&self.board_config())?;
        state.roll_rate = self.roll_rate;
        Ok(state)
    }
}
