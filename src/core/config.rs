//! Player-tunable configuration, read from `~/.flapper/config.json`.

use super::constants::{
    CONFIG_FILE_NAME, DEFAULT_SKIN_INDEX, FRAME_INTERVAL_MS, OBSTACLE_SPEED,
};
use crate::game::character::SKIN_COUNT;
use crate::utils::persistence::{data_path, load_json_or_default, save_json};
use serde::{Deserialize, Serialize};

/// Runtime configuration for a play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target frame interval; also bounds how long an input poll may block.
    pub frame_interval_ms: u64,

    /// Random seed for obstacle gaps (None = seeded from entropy)
    pub seed: Option<u64>,

    /// Skin selected when the game starts (wrapped into range)
    pub starting_skin: usize,

    /// Leftward obstacle speed in world units per second
    pub obstacle_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            seed: None,
            starting_skin: DEFAULT_SKIN_INDEX,
            obstacle_speed: OBSTACLE_SPEED,
        }
    }
}

impl GameConfig {
    /// Load the config file, falling back to defaults when it is missing or invalid.
    ///
    /// A missing file is created with the defaults so players have something to edit.
    pub fn load() -> Self {
        let exists = data_path(CONFIG_FILE_NAME)
            .map(|p| p.exists())
            .unwrap_or(true);
        if !exists {
            let defaults = Self::default();
            match save_json(CONFIG_FILE_NAME, &defaults) {
                Ok(()) => log::info!("Wrote default config to ~/.flapper/{}", CONFIG_FILE_NAME),
                Err(e) => log::warn!("Could not write default config: {}", e),
            }
            return defaults;
        }
        load_json_or_default::<Self>(CONFIG_FILE_NAME).sanitized()
    }

    /// Clamp values a hand-edited file could leave out of range.
    pub fn sanitized(mut self) -> Self {
        self.frame_interval_ms = self.frame_interval_ms.clamp(1, 1000);
        self.starting_skin %= SKIN_COUNT;
        if !self.obstacle_speed.is_finite() || self.obstacle_speed <= 0.0 {
            self.obstacle_speed = OBSTACLE_SPEED;
        }
        self
    }
}
