//! Data-driven game balance
//!
//! Movement speeds and chain limits live here rather than being scattered
//! through the sim, so a level designer can rebalance from a JSON blob
//! without touching code. Defaults match the constants in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable balance values carried by the game state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Bunny step length per tick
    pub bunny_speed: f32,
    /// Base snake speed
    pub snake_speed: f32,
    /// Chain step = snake_speed * this
    pub snake_step_multiplier: f32,
    /// Minimum milliseconds between chain steps
    pub snake_move_delay_ms: f32,
    /// Chain length cap
    pub snake_max_segments: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            bunny_speed: BUNNY_SPEED,
            snake_speed: SNAKE_SPEED,
            snake_step_multiplier: SNAKE_STEP_MULTIPLIER,
            snake_move_delay_ms: SNAKE_MOVE_DELAY_MS,
            snake_max_segments: SNAKE_MAX_SEGMENTS,
        }
    }
}

impl Tuning {
    /// Pixels a single chain step covers
    #[inline]
    pub fn snake_step(&self) -> f32 {
        self.snake_speed * self.snake_step_multiplier
    }

    /// Parse a tuning blob; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
