//! Data-driven game balance
//!
//! Every gameplay number lives here so balance passes never touch sim
//! code. A host can override any subset from JSON; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fraction of the viewport width covered by the lane track
    pub lane_width_fraction: f32,
    /// Player ball radius (px)
    pub player_radius: f32,
    /// Player row, as a fraction of viewport height down from the top
    pub player_depth_fraction: f32,
    /// Horizontal speed from held keys (px/sec)
    pub key_speed: f32,
    /// Horizontal speed per unit of tilt (px/sec)
    pub tilt_speed: f32,
    /// Block size (px)
    pub block_width: f32,
    pub block_height: f32,
    /// Starting fall speed (px/sec)
    pub base_fall_speed: f32,
    /// Fall speed gained per reward (px/sec)
    pub fall_speed_increment: f32,
    /// Seconds between spawn batches
    pub spawn_interval: f32,
    /// Blocks per batch (inclusive bounds)
    pub spawn_batch_min: u32,
    pub spawn_batch_max: u32,
    /// Probability a spawned block is a reward
    pub reward_probability: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_width_fraction: LANE_WIDTH_FRACTION,
            player_radius: PLAYER_RADIUS,
            player_depth_fraction: PLAYER_DEPTH_FRACTION,
            key_speed: PLAYER_KEY_SPEED,
            tilt_speed: TILT_SPEED,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            base_fall_speed: BASE_FALL_SPEED,
            fall_speed_increment: FALL_SPEED_INCREMENT,
            spawn_interval: SPAWN_INTERVAL,
            spawn_batch_min: SPAWN_BATCH_MIN,
            spawn_batch_max: SPAWN_BATCH_MAX,
            reward_probability: REWARD_PROBABILITY,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; unspecified fields use defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Pull out-of-range values back into playable territory. The radius
    /// is only floored here; `GameState` caps it against the actual lane
    /// width once the viewport is known.
    pub fn sanitized(mut self) -> Self {
        self.reward_probability = self.reward_probability.clamp(0.0, 1.0);
        self.player_radius = self.player_radius.max(1.0);
        self.lane_width_fraction = self.lane_width_fraction.clamp(0.1, 1.0);
        self.player_depth_fraction = self.player_depth_fraction.clamp(0.05, 0.95);
        self.spawn_interval = self.spawn_interval.max(0.05);
        if self.spawn_batch_min == 0 {
            self.spawn_batch_min = 1;
        }
        if self.spawn_batch_max < self.spawn_batch_min {
            self.spawn_batch_max = self.spawn_batch_min;
        }
        self
    }
}
