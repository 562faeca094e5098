//! Lane Dodge - a falling-block dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, physics, spawning, game state)
//! - `render`: Backend-agnostic frame description (draw lists, tessellation)
//! - `settings`: Player preferences
//! - `tuning`: Data-driven game balance
//! - `scoreboard`: Session-local best scores

pub mod render;
pub mod scoreboard;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use scoreboard::SessionScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth motion)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default viewport (portrait, phone-shaped)
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 720.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1280.0;

    /// Lane track occupies this fraction of the viewport width, centered
    pub const LANE_WIDTH_FRACTION: f32 = 0.8;
    /// Height of the lane track band (visual only)
    pub const LANE_BAND_HEIGHT: f32 = 30.0;
    /// Player row, measured down from the top of the viewport
    pub const PLAYER_DEPTH_FRACTION: f32 = 0.35;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 40.0;
    /// Horizontal speed from held keys (px/sec)
    pub const PLAYER_KEY_SPEED: f32 = 300.0;
    /// Horizontal speed per unit of accelerometer tilt (px/sec)
    pub const TILT_SPEED: f32 = 120.0;

    /// Block defaults
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 80.0;
    /// Starting fall speed (px/sec)
    pub const BASE_FALL_SPEED: f32 = 450.0;
    /// Fall speed gained per reward collected (px/sec)
    pub const FALL_SPEED_INCREMENT: f32 = 12.0;

    /// Seconds between spawn batches
    pub const SPAWN_INTERVAL: f32 = 0.8;
    /// Blocks per spawn batch (inclusive bounds)
    pub const SPAWN_BATCH_MIN: u32 = 1;
    pub const SPAWN_BATCH_MAX: u32 = 2;
    /// Probability a spawned block is a reward (the rest are hazards)
    pub const REWARD_PROBABILITY: f32 = 0.15;

    /// Score text sits this far below the player row
    pub const SCORE_OFFSET_BELOW_PLAYER: f32 = 80.0;
    /// Drop shadow offset for the score text (right and down)
    pub const SCORE_SHADOW_OFFSET: f32 = 3.0;
    /// Score font scale
    pub const SCORE_TEXT_SCALE: f32 = 7.0;
}
