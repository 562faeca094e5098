//! Vertex types and palette for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.11, 0.13, 0.2, 1.0];
    /// Semi-transparent track band under the player
    pub const LANE: [f32; 4] = [0.0, 0.0, 0.0, 0.3];
    /// Mint green, shared by the player ball and reward blocks
    pub const PLAYER: [f32; 4] = [0.0, 0.89, 0.643, 1.0];
    pub const REWARD: [f32; 4] = PLAYER;
    pub const HAZARD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// High-contrast hazard (red instead of white)
    pub const HAZARD_CONTRAST: [f32; 4] = [1.0, 0.25, 0.2, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SCORE_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
}
