//! Game state and core simulation types
//!
//! All state that drives a round lives in `GameState`. Nothing here is
//! persisted across process runs; score and difficulty reset on every loss
//! and every start.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh boot, waiting on the start prompt
    Menu,
    /// Active gameplay
    Playing,
    /// Previous round ended on a hazard; waiting on the retry prompt
    Lost,
}

/// Block classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Collecting it scores a point and speeds up the fall
    Reward,
    /// Touching it ends the round
    Hazard,
}

/// A falling block entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub kind: BlockKind,
    pub rect: Rect,
}

impl Block {
    /// Move the block down by the current fall speed
    pub fn fall(&mut self, speed: f32, dt: f32) {
        self.rect.y -= speed * dt;
    }

    /// True once the whole block has scrolled below the viewport
    pub fn is_off_screen(&self) -> bool {
        self.rect.top() < 0.0
    }
}

/// The player ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Position; y is fixed after init, x moves along the lane
    pub pos: Vec2,
    pub radius: f32,
}

impl Player {
    /// Bounding box used for all collision tests
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// The horizontal track the player is confined to
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lane {
    pub left: f32,
    pub width: f32,
}

impl Lane {
    /// Lane geometry from viewport width: a centered band covering the
    /// configured fraction of the screen
    pub fn from_viewport(viewport: Vec2, tuning: &Tuning) -> Self {
        let width = viewport.x * tuning.lane_width_fraction;
        let left = (viewport.x - width) / 2.0;
        Self { left, width }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Clamp a ball center so the ball stays fully inside the lane. A
    /// ball wider than the lane sits at the center.
    pub fn clamp(&self, x: f32, radius: f32) -> f32 {
        let lo = self.left + radius;
        let hi = self.right() - radius;
        if lo > hi {
            return self.center();
        }
        x.clamp(lo, hi)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed, kept for reproducibility of the host's RNG
    pub seed: u64,
    /// Viewport size in pixels (y-up)
    pub viewport: Vec2,
    /// Current phase
    pub phase: GamePhase,
    /// Rewards collected this round
    pub score: u32,
    /// Score of the round that just ended (shown on the loss screen)
    pub last_round_score: u32,
    /// Current block fall speed (px/sec), ramps up per reward
    pub fall_speed: f32,
    /// Accumulates dt; a batch spawns when it reaches the spawn interval
    pub spawn_timer: f32,
    /// Simulation tick counter (Playing only)
    pub time_ticks: u64,
    /// Total blocks spawned since boot
    pub blocks_spawned: u64,
    /// Player lane bounds
    pub lane: Lane,
    /// Player ball
    pub player: Player,
    /// Active blocks, in spawn order
    pub blocks: Vec<Block>,
    /// Balance values
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(viewport: Vec2, seed: u64) -> Self {
        Self::with_tuning(viewport, seed, Tuning::default())
    }

    /// Create a new game state with custom tuning
    pub fn with_tuning(viewport: Vec2, seed: u64, tuning: Tuning) -> Self {
        let lane = Lane::from_viewport(viewport, &tuning);
        // The ball must fit the lane, whatever the tuning asked for
        let player = Player {
            pos: Vec2::new(
                lane.center(),
                viewport.y * (1.0 - tuning.player_depth_fraction),
            ),
            radius: tuning.player_radius.min(lane.width / 2.0),
        };

        Self {
            seed,
            viewport,
            phase: GamePhase::Menu,
            score: 0,
            last_round_score: 0,
            fall_speed: tuning.base_fall_speed,
            spawn_timer: 0.0,
            time_ticks: 0,
            blocks_spawned: 0,
            lane,
            player,
            blocks: Vec::new(),
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset per-round state and enter Playing
    pub fn start_round(&mut self) {
        self.score = 0;
        self.blocks.clear();
        self.fall_speed = self.tuning.base_fall_speed;
        self.spawn_timer = 0.0;
        self.player.pos.x = self.lane.center();
        self.phase = GamePhase::Playing;
    }

    /// Hazard hit: wipe the round and enter Lost
    pub fn end_round(&mut self) {
        self.last_round_score = self.score;
        self.score = 0;
        self.blocks.clear();
        self.player.pos.x = self.lane.center();
        self.phase = GamePhase::Lost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

    fn viewport() -> Vec2 {
        Vec2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }

    #[test]
    fn test_init_geometry() {
        let state = GameState::new(viewport(), 1);

        // Lane: 80% of the width, centered
        assert!((state.lane.width - 0.8 * DEFAULT_VIEWPORT_WIDTH).abs() < 0.001);
        assert!((state.lane.left - 0.1 * DEFAULT_VIEWPORT_WIDTH).abs() < 0.001);

        // Player: horizontal center, 35% down from the top
        assert!((state.player.pos.x - DEFAULT_VIEWPORT_WIDTH / 2.0).abs() < 0.001);
        assert!((state.player.pos.y - 0.65 * DEFAULT_VIEWPORT_HEIGHT).abs() < 0.001);

        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert!(state.blocks.is_empty());
        assert_eq!(state.fall_speed, state.tuning.base_fall_speed);
    }

    #[test]
    fn test_bounding_box() {
        let player = Player {
            pos: Vec2::new(100.0, 200.0),
            radius: 40.0,
        };
        let bbox = player.bounding_box();
        assert_eq!(bbox, Rect::new(60.0, 160.0, 80.0, 80.0));
    }

    #[test]
    fn test_lane_clamp() {
        let state = GameState::new(viewport(), 1);
        let r = state.player.radius;

        let lo = state.lane.left + r;
        let hi = state.lane.right() - r;
        assert_eq!(state.lane.clamp(-1000.0, r), lo);
        assert_eq!(state.lane.clamp(1000.0, r), hi);
        assert_eq!(state.lane.clamp(400.0, r), 400.0);
    }

    #[test]
    fn test_narrow_lane_caps_radius_and_centers() {
        let tuning = Tuning {
            lane_width_fraction: 0.1,
            ..Default::default()
        }
        .sanitized();
        let state = GameState::with_tuning(viewport(), 1, tuning);

        // 72 px lane on a 720 px viewport: the default 40 px radius
        // shrinks so the ball still fits
        assert!(state.player.radius * 2.0 <= state.lane.width + 0.001);
        assert!(state.player.pos.x.is_finite());

        // Degenerate bounds fall back to the lane center
        let wide = state.lane.width;
        assert_eq!(state.lane.clamp(-1000.0, wide), state.lane.center());
        assert_eq!(state.lane.clamp(1000.0, wide), state.lane.center());
    }

    #[test]
    fn test_end_round_wipes_state() {
        let mut state = GameState::new(viewport(), 1);
        state.start_round();
        state.score = 7;
        state.player.pos.x = state.lane.left + state.player.radius;
        let id = state.next_entity_id();
        state.blocks.push(Block {
            id,
            kind: BlockKind::Hazard,
            rect: Rect::new(0.0, 0.0, 80.0, 80.0),
        });

        state.end_round();
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.score, 0);
        assert_eq!(state.last_round_score, 7);
        assert!(state.blocks.is_empty());
        assert_eq!(state.player.pos.x, state.lane.center());
    }

    #[test]
    fn test_start_round_resets_difficulty() {
        let mut state = GameState::new(viewport(), 1);
        state.start_round();
        state.fall_speed += 100.0;
        state.spawn_timer = 0.5;
        state.end_round();

        state.start_round();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.fall_speed, state.tuning.base_fall_speed);
        assert_eq!(state.spawn_timer, 0.0);
    }
}
