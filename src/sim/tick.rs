//! Fixed timestep simulation tick
//!
//! Core game loop that advances one frame of gameplay. The RNG is injected
//! by the host so spawn behavior is reproducible under test.

use rand::Rng;

use super::collision::scan_collisions;
use super::rect::Rect;
use super::state::{Block, BlockKind, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left steering key held
    pub left: bool,
    /// Right steering key held
    pub right: bool,
    /// Accelerometer reading; positive means the device is tilted left
    pub tilt: f32,
    /// Tap/click/key edge that confirms a prompt screen
    pub confirm: bool,
}

/// Advance the game state by one fixed timestep.
///
/// On the Menu and Lost screens only the confirm input is consumed; the
/// round starts on the next tick after confirmation. A hazard hit ends
/// the tick immediately, so no blocks spawn into the freshly cleared list.
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R, dt: f32) {
    match state.phase {
        GamePhase::Menu | GamePhase::Lost => {
            if input.confirm {
                log::debug!("round start (seed {})", state.seed);
                state.start_round();
            }
        }
        GamePhase::Playing => {
            state.time_ticks += 1;

            steer_player(state, input, dt);
            advance_blocks(state, dt);
            if resolve_collisions(state) {
                return;
            }
            run_spawner(state, rng, dt);
        }
    }
}

/// Apply key and tilt steering, then clamp to the lane
fn steer_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let tuning = &state.tuning;

    let mut dx = 0.0;
    if input.left {
        dx -= tuning.key_speed * dt;
    }
    if input.right {
        dx += tuning.key_speed * dt;
    }
    // Tilting left reads positive and steers left
    dx -= input.tilt * tuning.tilt_speed * dt;

    let x = state.player.pos.x + dx;
    state.player.pos.x = state.lane.clamp(x, state.player.radius);
}

/// Move blocks down and cull the ones fully below the viewport
fn advance_blocks(state: &mut GameState, dt: f32) {
    let speed = state.fall_speed;
    for block in &mut state.blocks {
        block.fall(speed, dt);
    }
    state.blocks.retain(|b| !b.is_off_screen());
}

/// Apply collision results. Returns true if a hazard ended the round.
fn resolve_collisions(state: &mut GameState) -> bool {
    let outcome = scan_collisions(&state.player, &state.blocks);
    if outcome.is_empty() {
        return false;
    }

    if !outcome.rewards.is_empty() {
        state.score += outcome.rewards.len() as u32;
        state.fall_speed += state.tuning.fall_speed_increment * outcome.rewards.len() as f32;
        state.blocks.retain(|b| !outcome.rewards.contains(&b.id));
    }

    if outcome.hazard.is_some() {
        log::debug!(
            "hazard hit at score {} after {} ticks",
            state.score,
            state.time_ticks
        );
        state.end_round();
        return true;
    }

    false
}

/// Accumulate the spawn timer and emit a batch when the interval elapses
fn run_spawner<R: Rng>(state: &mut GameState, rng: &mut R, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer < state.tuning.spawn_interval {
        return;
    }
    state.spawn_timer = 0.0;

    let count = rng.random_range(state.tuning.spawn_batch_min..=state.tuning.spawn_batch_max);
    let block_width = state.tuning.block_width;
    let block_height = state.tuning.block_height;
    let max_x = (state.viewport.x - block_width).max(0.0);

    for _ in 0..count {
        let kind = if rng.random::<f32>() < state.tuning.reward_probability {
            BlockKind::Reward
        } else {
            BlockKind::Hazard
        };
        let x = rng.random_range(0.0..=max_x);
        let id = state.next_entity_id();
        state.blocks.push(Block {
            id,
            kind,
            rect: Rect::new(x, state.viewport.y, block_width, block_height),
        });
        state.blocks_spawned += 1;
    }
}
