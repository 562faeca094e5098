//! Lane Dodge entry point
//!
//! Headless demo runner: drives the sim at the fixed timestep with a small
//! autopilot and logs the outcome of each round. Rendering hosts embed the
//! library instead and replay the draw list from `render::build_scene`.

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use lane_dodge::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MAX_SUBSTEPS, SIM_DT};
use lane_dodge::render::{build_scene, shapes};
use lane_dodge::scoreboard::SessionScores;
use lane_dodge::settings::Settings;
use lane_dodge::sim::{BlockKind, GamePhase, GameState, TickInput, tick};

/// Demo rounds to play before exiting
const DEMO_ROUNDS: u32 = 3;
/// Cap per round, in simulated seconds
const DEMO_ROUND_SECONDS: f32 = 60.0;
/// Simulated frame cadence driving the substep accumulator
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(time_seed);
    log::info!("Lane Dodge demo starting (seed {seed})");

    let settings = Settings::default();
    let viewport = Vec2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT);
    let mut state = GameState::new(viewport, seed);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut scores = SessionScores::new();

    let max_ticks = (DEMO_ROUND_SECONDS / SIM_DT) as u64;

    for round in 1..=DEMO_ROUNDS {
        // Confirm through the start/retry prompt
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, &mut rng, SIM_DT);

        let round_start = state.time_ticks;
        let mut accumulator = 0.0f32;
        while state.phase == GamePhase::Playing && state.time_ticks - round_start < max_ticks {
            accumulator += FRAME_DT;
            let mut substeps = 0;
            while accumulator >= SIM_DT
                && substeps < MAX_SUBSTEPS
                && state.phase == GamePhase::Playing
            {
                let raw = autopilot(&state);
                let input = TickInput {
                    // Keys kick in for hard corrections, tilt does the rest
                    left: settings.shape_keys(raw > 2.0),
                    right: settings.shape_keys(raw < -2.0),
                    tilt: settings.shape_tilt(raw),
                    confirm: false,
                };
                tick(&mut state, &input, &mut rng, SIM_DT);
                accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Substep cap hit, drop the leftover time
                accumulator = 0.0;
            }
        }

        let duration = state.time_ticks - round_start;
        match state.phase {
            GamePhase::Lost => {
                log::info!(
                    "round {round}: lost with score {} after {:.1}s ({} blocks spawned so far)",
                    state.last_round_score,
                    duration as f32 * SIM_DT,
                    state.blocks_spawned,
                );
                scores.add_round(state.last_round_score, duration);
            }
            _ => {
                log::info!(
                    "round {round}: survived the demo window with score {}",
                    state.score
                );
                scores.add_round(state.score, duration);
                state.end_round();
            }
        }
    }

    if let Some(top) = scores.top_score() {
        log::info!("session best: {top}");
    }

    // Emit one frame description to show the embedding flow
    let cmds = build_scene(&state, &settings);
    let verts = shapes::tessellate(&cmds);
    log::debug!(
        "final frame: {} draw commands, {} vertices",
        cmds.len(),
        verts.len()
    );
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Pick a raw tilt value: chase the lowest reward, dodge hazards about to
/// cross the player's row. Positive tilt steers left.
fn autopilot(state: &GameState) -> f32 {
    let player = &state.player;
    let danger_ceiling = player.pos.y + 400.0;

    // Default target: drift back to the lane center
    let mut target_x = state.lane.center();

    if let Some(reward) = state
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Reward && b.rect.bottom() > player.pos.y)
        .min_by(|a, b| {
            a.rect
                .bottom()
                .partial_cmp(&b.rect.bottom())
                .unwrap_or(Ordering::Equal)
        })
    {
        target_x = reward.rect.center().x;
    }

    // A hazard in our column overrides everything: slide out sideways
    let in_our_column = |b: &&lane_dodge::sim::Block| {
        (b.rect.center().x - player.pos.x).abs() < b.rect.width / 2.0 + player.radius + 20.0
    };
    if let Some(hazard) = state
        .blocks
        .iter()
        .filter(|b| {
            b.kind == BlockKind::Hazard
                && b.rect.bottom() > player.pos.y
                && b.rect.bottom() < danger_ceiling
        })
        .filter(in_our_column)
        .min_by(|a, b| {
            a.rect
                .bottom()
                .partial_cmp(&b.rect.bottom())
                .unwrap_or(Ordering::Equal)
        })
    {
        target_x = if hazard.rect.center().x > player.pos.x {
            hazard.rect.left() - player.radius - 30.0
        } else {
            hazard.rect.right() + player.radius + 30.0
        };
    }

    let error = target_x - player.pos.x;
    (-error / 60.0).clamp(-3.0, 3.0)
}
