//! Frame description builder
//!
//! Turns a `GameState` into an ordered list of draw commands. The host
//! replays the list back-to-front: clear first, score text last. Text and
//! prompt images are references only; fonts and textures stay host-side.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::{SCORE_OFFSET_BELOW_PLAYER, SCORE_SHADOW_OFFSET, SCORE_TEXT_SCALE};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Rect};

/// One draw call, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the whole surface
    Clear { color: [f32; 4] },
    /// Filled rectangle
    Rect { rect: Rect, color: [f32; 4] },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Center-anchored text
    Text {
        text: String,
        center: Vec2,
        scale: f32,
        color: [f32; 4],
    },
    /// Full-screen prompt image; the host fits it with `fit_screen_rect`
    Screen { image: ScreenImage },
}

/// Prompt screens shown outside of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenImage {
    /// "Tap to start" artwork
    Start,
    /// "You lost" artwork
    Lost,
}

/// Build the draw list for the current frame
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Clear {
        color: colors::BACKGROUND,
    }];

    match state.phase {
        GamePhase::Menu => {
            cmds.push(DrawCmd::Screen {
                image: ScreenImage::Start,
            });
        }
        GamePhase::Lost => {
            cmds.push(DrawCmd::Screen {
                image: ScreenImage::Lost,
            });
        }
        GamePhase::Playing => {
            // Lane track band, centered on the player's row
            cmds.push(DrawCmd::Rect {
                rect: lane_band(state),
                color: colors::LANE,
            });

            cmds.push(DrawCmd::Circle {
                center: state.player.pos,
                radius: state.player.radius,
                color: colors::PLAYER,
            });

            let hazard_color = if settings.high_contrast {
                colors::HAZARD_CONTRAST
            } else {
                colors::HAZARD
            };
            for block in &state.blocks {
                let color = match block.kind {
                    crate::sim::BlockKind::Reward => colors::REWARD,
                    crate::sim::BlockKind::Hazard => hazard_color,
                };
                cmds.push(DrawCmd::Rect {
                    rect: block.rect,
                    color,
                });
            }

            // Score with its drop shadow painted first
            let score_center = Vec2::new(
                state.viewport.x / 2.0,
                state.player.pos.y - SCORE_OFFSET_BELOW_PLAYER,
            );
            let shadow_center =
                score_center + Vec2::new(SCORE_SHADOW_OFFSET, -SCORE_SHADOW_OFFSET);
            let text = state.score.to_string();
            cmds.push(DrawCmd::Text {
                text: text.clone(),
                center: shadow_center,
                scale: SCORE_TEXT_SCALE,
                color: colors::SCORE_SHADOW,
            });
            cmds.push(DrawCmd::Text {
                text,
                center: score_center,
                scale: SCORE_TEXT_SCALE,
                color: colors::SCORE,
            });
        }
    }

    cmds
}

/// The semi-transparent track rectangle under the player
fn lane_band(state: &GameState) -> Rect {
    let height = crate::consts::LANE_BAND_HEIGHT;
    Rect::new(
        state.lane.left,
        state.player.pos.y - height / 2.0,
        state.lane.width,
        height,
    )
}

/// Scale an image to fit the viewport with a 5% margin, centered.
///
/// Used by hosts to place the Start/Lost artwork, whose pixel size only
/// they know.
pub fn fit_screen_rect(image_size: Vec2, viewport: Vec2) -> Rect {
    let scale = (viewport.x / image_size.x).min(viewport.y / image_size.y) * 0.95;
    let size = image_size * scale;
    Rect::new(
        (viewport.x - size.x) / 2.0,
        (viewport.y - size.y) / 2.0,
        size.x,
        size.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
    use crate::sim::{Block, BlockKind};

    fn new_state() -> GameState {
        GameState::new(
            Vec2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            1,
        )
    }

    #[test]
    fn test_menu_scene() {
        let scene = build_scene(&new_state(), &Settings::default());
        assert_eq!(scene.len(), 2);
        assert!(matches!(scene[0], DrawCmd::Clear { .. }));
        assert_eq!(
            scene[1],
            DrawCmd::Screen {
                image: ScreenImage::Start
            }
        );
    }

    #[test]
    fn test_lost_scene() {
        let mut state = new_state();
        state.start_round();
        state.end_round();

        let scene = build_scene(&state, &Settings::default());
        assert_eq!(
            scene[1],
            DrawCmd::Screen {
                image: ScreenImage::Lost
            }
        );
    }

    #[test]
    fn test_playing_scene_order() {
        let mut state = new_state();
        state.start_round();
        let id = state.next_entity_id();
        state.blocks.push(Block {
            id,
            kind: BlockKind::Hazard,
            rect: Rect::new(100.0, 900.0, 80.0, 80.0),
        });

        let scene = build_scene(&state, &Settings::default());

        // Clear, lane, player, one block, shadow text, score text
        assert_eq!(scene.len(), 6);
        assert!(matches!(scene[0], DrawCmd::Clear { .. }));
        assert!(matches!(scene[1], DrawCmd::Rect { .. }));
        assert!(matches!(scene[2], DrawCmd::Circle { .. }));
        assert!(matches!(scene[3], DrawCmd::Rect { .. }));

        // Shadow is painted before the score, offset right and down
        let (shadow, score) = match (&scene[4], &scene[5]) {
            (
                DrawCmd::Text {
                    center: shadow, ..
                },
                DrawCmd::Text { center: score, .. },
            ) => (*shadow, *score),
            other => panic!("expected two text commands, got {other:?}"),
        };
        assert!(shadow.x > score.x);
        assert!(shadow.y < score.y);
    }

    #[test]
    fn test_high_contrast_hazard_color() {
        let mut state = new_state();
        state.start_round();
        let id = state.next_entity_id();
        state.blocks.push(Block {
            id,
            kind: BlockKind::Hazard,
            rect: Rect::new(100.0, 900.0, 80.0, 80.0),
        });

        let settings = Settings {
            high_contrast: true,
            ..Default::default()
        };
        let scene = build_scene(&state, &settings);
        assert!(scene.iter().any(|cmd| matches!(
            cmd,
            DrawCmd::Rect { color, .. } if *color == colors::HAZARD_CONTRAST
        )));
    }

    #[test]
    fn test_fit_screen_rect() {
        let viewport = Vec2::new(720.0, 1280.0);

        // Wide image: width-limited, 95% of the viewport width
        let rect = fit_screen_rect(Vec2::new(1440.0, 720.0), viewport);
        assert!((rect.width - 720.0 * 0.95).abs() < 0.001);
        assert!((rect.height - rect.width / 2.0).abs() < 0.001);

        // Centered both ways
        assert!((rect.center().x - 360.0).abs() < 0.001);
        assert!((rect.center().y - 640.0).abs() < 0.001);
    }
}
