//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, scan_collisions};
pub use rect::Rect;
pub use state::{Block, BlockKind, GamePhase, GameState, Lane, Player};
pub use tick::{TickInput, tick};
