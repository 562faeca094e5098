//! Collision detection between the player and falling blocks
//!
//! The overlap tests themselves are plain AABB checks against the player's
//! bounding box. The part that matters is resolution order: every reward
//! touched in a tick counts, but the first hazard ends the scan.

use super::state::{Block, BlockKind, Player};

/// Outcome of scanning the block list against the player for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    /// IDs of reward blocks consumed this tick, in block order
    pub rewards: Vec<u32>,
    /// First hazard hit, if any
    pub hazard: Option<u32>,
}

impl CollisionOutcome {
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty() && self.hazard.is_none()
    }
}

/// Scan blocks in order against the player's bounding box.
///
/// Rewards overlapping the player are all collected. A hazard overlap
/// stops the scan immediately; rewards after it in the list are ignored,
/// matching the round-ending semantics.
pub fn scan_collisions(player: &Player, blocks: &[Block]) -> CollisionOutcome {
    let bbox = player.bounding_box();
    let mut outcome = CollisionOutcome::default();

    for block in blocks {
        if !block.rect.overlaps(&bbox) {
            continue;
        }
        match block.kind {
            BlockKind::Reward => outcome.rewards.push(block.id),
            BlockKind::Hazard => {
                outcome.hazard = Some(block.id);
                break;
            }
        }
    }

    outcome
}
