//! Player commands sent from a frontend to the mission engine.
//!
//! Commands are applied one at a time, in arrival order.

use serde::{Deserialize, Serialize};

use crate::types::EnemyId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or restart from scratch) a mission on the given level.
    StartMission { base: u32, sub_level: u32 },
    /// Fire one round. `target` is the enemy whose hitbox the round reached,
    /// `None` when it hit the environment or nothing.
    Fire {
        #[serde(default)]
        target: Option<EnemyId>,
        #[serde(default)]
        headshot: bool,
    },
    /// Pause the mission clock.
    Pause,
    /// Resume the mission clock.
    Resume,
    /// Quit the current mission without recording anything.
    Abort,
    /// Start the last level again.
    Restart,
}
