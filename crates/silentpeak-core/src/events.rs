//! Events emitted by the mission engine for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AlarmSource;
use crate::state::MissionOutcome;
use crate::types::{EnemyId, LevelSpec};

/// Discrete mission events. Presentation layers subscribe through an
/// [`EventSink`](crate::traits::EventSink); the engine does not care how
/// they are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MissionEvent {
    /// A fresh mission instance became Active.
    MissionStarted { level: LevelSpec, total_enemies: u32 },
    /// An enemy survived a hit and will raise the alarm unless killed.
    EnemyAlerted { enemy: EnemyId },
    /// An enemy died.
    EnemyKilled { enemy: EnemyId, headshot: bool },
    /// The base alarm went off. Always followed by `MissionFailed`.
    AlarmTriggered { source: AlarmSource },
    /// Every enemy eliminated without an alarm.
    MissionCompleted { outcome: MissionOutcome },
    MissionFailed,
    /// The player quit; nothing was recorded.
    MissionAborted,
}
