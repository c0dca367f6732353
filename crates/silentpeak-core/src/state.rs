//! Mission statistics, outcome records and the snapshot handed to presentation layers.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EnemyId, LevelSpec, Placement, SimTime};

/// Running statistics of one mission. Frozen into a [`MissionOutcome`] at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionStats {
    /// Killing shots.
    pub shots_hit: u32,
    pub shots_missed: u32,
    /// Killing shots that were headshots.
    pub headshots: u32,
    pub enemies_remaining: u32,
    pub total_enemies: u32,
    pub alarm_triggered: bool,
    pub elapsed_secs: f64,
}

impl MissionStats {
    /// Fresh statistics for a roster of `total_enemies`.
    pub fn for_roster(total_enemies: u32) -> Self {
        Self {
            enemies_remaining: total_enemies,
            total_enemies,
            ..Default::default()
        }
    }
}

/// Immutable result of one mission, produced exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionOutcome {
    pub result: MissionResult,
    pub coins_earned: u32,
    /// 0 on failure, 1..=3 on success.
    pub stars: u8,
    /// Whole seconds, truncated.
    pub completion_time_secs: u32,
    pub headshots: u32,
    pub total_enemies: u32,
}

/// An enemy as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub state: AgentState,
    pub health: i32,
    pub placement: Placement,
    pub movement: MovementStrategy,
    pub alert_radius: f64,
}

/// Complete visible mission state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionSnapshot {
    pub time: SimTime,
    pub phase: MissionPhase,
    pub level: Option<LevelSpec>,
    pub alarm: AlarmState,
    /// What raised the alarm, once it is active.
    pub alarm_source: Option<AlarmSource>,
    pub enemies: Vec<EnemyView>,
    pub stats: MissionStats,
    /// Pending scheduled alerts.
    pub pending_alerts: usize,
    pub outcome: Option<MissionOutcome>,
}
