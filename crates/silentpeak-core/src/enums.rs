//! Enumeration types used throughout the mission engine.

use serde::{Deserialize, Serialize};

use crate::types::EnemyId;

/// Hostile unit archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Static guard on a tower or rooftop.
    Guard,
    /// Ground unit walking a patrol route.
    Patrol,
    /// Slower, tougher ground unit.
    Heavy,
    /// Long-range guard posted on a tower.
    Sniper,
    /// Raises the base alarm faster than anyone else.
    Commander,
    /// Late-game unit, only from sub-level 6.
    Elite,
}

impl EnemyKind {
    /// All kinds, in roster order.
    pub const ALL: [EnemyKind; 6] = [
        EnemyKind::Guard,
        EnemyKind::Patrol,
        EnemyKind::Heavy,
        EnemyKind::Sniper,
        EnemyKind::Commander,
        EnemyKind::Elite,
    ];
}

/// Per-enemy lifecycle. Only moves forward: Alive → Alerted → Dead, or Alive → Dead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    #[default]
    Alive,
    /// Survived a hit; the base alarm is scheduled.
    Alerted,
    Dead,
}

/// Mission lifecycle (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    #[default]
    Idle,
    Active,
    Paused,
    Complete,
    Failed,
}

impl MissionPhase {
    /// Complete and Failed accept no further shots.
    pub fn is_terminal(self) -> bool {
        matches!(self, MissionPhase::Complete | MissionPhase::Failed)
    }
}

/// Final result of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionResult {
    Success,
    Failure,
}

/// Global alarm state. One-shot: never returns to Inactive within a mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmState {
    #[default]
    Inactive,
    Active,
}

/// What raised the alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AlarmSource {
    /// A shot hit the environment or nothing at all.
    MissedShot,
    /// A wounded enemy's alert delay elapsed.
    EnemyAlert { enemy: EnemyId },
}

/// Concrete area of the map where enemies can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnZone {
    Tower,
    Rooftop,
    Ground,
    PatrolRoute,
}

/// Where a roster entry should be placed. Resolved by the spawn-point provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnZoneHint {
    /// Tower or rooftop.
    Elevated,
    /// Patrol start or open ground.
    PatrolGround,
    Ground,
    Tower,
    RooftopOrGround,
}

impl SpawnZoneHint {
    /// Candidate zones for this hint.
    pub fn zones(self) -> &'static [SpawnZone] {
        match self {
            SpawnZoneHint::Elevated => &[SpawnZone::Tower, SpawnZone::Rooftop],
            SpawnZoneHint::PatrolGround => &[SpawnZone::PatrolRoute, SpawnZone::Ground],
            SpawnZoneHint::Ground => &[SpawnZone::Ground],
            SpawnZoneHint::Tower => &[SpawnZone::Tower],
            SpawnZoneHint::RooftopOrGround => &[SpawnZone::Rooftop, SpawnZone::Ground],
        }
    }
}

/// How an enemy moves while unaware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementStrategy {
    #[default]
    Stationary,
    /// Walks between two waypoints.
    Patrol,
}

/// Weapon stat the player can upgrade in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponStat {
    Scope,
    Stability,
    Reload,
    Damage,
    Silencer,
}

impl WeaponStat {
    pub const ALL: [WeaponStat; 5] = [
        WeaponStat::Scope,
        WeaponStat::Stability,
        WeaponStat::Reload,
        WeaponStat::Damage,
        WeaponStat::Silencer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scope => "scope",
            Self::Stability => "stability",
            Self::Reload => "reload",
            Self::Damage => "damage",
            Self::Silencer => "silencer",
        }
    }
}
