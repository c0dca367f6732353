//! Kind-specific capability profiles.
//!
//! Consolidates per-kind parameters so behavior is looked up, not dispatched.

use silentpeak_core::constants::*;
use silentpeak_core::enums::{EnemyKind, MovementStrategy, SpawnZoneHint};
use silentpeak_core::types::secs_to_ticks;

/// Capability profile for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Starting health.
    pub health: i32,
    /// Delay between being alerted and raising the base alarm (seconds).
    pub alert_delay_secs: f64,
    /// Radius in which the enemy notices trouble (meters).
    pub alert_radius: f64,
    pub movement: MovementStrategy,
    /// Where the roster places this kind.
    pub spawn_hint: SpawnZoneHint,
}

impl EnemyProfile {
    /// Alert delay in whole ticks.
    pub fn alert_delay_ticks(&self) -> u64 {
        secs_to_ticks(self.alert_delay_secs)
    }
}

/// Get the capability profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    let infantry = INFANTRY_HEALTH as i32;

    match kind {
        EnemyKind::Guard => EnemyProfile {
            health: infantry,
            alert_delay_secs: ALERT_DELAY_SECS,
            alert_radius: ALERT_RADIUS,
            movement: MovementStrategy::Stationary,
            spawn_hint: SpawnZoneHint::Elevated,
        },
        EnemyKind::Patrol => EnemyProfile {
            health: infantry,
            alert_delay_secs: ALERT_DELAY_SECS,
            alert_radius: ALERT_RADIUS,
            movement: MovementStrategy::Patrol,
            spawn_hint: SpawnZoneHint::PatrolGround,
        },
        EnemyKind::Heavy => EnemyProfile {
            health: infantry * 5 / 2,
            alert_delay_secs: ALERT_DELAY_SECS,
            alert_radius: ALERT_RADIUS,
            movement: MovementStrategy::Stationary,
            spawn_hint: SpawnZoneHint::Ground,
        },
        EnemyKind::Sniper => EnemyProfile {
            health: infantry,
            alert_delay_secs: ALERT_DELAY_SECS,
            alert_radius: ALERT_RADIUS * 1.5,
            movement: MovementStrategy::Stationary,
            spawn_hint: SpawnZoneHint::Tower,
        },
        EnemyKind::Commander => EnemyProfile {
            health: infantry * 3 / 2,
            alert_delay_secs: COMMANDER_ALERT_DELAY_SECS,
            alert_radius: ALERT_RADIUS * 2.0,
            movement: MovementStrategy::Stationary,
            spawn_hint: SpawnZoneHint::RooftopOrGround,
        },
        EnemyKind::Elite => EnemyProfile {
            health: infantry * 2,
            alert_delay_secs: ELITE_ALERT_DELAY_SECS,
            alert_radius: ALERT_RADIUS * 1.25,
            movement: MovementStrategy::Stationary,
            spawn_hint: SpawnZoneHint::Elevated,
        },
    }
}
