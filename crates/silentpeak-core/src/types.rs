//! Fundamental identifiers, level indices and simulation time.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::MissionError;

/// Stable identifier of an enemy within one mission (roster index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Two-dimensional level index: base = location, sub-level = difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelSpec {
    pub base: u32,
    pub sub_level: u32,
}

impl LevelSpec {
    /// Validated constructor. Rejects indices outside the configured ranges.
    pub fn new(base: u32, sub_level: u32) -> Result<Self, MissionError> {
        let level = Self { base, sub_level };
        if level.is_valid() {
            Ok(level)
        } else {
            Err(MissionError::InvalidLevel { base, sub_level })
        }
    }

    pub fn is_valid(&self) -> bool {
        (BASE_LEVEL_MIN..=BASE_LEVEL_MAX).contains(&self.base)
            && (SUB_LEVEL_MIN..=SUB_LEVEL_MAX).contains(&self.sub_level)
    }

    /// The level unlocked by completing this one, if any.
    pub fn next(&self) -> Option<LevelSpec> {
        if self.sub_level < SUB_LEVEL_MAX {
            Some(LevelSpec {
                base: self.base,
                sub_level: self.sub_level + 1,
            })
        } else if self.base < BASE_LEVEL_MAX {
            Some(LevelSpec {
                base: self.base + 1,
                sub_level: SUB_LEVEL_MIN,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for LevelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.sub_level)
    }
}

/// Concrete placement of an enemy, as produced by the spawn-point provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    /// Waypoints for patrolling units; empty for stationary ones.
    pub patrol_route: Vec<Vec3>,
}

impl Placement {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            patrol_route: Vec::new(),
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick. Elapsed time is recomputed from the tick count.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = ticks_to_secs(self.tick);
    }
}

/// Convert seconds to whole ticks, rounding up so a delay never fires early.
pub fn secs_to_ticks(secs: f64) -> u64 {
    (secs * TICK_RATE as f64).ceil().max(0.0) as u64
}

/// Convert a tick count to seconds.
pub fn ticks_to_secs(ticks: u64) -> f64 {
    ticks as f64 / TICK_RATE as f64
}
