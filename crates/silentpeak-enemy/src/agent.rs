//! Per-enemy state machine and damage model.
//!
//! Plain data, no ECS dependency. The mission engine stores agents as
//! components and reacts to the returned [`HitOutcome`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use silentpeak_core::constants::{BASE_SHOT_DAMAGE, DAMAGE_PER_UPGRADE_LEVEL};
use silentpeak_core::enums::{AgentState, EnemyKind};
use silentpeak_core::types::EnemyId;

use crate::profiles::{get_profile, EnemyProfile};

/// Damage dealt by a body shot at the given damage-upgrade level.
pub fn shot_damage(damage_level: u8) -> u32 {
    BASE_SHOT_DAMAGE + DAMAGE_PER_UPGRADE_LEVEL * u32::from(damage_level)
}

/// What a hit did to an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Agent was already dead; nothing changed.
    Ignored,
    Killed { headshot: bool },
    /// First non-lethal hit: Alive → Alerted. The caller schedules the alarm.
    Alerted,
    /// Non-lethal hit on an agent that was already alerted.
    Wounded,
}

/// A hostile unit at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyAgent {
    pub id: EnemyId,
    pub kind: EnemyKind,
    health: i32,
    state: AgentState,
}

impl EnemyAgent {
    /// New agent with the kind's default health.
    pub fn new(id: EnemyId, kind: EnemyKind) -> Self {
        Self::with_health(id, kind, get_profile(kind).health)
    }

    pub fn with_health(id: EnemyId, kind: EnemyKind, health: i32) -> Self {
        Self {
            id,
            kind,
            health,
            state: AgentState::Alive,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state != AgentState::Dead
    }

    pub fn profile(&self) -> EnemyProfile {
        get_profile(self.kind)
    }

    /// Apply one hit. A headshot always kills; a body shot subtracts `damage`
    /// and kills at zero or below, otherwise alerts the agent.
    pub fn resolve_hit(&mut self, headshot: bool, damage: u32) -> HitOutcome {
        if self.state == AgentState::Dead {
            return HitOutcome::Ignored;
        }

        if headshot {
            self.health = 0;
            self.state = AgentState::Dead;
            debug!(enemy = %self.id, kind = ?self.kind, "headshot kill");
            return HitOutcome::Killed { headshot: true };
        }

        let damage = i32::try_from(damage).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(damage);

        if self.health <= 0 {
            self.state = AgentState::Dead;
            debug!(enemy = %self.id, kind = ?self.kind, "body shot kill");
            return HitOutcome::Killed { headshot: false };
        }

        match self.state {
            AgentState::Alive => {
                self.state = AgentState::Alerted;
                debug!(enemy = %self.id, health = self.health, "enemy alerted");
                HitOutcome::Alerted
            }
            _ => HitOutcome::Wounded,
        }
    }
}
