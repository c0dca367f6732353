//! Roster generation: difficulty level → ordered list of enemy specs.
//!
//! Counts are fully determined by the sub-level. Only spawn-point selection
//! is random, and that is left to the spawn-point provider.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use silentpeak_core::constants::*;
use silentpeak_core::enums::{EnemyKind, SpawnZoneHint};
use silentpeak_core::error::RosterError;
use silentpeak_enemy::profiles::get_profile;

/// One roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub kind: EnemyKind,
    pub zone_hint: SpawnZoneHint,
}

impl EnemySpec {
    pub fn new(kind: EnemyKind) -> Self {
        Self {
            kind,
            zone_hint: get_profile(kind).spawn_hint,
        }
    }
}

/// Roster share of each kind, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeShares {
    pub guard: u32,
    pub patrol: u32,
    pub heavy: u32,
    pub sniper: u32,
    pub commander: u32,
    pub elite: u32,
}

impl Default for TypeShares {
    fn default() -> Self {
        Self {
            guard: GUARD_SHARE_PCT,
            patrol: PATROL_SHARE_PCT,
            heavy: HEAVY_SHARE_PCT,
            sniper: SNIPER_SHARE_PCT,
            commander: COMMANDER_SHARE_PCT,
            elite: ELITE_SHARE_PCT,
        }
    }
}

/// Roster tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Enemy count per sub-level, indexed by `sub_level - 1`.
    pub counts: Vec<u32>,
    pub shares: TypeShares,
    pub commander_min: u32,
    pub elite_min_sub_level: u32,
    /// When guards cannot absorb the rounding overflow, take the rest from
    /// patrols, heavies and snipers (in that order) instead of failing.
    pub spill_guard_deficit: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            counts: ENEMY_COUNT_TABLE.to_vec(),
            shares: TypeShares::default(),
            commander_min: COMMANDER_MIN,
            elite_min_sub_level: ELITE_MIN_SUB_LEVEL,
            spill_guard_deficit: true,
        }
    }
}

/// Per-kind counts for one roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPlan {
    pub guards: u32,
    pub patrols: u32,
    pub heavies: u32,
    pub snipers: u32,
    pub commanders: u32,
    pub elites: u32,
    /// Overflow the guards could not absorb and was taken from other kinds.
    pub spilled: u32,
}

impl RosterPlan {
    pub fn total(&self) -> u32 {
        self.guards + self.patrols + self.heavies + self.snipers + self.commanders + self.elites
    }

    pub fn count(&self, kind: EnemyKind) -> u32 {
        match kind {
            EnemyKind::Guard => self.guards,
            EnemyKind::Patrol => self.patrols,
            EnemyKind::Heavy => self.heavies,
            EnemyKind::Sniper => self.snipers,
            EnemyKind::Commander => self.commanders,
            EnemyKind::Elite => self.elites,
        }
    }
}

/// Ceiling of `total × pct / 100` in exact integer arithmetic.
fn ceil_share(total: u32, pct: u32) -> u32 {
    (total * pct).div_ceil(100)
}

/// Deterministic roster generator.
#[derive(Debug, Clone, Default)]
pub struct RosterGenerator {
    config: RosterConfig,
}

impl RosterGenerator {
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Enemy count for a sub-level. Out-of-table indices clamp to the nearest entry.
    pub fn enemy_count(&self, sub_level: u32) -> Result<u32, RosterError> {
        let last = self
            .config
            .counts
            .len()
            .checked_sub(1)
            .ok_or(RosterError::EmptyCountTable)?;
        let index = (sub_level.max(1) as usize - 1).min(last);
        Ok(self.config.counts[index])
    }

    /// Partition the sub-level's enemy count into per-kind counts.
    pub fn plan(&self, sub_level: u32) -> Result<RosterPlan, RosterError> {
        let total = self.enemy_count(sub_level)?;
        let shares = &self.config.shares;

        let mut plan = RosterPlan {
            guards: ceil_share(total, shares.guard),
            patrols: ceil_share(total, shares.patrol),
            heavies: ceil_share(total, shares.heavy),
            snipers: ceil_share(total, shares.sniper),
            commanders: ceil_share(total, shares.commander).max(self.config.commander_min),
            elites: if sub_level >= self.config.elite_min_sub_level {
                ceil_share(total, shares.elite)
            } else {
                0
            },
            spilled: 0,
        };

        let sum = plan.total();
        if sum < total {
            // Shares summing under 100% leave a shortfall; guards take it.
            plan.guards += total - sum;
        } else if sum > total {
            let overflow = sum - total;
            if overflow <= plan.guards {
                plan.guards -= overflow;
            } else {
                self.spill_overflow(&mut plan, total, overflow)?;
            }
        }

        debug!(sub_level, total, ?plan, "roster planned");
        Ok(plan)
    }

    fn spill_overflow(
        &self,
        plan: &mut RosterPlan,
        total: u32,
        overflow: u32,
    ) -> Result<(), RosterError> {
        let underflow = RosterError::GuardUnderflow {
            total,
            overflow,
            guards: plan.guards,
        };
        let residual = overflow - plan.guards;
        let absorbable = plan.patrols + plan.heavies + plan.snipers;
        if !self.config.spill_guard_deficit || residual > absorbable {
            return Err(underflow);
        }

        warn!(error = %underflow, residual, "guards exhausted, spilling overflow");
        plan.guards = 0;
        let mut left = residual;
        for slot in [&mut plan.patrols, &mut plan.heavies, &mut plan.snipers] {
            let take = left.min(*slot);
            *slot -= take;
            left -= take;
        }
        plan.spilled = residual;
        Ok(())
    }

    /// Ordered roster for a level: guards, patrols, heavies, snipers,
    /// commanders, elites. The base index does not affect counts.
    pub fn generate(&self, sub_level: u32, base_level: u32) -> Result<Vec<EnemySpec>, RosterError> {
        let plan = self.plan(sub_level)?;
        let mut specs = Vec::with_capacity(plan.total() as usize);
        for kind in EnemyKind::ALL {
            specs.extend((0..plan.count(kind)).map(|_| EnemySpec::new(kind)));
        }
        debug!(base_level, sub_level, enemies = specs.len(), "roster generated");
        Ok(specs)
    }
}

/// Generate a roster with the shipped configuration.
pub fn generate(sub_level: u32, base_level: u32) -> Result<Vec<EnemySpec>, RosterError> {
    RosterGenerator::default().generate(sub_level, base_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_share_is_exact() {
        assert_eq!(ceil_share(30, 30), 9);
        assert_eq!(ceil_share(20, 15), 3);
        assert_eq!(ceil_share(10, 15), 2);
        assert_eq!(ceil_share(3, 5), 1);
        assert_eq!(ceil_share(0, 40), 0);
    }

    #[test]
    fn plan_for_twenty_needs_no_adjustment() {
        let plan = RosterGenerator::default().plan(5).unwrap();
        assert_eq!(
            plan,
            RosterPlan {
                guards: 8,
                patrols: 6,
                heavies: 3,
                snipers: 2,
                commanders: 1,
                elites: 0,
                spilled: 0,
            }
        );
    }

    #[test]
    fn guards_absorb_overflow_on_thirty() {
        // Raw ceilings: 12 + 9 + 5 + 3 + 2 + 2 = 33 → guards lose 3.
        let plan = RosterGenerator::default().plan(8).unwrap();
        assert_eq!(plan.guards, 9);
        assert_eq!(plan.patrols, 9);
        assert_eq!(plan.heavies, 5);
        assert_eq!(plan.snipers, 3);
        assert_eq!(plan.commanders, 2);
        assert_eq!(plan.elites, 2);
        assert_eq!(plan.total(), 30);
    }

    #[test]
    fn first_sub_level_spills_past_guards() {
        // Raw ceilings: 2 + 1 + 1 + 1 + 1 = 6 for a roster of 3.
        let plan = RosterGenerator::default().plan(1).unwrap();
        assert_eq!(plan.guards, 0);
        assert_eq!(plan.patrols, 0);
        assert_eq!(plan.spilled, 1);
        assert_eq!(plan.total(), 3);
        assert_eq!(plan.commanders, 1);
    }

    #[test]
    fn strict_config_reports_guard_underflow() {
        let generator = RosterGenerator::new(RosterConfig {
            spill_guard_deficit: false,
            ..Default::default()
        });
        assert_eq!(
            generator.plan(1),
            Err(RosterError::GuardUnderflow {
                total: 3,
                overflow: 3,
                guards: 2,
            })
        );
        // Levels where guards suffice are unaffected.
        assert_eq!(generator.plan(2).unwrap().total(), 7);
    }

    #[test]
    fn unabsorbable_overflow_is_an_error() {
        let generator = RosterGenerator::new(RosterConfig {
            counts: vec![0],
            ..Default::default()
        });
        assert!(matches!(
            generator.plan(1),
            Err(RosterError::GuardUnderflow { total: 0, .. })
        ));
    }

    #[test]
    fn empty_table_is_an_error() {
        let generator = RosterGenerator::new(RosterConfig {
            counts: Vec::new(),
            ..Default::default()
        });
        assert_eq!(generator.enemy_count(1), Err(RosterError::EmptyCountTable));
    }

    #[test]
    fn shortfall_goes_to_guards() {
        let generator = RosterGenerator::new(RosterConfig {
            counts: vec![20],
            shares: TypeShares {
                guard: 0,
                patrol: 50,
                heavy: 0,
                sniper: 0,
                commander: 0,
                elite: 0,
            },
            ..Default::default()
        });
        let plan = generator.plan(1).unwrap();
        assert_eq!(plan.patrols, 10);
        assert_eq!(plan.commanders, 1);
        assert_eq!(plan.guards, 9);
    }

    #[test]
    fn sub_level_index_is_clamped() {
        let generator = RosterGenerator::default();
        assert_eq!(generator.enemy_count(0).unwrap(), 3);
        assert_eq!(generator.enemy_count(99).unwrap(), 30);
    }

    #[test]
    fn roster_order_follows_kinds() {
        let specs = generate(4, 1).unwrap();
        let kinds: Vec<EnemyKind> = specs.iter().map(|s| s.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| EnemyKind::ALL.iter().position(|x| x == k));
        assert_eq!(kinds, sorted);
        assert_eq!(specs[0].kind, EnemyKind::Guard);
        assert_eq!(specs[0].zone_hint, SpawnZoneHint::Elevated);
    }
}
