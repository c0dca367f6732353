use serde::{Deserialize, Serialize};
use thiserror::Error;

use silentpeak_core::constants::{
    BASE_SHOT_DAMAGE, DAMAGE_PER_UPGRADE_LEVEL, UPGRADE_COSTS, UPGRADE_LEVEL_MAX, UPGRADE_LEVEL_MIN,
};
use silentpeak_core::enums::WeaponStat;

/// Zoom gained per scope level.
pub const SCOPE_ZOOM_PER_LEVEL: f32 = 0.2;
/// Sway removed per stability level.
pub const STABILITY_SWAY_PER_LEVEL: f32 = 0.15;
/// Fire rate gained per reload level.
pub const RELOAD_RATE_PER_LEVEL: f32 = 0.1;

/// Cost of raising a stat from `current_level` to the next one.
/// Returns None if already at max level.
pub fn upgrade_cost(current_level: u8) -> Option<u32> {
    if current_level >= UPGRADE_LEVEL_MAX {
        return None;
    }
    UPGRADE_COSTS.get(usize::from(current_level)).copied()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("{} is already at max level", stat.as_str())]
    MaxLevel { stat: WeaponStat },

    #[error("insufficient coins: have {have}, need {need}")]
    InsufficientCoins { have: u32, need: u32 },
}

/// Upgrade level of each weapon stat, 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponUpgrades {
    pub scope: u8,
    pub stability: u8,
    pub reload: u8,
    pub damage: u8,
    pub silencer: u8,
}

impl Default for WeaponUpgrades {
    fn default() -> Self {
        Self {
            scope: UPGRADE_LEVEL_MIN,
            stability: UPGRADE_LEVEL_MIN,
            reload: UPGRADE_LEVEL_MIN,
            damage: UPGRADE_LEVEL_MIN,
            silencer: UPGRADE_LEVEL_MIN,
        }
    }
}

impl WeaponUpgrades {
    pub fn level_for(&self, stat: WeaponStat) -> u8 {
        match stat {
            WeaponStat::Scope => self.scope,
            WeaponStat::Stability => self.stability,
            WeaponStat::Reload => self.reload,
            WeaponStat::Damage => self.damage,
            WeaponStat::Silencer => self.silencer,
        }
    }

    fn level_mut(&mut self, stat: WeaponStat) -> &mut u8 {
        match stat {
            WeaponStat::Scope => &mut self.scope,
            WeaponStat::Stability => &mut self.stability,
            WeaponStat::Reload => &mut self.reload,
            WeaponStat::Damage => &mut self.damage,
            WeaponStat::Silencer => &mut self.silencer,
        }
    }

    /// Price of the next level of `stat`, or None at max level.
    pub fn next_cost(&self, stat: WeaponStat) -> Option<u32> {
        upgrade_cost(self.level_for(stat))
    }

    /// Raise `stat` by one level, paying from `coins`. Returns the cost paid.
    /// On error nothing changes.
    pub fn purchase(&mut self, stat: WeaponStat, coins: &mut u32) -> Result<u32, UpgradeError> {
        let cost = self
            .next_cost(stat)
            .ok_or(UpgradeError::MaxLevel { stat })?;
        if *coins < cost {
            return Err(UpgradeError::InsufficientCoins {
                have: *coins,
                need: cost,
            });
        }
        *coins -= cost;
        *self.level_mut(stat) += 1;
        Ok(cost)
    }
}

/// Handling characteristics derived from upgrade levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    pub zoom_multiplier: f32,
    /// Scales the base scope sway; lower is steadier.
    pub sway_factor: f32,
    pub fire_rate_multiplier: f32,
    /// Body-shot damage.
    pub damage: u32,
}

impl WeaponProfile {
    pub fn from_upgrades(upgrades: &WeaponUpgrades) -> Self {
        Self {
            zoom_multiplier: 1.0 + f32::from(upgrades.scope) * SCOPE_ZOOM_PER_LEVEL,
            sway_factor: 1.0 - f32::from(upgrades.stability) * STABILITY_SWAY_PER_LEVEL,
            fire_rate_multiplier: 1.0 + f32::from(upgrades.reload) * RELOAD_RATE_PER_LEVEL,
            damage: BASE_SHOT_DAMAGE + DAMAGE_PER_UPGRADE_LEVEL * u32::from(upgrades.damage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_indexed_by_current_level() {
        assert_eq!(upgrade_cost(1), Some(1000));
        assert_eq!(upgrade_cost(4), Some(8000));
        assert_eq!(upgrade_cost(5), None);
    }

    #[test]
    fn purchase_spends_and_levels_up() {
        let mut upgrades = WeaponUpgrades::default();
        let mut coins = 1500;
        assert_eq!(upgrades.purchase(WeaponStat::Damage, &mut coins), Ok(1000));
        assert_eq!(coins, 500);
        assert_eq!(upgrades.damage, 2);
    }

    #[test]
    fn insufficient_coins_changes_nothing() {
        let mut upgrades = WeaponUpgrades::default();
        let mut coins = 999;
        assert_eq!(
            upgrades.purchase(WeaponStat::Scope, &mut coins),
            Err(UpgradeError::InsufficientCoins {
                have: 999,
                need: 1000
            })
        );
        assert_eq!(coins, 999);
        assert_eq!(upgrades, WeaponUpgrades::default());
    }

    #[test]
    fn max_level_is_final() {
        let mut upgrades = WeaponUpgrades {
            silencer: UPGRADE_LEVEL_MAX,
            ..Default::default()
        };
        let mut coins = u32::MAX;
        assert_eq!(
            upgrades.purchase(WeaponStat::Silencer, &mut coins),
            Err(UpgradeError::MaxLevel {
                stat: WeaponStat::Silencer
            })
        );
        assert_eq!(coins, u32::MAX);
    }

    #[test]
    fn weapon_profile_at_max() {
        let upgrades = WeaponUpgrades {
            scope: 5,
            stability: 5,
            reload: 5,
            damage: 5,
            silencer: 5,
        };
        let profile = WeaponProfile::from_upgrades(&upgrades);
        assert!((profile.zoom_multiplier - 2.0).abs() < 1e-6);
        assert!((profile.sway_factor - 0.25).abs() < 1e-6);
        assert!((profile.fire_rate_multiplier - 1.5).abs() < 1e-6);
        assert_eq!(profile.damage, 150);
    }
}
