//! Player profile: coins, weapon upgrades and per-level records.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use silentpeak_core::constants::STARTING_COINS;
use silentpeak_core::enums::WeaponStat;
use silentpeak_core::traits::ProgressionStore;
use silentpeak_core::types::LevelSpec;

use crate::upgrades::{UpgradeError, WeaponProfile, WeaponUpgrades};

/// Best results on one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub base: u32,
    pub sub_level: u32,
    pub unlocked: bool,
    /// 0..=3.
    pub stars: u8,
    /// Whole seconds; 0 = no recorded time.
    pub best_time: u32,
    pub headshots: u32,
}

impl LevelProgress {
    fn unlocked(level: LevelSpec) -> Self {
        Self {
            base: level.base,
            sub_level: level.sub_level,
            unlocked: true,
            stars: 0,
            best_time: 0,
            headshots: 0,
        }
    }

    pub fn level(&self) -> LevelSpec {
        LevelSpec {
            base: self.base,
            sub_level: self.sub_level,
        }
    }

    /// Keep the better of the stored record and a new result.
    fn merge(&mut self, stars: u8, time_secs: u32, headshots: u32) {
        self.stars = self.stars.max(stars);
        if self.best_time == 0 || time_secs < self.best_time {
            self.best_time = time_secs;
        }
        self.headshots = self.headshots.max(headshots);
    }
}

/// Everything persisted about one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub coins: u32,
    pub upgrades: WeaponUpgrades,
    pub levels: Vec<LevelProgress>,
    pub total_missions_completed: u32,
    pub total_headshots: u32,
    pub total_coins_earned: u32,
}

impl PlayerProfile {
    /// New player: starting coins, every stat at level 1, level 1-1 unlocked.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coins: STARTING_COINS,
            upgrades: WeaponUpgrades::default(),
            levels: vec![LevelProgress::unlocked(LevelSpec {
                base: 1,
                sub_level: 1,
            })],
            total_missions_completed: 0,
            total_headshots: 0,
            total_coins_earned: 0,
        }
    }

    pub fn level_progress(&self, level: LevelSpec) -> Option<&LevelProgress> {
        self.levels.iter().find(|p| p.level() == level)
    }

    /// Spend coins if the balance covers `amount`.
    pub fn spend_coins(&mut self, amount: u32) -> bool {
        if self.coins < amount {
            return false;
        }
        self.coins -= amount;
        true
    }

    /// Buy the next level of `stat`. Returns the cost paid.
    pub fn buy_upgrade(&mut self, stat: WeaponStat) -> Result<u32, UpgradeError> {
        let cost = self.upgrades.purchase(stat, &mut self.coins)?;
        info!(
            stat = stat.as_str(),
            level = self.upgrades.level_for(stat),
            cost,
            "weapon upgraded"
        );
        Ok(cost)
    }

    pub fn weapon(&self) -> WeaponProfile {
        WeaponProfile::from_upgrades(&self.upgrades)
    }

    /// Total stars over every level.
    pub fn total_stars(&self) -> u32 {
        self.levels.iter().map(|p| u32::from(p.stars)).sum()
    }
}

impl ProgressionStore for PlayerProfile {
    fn read_upgrade_level(&self, stat: WeaponStat) -> u8 {
        self.upgrades.level_for(stat)
    }

    fn credit(&mut self, coins: u32) {
        self.coins = self.coins.saturating_add(coins);
        self.total_coins_earned = self.total_coins_earned.saturating_add(coins);
        debug!(coins, balance = self.coins, "coins credited");
    }

    fn record_level_result(&mut self, level: LevelSpec, stars: u8, time_secs: u32, headshots: u32) {
        match self.levels.iter_mut().find(|p| p.level() == level) {
            Some(progress) => progress.merge(stars, time_secs, headshots),
            None => {
                let mut progress = LevelProgress::unlocked(level);
                progress.merge(stars, time_secs, headshots);
                self.levels.push(progress);
            }
        }
        self.total_missions_completed += 1;
        self.total_headshots += headshots;
    }

    fn is_level_unlocked(&self, level: LevelSpec) -> bool {
        self.level_progress(level).is_some_and(|p| p.unlocked)
    }

    fn unlock(&mut self, level: LevelSpec) {
        if self.level_progress(level).is_none() {
            info!(%level, "level unlocked");
            self.levels.push(LevelProgress::unlocked(level));
        }
    }
}
