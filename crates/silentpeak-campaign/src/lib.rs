//! Campaign progression for SILENT PEAK: player profile, weapon shop, save slots.
//!
//! `PlayerProfile` is the progression store the mission engine reports to.

pub mod profile;
pub mod save_load;
pub mod upgrades;

pub use profile::{LevelProgress, PlayerProfile};
pub use upgrades::{UpgradeError, WeaponProfile, WeaponUpgrades};
