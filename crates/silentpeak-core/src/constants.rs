//! Mission constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Level bounds ---

/// Lowest base (location) index.
pub const BASE_LEVEL_MIN: u32 = 1;

/// Highest base (location) index.
pub const BASE_LEVEL_MAX: u32 = 20;

/// Lowest sub-level (difficulty tier) index.
pub const SUB_LEVEL_MIN: u32 = 1;

/// Highest sub-level (difficulty tier) index.
pub const SUB_LEVEL_MAX: u32 = 8;

// --- Roster ---

/// Enemy count per sub-level, indexed by `sub_level - 1`.
pub const ENEMY_COUNT_TABLE: [u32; 8] = [3, 7, 10, 15, 20, 24, 27, 30];

/// Type shares of the roster, in whole percent. Each share is rounded up.
pub const GUARD_SHARE_PCT: u32 = 40;
pub const PATROL_SHARE_PCT: u32 = 30;
pub const HEAVY_SHARE_PCT: u32 = 15;
pub const SNIPER_SHARE_PCT: u32 = 10;
pub const COMMANDER_SHARE_PCT: u32 = 5;
pub const ELITE_SHARE_PCT: u32 = 5;

/// Every roster carries at least this many commanders.
pub const COMMANDER_MIN: u32 = 1;

/// Elites only appear from this sub-level upwards.
pub const ELITE_MIN_SUB_LEVEL: u32 = 6;

// --- Damage model ---

/// Damage of a body shot before upgrades.
pub const BASE_SHOT_DAMAGE: u32 = 100;

/// Extra damage per damage-upgrade level.
pub const DAMAGE_PER_UPGRADE_LEVEL: u32 = 10;

// --- Enemy capabilities ---

/// Default health for light infantry.
pub const INFANTRY_HEALTH: u32 = 100;

/// Default delay between an enemy being alerted and the base alarm (seconds).
pub const ALERT_DELAY_SECS: f64 = 0.5;

/// Commanders raise the alarm faster.
pub const COMMANDER_ALERT_DELAY_SECS: f64 = 0.25;

/// Elites react faster than infantry, slower than commanders.
pub const ELITE_ALERT_DELAY_SECS: f64 = 0.4;

/// Default alert radius (meters). Informational for presentation.
pub const ALERT_RADIUS: f64 = 20.0;

// --- Scoring ---

/// Coins per sub-level on completion.
pub const REWARD_PER_SUB_LEVEL: u32 = 100;

/// Bonus when every kill was a headshot.
pub const ALL_HEADSHOTS_BONUS: u32 = 200;

/// Bonus for finishing under [`SPEED_BONUS_SECS`].
pub const SPEED_BONUS: u32 = 150;

/// Time limit for the speed bonus (seconds).
pub const SPEED_BONUS_SECS: f64 = 120.0;

/// Bonus for zero missed shots.
pub const ACCURACY_BONUS: u32 = 100;

/// Time limit for the second star (seconds).
pub const SECOND_STAR_SECS: f64 = 180.0;

/// Third star needs at least this headshot ratio, as `numerator / denominator`.
pub const THIRD_STAR_HEADSHOT_RATIO: (u32, u32) = (4, 5);

/// Highest star rating.
pub const MAX_STARS: u8 = 3;

// --- Progression ---

/// Coins granted to a new player.
pub const STARTING_COINS: u32 = 1000;

/// Lowest weapon upgrade level.
pub const UPGRADE_LEVEL_MIN: u8 = 1;

/// Highest weapon upgrade level.
pub const UPGRADE_LEVEL_MAX: u8 = 5;

/// Price of the next upgrade, indexed by the current level.
pub const UPGRADE_COSTS: [u32; 5] = [500, 1000, 2000, 4000, 8000];
