//! Scoring: coins and star rating of a finished mission.
//!
//! Coins and stars use different thresholds (120 s vs 180 s, 100 % vs 80 %
//! headshots) and are computed independently.

use silentpeak_core::constants::*;
use silentpeak_core::enums::MissionResult;
use silentpeak_core::state::{MissionOutcome, MissionStats};
use silentpeak_core::types::LevelSpec;

/// Coin reward for a completed mission.
pub fn reward_coins(level: LevelSpec, stats: &MissionStats) -> u32 {
    let mut coins = REWARD_PER_SUB_LEVEL * level.sub_level;

    if stats.headshots == stats.total_enemies {
        coins += ALL_HEADSHOTS_BONUS;
    }
    if stats.elapsed_secs < SPEED_BONUS_SECS {
        coins += SPEED_BONUS;
    }
    if stats.shots_missed == 0 {
        coins += ACCURACY_BONUS;
    }
    coins
}

/// Star rating (1..=3) for a completed mission.
pub fn star_rating(stats: &MissionStats) -> u8 {
    let mut stars = 1;

    if stats.elapsed_secs < SECOND_STAR_SECS {
        stars += 1;
    }

    // headshots >= 0.8 × total, in integers
    let (num, den) = THIRD_STAR_HEADSHOT_RATIO;
    if u64::from(stats.headshots) * u64::from(den) >= u64::from(stats.total_enemies) * u64::from(num)
        && stats.shots_missed == 0
    {
        stars += 1;
    }

    stars.min(MAX_STARS)
}

/// Outcome of a mission that reached Complete.
pub fn score(level: LevelSpec, stats: &MissionStats) -> MissionOutcome {
    MissionOutcome {
        result: MissionResult::Success,
        coins_earned: reward_coins(level, stats),
        stars: star_rating(stats),
        completion_time_secs: stats.elapsed_secs as u32,
        headshots: stats.headshots,
        total_enemies: stats.total_enemies,
    }
}

/// Fixed zero-reward outcome of a failed mission.
pub fn failure_outcome(stats: &MissionStats) -> MissionOutcome {
    MissionOutcome {
        result: MissionResult::Failure,
        coins_earned: 0,
        stars: 0,
        completion_time_secs: stats.elapsed_secs as u32,
        headshots: stats.headshots,
        total_enemies: stats.total_enemies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u32, headshots: u32, missed: u32, secs: f64) -> MissionStats {
        MissionStats {
            shots_hit: total,
            shots_missed: missed,
            headshots,
            enemies_remaining: 0,
            total_enemies: total,
            alarm_triggered: false,
            elapsed_secs: secs,
        }
    }

    fn level(sub_level: u32) -> LevelSpec {
        LevelSpec { base: 1, sub_level }
    }

    #[test]
    fn perfect_first_level_pays_every_bonus() {
        let outcome = score(level(1), &stats(3, 3, 0, 90.0));
        assert_eq!(outcome.result, MissionResult::Success);
        assert_eq!(outcome.coins_earned, 100 + 200 + 150 + 100);
        assert_eq!(outcome.stars, 3);
        assert_eq!(outcome.completion_time_secs, 90);
    }

    #[test]
    fn slow_mission_loses_second_star_but_keeps_third() {
        // 25/30 headshots is >= 80 %, no misses, but 200 s is over 180 s.
        let s = stats(30, 25, 0, 200.0);
        assert_eq!(star_rating(&s), 2);
        assert_eq!(reward_coins(level(8), &s), 800 + 100);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(reward_coins(level(1), &stats(3, 0, 1, 120.0)), 100);
        assert_eq!(star_rating(&stats(3, 0, 1, 180.0)), 1);
        assert_eq!(star_rating(&stats(3, 0, 1, 179.9)), 2);
    }

    #[test]
    fn eighty_percent_headshots_is_enough_for_third_star() {
        assert_eq!(star_rating(&stats(10, 8, 0, 500.0)), 2);
        assert_eq!(star_rating(&stats(10, 7, 0, 500.0)), 1);
        // A miss denies the third star regardless of headshots.
        assert_eq!(star_rating(&stats(10, 10, 1, 500.0)), 1);
    }

    #[test]
    fn all_headshot_bonus_needs_every_kill() {
        let almost = stats(10, 9, 0, 300.0);
        assert_eq!(reward_coins(level(3), &almost), 300 + 100);
        let all = stats(10, 10, 0, 300.0);
        assert_eq!(reward_coins(level(3), &all), 300 + 200 + 100);
    }

    #[test]
    fn completion_time_is_truncated() {
        assert_eq!(score(level(2), &stats(7, 0, 0, 59.97)).completion_time_secs, 59);
    }

    #[test]
    fn failure_pays_nothing() {
        let outcome = failure_outcome(&stats(3, 2, 1, 30.0));
        assert_eq!(outcome.result, MissionResult::Failure);
        assert_eq!(outcome.coins_earned, 0);
        assert_eq!(outcome.stars, 0);
        assert_eq!(outcome.headshots, 2);
    }
}
