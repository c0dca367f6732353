#[cfg(test)]
mod tests {
    use silentpeak_core::constants::*;
    use silentpeak_core::enums::{AgentState, EnemyKind, MovementStrategy, SpawnZoneHint};
    use silentpeak_core::types::EnemyId;

    use crate::agent::{shot_damage, EnemyAgent, HitOutcome};
    use crate::profiles::get_profile;

    fn agent(health: i32) -> EnemyAgent {
        EnemyAgent::with_health(EnemyId(0), EnemyKind::Guard, health)
    }

    #[test]
    fn test_shot_damage_scales_with_upgrade_level() {
        assert_eq!(shot_damage(0), BASE_SHOT_DAMAGE);
        assert_eq!(shot_damage(1), 110);
        assert_eq!(shot_damage(5), 150);
    }

    #[test]
    fn test_headshot_kills_low_health_agent() {
        let mut a = agent(1);
        assert_eq!(a.resolve_hit(true, 100), HitOutcome::Killed { headshot: true });
        assert_eq!(a.state(), AgentState::Dead);
    }

    #[test]
    fn test_body_shot_kills_low_health_agent() {
        let mut a = agent(1);
        assert_eq!(a.resolve_hit(false, 100), HitOutcome::Killed { headshot: false });
        assert_eq!(a.state(), AgentState::Dead);
    }

    #[test]
    fn test_headshot_ignores_damage_and_health() {
        // Even zero damage kills on a headshot.
        let mut a = agent(10_000);
        assert_eq!(a.resolve_hit(true, 0), HitOutcome::Killed { headshot: true });
        assert!(!a.is_alive());
    }

    #[test]
    fn test_non_lethal_hit_alerts_exactly_once() {
        let mut a = agent(1000);
        assert_eq!(a.resolve_hit(false, 100), HitOutcome::Alerted);
        assert_eq!(a.state(), AgentState::Alerted);
        assert_eq!(a.health(), 900);

        // Re-hitting an alerted agent applies damage but does not re-alert.
        assert_eq!(a.resolve_hit(false, 100), HitOutcome::Wounded);
        assert_eq!(a.state(), AgentState::Alerted);
        assert_eq!(a.health(), 800);
    }

    #[test]
    fn test_exact_lethal_damage_is_a_kill() {
        let mut a = agent(100);
        assert_eq!(a.resolve_hit(false, 100), HitOutcome::Killed { headshot: false });
        assert_eq!(a.health(), 0);
    }

    #[test]
    fn test_alerted_agent_can_still_be_killed() {
        let mut a = agent(150);
        assert_eq!(a.resolve_hit(false, 100), HitOutcome::Alerted);
        assert_eq!(a.resolve_hit(false, 100), HitOutcome::Killed { headshot: false });
        assert_eq!(a.state(), AgentState::Dead);
    }

    #[test]
    fn test_dead_agent_ignores_hits() {
        let mut a = agent(50);
        a.resolve_hit(true, 0);
        assert_eq!(a.resolve_hit(false, 500), HitOutcome::Ignored);
        assert_eq!(a.resolve_hit(true, 500), HitOutcome::Ignored);
        assert_eq!(a.state(), AgentState::Dead);
        assert_eq!(a.health(), 0);
    }

    #[test]
    fn test_huge_damage_does_not_overflow() {
        let mut a = agent(100);
        assert_eq!(a.resolve_hit(false, u32::MAX), HitOutcome::Killed { headshot: false });
    }

    #[test]
    fn test_new_agent_uses_profile_health() {
        let heavy = EnemyAgent::new(EnemyId(4), EnemyKind::Heavy);
        assert_eq!(heavy.health(), get_profile(EnemyKind::Heavy).health);
        assert_eq!(heavy.state(), AgentState::Alive);
    }

    #[test]
    fn test_level_one_rifle_drops_infantry_in_one_body_shot() {
        let mut guard = EnemyAgent::new(EnemyId(0), EnemyKind::Guard);
        assert_eq!(
            guard.resolve_hit(false, shot_damage(1)),
            HitOutcome::Killed { headshot: false }
        );
    }

    #[test]
    fn test_heavy_survives_one_body_shot() {
        let mut heavy = EnemyAgent::new(EnemyId(0), EnemyKind::Heavy);
        assert_eq!(heavy.resolve_hit(false, shot_damage(5)), HitOutcome::Alerted);
    }

    #[test]
    fn test_profiles() {
        assert_eq!(get_profile(EnemyKind::Patrol).movement, MovementStrategy::Patrol);
        assert_eq!(get_profile(EnemyKind::Sniper).spawn_hint, SpawnZoneHint::Tower);
        assert_eq!(get_profile(EnemyKind::Guard).alert_delay_ticks(), 15);
        assert_eq!(get_profile(EnemyKind::Elite).alert_delay_ticks(), 12);
        assert_eq!(
            get_profile(EnemyKind::Elite).alert_delay_secs,
            ELITE_ALERT_DELAY_SECS
        );

        // Commanders raise the alarm faster than anyone else.
        let commander = get_profile(EnemyKind::Commander).alert_delay_ticks();
        for kind in EnemyKind::ALL {
            if kind != EnemyKind::Commander {
                assert!(commander < get_profile(kind).alert_delay_ticks());
            }
        }
    }
}
