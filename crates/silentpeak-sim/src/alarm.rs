//! Global base alarm. One-shot and irreversible within a mission.

use silentpeak_core::enums::{AlarmSource, AlarmState};

/// Result of [`AlarmTracker::trigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSignal {
    /// This call activated the alarm.
    NowActive,
    /// The alarm was already active; nothing changed.
    AlreadyActive,
}

/// Aggregates missed shots and enemy alerts into a single alarm.
#[derive(Debug, Clone, Default)]
pub struct AlarmTracker {
    state: AlarmState,
    source: Option<AlarmSource>,
}

impl AlarmTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent. Only the first call changes state and records its source.
    pub fn trigger(&mut self, source: AlarmSource) -> TriggerSignal {
        match self.state {
            AlarmState::Active => TriggerSignal::AlreadyActive,
            AlarmState::Inactive => {
                self.state = AlarmState::Active;
                self.source = Some(source);
                TriggerSignal::NowActive
            }
        }
    }

    pub fn state(&self) -> AlarmState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == AlarmState::Active
    }

    /// What raised the alarm, if it is active.
    pub fn source(&self) -> Option<AlarmSource> {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silentpeak_core::types::EnemyId;

    #[test]
    fn first_trigger_activates() {
        let mut alarm = AlarmTracker::new();
        assert!(!alarm.is_active());
        assert_eq!(alarm.trigger(AlarmSource::MissedShot), TriggerSignal::NowActive);
        assert!(alarm.is_active());
        assert_eq!(alarm.source(), Some(AlarmSource::MissedShot));
    }

    #[test]
    fn repeated_triggers_are_no_ops() {
        let mut alarm = AlarmTracker::new();
        alarm.trigger(AlarmSource::EnemyAlert { enemy: EnemyId(2) });
        let after_one = (alarm.state(), alarm.source());

        for _ in 0..10 {
            assert_eq!(
                alarm.trigger(AlarmSource::MissedShot),
                TriggerSignal::AlreadyActive
            );
        }
        // Same state as a single call, first source kept.
        assert_eq!((alarm.state(), alarm.source()), after_one);
    }
}
