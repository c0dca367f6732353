//! Deferred enemy alerts.
//!
//! An alerted enemy raises the alarm after a delay unless it dies first.
//! Each scheduled alert has a token so the owner can cancel it on death,
//! and the whole queue can be released when a mission ends.

use silentpeak_core::types::EnemyId;

/// Cancellation handle for one scheduled alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertToken(u64);

#[derive(Debug, Clone)]
struct ScheduledAlert {
    token: AlertToken,
    enemy: EnemyId,
    due_tick: u64,
}

/// Tick-driven queue of pending alerts.
#[derive(Debug, Clone, Default)]
pub struct AlertScheduler {
    pending: Vec<ScheduledAlert>,
    next_token: u64,
}

impl AlertScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, enemy: EnemyId, due_tick: u64) -> AlertToken {
        let token = AlertToken(self.next_token);
        self.next_token += 1;
        self.pending.push(ScheduledAlert {
            token,
            enemy,
            due_tick,
        });
        token
    }

    /// Returns false if the token already fired or was cancelled.
    pub fn cancel(&mut self, token: AlertToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|alert| alert.token != token);
        self.pending.len() != before
    }

    /// Drop every pending alert without firing. Returns how many were released.
    pub fn cancel_all(&mut self) -> usize {
        let released = self.pending.len();
        self.pending.clear();
        released
    }

    /// Remove and return alerts due at or before `now_tick`, in scheduling order.
    pub fn drain_due(&mut self, now_tick: u64) -> Vec<(AlertToken, EnemyId)> {
        let mut due = Vec::new();
        self.pending.retain(|alert| {
            if alert.due_tick <= now_tick {
                due.push((alert.token, alert.enemy));
                false
            } else {
                true
            }
        });
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_fire_when_due() {
        let mut scheduler = AlertScheduler::new();
        scheduler.schedule(EnemyId(1), 15);

        assert!(scheduler.drain_due(14).is_empty());
        let fired = scheduler.drain_due(15);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1, EnemyId(1));
        // Fires once.
        assert!(scheduler.drain_due(100).is_empty());
    }

    #[test]
    fn cancelled_alert_never_fires() {
        let mut scheduler = AlertScheduler::new();
        let token = scheduler.schedule(EnemyId(1), 10);
        assert!(scheduler.cancel(token));
        assert!(!scheduler.cancel(token));
        assert!(scheduler.drain_due(50).is_empty());
    }

    #[test]
    fn drain_keeps_scheduling_order() {
        let mut scheduler = AlertScheduler::new();
        scheduler.schedule(EnemyId(3), 20);
        scheduler.schedule(EnemyId(1), 5);
        scheduler.schedule(EnemyId(2), 40);

        let fired: Vec<EnemyId> = scheduler.drain_due(30).into_iter().map(|(_, e)| e).collect();
        assert_eq!(fired, vec![EnemyId(3), EnemyId(1)]);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn cancel_all_releases_everything() {
        let mut scheduler = AlertScheduler::new();
        scheduler.schedule(EnemyId(0), 1);
        scheduler.schedule(EnemyId(1), 2);
        assert_eq!(scheduler.cancel_all(), 2);
        assert!(scheduler.is_empty());
        assert!(scheduler.drain_due(u64::MAX).is_empty());
    }

    #[test]
    fn tokens_are_unique() {
        let mut scheduler = AlertScheduler::new();
        let a = scheduler.schedule(EnemyId(0), 1);
        let b = scheduler.schedule(EnemyId(0), 1);
        assert_ne!(a, b);
    }
}
