//! Collaborator interfaces the engine is wired to at construction.
//!
//! The engine never reaches for process-wide state: progression, event
//! delivery and spawn geometry all arrive through these traits.

use crate::enums::{SpawnZoneHint, WeaponStat};
use crate::events::MissionEvent;
use crate::types::{LevelSpec, Placement};

/// Persistent player progression, owned outside the engine.
///
/// The engine reads upgrade levels while resolving shots and writes results
/// when a mission completes. It never sees the storage format.
pub trait ProgressionStore {
    /// Current upgrade level of a weapon stat (1..=5).
    fn read_upgrade_level(&self, stat: WeaponStat) -> u8;

    fn credit(&mut self, coins: u32);

    fn record_level_result(
        &mut self,
        level: LevelSpec,
        stars: u8,
        time_secs: u32,
        headshots: u32,
    );

    fn is_level_unlocked(&self, level: LevelSpec) -> bool;

    fn unlock(&mut self, level: LevelSpec);
}

/// Receiver of mission events (UI, audio, logs).
pub trait EventSink {
    fn emit(&mut self, event: MissionEvent);
}

/// Buffering sink, drained by the owner.
impl EventSink for Vec<MissionEvent> {
    fn emit(&mut self, event: MissionEvent) {
        self.push(event);
    }
}

/// Turns a zone hint into concrete geometry. Opaque to the engine.
pub trait SpawnPointProvider {
    fn place(&mut self, hint: SpawnZoneHint) -> Placement;
}
