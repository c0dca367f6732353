//! Error types for the mission engine.
//!
//! Nothing here is fatal to the process: the worst a caller can get is a
//! mission ending in Failed.

use thiserror::Error;

use crate::types::EnemyId;

/// Errors raised while starting or driving a mission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    /// Level indices outside the configured ranges.
    #[error("level {base}-{sub_level} is outside the configured range")]
    InvalidLevel { base: u32, sub_level: u32 },

    /// `start` was called while a mission was already running. The running
    /// mission is discarded and a clean one takes its place.
    #[error("a mission is already active; resetting it")]
    DuplicateStart,

    /// A shot referenced an id that is not a living enemy of this roster.
    /// Treated as a miss.
    #[error("{0} is not a live enemy in the current roster")]
    UnknownAgent(EnemyId),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Errors in roster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("enemy count table is empty")]
    EmptyCountTable,

    /// Rounding overflow could not be absorbed without a negative guard count.
    #[error(
        "roster of {total} overflows by {overflow} but only {guards} guards can absorb it"
    )]
    GuardUnderflow { total: u32, overflow: u32, guards: u32 },
}
