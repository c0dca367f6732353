//! Enemy agents for SILENT PEAK.
//!
//! Implements the per-enemy state machine, the shot damage model and the
//! capability table that replaces per-type subclasses.

pub mod agent;
pub mod profiles;

pub use agent::{EnemyAgent, HitOutcome};
pub use silentpeak_core as core;

#[cfg(test)]
mod tests;
