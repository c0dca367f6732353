//! Mission engine for SILENT PEAK.
//!
//! Owns the hecs world of enemy agents, generates rosters, tracks the
//! alarm, schedules enemy alerts and scores finished missions.

pub mod alarm;
pub mod engine;
pub mod roster;
pub mod scheduler;
pub mod scoring;
pub mod spawn;

pub use engine::{MissionConfig, MissionController, MissionStart, ShotResolution};
pub use silentpeak_core as core;
