//! SILENT PEAK headless driver.
//!
//! Wires the mission engine to a player profile, runs it on a game-loop
//! thread fed by a command channel, and replays scripted sessions.

pub mod game_loop;
pub mod script;
pub mod state;

pub use silentpeak_core as core;
