//! Core types and definitions for the SILENT PEAK mission engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! ids, level indices, commands, events, snapshots, errors, constants,
//! and the collaborator traits the engine is wired to.
//! It has no dependency on any runtime framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod traits;
pub mod types;
