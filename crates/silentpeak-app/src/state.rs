//! Application state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use silentpeak_core::commands::PlayerCommand;
use silentpeak_core::state::MissionSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the mission engine.
    Player(PlayerCommand),
    /// Let `secs` of mission time pass before the next command.
    Advance { secs: f64 },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for the sender, absent until the loop is spawned
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after every step.
    pub latest_snapshot: Arc<Mutex<Option<MissionSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the game loop. False if no loop is attached or it has exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => guard
                .as_ref()
                .is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }

    /// Copy of the most recent snapshot, if the loop has published one.
    pub fn snapshot(&self) -> Option<MissionSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
