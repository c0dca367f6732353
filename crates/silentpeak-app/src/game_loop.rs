//! Game loop thread: owns the mission engine and applies commands one at a time.
//!
//! The controller is created inside this thread so nothing else can touch it.
//! Commands arrive via `mpsc` channel. After every step the latest snapshot is
//! stored in shared state for polling.
//!
//! Two pacings:
//! - stepped: mission time only moves on `Advance`, as fast as the CPU allows
//! - realtime: the clock ticks at 30Hz on the wall clock; `Advance` holds back
//!   the next command until that much time has passed

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use silentpeak_campaign::PlayerProfile;
use silentpeak_core::commands::PlayerCommand;
use silentpeak_core::constants::TICK_RATE;
use silentpeak_core::events::MissionEvent;
use silentpeak_core::state::MissionSnapshot;
use silentpeak_core::types::secs_to_ticks;
use silentpeak_sim::{MissionConfig, MissionController};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

type Controller = MissionController<PlayerProfile, Vec<MissionEvent>>;

#[derive(Debug, Clone, Default)]
pub struct LoopConfig {
    pub mission: MissionConfig,
    /// Pace ticks on the wall clock instead of stepping on demand.
    pub realtime: bool,
}

/// What the loop hands back when it exits.
#[derive(Debug)]
pub struct LoopReport {
    pub profile: PlayerProfile,
    pub events: Vec<MissionEvent>,
    /// Commands the engine rejected (logged as they happened).
    pub rejected: usize,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle yielding the final report.
pub fn spawn_game_loop(
    config: LoopConfig,
    profile: PlayerProfile,
    latest_snapshot: Arc<Mutex<Option<MissionSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopReport>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("silentpeak-game-loop".into())
        .spawn(move || {
            let mut session = Session::new(config.mission, profile, latest_snapshot);
            if config.realtime {
                session.run_realtime(&cmd_rx);
            } else {
                session.run_stepped(&cmd_rx);
            }
            session.into_report()
        })?;

    Ok((cmd_tx, handle))
}

/// Loop-side state: the controller plus bookkeeping.
struct Session {
    controller: Controller,
    latest_snapshot: Arc<Mutex<Option<MissionSnapshot>>>,
    events: Vec<MissionEvent>,
    rejected: usize,
}

impl Session {
    fn new(
        config: MissionConfig,
        profile: PlayerProfile,
        latest_snapshot: Arc<Mutex<Option<MissionSnapshot>>>,
    ) -> Self {
        Self {
            controller: MissionController::new(config, profile, Vec::new()),
            latest_snapshot,
            events: Vec::new(),
            rejected: 0,
        }
    }

    /// Block on each command. Runs until Shutdown command or channel disconnect.
    fn run_stepped(&mut self, cmd_rx: &mpsc::Receiver<GameLoopCommand>) {
        while let Ok(command) = cmd_rx.recv() {
            match command {
                GameLoopCommand::Player(cmd) => self.apply(cmd),
                GameLoopCommand::Advance { secs } => self.controller.advance_secs(secs),
                GameLoopCommand::Shutdown => break,
            }
            self.publish();
        }
        info!("game loop stopped");
    }

    /// Tick at 30Hz. Runs until Shutdown command or channel disconnect.
    fn run_realtime(&mut self, cmd_rx: &mpsc::Receiver<GameLoopCommand>) {
        let mut next_tick_time = Instant::now();
        let mut hold_ticks: u64 = 0;

        'outer: loop {
            // 1. Drain pending commands unless a wait is in progress
            while hold_ticks == 0 {
                match cmd_rx.try_recv() {
                    Ok(GameLoopCommand::Player(cmd)) => self.apply(cmd),
                    Ok(GameLoopCommand::Advance { secs }) => hold_ticks = secs_to_ticks(secs),
                    Ok(GameLoopCommand::Shutdown) => break 'outer,
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => break 'outer,
                }
            }

            // 2. Advance one tick (the engine ignores ticks unless Active)
            self.controller.tick();
            hold_ticks = hold_ticks.saturating_sub(1);
            self.publish();

            // 3. Sleep until next tick
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
        self.publish();
        info!("game loop stopped");
    }

    fn apply(&mut self, command: PlayerCommand) {
        debug!(?command, "applying command");
        if let Err(error) = self.controller.handle_command(command) {
            warn!(%error, "command rejected");
            self.rejected += 1;
        }
    }

    /// Collect emitted events and store the latest snapshot.
    fn publish(&mut self) {
        for event in self.controller.sink_mut().drain(..) {
            match &event {
                MissionEvent::MissionCompleted { outcome } => {
                    info!(coins = outcome.coins_earned, stars = outcome.stars, "mission completed")
                }
                MissionEvent::MissionFailed => info!("mission failed"),
                other => debug!(event = ?other, "mission event"),
            }
            self.events.push(event);
        }

        if let Ok(mut lock) = self.latest_snapshot.lock() {
            *lock = Some(self.controller.snapshot());
        }
    }

    fn into_report(self) -> LoopReport {
        let (profile, _) = self.controller.into_parts();
        LoopReport {
            profile,
            events: self.events,
            rejected: self.rejected,
        }
    }
}
