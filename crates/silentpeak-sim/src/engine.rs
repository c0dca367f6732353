//! Mission engine: the authoritative state machine of one mission.
//!
//! `MissionController` owns the hecs world of enemy agents, resolves shots,
//! advances the clock in fixed ticks and reports results to the progression
//! store. Completely headless, so every mission can be replayed in tests.
//!
//! All public methods take `&mut self`; the owner serializes events.

use hecs::{Entity, World};
use tracing::{debug, info, warn};

use silentpeak_core::commands::PlayerCommand;
use silentpeak_core::enums::{AlarmSource, AlarmState, MissionPhase, WeaponStat};
use silentpeak_core::error::MissionError;
use silentpeak_core::events::MissionEvent;
use silentpeak_core::state::{EnemyView, MissionOutcome, MissionSnapshot, MissionStats};
use silentpeak_core::traits::{EventSink, ProgressionStore, SpawnPointProvider};
use silentpeak_core::types::{secs_to_ticks, EnemyId, LevelSpec, Placement, SimTime};
use silentpeak_enemy::agent::shot_damage;
use silentpeak_enemy::{EnemyAgent, HitOutcome};

use crate::alarm::{AlarmTracker, TriggerSignal};
use crate::roster::{RosterConfig, RosterGenerator};
use crate::scheduler::{AlertScheduler, AlertToken};
use crate::scoring;
use crate::spawn::ZoneSpawnTable;

/// Configuration for a mission controller.
#[derive(Debug, Clone)]
pub struct MissionConfig {
    /// RNG seed for spawn placement. Same seed = same placements.
    pub seed: u64,
    pub roster: RosterConfig,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            roster: RosterConfig::default(),
        }
    }
}

/// Summary of a successful `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionStart {
    pub level: LevelSpec,
    pub total_enemies: u32,
    /// A running mission was discarded to make room for this one.
    pub replaced_active: bool,
}

/// What a single shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResolution {
    /// Nothing changed: the mission is not active or the target is already dead.
    Ignored,
    Hit { enemy: EnemyId, outcome: HitOutcome },
    /// Counted as a miss. The alarm went off.
    Missed,
}

/// Pending alert of a wounded agent.
#[derive(Debug, Clone, Copy)]
struct PendingAlert(AlertToken);

/// The mission state machine.
pub struct MissionController<P, E> {
    world: World,
    /// Entities in roster order, indexed by `EnemyId`.
    roster: Vec<Entity>,
    time: SimTime,
    phase: MissionPhase,
    level: Option<LevelSpec>,
    stats: MissionStats,
    alarm: AlarmTracker,
    alerts: AlertScheduler,
    generator: RosterGenerator,
    spawner: Box<dyn SpawnPointProvider + Send>,
    outcome: Option<MissionOutcome>,
    store: P,
    sink: E,
}

impl<P: ProgressionStore, E: EventSink> MissionController<P, E> {
    /// Create an idle controller wired to its collaborators.
    pub fn new(config: MissionConfig, store: P, sink: E) -> Self {
        Self {
            world: World::new(),
            roster: Vec::new(),
            time: SimTime::default(),
            phase: MissionPhase::default(),
            level: None,
            stats: MissionStats::default(),
            alarm: AlarmTracker::new(),
            alerts: AlertScheduler::new(),
            generator: RosterGenerator::new(config.roster),
            spawner: Box::new(ZoneSpawnTable::new(config.seed)),
            outcome: None,
            store,
            sink,
        }
    }

    /// Replace the default spawn table.
    pub fn with_spawner(mut self, spawner: impl SpawnPointProvider + Send + 'static) -> Self {
        self.spawner = Box::new(spawner);
        self
    }

    /// Begin a fresh mission. A running mission is discarded first.
    ///
    /// Invalid levels and roster errors leave the current state untouched.
    pub fn start(&mut self, base: u32, sub_level: u32) -> Result<MissionStart, MissionError> {
        let level = LevelSpec::new(base, sub_level)?;
        let specs = self.generator.generate(level.sub_level, level.base)?;

        let replaced_active = matches!(self.phase, MissionPhase::Active | MissionPhase::Paused);
        if replaced_active {
            warn!(error = %MissionError::DuplicateStart, %level, "restarting mission");
        }
        self.reset();

        for (index, spec) in specs.iter().enumerate() {
            let id = EnemyId(index as u32);
            let placement = self.spawner.place(spec.zone_hint);
            let entity = self.world.spawn((EnemyAgent::new(id, spec.kind), placement));
            self.roster.push(entity);
        }

        let total_enemies = self.roster.len() as u32;
        self.level = Some(level);
        self.stats = MissionStats::for_roster(total_enemies);
        self.phase = MissionPhase::Active;

        info!(%level, total_enemies, "mission started");
        self.sink.emit(MissionEvent::MissionStarted {
            level,
            total_enemies,
        });

        Ok(MissionStart {
            level,
            total_enemies,
            replaced_active,
        })
    }

    /// Start the last played level again. `None` if nothing was played yet.
    pub fn restart(&mut self) -> Result<Option<MissionStart>, MissionError> {
        match self.level {
            Some(level) => self.start(level.base, level.sub_level).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve one fired round. `target` is the enemy whose hitbox the round
    /// reached, `None` when it hit the environment.
    pub fn resolve_shot(&mut self, target: Option<EnemyId>, headshot: bool) -> ShotResolution {
        if self.phase != MissionPhase::Active {
            return ShotResolution::Ignored;
        }

        let Some(enemy) = target else {
            self.miss();
            return ShotResolution::Missed;
        };

        let Some(entity) = self.entity(enemy) else {
            warn!(error = %MissionError::UnknownAgent(enemy), "shot counted as a miss");
            self.miss();
            return ShotResolution::Missed;
        };

        // Read at resolution time so upgrades bought mid-campaign apply.
        let damage = shot_damage(self.store.read_upgrade_level(WeaponStat::Damage));
        let (outcome, delay_ticks) = match self.world.get::<&mut EnemyAgent>(entity) {
            Ok(mut agent) => {
                let outcome = agent.resolve_hit(headshot, damage);
                (outcome, agent.profile().alert_delay_ticks())
            }
            Err(_) => (HitOutcome::Ignored, 0),
        };

        match outcome {
            HitOutcome::Ignored => {
                debug!(%enemy, "shot at a dead enemy ignored");
                return ShotResolution::Ignored;
            }
            HitOutcome::Killed { headshot } => self.on_kill(enemy, entity, headshot),
            HitOutcome::Alerted => {
                let due = self.time.tick + delay_ticks;
                let token = self.alerts.schedule(enemy, due);
                let _ = self.world.insert_one(entity, PendingAlert(token));
                debug!(%enemy, due_tick = due, "alert scheduled");
                self.sink.emit(MissionEvent::EnemyAlerted { enemy });
            }
            HitOutcome::Wounded => {}
        }

        ShotResolution::Hit { enemy, outcome }
    }

    /// Advance one tick. Fires alerts that came due. No-op unless Active.
    pub fn tick(&mut self) {
        if self.phase != MissionPhase::Active {
            return;
        }

        self.time.advance();
        self.stats.elapsed_secs = self.time.elapsed_secs;

        for (_token, enemy) in self.alerts.drain_due(self.time.tick) {
            let Some(entity) = self.entity(enemy) else {
                continue;
            };
            let _ = self.world.remove_one::<PendingAlert>(entity);
            let alive = self
                .world
                .get::<&EnemyAgent>(entity)
                .map(|agent| agent.is_alive())
                .unwrap_or(false);
            if alive {
                self.fail(AlarmSource::EnemyAlert { enemy });
                break;
            }
        }
    }

    /// Run as many ticks as cover `secs`. Stops early once the mission leaves Active.
    pub fn advance_secs(&mut self, secs: f64) {
        for _ in 0..secs_to_ticks(secs) {
            if self.phase != MissionPhase::Active {
                break;
            }
            self.tick();
        }
    }

    /// Active → Paused. Returns whether the phase changed.
    pub fn pause(&mut self) -> bool {
        if self.phase == MissionPhase::Active {
            self.phase = MissionPhase::Paused;
            info!("mission paused");
            true
        } else {
            false
        }
    }

    /// Paused → Active. Returns whether the phase changed.
    pub fn resume(&mut self) -> bool {
        if self.phase == MissionPhase::Paused {
            self.phase = MissionPhase::Active;
            info!("mission resumed");
            true
        } else {
            false
        }
    }

    /// Quit a running mission. Pending alerts are released without firing
    /// and nothing is recorded.
    pub fn abort(&mut self) -> bool {
        if !matches!(self.phase, MissionPhase::Active | MissionPhase::Paused) {
            return false;
        }
        let released = self.alerts.len();
        self.reset();
        info!(released, "mission aborted");
        self.sink.emit(MissionEvent::MissionAborted);
        true
    }

    /// Dispatch a serialized player command.
    pub fn handle_command(&mut self, command: PlayerCommand) -> Result<(), MissionError> {
        match command {
            PlayerCommand::StartMission { base, sub_level } => {
                self.start(base, sub_level)?;
            }
            PlayerCommand::Fire { target, headshot } => {
                self.resolve_shot(target, headshot);
            }
            PlayerCommand::Pause => {
                self.pause();
            }
            PlayerCommand::Resume => {
                self.resume();
            }
            PlayerCommand::Abort => {
                self.abort();
            }
            PlayerCommand::Restart => {
                self.restart()?;
            }
        }
        Ok(())
    }

    /// Complete visible state for presentation layers.
    pub fn snapshot(&self) -> MissionSnapshot {
        let enemies = self
            .roster
            .iter()
            .filter_map(|&entity| {
                let agent = self.world.get::<&EnemyAgent>(entity).ok()?;
                let placement = self.world.get::<&Placement>(entity).ok()?;
                let profile = agent.profile();
                Some(EnemyView {
                    id: agent.id,
                    kind: agent.kind,
                    state: agent.state(),
                    health: agent.health(),
                    placement: (*placement).clone(),
                    movement: profile.movement,
                    alert_radius: profile.alert_radius,
                })
            })
            .collect();

        MissionSnapshot {
            time: self.time,
            phase: self.phase,
            level: self.level,
            alarm: self.alarm.state(),
            alarm_source: self.alarm.source(),
            enemies,
            stats: self.stats.clone(),
            pending_alerts: self.alerts.len(),
            outcome: self.outcome.clone(),
        }
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Level of the current (or last) mission.
    pub fn level(&self) -> Option<LevelSpec> {
        self.level
    }

    pub fn stats(&self) -> &MissionStats {
        &self.stats
    }

    /// Set once the mission reaches Complete or Failed.
    pub fn outcome(&self) -> Option<&MissionOutcome> {
        self.outcome.as_ref()
    }

    pub fn alarm_state(&self) -> AlarmState {
        self.alarm.state()
    }

    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }

    /// Copy of an agent's current state.
    pub fn agent(&self, id: EnemyId) -> Option<EnemyAgent> {
        let entity = self.entity(id)?;
        let agent = self.world.get::<&EnemyAgent>(entity).ok()?;
        Some((*agent).clone())
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut P {
        &mut self.store
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    /// Tear down the controller and hand back its collaborators.
    pub fn into_parts(self) -> (P, E) {
        (self.store, self.sink)
    }

    fn entity(&self, id: EnemyId) -> Option<Entity> {
        self.roster.get(id.0 as usize).copied()
    }

    /// Drop every trace of the previous mission. The level is kept for `restart`.
    fn reset(&mut self) {
        self.alerts.cancel_all();
        self.world.clear();
        self.roster.clear();
        self.time = SimTime::default();
        self.phase = MissionPhase::Idle;
        self.stats = MissionStats::default();
        self.alarm = AlarmTracker::new();
        self.outcome = None;
    }

    fn miss(&mut self) {
        self.stats.shots_missed += 1;
        self.fail(AlarmSource::MissedShot);
    }

    fn on_kill(&mut self, enemy: EnemyId, entity: Entity, headshot: bool) {
        if let Ok(PendingAlert(token)) = self.world.remove_one::<PendingAlert>(entity) {
            self.alerts.cancel(token);
            debug!(%enemy, "pending alert cancelled");
        }

        self.stats.shots_hit += 1;
        if headshot {
            self.stats.headshots += 1;
        }
        self.stats.enemies_remaining = self.stats.enemies_remaining.saturating_sub(1);
        self.sink.emit(MissionEvent::EnemyKilled { enemy, headshot });

        if self.stats.enemies_remaining == 0 {
            self.complete();
        }
    }

    fn complete(&mut self) {
        let Some(level) = self.level else {
            return;
        };
        self.alerts.cancel_all();

        let outcome = scoring::score(level, &self.stats);
        self.phase = MissionPhase::Complete;

        self.store.credit(outcome.coins_earned);
        self.store.record_level_result(
            level,
            outcome.stars,
            outcome.completion_time_secs,
            outcome.headshots,
        );
        if let Some(next) = level.next() {
            self.store.unlock(next);
        }

        info!(
            %level,
            coins = outcome.coins_earned,
            stars = outcome.stars,
            secs = outcome.completion_time_secs,
            "mission complete"
        );
        self.outcome = Some(outcome.clone());
        self.sink.emit(MissionEvent::MissionCompleted { outcome });
    }

    fn fail(&mut self, source: AlarmSource) {
        if self.alarm.trigger(source) == TriggerSignal::AlreadyActive {
            return;
        }
        self.stats.alarm_triggered = true;

        let released = self.alerts.cancel_all();
        let stale: Vec<Entity> = self
            .world
            .query_mut::<&PendingAlert>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in stale {
            let _ = self.world.remove_one::<PendingAlert>(entity);
        }

        self.outcome = Some(scoring::failure_outcome(&self.stats));
        self.phase = MissionPhase::Failed;

        info!(?source, released, "alarm raised, mission failed");
        self.sink.emit(MissionEvent::AlarmTriggered { source });
        self.sink.emit(MissionEvent::MissionFailed);
    }
}
