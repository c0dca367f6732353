use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use silentpeak_app::game_loop::{spawn_game_loop, LoopConfig};
use silentpeak_app::script::parse_script;
use silentpeak_app::state::{AppState, GameLoopCommand};
use silentpeak_campaign::save_load::{self, SaveData, SaveError};
use silentpeak_campaign::PlayerProfile;
use silentpeak_core::enums::MissionPhase;
use silentpeak_core::state::MissionOutcome;
use silentpeak_core::types::LevelSpec;
use silentpeak_sim::MissionConfig;

#[derive(Parser)]
#[command(name = "silentpeak")]
#[command(about = "Headless SILENT PEAK mission runner", long_about = None)]
#[command(version)]
struct Args {
    /// JSON-lines script to replay (stdin when omitted)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Directory holding save slots
    #[arg(long, default_value = "saves")]
    save_dir: PathBuf,

    /// Save slot to load and write back
    #[arg(long, default_value = "main")]
    slot: String,

    /// Player name for a new profile
    #[arg(long, default_value = "Sniper")]
    player: String,

    /// Spawn placement seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pace the clock at 30Hz on the wall clock
    #[arg(long)]
    realtime: bool,
}

/// Printed to stdout when the session ends.
#[derive(Serialize)]
struct Summary {
    phase: MissionPhase,
    level: Option<LevelSpec>,
    outcome: Option<MissionOutcome>,
    coins: u32,
    events: usize,
    rejected_commands: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let text = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read script from stdin")?;
            text
        }
    };
    let steps = parse_script(&text)?;

    let profile = load_profile(&args)?;

    let state = AppState::new();
    let config = LoopConfig {
        mission: MissionConfig {
            seed: args.seed,
            ..Default::default()
        },
        realtime: args.realtime,
    };
    let (tx, handle) = spawn_game_loop(config, profile, Arc::clone(&state.latest_snapshot))
        .context("failed to spawn game loop")?;
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }

    info!(steps = steps.len(), "replaying script");
    for step in steps {
        if !state.send(step.into()) {
            break;
        }
    }
    state.send(GameLoopCommand::Shutdown);

    let report = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    let data = SaveData::new(report.profile, &args.slot);
    save_load::save_to_file(&args.save_dir, &args.slot, &data)
        .with_context(|| format!("failed to save slot '{}'", args.slot))?;
    info!(slot = %args.slot, dir = %args.save_dir.display(), "profile saved");

    let snapshot = state.snapshot().unwrap_or_default();
    let summary = Summary {
        phase: snapshot.phase,
        level: snapshot.level,
        outcome: snapshot.outcome,
        coins: data.profile.coins,
        events: report.events.len(),
        rejected_commands: report.rejected,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// Load the slot, or start a new profile if it does not exist yet.
fn load_profile(args: &Args) -> Result<PlayerProfile> {
    match save_load::load_from_file(&args.save_dir, &args.slot) {
        Ok(data) => {
            info!(slot = %args.slot, player = %data.profile.name, "profile loaded");
            Ok(data.profile)
        }
        Err(SaveError::NotFound(_)) => {
            info!(slot = %args.slot, player = %args.player, "new profile");
            Ok(PlayerProfile::new(args.player.as_str()))
        }
        Err(e) => Err(e).with_context(|| format!("failed to load slot '{}'", args.slot)),
    }
}
