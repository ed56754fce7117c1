//! Inkfantry entry point
//!
//! Headless demo: runs a session in idle mode (the simulation aims and fires
//! for itself) until it is won or lost, then prints the outcome as JSON.
//! Pass a tuning JSON file as the first argument to override the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use serde::Serialize;

use inkfantry::sim::{GameEvent, SessionPhase, SessionStats};
use inkfantry::{Runner, Tuning};

/// Give up after this much simulated time
const MAX_SESSION_SECS: f64 = 180.0;

#[derive(Serialize)]
struct Outcome<'a> {
    seed: u64,
    phase: SessionPhase,
    ticks: u64,
    seconds: f64,
    player_health: u32,
    waves_launched: usize,
    stats: &'a SessionStats,
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Inkfantry (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = tuning.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    log::debug!("Tuning: {}", tuning.to_json()?);

    let mut runner = Runner::new(tuning, seed);
    runner.input.idle_mode = true;
    let frame_dt = runner.state.tuning.tick_dt();

    while !runner.state.is_terminal() && runner.state.clock < MAX_SESSION_SECS {
        runner.update(frame_dt);
        for event in runner.drain_events() {
            match event {
                GameEvent::WaveStarted { wave } => {
                    log::info!("Next wave!! ({})", wave + 1);
                    if let Some(due) = runner.state.next_task_deadline() {
                        log::debug!("Next spawner task due at {:.2}s", due);
                    }
                }
                GameEvent::Notice(notice) => log::info!("{}", notice.text()),
                other => log::trace!("{:?}", other),
            }
        }
    }

    if !runner.state.is_terminal() {
        log::warn!("Session still running after {}s", MAX_SESSION_SECS);
    }

    let state = &runner.state;
    let outcome = Outcome {
        seed,
        phase: state.phase,
        ticks: state.time_ticks,
        seconds: state.clock,
        player_health: state.player.health,
        waves_launched: state.waves.index,
        stats: &state.stats,
    };
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
