//! Data-driven game balance
//!
//! Every gameplay number the simulation reads, plus the wave script. Loaded
//! from JSON; missing fields fall back to the shipped defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::waves::{WaveSpec, default_script};

/// Game balance and session setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Timing ===
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Seconds before the first wave launches
    pub first_wave_delay: f64,

    // === Movement (per tick) ===
    pub move_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,

    // === Player ===
    pub player_health: u32,

    // === Spawning ===
    /// How far past the screen edge enemies appear
    pub spawn_margin: u32,
    /// Spawn one tuna at the start of every wave on top of its counts
    pub wave_kickoff_tuna: bool,
    pub waves: Vec<WaveSpec>,

    // === Projectiles ===
    /// Distance from the screen center past which projectiles are dropped;
    /// `None` lets them fly forever
    pub projectile_despawn_distance: Option<f32>,

    /// Fixed run seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            tick_rate: TICK_RATE,
            first_wave_delay: FIRST_WAVE_DELAY,

            move_speed: MOVE_SPEED,
            bullet_speed: BULLET_SPEED,
            enemy_speed: ENEMY_SPEED,

            player_health: PLAYER_START_HEALTH,

            spawn_margin: SPAWN_MARGIN,
            wave_kickoff_tuna: true,
            waves: default_script(),

            projectile_despawn_distance: Some(PROJECTILE_DESPAWN_DISTANCE),

            seed: None,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = Self::from_json(&json)
            .with_context(|| format!("parsing tuning file {}", path.display()))?;
        log::info!(
            "Loaded tuning from {} ({} waves)",
            path.display(),
            tuning.waves.len()
        );
        Ok(tuning)
    }

    /// Seconds per simulation tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
