//! Wave script and perimeter spawning
//!
//! The scheduler only owns wave timing. Spawns are handed to the task queue
//! and carried out by the session, which owns the enemy roster.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::schedule::{Task, TaskQueue};
use super::state::EnemyKind;
use crate::consts::SPAWN_WINDOW;

/// One entry of the wave script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveSpec {
    /// Tuna cans spread across the wave
    #[serde(default)]
    pub tunas: u32,
    /// Nori spread across the wave
    #[serde(default)]
    pub nori: u32,
    /// Seconds until the next wave starts
    pub time: f64,
}

impl WaveSpec {
    /// Number of enemies of `kind` this wave spreads out
    pub fn count(&self, kind: EnemyKind) -> u32 {
        match kind {
            EnemyKind::TunaCan => self.tunas,
            EnemyKind::Nori => self.nori,
        }
    }
}

/// The script the game ships with
pub fn default_script() -> Vec<WaveSpec> {
    vec![
        WaveSpec {
            tunas: 15,
            nori: 0,
            time: 30.0,
        },
        WaveSpec {
            tunas: 10,
            nori: 3,
            time: 4.0,
        },
    ]
}

/// Offsets (seconds from wave start) for `count` spawns spread over a wave
///
/// Spawns occupy the first `SPAWN_WINDOW` of the wave at an even interval.
/// An empty count yields nothing.
pub fn spawn_offsets(count: u32, duration: f64) -> impl Iterator<Item = f64> {
    let interval = if count == 0 {
        0.0
    } else {
        duration * SPAWN_WINDOW / count as f64
    };
    (0..count).map(move |i| i as f64 * interval)
}

/// Time-driven wave director
#[derive(Debug, Clone)]
pub struct WaveScheduler {
    /// Index of the next wave to launch; only ever increases
    pub index: usize,
    pub script: Vec<WaveSpec>,
    /// Spawn one extra tuna at the start of every wave, whatever its counts
    pub kickoff_tuna: bool,
}

impl WaveScheduler {
    pub fn new(script: Vec<WaveSpec>, kickoff_tuna: bool) -> Self {
        Self {
            index: 0,
            script,
            kickoff_tuna,
        }
    }

    /// No waves remain; terminal
    pub fn is_done(&self) -> bool {
        self.index >= self.script.len()
    }

    /// Launch the wave at `index`, queueing its spawns and the next launch
    ///
    /// `now` is the time the launch was due. Returns the launched wave's index,
    /// or `None` once the script is exhausted (in which case nothing changes).
    pub fn advance_wave(&mut self, now: f64, tasks: &mut TaskQueue) -> Option<usize> {
        let wave = self.script.get(self.index)?.clone();
        let launched = self.index;
        log::info!(
            "Wave {}: {} tuna, {} nori over {}s",
            launched + 1,
            wave.tunas,
            wave.nori,
            wave.time
        );

        // Kickoff goes first so it leads the roster at the wave start
        if self.kickoff_tuna {
            tasks.schedule_at(now, Task::Spawn(EnemyKind::TunaCan));
        }
        for kind in [EnemyKind::TunaCan, EnemyKind::Nori] {
            for offset in spawn_offsets(wave.count(kind), wave.time) {
                tasks.schedule_at(now + offset, Task::Spawn(kind));
            }
        }

        self.index += 1;
        tasks.schedule_at(now + wave.time, Task::AdvanceWave);
        Some(launched)
    }
}

/// Pick a point just outside the screen for an enemy to enter from
///
/// Half the time the point sits beside the left or right edge (any height,
/// corners included); otherwise above or below the screen. Distances past
/// the edge are drawn from `1..=margin`, so the point never lands inside
/// `[0, width] x [0, height]`.
pub fn spawn_point(rng: &mut impl Rng, width: f32, height: f32, margin: u32) -> Vec2 {
    let margin = margin.max(1) as i64;
    let (w, h) = (width.floor() as i64, height.floor() as i64);

    if rng.random_bool(0.5) {
        let x = if rng.random_bool(0.5) {
            -rng.random_range(1..=margin) as f32
        } else {
            width + rng.random_range(1..=margin) as f32
        };
        let y = rng.random_range(-margin..=h + margin);
        Vec2::new(x, y as f32)
    } else {
        let y = if rng.random_bool(0.5) {
            height + rng.random_range(1..=margin) as f32
        } else {
            -rng.random_range(1..=margin) as f32
        };
        let x = rng.random_range(0..=w);
        Vec2::new(x as f32, y)
    }
}
