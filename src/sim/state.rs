//! Game state and core simulation types
//!
//! Everything the render surface needs to draw a frame lives on [`GameState`]
//! as plain data; one-shot happenings are queued as [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::point_in_box;
use super::kinematics::{display_angle, heading_to};
use super::schedule::{Task, TaskQueue};
use super::waves::{WaveScheduler, spawn_point};
use crate::consts::*;
use crate::tuning::Tuning;

/// Overall session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waves are running and the player is alive
    Playing,
    /// Every wave launched and every enemy destroyed
    Won,
    /// Player health ran out
    Lost,
}

/// Banner text shown once when the session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Winner,
    Wasted,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Winner => "WINNER",
            Notice::Wasted => "WASTED",
        }
    }
}

/// Things that happened during a tick, for the render surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveStarted { wave: usize },
    EnemySpawned { id: u32, kind: EnemyKind, pos: Vec2 },
    ProjectileFired { id: u32, heading: f32 },
    EnemyHit { id: u32, health: u32 },
    EnemyKilled { id: u32, kind: EnemyKind },
    PlayerHit { health: u32 },
    /// Projectile left the world without hitting anything
    ProjectileExpired { id: u32 },
    Notice(Notice),
}

/// Running totals for the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub tuna_spawned: u32,
    pub nori_spawned: u32,
    pub enemies_killed: u32,
    pub projectiles_fired: u32,
    pub projectiles_expired: u32,
    pub damage_taken: u32,
}

/// The player's sprite; always drawn at the screen center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub center: Vec2,
    /// Degrees, screen convention (0 = up)
    pub heading: f32,
    pub health: u32,
}

impl Player {
    pub fn new(center: Vec2, health: u32) -> Self {
        Self {
            center,
            heading: 0.0,
            health,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Face the pointer
    pub fn retarget_toward(&mut self, target: Vec2) {
        self.heading = heading_to(self.center, target);
    }

    /// Returns true if this damage is what killed the player
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.saturating_sub(amount);
        was_alive && !self.is_alive()
    }

    pub fn display_angle(&self) -> f32 {
        display_angle(self.heading)
    }
}

/// Enemy variants; they only differ in health and sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    TunaCan,
    Nori,
}

impl EnemyKind {
    pub fn initial_health(&self) -> u32 {
        match self {
            EnemyKind::TunaCan => 3,
            EnemyKind::Nori => 10,
        }
    }

    /// Asset key for the renderer
    pub fn sprite_key(&self) -> &'static str {
        match self {
            EnemyKind::TunaCan => "tunacan",
            EnemyKind::Nori => "deepseanori",
        }
    }
}

/// A homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    /// Bottom-left corner of the sprite box
    pub pos: Vec2,
    pub heading: f32,
    pub health: u32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            heading: 0.0,
            health: kind.initial_health(),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ENEMY_SIZE / 2.0)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Point the enemy at `target` (measured from its center)
    pub fn retarget_toward(&mut self, target: Vec2) {
        self.heading = heading_to(self.center(), target);
    }

    /// Returns true if this damage is what destroyed the enemy
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.saturating_sub(amount);
        was_alive && !self.is_alive()
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point_in_box(self.pos, Vec2::splat(ENEMY_SIZE), point)
    }
}

/// A shot travelling on the heading it was fired with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Bottom-left corner; also the point used for hit tests
    pub pos: Vec2,
    pub heading: f32,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, heading: f32) -> Self {
        Self { id, pos, heading }
    }
}

/// Complete simulation state for one session
///
/// Events accumulate until [`GameState::drain_events`] is called, so a
/// surface that only reads state each frame must still drain once per frame.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    /// Screen size in pixels
    pub screen: Vec2,
    /// Session clock (seconds)
    pub clock: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: SessionPhase,
    pub player: Player,
    /// Enemy roster, insertion order
    pub enemies: Vec<Enemy>,
    /// Projectile roster, insertion order
    pub projectiles: Vec<Projectile>,
    /// Accumulated world scroll; the background is drawn shifted by this
    pub world_offset: Vec2,
    /// Scroll applied during the most recent tick
    pub last_world_delta: Vec2,
    pub waves: WaveScheduler,
    pub(crate) tasks: TaskQueue,
    pub stats: SessionStats,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a session; the first wave is queued `first_wave_delay` seconds in
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let screen = Vec2::new(tuning.screen_width, tuning.screen_height);
        let mut tasks = TaskQueue::new();
        tasks.schedule_at(tuning.first_wave_delay, Task::AdvanceWave);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            screen,
            clock: 0.0,
            time_ticks: 0,
            phase: SessionPhase::Playing,
            player: Player::new(screen / 2.0, tuning.player_health),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            world_offset: Vec2::ZERO,
            last_world_delta: Vec2::ZERO,
            waves: WaveScheduler::new(tuning.waves.clone(), tuning.wave_kickoff_tuna),
            tasks,
            stats: SessionStats::default(),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Where the player sits and enemies home toward
    pub fn screen_center(&self) -> Vec2 {
        self.screen / 2.0
    }

    pub fn is_terminal(&self) -> bool {
        self.phase != SessionPhase::Playing
    }

    /// Spawner tasks still waiting on the clock
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// When the next spawner task falls due on the session clock
    pub fn next_task_deadline(&self) -> Option<f64> {
        self.tasks.next_deadline()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the queued events to the render surface
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn an enemy of `kind` at a random point just off screen
    pub fn spawn_enemy(&mut self, kind: EnemyKind) -> u32 {
        let pos = spawn_point(
            &mut self.rng,
            self.screen.x,
            self.screen.y,
            self.tuning.spawn_margin,
        );
        self.spawn_enemy_at(kind, pos)
    }

    /// Append an enemy to the roster at `pos` (bottom-left corner)
    pub fn spawn_enemy_at(&mut self, kind: EnemyKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, kind, pos));
        match kind {
            EnemyKind::TunaCan => self.stats.tuna_spawned += 1,
            EnemyKind::Nori => self.stats.nori_spawned += 1,
        }
        log::debug!("Spawned {:?} #{} at ({}, {})", kind, id, pos.x, pos.y);
        self.push_event(GameEvent::EnemySpawned { id, kind, pos });
        id
    }

    /// Fire a projectile from the screen center along the player's heading
    pub fn fire_projectile(&mut self) -> u32 {
        let id = self.next_entity_id();
        let heading = self.player.heading;
        self.projectiles
            .push(Projectile::new(id, self.screen_center(), heading));
        self.stats.projectiles_fired += 1;
        self.push_event(GameEvent::ProjectileFired { id, heading });
        id
    }

    /// Run every spawner task that is due on the session clock
    pub fn run_due_tasks(&mut self) {
        while let Some((due, task)) = self.tasks.pop_due(self.clock) {
            match task {
                Task::AdvanceWave => {
                    if let Some(wave) = self.waves.advance_wave(due, &mut self.tasks) {
                        self.push_event(GameEvent::WaveStarted { wave });
                    }
                }
                Task::Spawn(kind) => {
                    self.spawn_enemy(kind);
                }
            }
        }
    }

    /// Enter a terminal phase; only the first call has any effect
    pub(crate) fn finish(&mut self, outcome: SessionPhase) {
        if self.phase != SessionPhase::Playing || outcome == SessionPhase::Playing {
            return;
        }
        self.phase = outcome;
        let notice = match outcome {
            SessionPhase::Won => Notice::Winner,
            _ => Notice::Wasted,
        };
        log::info!("{} after {} ticks", notice.text(), self.time_ticks);
        self.push_event(GameEvent::Notice(notice));
    }

    /// Window resized: keep the world anchored to the screen center
    pub fn resize(&mut self, width: f32, height: f32) {
        let new_size = Vec2::new(width, height);
        let shift = (new_size - self.screen) / 2.0;
        self.world_offset += shift;
        for enemy in &mut self.enemies {
            enemy.pos += shift;
        }
        self.screen = new_size;
        self.player.center = self.screen_center();
    }
}
