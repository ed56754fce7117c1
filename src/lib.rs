//! Inkfantry - a top-down wave shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, entities, waves, collisions, tick)
//! - `runner`: Fixed-timestep driver that feeds input events and frame time into `sim`
//! - `tuning`: Data-driven game balance and the wave script
//!
//! Rendering, windowing and asset loading live outside this crate. A render
//! surface reads the public state of [`sim::GameState`] each frame and drains
//! its [`sim::GameEvent`] stream for one-shot notices.

pub mod runner;
pub mod sim;
pub mod tuning;

pub use runner::Runner;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 30;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// World scroll per tick while a direction key is held
    pub const MOVE_SPEED: f32 = 10.0;
    /// Projectile travel per tick
    pub const BULLET_SPEED: f32 = 30.0;
    /// Enemy travel per tick
    pub const ENEMY_SPEED: f32 = 4.0;

    pub const PLAYER_START_HEALTH: u32 = 50;

    /// Sprite boxes (square, side length)
    pub const PLAYER_SIZE: f32 = 100.0;
    pub const ENEMY_SIZE: f32 = 100.0;
    pub const PROJECTILE_SIZE: f32 = 10.0;

    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// How far beyond the screen edge enemies may spawn
    pub const SPAWN_MARGIN: u32 = 100;
    /// Fraction of a wave's duration over which its spawns are spread
    pub const SPAWN_WINDOW: f64 = 0.8;
    /// Delay before the first wave starts (seconds)
    pub const FIRST_WAVE_DELAY: f64 = 0.5;

    /// Projectiles further than this from the screen center are dropped
    pub const PROJECTILE_DESPAWN_DISTANCE: f32 = 4000.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
