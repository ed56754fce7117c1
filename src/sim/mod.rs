//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (roster insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod kinematics;
pub mod schedule;
pub mod state;
pub mod tick;
pub mod waves;

pub use collision::{first_hit, point_in_box};
pub use input::{InputEvent, InputState, Key};
pub use kinematics::{decompose_velocity, display_angle, heading_to};
pub use schedule::{Task, TaskQueue};
pub use state::{
    Enemy, EnemyKind, GameEvent, GameState, Notice, Player, Projectile, SessionPhase,
    SessionStats,
};
pub use tick::tick;
pub use waves::{WaveScheduler, WaveSpec, spawn_point};
