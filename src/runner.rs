//! Fixed-timestep driver
//!
//! Owns a session and its held input, turns variable frame times into whole
//! simulation ticks, and forwards input-surface events between ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::sim::{GameEvent, GameState, InputEvent, InputState, tick};
use crate::tuning::Tuning;

/// A running session plus its accumulator
pub struct Runner {
    pub state: GameState,
    pub input: InputState,
    accumulator: f32,
    tick_dt: f32,
}

impl Runner {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let tick_dt = tuning.tick_dt();
        log::info!("Session started with seed: {}", seed);
        Self {
            state: GameState::new(tuning, seed),
            input: InputState::default(),
            accumulator: 0.0,
            tick_dt,
        }
    }

    /// Forward an input-surface event
    pub fn handle(&mut self, event: InputEvent) {
        self.input.apply(event, &mut self.state);
    }

    /// Feed one frame's worth of wall time; returns the ticks run
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, self.tick_dt);
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= self.tick_dt {
            log::warn!(
                "Simulation falling behind, dropping {:.3}s",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Key, SessionPhase};

    fn quiet() -> Tuning {
        Tuning {
            waves: Vec::new(),
            ..Tuning::default()
        }
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut runner = Runner::new(quiet(), 1);
        let dt = runner.state.tuning.tick_dt();

        assert_eq!(runner.update(dt * 0.6), 0);
        assert_eq!(runner.update(dt * 0.6), 1);
        assert_eq!(runner.state.time_ticks, 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut runner = Runner::new(quiet(), 1);
        let ran = runner.update(10.0);
        assert!(ran <= MAX_SUBSTEPS);
        assert!(ran > 0);
        // frame time is clamped, so no backlog carries into the next frame
        assert_eq!(runner.update(0.0), 0);
    }

    #[test]
    fn test_events_reach_input_state() {
        let mut runner = Runner::new(quiet(), 1);
        runner.handle(InputEvent::KeyDown(Key::S));
        let dt = runner.state.tuning.tick_dt();
        runner.update(dt * 1.5);

        assert!(runner.input.move_down);
        assert_eq!(runner.state.world_offset.y, runner.state.tuning.move_speed);
    }

    #[test]
    fn test_drains_notices() {
        let mut runner = Runner::new(quiet(), 1);
        let dt = runner.state.tuning.tick_dt();
        runner.update(dt * 1.5);
        assert_eq!(runner.state.phase, SessionPhase::Won);
        assert!(!runner.drain_events().is_empty());
        assert!(runner.drain_events().is_empty());
    }
}
