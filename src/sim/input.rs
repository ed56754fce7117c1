//! Input / command mapping
//!
//! Raw events from the input surface become persistent intent flags that the
//! tick reads once per step. Pointer moves are the exception: they turn the
//! player immediately, between ticks.

use glam::Vec2;

use super::state::GameState;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Other,
}

impl Key {
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'w' => Key::W,
            'a' => Key::A,
            's' => Key::S,
            'd' => Key::D,
            _ => Key::Other,
        }
    }
}

/// Events delivered by the input surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position in screen pixels
    PointerMoved { x: f32, y: f32 },
    KeyDown(Key),
    KeyUp(Key),
    PointerPressed,
    PointerReleased,
    Resized { width: f32, height: f32 },
}

/// Held-input state consumed by the tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Pointer held; fires one projectile per tick
    pub shooting: bool,
    /// Idle/demo mode - the tick aims and fires on its own
    pub idle_mode: bool,
}

impl InputState {
    /// Apply one event; heading and resize changes go straight to `state`
    pub fn apply(&mut self, event: InputEvent, state: &mut GameState) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                state.player.retarget_toward(Vec2::new(x, y));
            }
            InputEvent::KeyDown(key) => self.set_key(key, true),
            InputEvent::KeyUp(key) => self.set_key(key, false),
            InputEvent::PointerPressed => self.shooting = true,
            InputEvent::PointerReleased => self.shooting = false,
            InputEvent::Resized { width, height } => state.resize(width, height),
        }
    }

    fn set_key(&mut self, key: Key, held: bool) {
        match key {
            Key::W => self.move_up = held,
            Key::A => self.move_left = held,
            Key::S => self.move_down = held,
            Key::D => self.move_right = held,
            Key::Other => {}
        }
    }

    /// World scroll for one tick
    ///
    /// The world moves opposite to the player: walking up scrolls the world
    /// down. Opposite keys cancel out.
    pub fn net_movement(&self, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.move_up {
            delta.y -= speed;
        }
        if self.move_down {
            delta.y += speed;
        }
        if self.move_left {
            delta.x += speed;
        }
        if self.move_right {
            delta.x -= speed;
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_char('w'), Key::W);
        assert_eq!(Key::from_char('A'), Key::A);
        assert_eq!(Key::from_char('s'), Key::S);
        assert_eq!(Key::from_char('d'), Key::D);
        assert_eq!(Key::from_char('q'), Key::Other);
    }

    #[test]
    fn test_pointer_sets_heading() {
        let mut state = GameState::new(Tuning::default(), 1);
        let mut input = InputState::default();

        // player centered at (400, 300)
        input.apply(InputEvent::PointerMoved { x: 400.0, y: 500.0 }, &mut state);
        assert!(state.player.heading.abs() < 1e-4);

        input.apply(InputEvent::PointerMoved { x: 100.0, y: 300.0 }, &mut state);
        assert!((state.player.heading - 270.0).abs() < 1e-4);
        assert!((state.player.display_angle() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_movement_flags() {
        let mut state = GameState::new(Tuning::default(), 1);
        let mut input = InputState::default();

        input.apply(InputEvent::KeyDown(Key::W), &mut state);
        input.apply(InputEvent::KeyDown(Key::D), &mut state);
        assert_eq!(input.net_movement(10.0), Vec2::new(-10.0, -10.0));

        // opposite keys cancel without clearing each other
        input.apply(InputEvent::KeyDown(Key::S), &mut state);
        input.apply(InputEvent::KeyDown(Key::A), &mut state);
        assert!(input.move_up && input.move_down && input.move_left && input.move_right);
        assert_eq!(input.net_movement(10.0), Vec2::ZERO);

        input.apply(InputEvent::KeyUp(Key::W), &mut state);
        input.apply(InputEvent::KeyUp(Key::D), &mut state);
        assert_eq!(input.net_movement(10.0), Vec2::new(10.0, 10.0));

        input.apply(InputEvent::KeyDown(Key::Other), &mut state);
        assert_eq!(input.net_movement(10.0), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_pointer_press_latches_shooting() {
        let mut state = GameState::new(Tuning::default(), 1);
        let mut input = InputState::default();

        input.apply(InputEvent::PointerPressed, &mut state);
        assert!(input.shooting);
        input.apply(InputEvent::PointerReleased, &mut state);
        assert!(!input.shooting);
    }

    #[test]
    fn test_resize_event_reaches_state() {
        let mut state = GameState::new(Tuning::default(), 1);
        let mut input = InputState::default();
        input.apply(
            InputEvent::Resized {
                width: 1024.0,
                height: 768.0,
            },
            &mut state,
        );
        assert_eq!(state.screen, Vec2::new(1024.0, 768.0));
        assert_eq!(state.world_offset, Vec2::new(112.0, 84.0));
    }
}
