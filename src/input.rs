//! Raw key to control translation
//!
//! Frontends convert their platform key events into [`KeyEvent`] and hand them
//! to [`KeyMap::handle`]. Auto-repeat is dropped here so the simulation only
//! ever sees one slide per physical press.

use serde::{Deserialize, Serialize};

use crate::sim::{Control, Direction, SimulationState};

/// Platform-independent key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    R,
    Other,
}

impl Key {
    /// Map a key name as reported by browsers and most windowing layers
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "w" | "W" | "KeyW" => Key::W,
            "a" | "A" | "KeyA" => Key::A,
            "s" | "S" | "KeyS" => Key::S,
            "d" | "D" | "KeyD" => Key::D,
            "r" | "R" | "KeyR" => Key::R,
            _ => Key::Other,
        }
    }
}

/// A single key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
    /// Generated by keyboard auto-repeat
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            pressed: true,
            repeat: false,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            pressed: false,
            repeat: false,
        }
    }
}

/// Default bindings: arrows slide, W/A/S/D roll, R resets
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMap;

impl KeyMap {
    pub fn control(&self, key: Key) -> Option<Control> {
        match key {
            Key::ArrowUp => Some(Control::Slide(Direction::Up)),
            Key::ArrowDown => Some(Control::Slide(Direction::Down)),
            Key::ArrowLeft => Some(Control::Slide(Direction::Left)),
            Key::ArrowRight => Some(Control::Slide(Direction::Right)),
            Key::W => Some(Control::Roll(Direction::Up)),
            Key::S => Some(Control::Roll(Direction::Down)),
            Key::A => Some(Control::Roll(Direction::Left)),
            Key::D => Some(Control::Roll(Direction::Right)),
            Key::R => Some(Control::Reset),
            Key::Other => None,
        }
    }

    /// Translate an event, dropping auto-repeat presses
    pub fn translate(&self, event: KeyEvent) -> Option<(Control, bool)> {
        if event.pressed && event.repeat {
            return None;
        }
        self.control(event.key).map(|c| (c, event.pressed))
    }

    /// Feed an event into the simulation. Returns whether it was consumed.
    pub fn handle(&self, state: &mut SimulationState, event: KeyEvent) -> bool {
        match self.translate(event) {
            Some((control, pressed)) => {
                state.handle_input(control, pressed);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use crate::sim::tick;

    #[test]
    fn test_repeat_is_dropped() {
        let map = KeyMap;
        let repeat = KeyEvent {
            repeat: true,
            ..KeyEvent::down(Key::ArrowRight)
        };
        assert_eq!(map.translate(repeat), None);
        assert_eq!(
            map.translate(KeyEvent::down(Key::ArrowRight)),
            Some((Control::Slide(Direction::Right), true))
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut state = SimulationState::from_layout("..\n").unwrap();
        assert!(!KeyMap.handle(&mut state, KeyEvent::down(Key::from_name("q"))));
    }

    #[test]
    fn test_held_roll_and_release() {
        let mut state = SimulationState::from_layout("..\n..\n").unwrap();
        assert!(KeyMap.handle(&mut state, KeyEvent::down(Key::from_name("KeyA"))));
        assert!(state.controls.roll_left);
        assert!(KeyMap.handle(&mut state, KeyEvent::up(Key::A)));
        assert!(!state.controls.roll_left);
    }

    #[test]
    fn test_repeated_arrow_moves_once() {
        let mut state = SimulationState::from_layout("....\n").unwrap();
        let repeat = KeyEvent {
            repeat: true,
            ..KeyEvent::down(Key::ArrowRight)
        };
        KeyMap.handle(&mut state, KeyEvent::down(Key::ArrowRight));
        tick(&mut state, 0.016);
        // Held arrow keeps repeating across frames
        assert!(!KeyMap.handle(&mut state, repeat));
        tick(&mut state, 0.016);
        assert!(!KeyMap.handle(&mut state, repeat));
        tick(&mut state, 0.016);
        assert_eq!(state.cursor(), Cell::new(1, 0));
    }
}
