// Input source: arrow-key notifications routed to controller operations

use crate::controller::PositionController;
use crate::error::StyleError;
use crate::surface::PresentationSurface;
use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::KeyCode;

/// Direction requested by a single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// Maps a key to a movement direction. Only the arrow keys are bound.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Runs exactly one controller operation for one notification
pub fn dispatch<S: PresentationSurface>(
    controller: &mut PositionController<S>,
    direction: Direction,
) -> Result<i32, StyleError> {
    crate::debug_input!("dispatch {:?}", direction);
    match direction {
        Direction::Left => controller.move_left(),
        Direction::Right => controller.move_right(),
    }
}

/// Collects key-down notifications in arrival order, one entry per press.
///
/// Auto-repeat events from a held key are dropped.
#[derive(Debug, Default)]
pub struct KeyRecorder {
    pressed: Vec<KeyCode>,
}

impl KeyRecorder {
    pub fn take(&mut self) -> Vec<KeyCode> {
        std::mem::take(&mut self.pressed)
    }
}

impl EventHandler for KeyRecorder {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if !repeat {
            self.pressed.push(keycode);
        }
    }
}

/// Ordered key stream fed by macroquad's input subscriber queue.
/// Must be created once a macroquad window is running.
pub struct KeyEvents {
    subscriber: usize,
    recorder: KeyRecorder,
}

impl KeyEvents {
    pub fn new() -> Self {
        KeyEvents {
            subscriber: register_input_subscriber(),
            recorder: KeyRecorder::default(),
        }
    }

    /// Key presses delivered since the last call, oldest first
    pub fn drain(&mut self) -> Vec<KeyCode> {
        repeat_all_miniquad_input(&mut self.recorder, self.subscriber);
        self.recorder.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ElementStyle;

    #[test]
    fn test_arrow_keys_are_bound() {
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(direction_for_key(KeyCode::A), None);
        assert_eq!(direction_for_key(KeyCode::D), None);
        assert_eq!(direction_for_key(KeyCode::Up), None);
        assert_eq!(direction_for_key(KeyCode::Space), None);
    }

    #[test]
    fn test_dispatch_one_operation_per_notification() {
        let mut controller = PositionController::new(ElementStyle::at("dodger", 120));
        assert_eq!(dispatch(&mut controller, Direction::Left), Ok(119));
        assert_eq!(dispatch(&mut controller, Direction::Right), Ok(120));
        assert_eq!(dispatch(&mut controller, Direction::Right), Ok(121));
        assert_eq!(controller.surface().left(), "121px");
    }

    fn no_mods() -> KeyMods {
        KeyMods {
            shift: false,
            ctrl: false,
            alt: false,
            logo: false,
        }
    }

    #[test]
    fn test_recorder_keeps_order_and_every_press() {
        let mut recorder = KeyRecorder::default();
        recorder.key_down_event(KeyCode::Left, no_mods(), false);
        recorder.key_down_event(KeyCode::Right, no_mods(), false);
        recorder.key_down_event(KeyCode::Left, no_mods(), false);
        assert_eq!(
            recorder.take(),
            vec![KeyCode::Left, KeyCode::Right, KeyCode::Left]
        );
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_recorder_drops_auto_repeat() {
        let mut recorder = KeyRecorder::default();
        recorder.key_down_event(KeyCode::Right, no_mods(), false);
        recorder.key_down_event(KeyCode::Right, no_mods(), true);
        recorder.key_down_event(KeyCode::Right, no_mods(), true);
        assert_eq!(recorder.take(), vec![KeyCode::Right]);
    }
}
