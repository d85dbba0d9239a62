use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Set of currently held keys.
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(focused) => {
                if !focused {
                    // Releases are not delivered while unfocused.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.push(key);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn held_key_is_reported_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::D, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::D, KeyState::Pressed, true));
        state.apply_event(&mut frame, key(Key::D, KeyState::Pressed, true));

        assert_eq!(frame.keys_pressed, vec![Key::D]);
    }

    #[test]
    fn held_key_is_not_reported_again_next_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed, false));
        frame.clear();
        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed, true));

        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::A, KeyState::Released, false));

        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn double_tap_within_frame_is_reported_twice_in_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::D, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::D, KeyState::Released, false));
        state.apply_event(&mut frame, key(Key::Digit2, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::D, KeyState::Pressed, false));

        assert_eq!(frame.keys_pressed, vec![Key::D, Key::Digit2, Key::D]);
    }

    #[test]
    fn focus_loss_forgets_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::S, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        frame.clear();

        // The release was lost with focus; the next press counts again.
        state.apply_event(&mut frame, key(Key::S, KeyState::Pressed, false));
        assert_eq!(frame.keys_pressed, vec![Key::S]);
    }
}
