use super::types::Key;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys).
/// `InputFrame` provides the transitions recorded for the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went from up to down this frame, in arrival order.
    ///
    /// Key repeats never land here; a key tapped twice within one frame
    /// (press, release, press) appears twice.
    pub keys_pressed: Vec<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }
}
