use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, modifiers, focus).
/// `InputFrame` provides events and transition sets for the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys freshly pressed this frame (excludes OS key-repeats).
    pub keys_pressed: HashSet<Key>,

    /// Keys repeated this frame while held down.
    pub keys_repeated: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_repeated.clear();
        self.keys_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// True when the key was pressed or repeated this frame.
    ///
    /// Use this for actions that should fire while the key is held, such as
    /// dumping diagnostics.
    pub fn key_activated(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key) || self.keys_repeated.contains(&key)
    }
}
