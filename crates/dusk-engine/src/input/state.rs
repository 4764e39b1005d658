use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current input state for the window: held keys, modifiers, focus.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an event to the held-state sets.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        self.keys_down.insert(*key);
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat,
        }
    }

    #[test]
    fn press_and_release_track_held_keys() {
        let mut s = InputState::default();
        s.apply_event(&key(Key::Space, KeyState::Pressed, false));
        assert!(s.key_down(Key::Space));
        s.apply_event(&key(Key::Space, KeyState::Released, false));
        assert!(!s.key_down(Key::Space));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::Focused(true));
        s.apply_event(&key(Key::Plus, KeyState::Pressed, false));
        s.apply_event(&InputEvent::Focused(false));
        assert!(!s.focused);
        assert!(s.keys_down.is_empty());
    }

    #[test]
    fn pressed_key_ignores_repeats_and_releases() {
        assert_eq!(key(Key::Space, KeyState::Pressed, false).pressed_key(), Some(Key::Space));
        assert_eq!(key(Key::Space, KeyState::Pressed, true).pressed_key(), None);
        assert_eq!(key(Key::Space, KeyState::Released, false).pressed_key(), None);
        assert_eq!(InputEvent::Focused(true).pressed_key(), None);
    }
}
