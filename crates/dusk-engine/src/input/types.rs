/// Keyboard key identifier.
///
/// Only the keys the runtime has a use for are named; everything else maps
/// to `Key::Unknown(u32)` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    /// `+`, from either the typed character or the numpad.
    Plus,
    /// `-`, from either the typed character or the numpad.
    Minus,
    /// `=` without shift on layouts where `+` shares the key.
    Equal,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Stable platform code when available.
        code: u32,
        /// True when the event is an auto-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Returns the key of a fresh (non-repeat) press, if this is one.
    pub fn pressed_key(&self) -> Option<Key> {
        match self {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
                ..
            } => Some(*key),
            _ => None,
        }
    }
}
