use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{Key as LogicalKey, KeyCode, ModifiersState, NamedKey, PhysicalKey};

use crate::input::{InputEvent, InputState, Key, KeyState, Modifiers};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem.
pub(crate) fn translate_window_event(state: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => Some(InputEvent::ModifiersChanged(map_modifiers(m.state()))),

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => {
            let st = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };
            let (key, code) = map_key(event);

            Some(InputEvent::Key {
                key,
                state: st,
                // winit 0.30 does not expose `Window::modifiers()`; use the tracked state.
                modifiers: state.modifiers,
                code,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

/// Layout-aware mapping: the typed character wins (so shift+`=` is `Plus`),
/// then the physical key code.
fn map_key(event: &KeyEvent) -> (Key, u32) {
    let code = match event.physical_key {
        PhysicalKey::Code(c) => c as u32,
        // winit 0.30 uses NativeKeyCode; no stable numeric is guaranteed here.
        PhysicalKey::Unidentified(_) => 0,
    };

    let key = map_logical(&event.logical_key)
        .or_else(|| map_physical(event.physical_key))
        .unwrap_or(Key::Unknown(code));

    (key, code)
}

fn map_logical(key: &LogicalKey) -> Option<Key> {
    match key {
        LogicalKey::Character(s) => match s.as_str() {
            "+" => Some(Key::Plus),
            "-" => Some(Key::Minus),
            _ => None,
        },
        LogicalKey::Named(NamedKey::Escape) => Some(Key::Escape),
        LogicalKey::Named(NamedKey::Space) => Some(Key::Space),
        _ => None,
    }
}

fn map_physical(pk: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = pk else { return None };
    let key = match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Space => Key::Space,

        KeyCode::NumpadAdd => Key::Plus,
        KeyCode::NumpadSubtract | KeyCode::Minus => Key::Minus,
        KeyCode::Equal => Key::Equal,

        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_plus_and_minus_win_over_physical_keys() {
        assert_eq!(map_logical(&LogicalKey::Character("+".into())), Some(Key::Plus));
        assert_eq!(map_logical(&LogicalKey::Character("-".into())), Some(Key::Minus));
        assert_eq!(map_logical(&LogicalKey::Character("=".into())), None);
    }

    #[test]
    fn numpad_keys_map_to_plus_and_minus() {
        assert_eq!(map_physical(PhysicalKey::Code(KeyCode::NumpadAdd)), Some(Key::Plus));
        assert_eq!(map_physical(PhysicalKey::Code(KeyCode::NumpadSubtract)), Some(Key::Minus));
        assert_eq!(map_physical(PhysicalKey::Code(KeyCode::Equal)), Some(Key::Equal));
        assert_eq!(map_physical(PhysicalKey::Code(KeyCode::KeyQ)), None);
    }

    #[test]
    fn unbound_keys_are_not_named() {
        for code in [KeyCode::Tab, KeyCode::ArrowUp, KeyCode::ShiftLeft, KeyCode::SuperRight] {
            assert_eq!(map_physical(PhysicalKey::Code(code)), None, "{code:?}");
        }
        assert_eq!(map_physical(PhysicalKey::Code(KeyCode::NumpadEnter)), Some(Key::Enter));
    }
}
