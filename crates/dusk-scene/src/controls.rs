//! Keyboard controls.

use dusk_engine::input::{InputEvent, Key, KeyState};

use crate::animation::AnimationState;

/// A user command against the scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SceneCommand {
    TogglePause,
    SpeedUp,
    SlowDown,
    Quit,
}

/// What the host should do after a command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

/// Key binding table.
pub fn command_for_key(key: Key) -> Option<SceneCommand> {
    match key {
        Key::Space => Some(SceneCommand::TogglePause),
        Key::Plus => Some(SceneCommand::SpeedUp),
        Key::Minus => Some(SceneCommand::SlowDown),
        Key::Escape => Some(SceneCommand::Quit),
        _ => None,
    }
}

/// Command for a key press event.
///
/// Auto-repeat keeps adjusting the speed while `+`/`-` is held, but never
/// toggles pause or quits.
pub fn command_for_event(event: &InputEvent) -> Option<SceneCommand> {
    let InputEvent::Key {
        key,
        state: KeyState::Pressed,
        repeat,
        ..
    } = event
    else {
        return None;
    };

    let cmd = command_for_key(*key)?;
    match cmd {
        SceneCommand::SpeedUp | SceneCommand::SlowDown => Some(cmd),
        SceneCommand::TogglePause | SceneCommand::Quit if !*repeat => Some(cmd),
        _ => None,
    }
}

/// Applies `cmd` to `state`.
pub fn apply_command(state: &mut AnimationState, cmd: SceneCommand) -> CommandOutcome {
    match cmd {
        SceneCommand::TogglePause => {
            let paused = state.toggle_pause();
            log::info!("animation {}", if paused { "paused" } else { "resumed" });
        }
        SceneCommand::SpeedUp => {
            state.speed_up();
            log::info!("train speed {:.1}", state.train_speed);
        }
        SceneCommand::SlowDown => {
            state.slow_down();
            log::info!("train speed {:.1}", state.train_speed);
        }
        SceneCommand::Quit => {
            log::info!("quit requested");
            return CommandOutcome::Quit;
        }
    }
    CommandOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::MIN_TRAIN_SPEED;
    use dusk_engine::input::Modifiers;

    fn press(key: Key, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            code: 0,
            repeat,
        }
    }

    // ── bindings ──────────────────────────────────────────────────────────

    #[test]
    fn bindings() {
        assert_eq!(command_for_key(Key::Space), Some(SceneCommand::TogglePause));
        assert_eq!(command_for_key(Key::Plus), Some(SceneCommand::SpeedUp));
        assert_eq!(command_for_key(Key::Minus), Some(SceneCommand::SlowDown));
        assert_eq!(command_for_key(Key::Escape), Some(SceneCommand::Quit));
        assert_eq!(command_for_key(Key::Enter), None);
        assert_eq!(command_for_key(Key::Equal), None);
    }

    #[test]
    fn repeat_only_adjusts_speed() {
        assert_eq!(command_for_event(&press(Key::Space, true)), None);
        assert_eq!(command_for_event(&press(Key::Escape, true)), None);
        assert_eq!(command_for_event(&press(Key::Plus, true)), Some(SceneCommand::SpeedUp));
        assert_eq!(command_for_event(&press(Key::Space, false)), Some(SceneCommand::TogglePause));
    }

    #[test]
    fn releases_and_focus_are_ignored() {
        let release = InputEvent::Key {
            key: Key::Space,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        };
        assert_eq!(command_for_event(&release), None);
        assert_eq!(command_for_event(&InputEvent::Focused(true)), None);
    }

    // ── application ───────────────────────────────────────────────────────

    #[test]
    fn commands_mutate_state() {
        let mut s = AnimationState::new();
        assert_eq!(apply_command(&mut s, SceneCommand::TogglePause), CommandOutcome::Continue);
        assert!(s.paused);
        apply_command(&mut s, SceneCommand::SpeedUp);
        assert!((s.train_speed - 3.0).abs() < 1e-6);
        for _ in 0..40 {
            apply_command(&mut s, SceneCommand::SlowDown);
        }
        assert_eq!(s.train_speed, MIN_TRAIN_SPEED);
    }

    #[test]
    fn quit_leaves_state_untouched() {
        let mut s = AnimationState::new();
        assert_eq!(apply_command(&mut s, SceneCommand::Quit), CommandOutcome::Quit);
        assert_eq!(s, AnimationState::new());
    }
}
