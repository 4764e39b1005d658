use crate::input::{InputEvent, InputState};
use crate::time::TickTime;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Callbacks are serialized by the event loop: all ticks due at a wake-up run
/// before the redraw they trigger.
pub trait App {
    /// Called for every translated input event, after `input` has been updated.
    fn on_input(&mut self, event: &InputEvent, input: &InputState) -> AppControl {
        let _ = (event, input);
        AppControl::Continue
    }

    /// Called once per due fixed tick.
    fn on_tick(&mut self, tick: TickTime) -> AppControl {
        let _ = tick;
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
