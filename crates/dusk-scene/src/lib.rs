//! Dusk scene crate.
//!
//! The animated sunset cityscape: an [`AnimationState`] advanced once per
//! fixed tick, and a compositor that records a fixed back-to-front sequence
//! of layers into a [`Canvas`] over the engine's draw list.

pub mod animation;
pub mod canvas;
pub mod compositor;
pub mod controls;
pub mod signal;

mod layers;
mod rng;

pub use animation::{advance, AnimationState};
pub use canvas::{Canvas, LayerSpan};
pub use compositor::{render_frame, Layer, PAINT_ORDER};
pub use controls::{apply_command, command_for_event, command_for_key, CommandOutcome, SceneCommand};
pub use signal::{signal_aspect, SignalAspect};
