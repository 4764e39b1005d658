//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, wires them to the GPU
//! layer and drives fixed ticks.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
