//! Paint model shared between the scene and the renderer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, linear gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}
