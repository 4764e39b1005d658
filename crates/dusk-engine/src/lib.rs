//! Dusk engine crate.
//!
//! Owns the platform + GPU runtime pieces the cityscape is drawn with:
//! a single-window winit loop driven by a fixed tick clock, a recorded
//! draw list, and a mesh renderer that paints it strictly in call order.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
