//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - preserve call order as paint order (no depth buffer, no z-sorting)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::ellipse::EllipseCmd;
pub use shapes::glow::GlowCmd;
pub use shapes::path::{PolygonCmd, PolylineCmd};
pub use shapes::rect::RectCmd;
