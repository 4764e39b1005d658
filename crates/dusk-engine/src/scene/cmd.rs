use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::glow::GlowCmd;
use crate::scene::shapes::path::{PolygonCmd, PolylineCmd};
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` to emit triangles for it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Ellipse(EllipseCmd),
    Glow(GlowCmd),
    Polygon(PolygonCmd),
    Polyline(PolylineCmd),
}

impl DrawCmd {
    /// Short name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::Ellipse(_) => "ellipse",
            DrawCmd::Glow(_) => "glow",
            DrawCmd::Polygon(_) => "polygon",
            DrawCmd::Polyline(_) => "polyline",
        }
    }
}
