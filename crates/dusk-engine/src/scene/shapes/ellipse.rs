use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled ellipse payload, tessellated as a triangle fan of `segments` slices.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    /// Horizontal and vertical radius.
    pub radii: Vec2,
    pub color: Color,
    pub segments: u16,
}

impl EllipseCmd {
    #[inline]
    pub fn new(center: Vec2, radii: Vec2, color: Color, segments: u16) -> Self {
        Self { center, radii, color, segments }
    }
}

impl DrawList {
    /// Records a filled ellipse.
    #[inline]
    pub fn push_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, segments: u16) {
        self.push(DrawCmd::Ellipse(EllipseCmd::new(center, radii, color, segments)));
    }

    /// Records a solid circle.
    #[inline]
    pub fn push_solid_circle(&mut self, center: Vec2, radius: f32, segments: u16, color: Color) {
        self.push_ellipse(center, Vec2::new(radius, radius), color, segments);
    }
}
