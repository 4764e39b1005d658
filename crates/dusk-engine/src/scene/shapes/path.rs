use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled convex polygon. Points are fanned from the first vertex, so
/// concave outlines must be split by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

/// Open polyline stroked with a constant width. Segments are stroked
/// independently (no joins or caps), matching plain line primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a filled convex polygon.
    #[inline]
    pub fn push_polygon(&mut self, points: Vec<Vec2>, color: Color) {
        self.push(DrawCmd::Polygon(PolygonCmd { points, color }));
    }

    /// Records a stroked polyline.
    #[inline]
    pub fn push_polyline(&mut self, points: Vec<Vec2>, width: f32, color: Color) {
        self.push(DrawCmd::Polyline(PolylineCmd { points, width, color }));
    }

    /// Records a single stroked segment.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push_polyline(vec![from, to], width, color);
    }
}
