use crate::coords::Rect;
use crate::paint::{Color, LinearGradient, Paint};
use crate::scene::{DrawCmd, DrawList};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, paint: Paint) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, paint)));
    }

    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        self.push_rect(rect, Paint::Solid(color));
    }

    /// Records a gradient-filled rectangle.
    #[inline]
    pub fn push_gradient_rect(&mut self, rect: Rect, gradient: LinearGradient) {
        self.push_rect(rect, Paint::LinearGradient(gradient));
    }
}
