/// Viewport size in logical pixels.
///
/// The renderer maps `[0, width] x [0, height]` onto the whole surface, so a
/// fixed viewport stretches with the window.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Mirrors a y coordinate between bottom-left and top-left origins.
    #[inline]
    pub fn flip_y(self, y: f32) -> f32 {
        self.height - y
    }
}
