use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Radial glow: a disc whose color fades from `inner` at the center to
/// `outer` on the rim.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowCmd {
    pub center: Vec2,
    pub radius: f32,
    pub inner: Color,
    pub outer: Color,
    pub segments: u16,
}

impl DrawList {
    /// Records a radial glow.
    #[inline]
    pub fn push_glow(&mut self, center: Vec2, radius: f32, inner: Color, outer: Color, segments: u16) {
        self.push(DrawCmd::Glow(GlowCmd { center, radius, inner, outer, segments }));
    }
}
