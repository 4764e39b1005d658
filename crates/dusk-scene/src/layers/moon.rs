use crate::animation::{VIEWPORT_HEIGHT as H, VIEWPORT_WIDTH as W};
use crate::canvas::{rgb, rgba, Canvas};

const RADIUS: f32 = 22.0;

pub(crate) fn draw(c: &mut Canvas<'_>) {
    let (cx, cy) = (W * 0.78, H * 0.78);
    c.glow(cx, cy, RADIUS * 3.0, 60, rgba(0.9, 0.9, 1.0, 0.25), rgba(0.9, 0.9, 1.0, 0.0));
    c.circle(cx, cy, RADIUS, 60, rgb(0.97, 0.97, 1.0));
}
