use crate::animation::{VIEWPORT_HEIGHT as H, VIEWPORT_WIDTH as W};
use crate::canvas::{rgb, rgba, Canvas};

pub(crate) fn draw(c: &mut Canvas<'_>) {
    let (cx, cy) = (W * 0.33, H * 0.36);
    c.circle(cx, cy, 26.0, 60, rgb(1.0, 0.95, 0.64));
    c.radial_glow(cx, cy, 100.0, 40, [1.0, 0.72, 0.3]);
    // horizontal lens flare
    c.ellipse(cx, cy, 220.0, 18.0, 32, rgba(1.0, 0.62, 0.22, 0.045));
}
