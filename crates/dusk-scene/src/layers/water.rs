use crate::animation::VIEWPORT_WIDTH as W;
use crate::canvas::{rgb, rgba, Canvas};

use super::BRIDGE_Y;

const STREAKS: usize = 40;
const SHIMMERS: usize = 12;

/// River surface: drifting reflection streaks and a shimmer under the bridge.
///
/// `t` is the water phase; every shape is a periodic function of it.
pub(crate) fn draw(c: &mut Canvas<'_>, t: f32) {
    let top = BRIDGE_Y;
    c.fill_rect(0.0, 0.0, W, top, rgb(0.06, 0.18, 0.32));

    for i in 0..STREAKS {
        let fi = i as f32;
        let y = (fi * 14.0 + t * 22.0) % top;
        let x = (fi * 63.0 + t * 40.0) % W;
        let w = 60.0 + 40.0 * (t + fi).sin();
        let a = 0.04 + 0.03 * (t * 1.4 + fi).sin();
        c.fill_rect(x, y, w, 2.0, rgba(0.95, 0.75, 0.45, a));
    }

    let shimmer = rgba(0.9, 0.7, 0.4, 0.08);
    for i in 0..SHIMMERS {
        let fi = i as f32;
        let x = fi * (W / SHIMMERS as f32) + (t + fi).sin() * 8.0;
        c.fill_rect(x, top - 12.0, 6.0, 12.0, shimmer);
    }
}
