use crate::animation::VIEWPORT_WIDTH as W;
use crate::canvas::{rgb, rgba, Canvas};
use crate::rng::LayerRng;

use super::{BRIDGE_Y, DECK_H};

const GLINT_SEED: u64 = 57;
const GLINTS: usize = 18;

/// River bed, road deck with rails and posts, and warm reflections.
pub(crate) fn draw(c: &mut Canvas<'_>) {
    c.fill_rect(0.0, 0.0, W, BRIDGE_Y, rgb(0.02, 0.03, 0.06));
    c.fill_rect(0.0, BRIDGE_Y, W, DECK_H, rgb(0.06, 0.06, 0.09));
    c.fill_rect(0.0, BRIDGE_Y + DECK_H, W, 6.0, rgb(0.03, 0.03, 0.05));

    let rail = rgb(0.14, 0.14, 0.16);
    for dy in [16.0, 30.0] {
        c.line(18.0, BRIDGE_Y + dy, W - 18.0, BRIDGE_Y + dy, 2.0, rail);
    }

    let post = rgb(0.07, 0.07, 0.09);
    let mut px = 36.0;
    while px < W {
        c.fill_rect(px - 2.0, BRIDGE_Y, 4.0, DECK_H, post);
        px += 40.0;
    }

    let mut rng = LayerRng::seeded(GLINT_SEED);
    for _ in 0..GLINTS {
        let rx = rng.unit() * W;
        let rw = rng.range(30.0, 130.0);
        let ry = rng.unit() * BRIDGE_Y * 0.8;
        let a = rng.range(0.02, 0.08);
        let rh = rng.range(1.0, 4.0);
        c.fill_rect(rx, ry, rw, rh, rgba(0.95, 0.7, 0.4, a));
    }
}
