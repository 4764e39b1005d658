use crate::animation::VIEWPORT_WIDTH as W;
use crate::canvas::{rgb, Canvas};
use crate::rng::LayerRng;

const SEED: u64 = 180;
const COUNT: usize = 180;

/// Warm pinpoints scattered over the skyline, drawn last.
pub(crate) fn draw(c: &mut Canvas<'_>) {
    let mut rng = LayerRng::seeded(SEED);
    for _ in 0..COUNT {
        let x = rng.unit() * W;
        let y = rng.range(120.0, 480.0);
        let b = rng.range(0.5, 1.1);
        c.point(x, y, 2.0, rgb(0.95 * b, 0.72 * b, 0.45 * b));
    }
}
