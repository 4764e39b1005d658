use crate::animation::{VIEWPORT_HEIGHT as H, VIEWPORT_WIDTH as W};
use crate::canvas::{rgba, Canvas};
use crate::rng::LayerRng;

const SEED: u64 = 38;
const ROWS: i32 = 6;
const COLS: i32 = 120;

/// Checkerboard of small warm dots across the horizon, lightly jittered.
pub(crate) fn draw(c: &mut Canvas<'_>) {
    let band_y = H * 0.38;
    let color = rgba(0.95, 0.9, 0.7, 0.35);
    let mut rng = LayerRng::seeded(SEED);

    for r in 0..ROWS {
        for col in 0..COLS {
            if (col + r) % 2 != 0 {
                continue;
            }
            let x = col as f32 / COLS as f32 * W + rng.unit() * 2.0;
            let y = band_y + (r - ROWS / 2) as f32 * 6.0 + rng.unit() * 3.0;
            c.fill_rect(x, y, 2.8, 2.8, color);
        }
    }
}
