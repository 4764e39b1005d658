use crate::canvas::{rgb, rgba, Canvas};
use crate::rng::LayerRng;

use super::TRACK_Y;

const WINDOW_SEED: u64 = 77;
const CARS: usize = 4;
const CAR_W: f32 = 140.0;
const CAR_H: f32 = 64.0;
const CAR_GAP: f32 = 8.0;
const WHEELS: usize = 8;

/// Four-car train; `x` is the front car's left edge, trailing cars extend left.
pub(crate) fn draw(c: &mut Canvas<'_>, x: f32) {
    c.local(x, TRACK_Y - 8.0, 1.0, |c| {
        let mut rng = LayerRng::seeded(WINDOW_SEED);

        for car in 0..CARS {
            let cx = -(car as f32) * (CAR_W + CAR_GAP);
            c.fill_rect(cx, 0.0, CAR_W, CAR_H, rgb(0.95, 0.72, 0.18));
            c.fill_rect(cx, CAR_H - 12.0, CAR_W, 12.0, rgb(0.14, 0.14, 0.18));
            c.fill_rect(cx, 10.0, CAR_W, 6.0, rgb(0.92, 0.58, 0.16));

            let mut wx = 12.0;
            while wx < CAR_W - 12.0 {
                let wy = 26.0 + rng.unit() * 2.0;
                let a = 0.96 + rng.unit() * 0.04;
                c.fill_rect(cx + wx, wy, 24.0, 20.0, rgba(1.0, 0.95, 0.45, a));
                wx += 34.0;
            }
        }

        // head lamp
        c.fill_rect(16.0, 18.0, 10.0, 18.0, rgb(1.0, 0.98, 0.78));
        c.radial_glow(36.0, 26.0, 60.0, 20, [1.0, 0.95, 0.6]);

        for w in 0..WHEELS {
            let wx = -(w as f32) * 58.0 + 24.0;
            c.circle(wx, -8.0, 12.0, 32, rgb(0.08, 0.08, 0.10));
            c.circle(wx, -8.0, 5.5, 24, rgb(0.2, 0.2, 0.22));
        }
    });
}
