//! Hero clouds and the seeded procedural cloud bands.

use crate::animation::{VIEWPORT_HEIGHT as H, VIEWPORT_WIDTH as W};
use crate::canvas::{rgba, Canvas};
use crate::rng::LayerRng;

/// Three hand-placed clouds.
pub(crate) fn draw_hero(c: &mut Canvas<'_>) {
    cloud(c, 220.0, H * 0.62, 1.05, 0.75);
    cloud(c, 420.0, H * 0.66, 0.82, 0.55);
    cloud(c, 620.0, H * 0.58, 0.9, 0.60);
}

/// Two translucent bands of scattered ellipses.
pub(crate) fn draw_bands(c: &mut Canvas<'_>) {
    band(c, &Band { base_y: H * 0.62, seed: 11, count: 8, alpha: 0.42, scale: (0.8, 1.1) });
    band(c, &Band { base_y: H * 0.50, seed: 23, count: 10, alpha: 0.30, scale: (0.6, 1.2) });
}

fn cloud(c: &mut Canvas<'_>, cx: f32, cy: f32, s: f32, alpha: f32) {
    let tint = |a: f32| rgba(0.92, 0.88, 0.95, a * alpha);

    c.ellipse(cx, cy, 120.0 * s, 34.0 * s, 48, tint(0.18));
    c.ellipse(cx - 80.0 * s, cy + 8.0 * s, 92.0 * s, 28.0 * s, 40, tint(0.16));
    c.ellipse(cx + 78.0 * s, cy + 6.0 * s, 96.0 * s, 26.0 * s, 40, tint(0.16));
    c.ellipse(cx - 36.0 * s, cy - 18.0 * s, 78.0 * s, 22.0 * s, 36, tint(0.12));
    c.ellipse(cx + 36.0 * s, cy - 20.0 * s, 82.0 * s, 20.0 * s, 36, tint(0.12));
    // warm rim light
    c.ellipse(cx - 20.0 * s, cy + 6.0 * s, 160.0 * s, 40.0 * s, 56, rgba(1.0, 0.96, 0.85, 0.06 * alpha));
    // faint underside shadow
    c.fill_rect(cx - 160.0 * s, cy - 28.0 * s, 320.0 * s, 6.0 * s, rgba(0.02, 0.02, 0.04, 0.03 * alpha));
}

struct Band {
    base_y: f32,
    seed: u64,
    count: usize,
    alpha: f32,
    scale: (f32, f32),
}

fn band(c: &mut Canvas<'_>, b: &Band) {
    let mut rng = LayerRng::seeded(b.seed);
    for i in 0..b.count {
        let cx = rng.unit() * W;
        let rx = rng.range(40.0, 200.0);
        let ry = rng.range(10.0, 50.0);
        let yoff = (rng.unit() - 0.5) * 30.0;
        let a = b.alpha * rng.range(0.35, 0.80);
        let tint = 0.9 - rng.unit() * 0.25;
        let sx = rng.range(b.scale.0, b.scale.1);

        c.ellipse(
            cx,
            b.base_y + yoff + i as f32 * 1.5,
            rx * sx,
            ry,
            36,
            rgba(tint * 0.92, tint * 0.83, tint * 1.02, a),
        );
    }
}
