//! Seeded rows of blocky, windowed buildings.

use crate::animation::VIEWPORT_WIDTH as W;
use crate::canvas::{rgba, Canvas};
use crate::rng::LayerRng;

struct Row {
    base_y: f32,
    width: (f32, f32),
    height: (f32, f32),
    seed: u64,
    darkness: f32,
}

const DISTANT: Row = Row {
    base_y: 240.0,
    width: (26.0, 70.0),
    height: (160.0, 220.0),
    seed: 101,
    darkness: 0.42,
};

const MIDGROUND: Row = Row {
    base_y: 160.0,
    width: (36.0, 88.0),
    height: (140.0, 220.0),
    seed: 142,
    darkness: 0.28,
};

/// Seed stride between consecutive buildings of a row.
const BUILDING_SEED_STRIDE: u64 = 31;

pub(crate) fn draw(c: &mut Canvas<'_>) {
    row(c, &DISTANT);
    row(c, &MIDGROUND);
}

fn row(c: &mut Canvas<'_>, row: &Row) {
    let mut rng = LayerRng::seeded(row.seed);
    let mut x = -20.0;
    let mut i = 0u64;

    while x < W + 40.0 {
        let w = rng.range(row.width.0, row.width.1);
        let h = rng.range(row.height.0, row.height.1);
        let d = row.darkness - rng.unit() * 0.12;
        building(c, x, row.base_y, w, h, d, row.seed + i * BUILDING_SEED_STRIDE);
        x += w + 6.0 + rng.unit() * 12.0;
        i += 1;
    }
}

const MARGIN_X: f32 = 6.0;
const MARGIN_Y: f32 = 10.0;
const WIN_W: f32 = 12.0;
const WIN_H: f32 = 10.0;
const GAP_X: f32 = 6.0;
const GAP_Y: f32 = 8.0;

fn building(c: &mut Canvas<'_>, x: f32, y: f32, w: f32, h: f32, darkness: f32, seed: u64) {
    let mut rng = LayerRng::seeded(seed);
    c.fill_rect(x, y, w, h, rgba(darkness * 0.15, darkness * 0.18, darkness * 0.22, 1.0));

    let cols = ((w - 2.0 * MARGIN_X) / (WIN_W + GAP_X)).max(0.0) as u32;
    let rows = ((h - 2.0 * MARGIN_Y) / (WIN_H + GAP_Y)).max(0.0) as u32;

    for r in 0..rows {
        // upper floors are cooler
        let warm = 0.95 - r as f32 / rows as f32 * 0.45;
        for col in 0..cols {
            if rng.one_in(4) {
                continue;
            }
            let wx = x + MARGIN_X + col as f32 * (WIN_W + GAP_X);
            let wy = y + MARGIN_Y + r as f32 * (WIN_H + GAP_Y);
            let bright = rng.range(0.4, 1.25);
            c.fill_rect(wx, wy, WIN_W, WIN_H, rgba(warm, warm * 0.8, 0.45, 0.85 * bright));
        }
    }
}
