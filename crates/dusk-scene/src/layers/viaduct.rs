use crate::animation::VIEWPORT_WIDTH as W;
use crate::canvas::{rgb, rgba, Canvas};

use super::TRACK_Y;

const DECK_THICKNESS: f32 = 22.0;

/// Elevated concrete deck carrying the train, on evenly spaced pillars.
pub(crate) fn draw(c: &mut Canvas<'_>) {
    let deck_y = TRACK_Y - DECK_THICKNESS;
    let ground_y = 0.0;

    c.fill_rect(0.0, deck_y, W, DECK_THICKNESS, rgb(0.78, 0.78, 0.82));
    c.fill_rect(0.0, deck_y, W, 3.0, rgb(0.55, 0.55, 0.58));

    let barrier = rgb(0.62, 0.62, 0.65);
    let mut x = 0.0;
    while x < W {
        c.fill_rect(x, deck_y + DECK_THICKNESS - 6.0, 20.0, 4.0, barrier);
        x += 32.0;
    }

    let mut x = 80.0;
    while x < W {
        c.fill_rect(x - 18.0, ground_y, 36.0, deck_y - ground_y, rgb(0.70, 0.70, 0.74));
        c.fill_rect(x - 28.0, ground_y, 56.0, 14.0, rgb(0.55, 0.55, 0.58));
        c.fill_rect(x - 26.0, deck_y - 6.0, 52.0, 6.0, rgb(0.60, 0.60, 0.63));
        x += 160.0;
    }

    c.fill_rect(0.0, deck_y - 6.0, W, 6.0, rgba(0.0, 0.0, 0.0, 0.18));
}
