use crate::animation::{VIEWPORT_HEIGHT as H, VIEWPORT_WIDTH as W};
use crate::canvas::{rgb, rgba, Canvas};

/// Teal → violet → warm horizon, with a darker band across the top.
pub(crate) fn draw(c: &mut Canvas<'_>) {
    c.vertical_gradient(
        0.0,
        0.0,
        W,
        H,
        &[
            (0.0, rgb(0.02, 0.12, 0.18)),
            (0.5, rgb(0.28, 0.12, 0.36)),
            (1.0, rgb(1.0, 0.62, 0.34)),
        ],
    );
    c.fill_rect(0.0, H * 0.82, W, H * 0.18, rgba(0.0, 0.0, 0.06, 0.12));
}
