use crate::canvas::{rgb, Canvas};

/// `(x, y, scale)` of each bat.
const BATS: [(f32, f32, f32); 6] = [
    (120.0, 520.0, 0.7),
    (160.0, 540.0, 0.5),
    (210.0, 515.0, 0.6),
    (520.0, 560.0, 0.8),
    (560.0, 540.0, 0.6),
    (680.0, 510.0, 0.7),
];

pub(crate) fn draw(c: &mut Canvas<'_>) {
    for (x, y, s) in BATS {
        c.local(x, y, s, bat);
    }
}

fn bat(c: &mut Canvas<'_>) {
    let color = rgb(0.05, 0.05, 0.07);
    c.polygon(&[(0.0, 0.0), (-18.0, 8.0), (-30.0, 0.0)], color);
    c.polygon(&[(0.0, 0.0), (18.0, 8.0), (30.0, 0.0)], color);
    c.polygon(&[(-4.0, 0.0), (4.0, 0.0), (0.0, -10.0)], color);
}
