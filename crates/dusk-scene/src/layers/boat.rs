use crate::canvas::{rgb, Canvas};

/// Waterline the boat sits on.
const WATER_Y: f32 = 65.0;
const SCALE: f32 = 1.4;

const HULL: [(f32, f32); 7] = [
    (0.0, 2.0),
    (10.0, 0.0),
    (95.0, 0.0),
    (120.0, 9.0),
    (95.0, 18.0),
    (12.0, 18.0),
    (0.0, 14.0),
];
const CABIN: [(f32, f32); 4] = [(30.0, 18.0), (70.0, 18.0), (60.0, 34.0), (34.0, 34.0)];
const WINDSHIELD: [(f32, f32); 4] = [(38.0, 22.0), (56.0, 22.0), (50.0, 30.0), (40.0, 30.0)];

/// Speed boat with its stern at `x`.
pub(crate) fn draw(c: &mut Canvas<'_>, x: f32) {
    c.local(x, WATER_Y, SCALE, |c| {
        c.polygon(&HULL, rgb(0.12, 0.12, 0.15));
        c.line(12.0, 18.0, 95.0, 18.0, 2.0, rgb(0.25, 0.25, 0.28));
        c.fill_rect(14.0, 7.0, 70.0, 3.0, rgb(0.0, 0.0, 0.0));

        c.polygon(&CABIN, rgb(0.88, 0.88, 0.90));
        let glass = rgb(0.30, 0.55, 0.75);
        c.polygon(&WINDSHIELD, glass);
        c.fill_rect(58.0, 22.0, 10.0, 6.0, glass);
    });
}
