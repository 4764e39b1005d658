use crate::canvas::{rgb, rgba, Canvas};

use super::BRIDGE_Y;

const LAMP_XS: [f32; 3] = [180.0, 420.0, 660.0];
const POLE_HEIGHT: f32 = 170.0;
const ARM_LEN: f32 = 22.0;
/// Width of the point-stroked pole, arm and head.
const STROKE: f32 = 2.0;

pub(crate) fn draw(c: &mut Canvas<'_>) {
    for x in LAMP_XS {
        lamp_post(c, x, BRIDGE_Y);
    }
}

fn lamp_post(c: &mut Canvas<'_>, x: f32, ground_y: f32) {
    let arm_y = ground_y + POLE_HEIGHT;
    let head_bottom = arm_y - 12.0;
    let (lx, ly) = (x + ARM_LEN, arm_y - 22.0);

    let pole = rgb(0.35, 0.35, 0.38);
    c.line(x, ground_y, x, arm_y, STROKE, pole);
    c.line(x, arm_y, lx, arm_y, STROKE, pole);
    c.line(lx, arm_y, lx, head_bottom, STROKE, rgb(1.0, 0.95, 0.65));

    // core, mid halo, outer halo, wide glow
    c.ellipse(lx, ly, 7.5, 6.0, 32, rgba(1.0, 0.99, 0.88, 1.0));
    c.ellipse(lx, ly, 16.0, 12.0, 32, rgba(1.0, 0.93, 0.72, 0.55));
    c.ellipse(lx, ly, 30.0, 20.0, 32, rgba(1.0, 0.86, 0.55, 0.26));
    c.radial_glow(lx, ly, 60.0, 32, [1.0, 0.85, 0.50]);
}
