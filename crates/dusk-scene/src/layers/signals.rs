use crate::animation::VIEWPORT_WIDTH as W;
use crate::canvas::{rgb, Canvas};
use crate::signal::{signal_aspect, SignalAspect};

use super::{BRIDGE_Y, DECK_H};

/// `(x, phase offset)` of each signal; offsets keep the pair out of step.
pub(crate) const SIGNALS: [(f32, f32); 2] = [(40.0, 0.0), (W - 40.0, 3.0)];

const BOX_W: f32 = 18.0;
const BOX_H: f32 = 54.0;
const LAMP_R: f32 = 6.8;
const DIM: f32 = 0.15;

pub(crate) fn draw(c: &mut Canvas<'_>, traffic_phase: f32) {
    for (x, offset) in SIGNALS {
        signal(c, x, signal_aspect(traffic_phase, offset));
    }
}

fn signal(c: &mut Canvas<'_>, x: f32, lit: SignalAspect) {
    let box_x = x - BOX_W * 0.5;
    let box_y = BRIDGE_Y + DECK_H + 60.0;

    c.fill_rect(x - 4.0, BRIDGE_Y + DECK_H, 8.0, 56.0, rgb(0.12, 0.12, 0.14));
    c.fill_rect(box_x - 2.0, box_y - 6.0, BOX_W + 4.0, BOX_H + 6.0, rgb(0.06, 0.06, 0.07));
    c.fill_rect(box_x, box_y, BOX_W, BOX_H, rgb(0.08, 0.08, 0.09));

    let lamps = [
        (SignalAspect::Red, box_y + BOX_H - 10.0, [DIM, 0.0, 0.0], [1.0, 0.18, 0.18]),
        (SignalAspect::Yellow, box_y + BOX_H * 0.5, [DIM, DIM, 0.0], [1.0, 0.86, 0.2]),
        (SignalAspect::Green, box_y + 10.0, [0.0, DIM, 0.0], [0.4, 1.0, 0.45]),
    ];

    for (_, cy, [r, g, b], _) in lamps {
        c.circle(x, cy, LAMP_R, 24, rgb(r, g, b));
    }

    if let Some(&(_, cy, _, on)) = lamps.iter().find(|(aspect, ..)| *aspect == lit) {
        let [r, g, b] = on;
        c.circle(x, cy, LAMP_R, 24, rgb(r, g, b));
        c.radial_glow(x, cy, 36.0, 24, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusk_engine::coords::Viewport;
    use dusk_engine::scene::{DrawCmd, DrawList};

    fn glows(traffic_phase: f32) -> Vec<f32> {
        let mut dl = DrawList::new();
        let mut c = Canvas::new(&mut dl, Viewport::new(800.0, 600.0));
        draw(&mut c, traffic_phase);
        dl.items()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Glow(g) => Some(g.center.y),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn each_signal_lights_exactly_one_lamp() {
        for i in 0..60 {
            assert_eq!(glows(i as f32 * 0.1).len(), SIGNALS.len());
        }
    }

    #[test]
    fn lit_lamp_moves_with_phase() {
        // Red (top lamp) for the left signal at phase 0, green (bottom) at 3.
        let red = glows(0.0)[0];
        let green = glows(3.0)[0];
        assert!(red < green, "top lamp is nearer the top of the screen");
    }
}
