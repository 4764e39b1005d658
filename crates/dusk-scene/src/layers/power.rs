//! Overhead catenary for the train, plus power pillars strung with wires.

use crate::animation::VIEWPORT_WIDTH as W;
use crate::canvas::{rgb, Canvas};

use super::{BRIDGE_Y, DECK_H, TRACK_Y};

const TOWER_HEIGHT: f32 = 220.0;
const STRANDS: usize = 3;

pub(crate) fn draw(c: &mut Canvas<'_>) {
    catenary(c);

    let mut towers = Vec::new();
    let mut x = 60.0;
    while x < W - 60.0 {
        pillar(c, x, BRIDGE_Y, TOWER_HEIGHT);
        towers.push(x);
        x += 140.0;
    }
    wires(c, &towers, BRIDGE_Y, TOWER_HEIGHT);
}

fn catenary(c: &mut Canvas<'_>) {
    let steel = rgb(0.12, 0.12, 0.14);
    let mut x = 40.0;
    while x < W {
        c.fill_rect(x - 5.0, TRACK_Y, 10.0, 220.0, steel);
        c.fill_rect(x - 24.0, TRACK_Y + 178.0, 48.0, 6.0, steel);
        x += 160.0;
    }

    let cable = rgb(0.22, 0.22, 0.26);
    for dy in [184.0, 196.0] {
        c.line(0.0, TRACK_Y + dy, W, TRACK_Y + dy, 2.0, cable);
    }
}

fn pillar(c: &mut Canvas<'_>, x: f32, base_y: f32, height: f32) {
    let half_w = 8.0;
    let y0 = base_y + DECK_H;
    let top = y0 + height;

    let leg = rgb(0.22, 0.22, 0.26);
    c.fill_rect(x - half_w, y0, 4.0, height, leg);
    c.fill_rect(x + half_w - 4.0, y0, 4.0, height, leg);

    let arm = rgb(0.16, 0.16, 0.18);
    let arm1 = top - height * 0.25;
    let arm2 = top - height * 0.55;
    c.fill_rect(x - 30.0, arm1, 60.0, 4.0, arm);
    c.fill_rect(x - 22.0, arm2, 44.0, 4.0, arm);

    let insulator = rgb(0.65, 0.65, 0.7);
    for (ix, iy) in [(-34.0, arm1), (28.0, arm1), (-26.0, arm2), (20.0, arm2)] {
        c.fill_rect(x + ix, iy + 4.0, 6.0, 6.0, insulator);
    }
}

/// Strand polyline over `towers`: a point at each tower top and one at each
/// span midpoint, sagging slightly per strand.
fn strand_points(towers: &[f32], base_y: f32, height: f32, strand: usize) -> Vec<(f32, f32)> {
    let top_y = base_y + DECK_H + height - strand as f32 * 12.0;
    let mut pts = Vec::with_capacity(towers.len() * 2);

    for (i, &x) in towers.iter().enumerate() {
        let sag = 12.0 * (i as f32 * 0.6 + strand as f32 * 0.9).sin() * 0.08;
        pts.push((x, top_y - sag.abs()));
        if let Some(&next) = towers.get(i + 1) {
            pts.push(((x + next) * 0.5, top_y + 10.0 + sag * 0.6));
        }
    }
    pts
}

fn wires(c: &mut Canvas<'_>, towers: &[f32], base_y: f32, height: f32) {
    let color = rgb(0.06, 0.06, 0.08);
    for strand in 0..STRANDS {
        let pts = strand_points(towers, base_y, height, strand);
        c.polyline(&pts, 2.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strands_visit_every_tower_and_span() {
        let towers = [60.0, 200.0, 340.0, 480.0, 620.0];
        let pts = strand_points(&towers, BRIDGE_Y, TOWER_HEIGHT, 0);
        assert_eq!(pts.len(), towers.len() * 2 - 1);
        assert_eq!(pts[0].0, 60.0);
        assert_eq!(pts[1].0, 130.0);
        assert_eq!(pts[pts.len() - 1].0, 620.0);
    }

    #[test]
    fn lower_strands_hang_lower() {
        let towers = [60.0, 200.0];
        let a = strand_points(&towers, BRIDGE_Y, TOWER_HEIGHT, 0);
        let b = strand_points(&towers, BRIDGE_Y, TOWER_HEIGHT, 2);
        assert!(b[0].1 < a[0].1);
    }

    #[test]
    fn single_tower_has_no_span() {
        assert_eq!(strand_points(&[60.0], BRIDGE_Y, TOWER_HEIGHT, 1).len(), 1);
    }
}
