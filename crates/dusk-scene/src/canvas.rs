//! Scene-facing drawing surface.
//!
//! Scene coordinates follow the classic orthographic setup: origin at the
//! bottom-left corner, +Y up. The canvas flips them into the engine's
//! top-left logical pixel space and applies a translate/scale transform
//! stack, so moving objects can be drawn in local coordinates.

use std::ops::Range;

use dusk_engine::coords::{Rect, Vec2, Viewport};
use dusk_engine::paint::{Color, ColorStop, LinearGradient};
use dusk_engine::scene::DrawList;

use crate::compositor::Layer;

/// Straight-alpha RGBA color, as scene routines specify them.
#[inline]
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::from_straight(r, g, b, a)
}

/// Opaque color.
#[inline]
pub fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::rgb(r, g, b)
}

/// Affine translate + scale, applied as `translate + p * scale`.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Transform {
    translate: Vec2,
    scale: Vec2,
}

impl Transform {
    const IDENTITY: Self = Self {
        translate: Vec2::new(0.0, 0.0),
        scale: Vec2::new(1.0, 1.0),
    };

    #[inline]
    fn apply(self, p: Vec2) -> Vec2 {
        self.translate + p.scale(self.scale)
    }
}

/// Contiguous range of draw items recorded by one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpan {
    pub layer: Layer,
    pub items: Range<usize>,
}

/// Drawing API over a [`DrawList`] in scene coordinates.
pub struct Canvas<'a> {
    list: &'a mut DrawList,
    viewport: Viewport,
    current: Transform,
    stack: Vec<Transform>,
    layer_starts: Vec<(Layer, usize)>,
}

impl<'a> Canvas<'a> {
    /// Wraps `list`; items are appended after whatever it already holds.
    pub fn new(list: &'a mut DrawList, viewport: Viewport) -> Self {
        Self {
            list,
            viewport,
            current: Transform::IDENTITY,
            stack: Vec::new(),
            layer_starts: Vec::new(),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ── layers ────────────────────────────────────────────────────────────

    /// Marks the start of `layer`; subsequent items belong to it.
    pub fn begin_layer(&mut self, layer: Layer) {
        self.layer_starts.push((layer, self.list.len()));
    }

    /// Layers in the order they were begun.
    pub fn layers(&self) -> Vec<Layer> {
        self.layer_starts.iter().map(|(l, _)| *l).collect()
    }

    /// Item ranges produced by each layer.
    pub fn layer_spans(&self) -> Vec<LayerSpan> {
        let end = self.list.len();
        self.layer_starts
            .iter()
            .enumerate()
            .map(|(i, &(layer, start))| {
                let stop = self.layer_starts.get(i + 1).map_or(end, |&(_, s)| s);
                LayerSpan {
                    layer,
                    items: start..stop,
                }
            })
            .collect()
    }

    // ── transform stack ───────────────────────────────────────────────────

    pub fn save(&mut self) {
        self.stack.push(self.current);
    }

    pub fn restore(&mut self) {
        match self.stack.pop() {
            Some(t) => self.current = t,
            None => {
                log::warn!("canvas: restore without matching save; resetting transform");
                self.current = Transform::IDENTITY;
            }
        }
    }

    /// Moves the local origin by `(dx, dy)` in current local units.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.current.translate = self.current.apply(Vec2::new(dx, dy));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.current.scale = self.current.scale.scale(Vec2::new(sx, sy));
    }

    /// Runs `f` with a local frame at `(x, y)` scaled by `s`, restoring afterwards.
    pub fn local<F>(&mut self, x: f32, y: f32, s: f32, f: F)
    where
        F: FnOnce(&mut Canvas<'a>),
    {
        self.save();
        self.translate(x, y);
        self.scale(s, s);
        f(self);
        self.restore();
    }

    /// Maps a local scene point to engine logical pixels.
    pub fn map(&self, x: f32, y: f32) -> Vec2 {
        let p = self.current.apply(Vec2::new(x, y));
        Vec2::new(p.x, self.viewport.flip_y(p.y))
    }

    fn map_radii(&self, rx: f32, ry: f32) -> Vec2 {
        Vec2::new(rx * self.current.scale.x.abs(), ry * self.current.scale.y.abs())
    }

    fn map_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        let a = self.map(x, y);
        let b = self.map(x + w, y + h);
        Rect::new(a.x.min(b.x), a.y.min(b.y), (b.x - a.x).abs(), (b.y - a.y).abs())
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Rectangle with its bottom-left corner at `(x, y)`.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let r = self.map_rect(x, y, w, h);
        self.list.push_solid_rect(r, color);
    }

    /// Vertical gradient over a rectangle; stop `t = 0` is the top edge.
    pub fn vertical_gradient(&mut self, x: f32, y: f32, w: f32, h: f32, stops: &[(f32, Color)]) {
        let r = self.map_rect(x, y, w, h);
        let top = self.map(x, y + h).y;
        let bottom = self.map(x, y).y;
        let stops = stops.iter().map(|&(t, c)| ColorStop::new(t, c)).collect();
        self.list.push_gradient_rect(r, LinearGradient::vertical(top, bottom, stops));
    }

    pub fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, segments: u16, color: Color) {
        let c = self.map(cx, cy);
        let radii = self.map_radii(rx, ry);
        self.list.push_ellipse(c, radii, color, segments);
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, segments: u16, color: Color) {
        self.ellipse(cx, cy, r, r, segments, color);
    }

    /// Radial fade from `inner` at the center to `outer` at `radius`.
    pub fn glow(&mut self, cx: f32, cy: f32, radius: f32, segments: u16, inner: Color, outer: Color) {
        let c = self.map(cx, cy);
        let r = radius * self.current.scale.x.abs().max(self.current.scale.y.abs());
        self.list.push_glow(c, r, inner, outer, segments);
    }

    /// Standard light halo: `(r, g, b)` from 35% alpha at the center to 4% at the rim.
    pub fn radial_glow(&mut self, cx: f32, cy: f32, radius: f32, segments: u16, [r, g, b]: [f32; 3]) {
        self.glow(cx, cy, radius, segments, rgba(r, g, b, 0.35), rgba(r, g, b, 0.04));
    }

    /// Convex polygon in local coordinates.
    pub fn polygon(&mut self, points: &[(f32, f32)], color: Color) {
        let pts = points.iter().map(|&(x, y)| self.map(x, y)).collect();
        self.list.push_polygon(pts, color);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        let (a, b) = (self.map(x1, y1), self.map(x2, y2));
        self.list.push_line(a, b, width, color);
    }

    pub fn polyline(&mut self, points: &[(f32, f32)], width: f32, color: Color) {
        let pts = points.iter().map(|&(x, y)| self.map(x, y)).collect();
        self.list.push_polyline(pts, width, color);
    }

    /// Square point of side `size` centered on `(x, y)`.
    pub fn point(&mut self, x: f32, y: f32, size: f32, color: Color) {
        let half = size * 0.5;
        self.fill_rect(x - half, y - half, size, size, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusk_engine::scene::DrawCmd;

    fn vp() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn rect_of(cmd: &DrawCmd) -> Rect {
        match cmd {
            DrawCmd::Rect(r) => r.rect,
            other => panic!("expected rect, got {}", other.kind()),
        }
    }

    // ── coordinates ───────────────────────────────────────────────────────

    #[test]
    fn scene_origin_is_bottom_left() {
        let mut dl = DrawList::new();
        let c = Canvas::new(&mut dl, vp());
        assert_eq!(c.map(0.0, 0.0), Vec2::new(0.0, 600.0));
        assert_eq!(c.map(800.0, 600.0), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn rect_is_flipped_to_top_left() {
        let mut dl = DrawList::new();
        let mut c = Canvas::new(&mut dl, vp());
        c.fill_rect(10.0, 20.0, 30.0, 40.0, rgb(1.0, 0.0, 0.0));
        assert_eq!(rect_of(&dl.items()[0]), Rect::new(10.0, 540.0, 30.0, 40.0));
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn local_frame_translates_then_scales() {
        let mut dl = DrawList::new();
        let mut c = Canvas::new(&mut dl, vp());
        c.local(100.0, 65.0, 2.0, |c| {
            assert_eq!(c.map(10.0, 5.0), Vec2::new(120.0, 600.0 - 75.0));
        });
        assert_eq!(c.map(0.0, 0.0), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn nested_translations_accumulate_in_local_units() {
        let mut dl = DrawList::new();
        let mut c = Canvas::new(&mut dl, vp());
        c.save();
        c.translate(10.0, 0.0);
        c.scale(2.0, 2.0);
        c.translate(5.0, 0.0);
        assert_eq!(c.map(0.0, 0.0).x, 20.0);
        c.restore();
        assert_eq!(c.map(0.0, 0.0).x, 0.0);
    }

    #[test]
    fn unbalanced_restore_resets_to_identity() {
        let mut dl = DrawList::new();
        let mut c = Canvas::new(&mut dl, vp());
        c.translate(50.0, 50.0);
        c.restore();
        assert_eq!(c.map(0.0, 0.0), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn ellipse_radii_follow_scale() {
        let mut dl = DrawList::new();
        let mut c = Canvas::new(&mut dl, vp());
        c.local(0.0, 0.0, 1.4, |c| c.ellipse(0.0, 0.0, 10.0, 5.0, 24, rgb(1.0, 1.0, 1.0)));
        match &dl.items()[0] {
            DrawCmd::Ellipse(e) => {
                assert!((e.radii.x - 14.0).abs() < 1e-5);
                assert!((e.radii.y - 7.0).abs() < 1e-5);
            }
            other => panic!("expected ellipse, got {}", other.kind()),
        }
    }

    #[test]
    fn gradient_top_stop_is_scene_top() {
        let mut dl = DrawList::new();
        let mut c = Canvas::new(&mut dl, vp());
        let (top, bottom) = (rgb(0.0, 0.0, 1.0), rgb(1.0, 0.5, 0.0));
        c.vertical_gradient(0.0, 0.0, 800.0, 600.0, &[(0.0, top), (1.0, bottom)]);
        match &dl.items()[0] {
            DrawCmd::Rect(r) => match &r.paint {
                dusk_engine::paint::Paint::LinearGradient(g) => {
                    assert_eq!(g.start.y, 0.0);
                    assert_eq!(g.end.y, 600.0);
                    assert_eq!(g.sample(0.0), top);
                }
                other => panic!("expected gradient, got {other:?}"),
            },
            other => panic!("expected rect, got {}", other.kind()),
        }
    }

    // ── layer bookkeeping ─────────────────────────────────────────────────

    #[test]
    fn layer_spans_cover_recorded_items() {
        let mut dl = DrawList::new();
        let mut c = Canvas::new(&mut dl, vp());
        c.begin_layer(Layer::Sky);
        c.fill_rect(0.0, 0.0, 1.0, 1.0, rgb(0.0, 0.0, 0.0));
        c.fill_rect(0.0, 0.0, 1.0, 1.0, rgb(0.0, 0.0, 0.0));
        c.begin_layer(Layer::Moon);
        c.circle(0.0, 0.0, 1.0, 8, rgb(1.0, 1.0, 1.0));

        assert_eq!(c.layers(), vec![Layer::Sky, Layer::Moon]);
        assert_eq!(
            c.layer_spans(),
            vec![
                LayerSpan { layer: Layer::Sky, items: 0..2 },
                LayerSpan { layer: Layer::Moon, items: 2..3 },
            ]
        );
    }
}
