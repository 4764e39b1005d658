//! CPU tessellation of draw commands into a colored triangle list.
//!
//! Every command becomes plain triangles (three vertices each, no index
//! buffer) appended in recording order, so one draw call reproduces the
//! painter's order exactly.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, LinearGradient, Paint, SpreadMode};
use crate::scene::shapes::MIN_SEGMENTS;
use crate::scene::{DrawCmd, DrawList, EllipseCmd, GlowCmd, PolygonCmd, PolylineCmd};

/// One vertex of the mesh pipeline: logical-pixel position + premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    fn new(p: Vec2, c: Color) -> Self {
        Self { pos: [p.x, p.y], color: c.to_array() }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Converts a [`DrawList`] into triangles.
///
/// Reuses its vertex buffer across frames. Degenerate commands (empty rects,
/// zero radii, fewer than three polygon points, non-finite geometry) are
/// skipped and counted.
#[derive(Debug, Default)]
pub struct Tessellator {
    vertices: Vec<MeshVertex>,
    skipped: usize,
    warned_degenerate: bool,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellates the whole list in paint order and returns the vertices.
    pub fn tessellate(&mut self, list: &DrawList) -> &[MeshVertex] {
        self.vertices.clear();
        self.skipped = 0;

        for cmd in list.items() {
            let emitted = match cmd {
                DrawCmd::Rect(c) => self.rect(c.rect, &c.paint),
                DrawCmd::Ellipse(c) => self.ellipse(c),
                DrawCmd::Glow(c) => self.glow(c),
                DrawCmd::Polygon(c) => self.polygon(c),
                DrawCmd::Polyline(c) => self.polyline(c),
            };
            if !emitted {
                self.skipped += 1;
                if !self.warned_degenerate {
                    log::debug!("tessellator: skipping degenerate {} command", cmd.kind());
                    self.warned_degenerate = true;
                }
            }
        }

        &self.vertices
    }

    /// Vertices produced by the last [`tessellate`](Self::tessellate) call.
    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Number of commands skipped by the last pass.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    // ── shapes ────────────────────────────────────────────────────────────

    fn rect(&mut self, rect: Rect, paint: &Paint) -> bool {
        let r = rect.normalized();
        if r.is_empty() || !r.is_finite() {
            return false;
        }

        match paint {
            Paint::Solid(c) => self.quad(r.corners(), [*c; 4]),
            Paint::LinearGradient(g) if !g.is_valid() => {
                // Degenerate gradient: fill with the first stop, if any.
                let c = g.stops.first().map_or(Color::transparent(), |s| s.color);
                self.quad(r.corners(), [c; 4]);
            }
            Paint::LinearGradient(g) if g.spread == SpreadMode::Pad && g.is_vertical() => {
                self.banded_rect(r, g, true);
            }
            Paint::LinearGradient(g) if g.spread == SpreadMode::Pad && g.is_horizontal() => {
                self.banded_rect(r, g, false);
            }
            Paint::LinearGradient(g) => {
                let corners = r.corners();
                let colors = corners.map(|p| g.sample(g.param_at(p)));
                self.quad(corners, colors);
            }
        }
        true
    }

    /// Splits `r` at every stop that falls inside it, so multi-stop gradients
    /// are exact under per-vertex interpolation.
    fn banded_rect(&mut self, r: Rect, g: &LinearGradient, vertical: bool) {
        let along = |v: Vec2| if vertical { v.y } else { v.x };
        let (lo, hi) = (along(r.min()), along(r.max()));
        let (g0, g1) = (along(g.start), along(g.end));

        let mut cuts = vec![lo, hi];
        cuts.extend(
            g.stops
                .iter()
                .map(|s| g0 + s.t * (g1 - g0))
                .filter(|&c| c > lo && c < hi),
        );
        cuts.sort_by(f32::total_cmp);
        cuts.dedup();

        for pair in cuts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let ca = g.sample((a - g0) / (g1 - g0));
            let cb = g.sample((b - g0) / (g1 - g0));
            if vertical {
                let (x0, x1) = (r.min().x, r.max().x);
                self.quad(
                    [Vec2::new(x0, a), Vec2::new(x1, a), Vec2::new(x1, b), Vec2::new(x0, b)],
                    [ca, ca, cb, cb],
                );
            } else {
                let (y0, y1) = (r.min().y, r.max().y);
                self.quad(
                    [Vec2::new(a, y0), Vec2::new(b, y0), Vec2::new(b, y1), Vec2::new(a, y1)],
                    [ca, cb, cb, ca],
                );
            }
        }
    }

    fn ellipse(&mut self, cmd: &EllipseCmd) -> bool {
        self.fan(cmd.center, cmd.radii, cmd.color, cmd.color, cmd.segments)
    }

    fn glow(&mut self, cmd: &GlowCmd) -> bool {
        self.fan(cmd.center, Vec2::new(cmd.radius, cmd.radius), cmd.inner, cmd.outer, cmd.segments)
    }

    fn fan(&mut self, center: Vec2, radii: Vec2, inner: Color, outer: Color, segments: u16) -> bool {
        if !(center.is_finite() && radii.is_finite()) || radii.x <= 0.0 || radii.y <= 0.0 {
            return false;
        }

        let segments = segments.max(MIN_SEGMENTS);
        let step = std::f32::consts::TAU / segments as f32;
        let rim = |i: u16| {
            let t = i as f32 * step;
            Vec2::new(center.x + t.cos() * radii.x, center.y + t.sin() * radii.y)
        };

        let mut prev = rim(0);
        for i in 1..=segments {
            let next = rim(i);
            self.tri([center, prev, next], [inner, outer, outer]);
            prev = next;
        }
        true
    }

    fn polygon(&mut self, cmd: &PolygonCmd) -> bool {
        if cmd.points.len() < 3 || !cmd.points.iter().all(|p| p.is_finite()) {
            return false;
        }

        let first = cmd.points[0];
        for pair in cmd.points[1..].windows(2) {
            self.tri([first, pair[0], pair[1]], [cmd.color; 3]);
        }
        true
    }

    fn polyline(&mut self, cmd: &PolylineCmd) -> bool {
        if cmd.points.len() < 2 || !(cmd.width > 0.0) {
            return false;
        }

        let half = cmd.width * 0.5;
        let mut any = false;
        for pair in cmd.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if !(a.is_finite() && b.is_finite()) {
                continue;
            }
            let Some(dir) = (b - a).normalized() else { continue };
            let n = dir.perp() * half;
            self.quad([a + n, b + n, b - n, a - n], [cmd.color; 4]);
            any = true;
        }
        any
    }

    // ── primitives ────────────────────────────────────────────────────────

    #[inline]
    fn tri(&mut self, p: [Vec2; 3], c: [Color; 3]) {
        self.vertices.extend([
            MeshVertex::new(p[0], c[0]),
            MeshVertex::new(p[1], c[1]),
            MeshVertex::new(p[2], c[2]),
        ]);
    }

    #[inline]
    fn quad(&mut self, p: [Vec2; 4], c: [Color; 4]) {
        self.tri([p[0], p[1], p[2]], [c[0], c[1], c[2]]);
        self.tri([p[0], p[2], p[3]], [c[0], c[2], c[3]]);
    }
}
