use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops are expected sorted by `t`.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Top-to-bottom gradient over `[top, bottom]` (logical y), padded outside.
    pub fn vertical(top: f32, bottom: f32, stops: Vec<ColorStop>) -> Self {
        Self::new(Vec2::new(0.0, top), Vec2::new(0.0, bottom), stops, SpreadMode::Pad)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// True when the gradient axis runs along y only.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x && self.start.y != self.end.y
    }

    /// True when the gradient axis runs along x only.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y && self.start.x != self.end.x
    }

    /// Gradient parameter of `p` projected onto the axis (unspread).
    pub fn param_at(&self, p: Vec2) -> f32 {
        let axis = self.end - self.start;
        let len2 = axis.x * axis.x + axis.y * axis.y;
        if len2 <= 0.0 {
            return 0.0;
        }
        let d = p - self.start;
        (d.x * axis.x + d.y * axis.y) / len2
    }

    /// Color at parameter `t`, after applying the spread mode.
    pub fn sample(&self, t: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::transparent();
        };
        let t = self.spread_t(t);

        if t <= first.t {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.t) / span);
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    fn spread_t(&self, t: f32) -> f32 {
        match self.spread {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
            SpreadMode::Repeat => t.rem_euclid(1.0),
            SpreadMode::Reflect => {
                let m = t.rem_euclid(2.0);
                if m > 1.0 { 2.0 - m } else { m }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bw(spread: SpreadMode) -> LinearGradient {
        LinearGradient::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            vec![
                ColorStop::new(0.0, Color::rgb(0.0, 0.0, 0.0)),
                ColorStop::new(1.0, Color::rgb(1.0, 1.0, 1.0)),
            ],
            spread,
        )
    }

    #[test]
    fn sample_midpoint_interpolates() {
        assert_eq!(bw(SpreadMode::Pad).sample(0.5), Color::from_premul(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn sample_pad_clamps() {
        let g = bw(SpreadMode::Pad);
        assert_eq!(g.sample(-1.0), Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(g.sample(2.0), Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn sample_reflect_mirrors() {
        let g = bw(SpreadMode::Reflect);
        assert_eq!(g.sample(1.25), g.sample(0.75));
    }

    #[test]
    fn sample_three_stops_hits_middle_stop() {
        let mid = Color::rgb(0.2, 0.4, 0.6);
        let g = LinearGradient::vertical(
            0.0,
            10.0,
            vec![
                ColorStop::new(0.0, Color::rgb(0.0, 0.0, 0.0)),
                ColorStop::new(0.5, mid),
                ColorStop::new(1.0, Color::rgb(1.0, 1.0, 1.0)),
            ],
        );
        assert_eq!(g.sample(0.5), mid);
    }

    #[test]
    fn param_projects_onto_axis() {
        let g = bw(SpreadMode::Pad);
        assert_eq!(g.param_at(Vec2::new(37.0, 25.0)), 0.25);
    }

    #[test]
    fn axis_classification() {
        assert!(bw(SpreadMode::Pad).is_vertical());
        assert!(!bw(SpreadMode::Pad).is_horizontal());
    }
}
