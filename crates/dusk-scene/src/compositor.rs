//! Back-to-front scene composition.

use crate::animation::AnimationState;
use crate::canvas::Canvas;
use crate::layers::{
    bats, boat, bridge, clouds, halftone, lamps, lights, moon, power, signals, sky, skyline, sun,
    train, viaduct, water,
};

/// One ordered drawing pass of a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layer {
    Sky,
    Bats,
    Clouds,
    HalftoneBand,
    Sun,
    CloudBands,
    Skyline,
    Bridge,
    Water,
    Boat,
    PowerLines,
    TrafficSignals,
    LampPosts,
    Viaduct,
    Train,
    Moon,
    CityLights,
}

/// Paint order of a frame: each layer draws over all earlier ones.
pub const PAINT_ORDER: [Layer; 17] = [
    Layer::Sky,
    Layer::Bats,
    Layer::Clouds,
    Layer::HalftoneBand,
    Layer::Sun,
    Layer::CloudBands,
    Layer::Skyline,
    Layer::Bridge,
    Layer::Water,
    Layer::Boat,
    Layer::PowerLines,
    Layer::TrafficSignals,
    Layer::LampPosts,
    Layer::Viaduct,
    Layer::Train,
    Layer::Moon,
    Layer::CityLights,
];

impl Layer {
    /// Records this layer into `canvas`.
    pub fn draw(self, state: &AnimationState, canvas: &mut Canvas<'_>) {
        match self {
            Layer::Sky => sky::draw(canvas),
            Layer::Bats => bats::draw(canvas),
            Layer::Clouds => clouds::draw_hero(canvas),
            Layer::HalftoneBand => halftone::draw(canvas),
            Layer::Sun => sun::draw(canvas),
            Layer::CloudBands => clouds::draw_bands(canvas),
            Layer::Skyline => skyline::draw(canvas),
            Layer::Bridge => bridge::draw(canvas),
            Layer::Water => water::draw(canvas, state.water_phase),
            Layer::Boat => boat::draw(canvas, state.boat_x),
            Layer::PowerLines => power::draw(canvas),
            Layer::TrafficSignals => signals::draw(canvas, state.traffic_phase),
            Layer::LampPosts => lamps::draw(canvas),
            Layer::Viaduct => viaduct::draw(canvas),
            Layer::Train => train::draw(canvas, state.train_x),
            Layer::Moon => moon::draw(canvas),
            Layer::CityLights => lights::draw(canvas),
        }
    }

    /// True for layers whose output depends on the animation state.
    pub fn is_animated(self) -> bool {
        matches!(self, Layer::Water | Layer::Boat | Layer::TrafficSignals | Layer::Train)
    }
}

/// Records one frame of `state` into `canvas`, layer by layer in [`PAINT_ORDER`].
///
/// Reads `state` only. Identical states record identical draw lists.
pub fn render_frame(state: &AnimationState, canvas: &mut Canvas<'_>) {
    for layer in PAINT_ORDER {
        canvas.begin_layer(layer);
        layer.draw(state, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{advance, TICK_DT, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
    use crate::canvas::LayerSpan;
    use dusk_engine::coords::Viewport;
    use dusk_engine::scene::DrawList;

    fn viewport() -> Viewport {
        Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }

    fn record(state: &AnimationState) -> (DrawList, Vec<Layer>, Vec<LayerSpan>) {
        let mut dl = DrawList::new();
        let (layers, spans) = {
            let mut c = Canvas::new(&mut dl, viewport());
            render_frame(state, &mut c);
            (c.layers(), c.layer_spans())
        };
        (dl, layers, spans)
    }

    fn span_items(dl: &DrawList, spans: &[LayerSpan], layer: Layer) -> Vec<dusk_engine::scene::DrawCmd> {
        let span = spans.iter().find(|s| s.layer == layer).map(|s| s.items.clone());
        span.map_or_else(Vec::new, |r| dl.items()[r].to_vec())
    }

    // ── order ─────────────────────────────────────────────────────────────

    #[test]
    fn records_paint_order() {
        let (_, layers, _) = record(&AnimationState::new());
        assert_eq!(layers, PAINT_ORDER.to_vec());
    }

    #[test]
    fn order_is_independent_of_state() {
        let mut s = AnimationState::new();
        s.train_x = 900.0;
        s.boat_x = -150.0;
        s.traffic_phase = 5.5;
        s.water_phase = 77.7;
        s.paused = true;
        let (_, layers, _) = record(&s);
        assert_eq!(layers, PAINT_ORDER.to_vec());
    }

    #[test]
    fn every_layer_draws_something() {
        let (dl, _, spans) = record(&AnimationState::new());
        for span in &spans {
            assert!(!span.items.is_empty(), "{:?} recorded nothing", span.layer);
        }
        assert_eq!(spans.last().map(|s| s.items.end), Some(dl.len()));
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn identical_state_identical_draw_lists() {
        let mut s = AnimationState::new();
        for _ in 0..37 {
            advance(&mut s, TICK_DT);
        }
        let (a, _, _) = record(&s);
        let (b, _, _) = record(&s.clone());
        assert_eq!(a, b);
    }

    #[test]
    fn static_layers_ignore_state() {
        let mut moved = AnimationState::new();
        for _ in 0..200 {
            advance(&mut moved, TICK_DT);
        }
        let (a, _, sa) = record(&AnimationState::new());
        let (b, _, sb) = record(&moved);

        for layer in PAINT_ORDER.into_iter().filter(|l| !l.is_animated()) {
            assert_eq!(span_items(&a, &sa, layer), span_items(&b, &sb, layer), "{layer:?}");
        }
    }

    // ── state dependence ──────────────────────────────────────────────────

    #[test]
    fn boat_follows_boat_x() {
        let mut s = AnimationState::new();
        let (a, _, sa) = record(&s);
        s.boat_x += 10.0;
        let (b, _, sb) = record(&s);

        let before = span_items(&a, &sa, Layer::Boat);
        let after = span_items(&b, &sb, Layer::Boat);
        assert_ne!(before, after);
        assert_eq!(before.len(), after.len());
    }

    #[test]
    fn train_follows_train_x() {
        let mut s = AnimationState::new();
        let (a, _, sa) = record(&s);
        s.train_x = 400.0;
        let (b, _, sb) = record(&s);
        assert_ne!(span_items(&a, &sa, Layer::Train), span_items(&b, &sb, Layer::Train));
    }

    #[test]
    fn signals_follow_traffic_phase() {
        let mut s = AnimationState::new();
        let (a, _, sa) = record(&s);
        s.traffic_phase = 3.0;
        let (b, _, sb) = record(&s);
        assert_ne!(
            span_items(&a, &sa, Layer::TrafficSignals),
            span_items(&b, &sb, Layer::TrafficSignals)
        );
    }
}
