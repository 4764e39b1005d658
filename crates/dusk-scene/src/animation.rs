//! Animation state and the fixed-tick updater.

/// Logical scene width.
pub const VIEWPORT_WIDTH: f32 = 800.0;
/// Logical scene height.
pub const VIEWPORT_HEIGHT: f32 = 600.0;

/// Fixed increment applied to the phase timers per tick (~60 Hz).
pub const TICK_DT: f32 = 0.016;

pub const BOAT_SPEED: f32 = 1.2;
pub const INITIAL_TRAIN_SPEED: f32 = 2.8;
pub const TRAIN_SPEED_STEP: f32 = 0.2;
pub const MIN_TRAIN_SPEED: f32 = 0.2;

pub const TRAIN_START_X: f32 = -120.0;
pub const BOAT_START_X: f32 = -120.0;

/// Train wraps to `TRAIN_WRAP_MIN` once it reaches `TRAIN_WRAP_MAX`; both
/// points leave all four cars off-screen.
pub const TRAIN_WRAP_MIN: f32 = -760.0;
pub const TRAIN_WRAP_MAX: f32 = VIEWPORT_WIDTH + 360.0;

pub const BOAT_WRAP_MIN: f32 = -150.0;
pub const BOAT_WRAP_MAX: f32 = VIEWPORT_WIDTH + 120.0;

pub const TRAFFIC_PHASE_WRAP: f32 = 100_000.0;

/// All mutable scene state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub train_x: f32,
    pub boat_x: f32,
    /// Water shimmer clock; advances even while paused.
    pub water_phase: f32,
    /// Traffic signal clock, kept below `TRAFFIC_PHASE_WRAP`.
    pub traffic_phase: f32,
    pub paused: bool,
    pub train_speed: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            train_x: TRAIN_START_X,
            boat_x: BOAT_START_X,
            water_phase: 0.0,
            traffic_phase: 0.0,
            paused: false,
            train_speed: INITIAL_TRAIN_SPEED,
        }
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the pause flag and returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn speed_up(&mut self) {
        self.train_speed += TRAIN_SPEED_STEP;
    }

    /// Slows the train, never below `MIN_TRAIN_SPEED`.
    pub fn slow_down(&mut self) {
        self.train_speed = (self.train_speed - TRAIN_SPEED_STEP).max(MIN_TRAIN_SPEED);
    }
}

/// Advances `state` by one fixed tick.
///
/// Positions move by their per-tick speed, timers by `dt`. While paused only
/// `water_phase` moves.
pub fn advance(state: &mut AnimationState, dt: f32) {
    if !state.paused {
        state.train_x += state.train_speed;
        if state.train_x >= TRAIN_WRAP_MAX {
            state.train_x = TRAIN_WRAP_MIN;
        }

        state.boat_x += BOAT_SPEED;
        if state.boat_x >= BOAT_WRAP_MAX {
            state.boat_x = BOAT_WRAP_MIN;
        }

        state.traffic_phase += dt;
        if state.traffic_phase >= TRAFFIC_PHASE_WRAP {
            state.traffic_phase %= TRAFFIC_PHASE_WRAP;
        }
    }

    state.water_phase += dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(state: &mut AnimationState, n: usize) {
        for _ in 0..n {
            advance(state, TICK_DT);
        }
    }

    // ── motion ────────────────────────────────────────────────────────────

    #[test]
    fn train_moves_linearly_before_first_wrap() {
        let mut s = AnimationState::new();
        for n in 1..=400 {
            advance(&mut s, TICK_DT);
            let expected = TRAIN_START_X + n as f32 * INITIAL_TRAIN_SPEED;
            assert!((s.train_x - expected).abs() < 5e-2, "tick {n}: {} vs {expected}", s.train_x);
        }
    }

    #[test]
    fn positions_stay_within_wrap_bounds() {
        let mut s = AnimationState::new();
        s.train_speed = 7.3;
        for _ in 0..20_000 {
            advance(&mut s, TICK_DT);
            assert!(s.train_x >= TRAIN_WRAP_MIN && s.train_x < TRAIN_WRAP_MAX);
            assert!(s.boat_x >= BOAT_WRAP_MIN && s.boat_x < BOAT_WRAP_MAX);
        }
    }

    #[test]
    fn train_resets_to_wrap_min_on_reaching_max() {
        let mut s = AnimationState::new();
        s.train_x = TRAIN_WRAP_MAX - INITIAL_TRAIN_SPEED;
        advance(&mut s, TICK_DT);
        assert_eq!(s.train_x, TRAIN_WRAP_MIN);
    }

    #[test]
    fn train_wrap_discards_overshoot() {
        let mut s = AnimationState::new();
        s.train_x = TRAIN_WRAP_MAX - 1.0;
        advance(&mut s, TICK_DT);
        assert_eq!(s.train_x, TRAIN_WRAP_MIN);

        // The next ticks restart the linear run from the wrap point.
        advance(&mut s, TICK_DT);
        assert!((s.train_x - (TRAIN_WRAP_MIN + INITIAL_TRAIN_SPEED)).abs() < 1e-4);
    }

    #[test]
    fn boat_resets_to_wrap_min_on_reaching_max() {
        let mut s = AnimationState::new();
        s.boat_x = BOAT_WRAP_MAX - 0.5;
        advance(&mut s, TICK_DT);
        assert_eq!(s.boat_x, BOAT_WRAP_MIN);
    }

    // ── pause ─────────────────────────────────────────────────────────────

    #[test]
    fn pause_freezes_everything_but_water() {
        let mut s = AnimationState::new();
        ticks(&mut s, 10);
        s.toggle_pause();
        let frozen = s.clone();

        let mut last_water = s.water_phase;
        for _ in 0..50 {
            advance(&mut s, TICK_DT);
            assert!(s.water_phase > last_water);
            last_water = s.water_phase;
        }
        assert_eq!(s.train_x, frozen.train_x);
        assert_eq!(s.boat_x, frozen.boat_x);
        assert_eq!(s.traffic_phase, frozen.traffic_phase);
    }

    #[test]
    fn unpausing_resumes_motion() {
        let mut s = AnimationState::new();
        assert!(s.toggle_pause());
        ticks(&mut s, 5);
        assert!(!s.toggle_pause());
        advance(&mut s, TICK_DT);
        assert!((s.train_x - (TRAIN_START_X + INITIAL_TRAIN_SPEED)).abs() < 1e-4);
    }

    // ── speed ─────────────────────────────────────────────────────────────

    #[test]
    fn slow_down_is_clamped() {
        let mut s = AnimationState::new();
        for _ in 0..100 {
            s.slow_down();
            assert!(s.train_speed >= MIN_TRAIN_SPEED);
        }
        assert_eq!(s.train_speed, MIN_TRAIN_SPEED);
    }

    #[test]
    fn speed_up_adds_one_step() {
        let mut s = AnimationState::new();
        s.speed_up();
        assert!((s.train_speed - 3.0).abs() < 1e-6);
    }

    // ── timers ────────────────────────────────────────────────────────────

    #[test]
    fn traffic_phase_wraps() {
        let mut s = AnimationState::new();
        s.traffic_phase = TRAFFIC_PHASE_WRAP - 0.01;
        advance(&mut s, 0.5);
        assert!(s.traffic_phase < TRAFFIC_PHASE_WRAP);
        assert!(s.traffic_phase >= 0.0);
    }

    #[test]
    fn water_phase_never_wraps() {
        let mut s = AnimationState::new();
        s.water_phase = 250_000.0;
        advance(&mut s, 1.0);
        assert_eq!(s.water_phase, 250_001.0);
    }
}
