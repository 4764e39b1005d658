use std::time::{Duration, Instant};

/// One due simulation tick.
#[derive(Debug, Copy, Clone)]
pub struct TickTime {
    /// Fixed step, in seconds (the clock interval).
    pub dt: f32,

    /// Monotonic tick counter.
    pub index: u64,

    /// Instant the tick was polled at.
    pub now: Instant,
}

/// Fixed-interval tick scheduler.
///
/// Deadlines advance by exactly one interval per tick, so ticks do not drift
/// when a poll arrives late. After `max_catch_up` consecutive overdue ticks the
/// backlog is dropped and the schedule re-anchors to the current instant.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next: Instant,
    index: u64,
    max_catch_up: u32,
    burst: u32,
}

impl TickClock {
    pub const DEFAULT_MAX_CATCH_UP: u32 = 4;

    /// Creates a clock whose first tick is due one interval from now.
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            next: Instant::now() + interval,
            index: 0,
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
            burst: 0,
        }
    }

    /// Sets the maximum number of ticks delivered back-to-back (at least 1).
    pub fn with_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Next instant at which a tick becomes due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Re-anchors the schedule: next tick one interval after `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
        self.burst = 0;
    }

    /// Returns the next due tick, if any. Call in a loop until `None`.
    pub fn poll(&mut self, now: Instant) -> Option<TickTime> {
        if now < self.next {
            self.burst = 0;
            return None;
        }

        if self.burst >= self.max_catch_up {
            let behind = now.saturating_duration_since(self.next);
            log::debug!("tick clock: {} ms behind; dropping backlog", behind.as_millis());
            self.reset(now);
            return None;
        }

        self.burst += 1;
        self.next += self.interval;

        let tick = TickTime {
            dt: self.interval.as_secs_f32(),
            index: self.index,
            now,
        };
        self.index = self.index.wrapping_add(1);
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS16: Duration = Duration::from_millis(16);

    fn drain(clock: &mut TickClock, now: Instant) -> Vec<TickTime> {
        std::iter::from_fn(|| clock.poll(now)).collect()
    }

    #[test]
    fn nothing_due_before_deadline() {
        let start = Instant::now();
        let mut clock = TickClock::new(MS16);
        clock.reset(start);
        assert!(clock.poll(start).is_none());
        assert!(clock.poll(start + Duration::from_millis(15)).is_none());
    }

    #[test]
    fn one_tick_per_interval() {
        let start = Instant::now();
        let mut clock = TickClock::new(MS16);
        clock.reset(start);

        let ticks = drain(&mut clock, start + MS16);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].index, 0);
        assert!((ticks[0].dt - 0.016).abs() < 1e-6);
        assert_eq!(clock.deadline(), start + MS16 * 2);

        let ticks = drain(&mut clock, start + MS16 * 2);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].index, 1);
    }

    #[test]
    fn late_poll_catches_up_without_drift() {
        let start = Instant::now();
        let mut clock = TickClock::new(MS16);
        clock.reset(start);

        let ticks = drain(&mut clock, start + MS16 * 3 + Duration::from_millis(5));
        assert_eq!(ticks.len(), 3);
        assert_eq!(clock.deadline(), start + MS16 * 4);
    }

    #[test]
    fn long_stall_is_capped_and_reanchored() {
        let start = Instant::now();
        let mut clock = TickClock::new(MS16).with_catch_up(4);
        clock.reset(start);

        let now = start + Duration::from_secs(2);
        let ticks = drain(&mut clock, now);
        assert_eq!(ticks.len(), 4);
        assert_eq!(clock.deadline(), now + MS16);
        assert_eq!(ticks.last().map(|t| t.index), Some(3));
    }
}
