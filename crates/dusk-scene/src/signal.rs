//! Traffic signal phase logic.

/// Length of one red → green → yellow cycle, in seconds of traffic phase.
pub const SIGNAL_CYCLE: f32 = 6.0;
const RED_END: f32 = 2.5;
const GREEN_END: f32 = 5.0;

/// Lit aspect of a traffic signal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SignalAspect {
    Red,
    Green,
    Yellow,
}

/// Aspect of a signal shifted by `offset` at `traffic_phase`.
///
/// `[0, 2.5)` red, `[2.5, 5.0)` green, `[5.0, 6.0)` yellow of the local cycle.
pub fn signal_aspect(traffic_phase: f32, offset: f32) -> SignalAspect {
    let local = (traffic_phase + offset).rem_euclid(SIGNAL_CYCLE);
    if local < RED_END {
        SignalAspect::Red
    } else if local < GREEN_END {
        SignalAspect::Green
    } else {
        SignalAspect::Yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_phases() {
        assert_eq!(signal_aspect(0.0, 0.0), SignalAspect::Red);
        assert_eq!(signal_aspect(3.0, 0.0), SignalAspect::Green);
        assert_eq!(signal_aspect(5.5, 0.0), SignalAspect::Yellow);
    }

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(signal_aspect(2.5, 0.0), SignalAspect::Green);
        assert_eq!(signal_aspect(5.0, 0.0), SignalAspect::Yellow);
        assert_eq!(signal_aspect(6.0, 0.0), SignalAspect::Red);
    }

    #[test]
    fn offset_shifts_the_cycle() {
        assert_eq!(signal_aspect(0.0, 3.0), SignalAspect::Green);
        assert_eq!(signal_aspect(0.0, -1.0), SignalAspect::Yellow);
        assert_eq!(signal_aspect(12.0 + 2.6, 0.0), SignalAspect::Green);
    }

    #[test]
    fn signals_three_seconds_apart_never_match() {
        for i in 0..6000 {
            let phase = i as f32 * 0.001;
            assert_ne!(
                signal_aspect(phase, 0.0),
                signal_aspect(phase, 3.0),
                "phase {phase}"
            );
        }
    }
}
