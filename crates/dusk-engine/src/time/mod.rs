//! Time subsystem.
//!
//! Timing utilities decoupled from the runtime:
//! - `TickClock` schedules fixed-interval simulation ticks
//! - `FrameClock` measures the time between presented frames

mod frame_clock;
mod tick_clock;

pub use frame_clock::{FrameClock, FrameTime};
pub use tick_clock::{TickClock, TickTime};
