//! Scene element routines, one module per layer.
//!
//! Every routine is a pure function of its arguments: fixed constants, the
//! animation scalars it is handed, and generators it seeds itself.

pub(crate) mod bats;
pub(crate) mod boat;
pub(crate) mod bridge;
pub(crate) mod clouds;
pub(crate) mod halftone;
pub(crate) mod lamps;
pub(crate) mod lights;
pub(crate) mod moon;
pub(crate) mod power;
pub(crate) mod signals;
pub(crate) mod skyline;
pub(crate) mod sky;
pub(crate) mod sun;
pub(crate) mod train;
pub(crate) mod viaduct;
pub(crate) mod water;

/// Road deck / river bank height.
pub(crate) const BRIDGE_Y: f32 = 120.0;
/// Rail height on the viaduct.
pub(crate) const TRACK_Y: f32 = 170.0;
/// Height of the road deck above `BRIDGE_Y`.
pub(crate) const DECK_H: f32 = 72.0;
