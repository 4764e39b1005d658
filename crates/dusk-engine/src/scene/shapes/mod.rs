pub(crate) mod ellipse;
pub(crate) mod glow;
pub(crate) mod path;
pub(crate) mod rect;

/// Fan segment count used when a caller has no preference.
pub const DEFAULT_SEGMENTS: u16 = 48;

/// Smallest fan that still encloses an area.
pub const MIN_SEGMENTS: u16 = 3;
