/// The table grows as soon as `len / capacity` reaches this ratio.
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// `MAX_LOAD_FACTOR` as an exact fraction, so the growth check never touches floats.
pub(crate) const LOAD_NUMERATOR: usize = 1;
pub(crate) const LOAD_DENOMINATOR: usize = 2;

/// Requested minimum capacity used by `new()`. Rounded up to the first schedule entry.
pub const DEFAULT_MIN_CAPACITY: usize = 0;
