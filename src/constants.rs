/// Shared constants for path sampling and kinematics propagation

/// Default number of sample points generated per path segment
///
/// Each segment is sampled at `samples + 1` points; the first point of every
/// non-initial segment is dropped so joints are seamless, giving a total of
/// `1 + samples * segment_count` waypoints for the whole path.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 100;

/// Scale factor for rounding waypoint coordinates to 4 decimal places
///
/// The reference path is persisted as decimal text; rounding at generation
/// time keeps the generate -> persist -> reload round trip lossless.
pub const COORD_ROUND_FACTOR: f64 = 1e4;

/// General numerical tolerance for floating point comparisons
pub const NUMERICAL_TOLERANCE: f64 = 1e-9;

/// Minimum separation between the current drive point and the previous trace
/// point for a heading to be recovered from their difference vector
///
/// Below this threshold the direction is undefined and the propagator retains
/// the heading from the previous time step.
pub const MIN_DIRECTION_NORM: f64 = 1e-9;
