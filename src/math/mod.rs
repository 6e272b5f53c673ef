pub mod matrix;
pub mod transform;
pub mod tuple;

/// Tolerance used for all approximate comparisons. Transform chains
/// accumulate floating-point error, so exact equality is never useful here.
pub const EPSILON: f64 = 1e-5;

/// Approximately compares two floats.
pub fn equals(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
