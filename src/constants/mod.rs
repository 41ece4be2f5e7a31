//! Constants shared by the angle and trigonometry calculations

use std::f64::consts::PI;

// Tolerances
/// Threshold below which a value is treated as zero.
///
/// Used both for singularity detection in the evaluator and for matching
/// fractions in the rationalizer, so the two always agree on what "exact" means.
pub const TOLERANCE: f64 = 1e-10;

// Rationalizer search space
/// Largest denominator tried when rationalizing a multiple of π
pub const MAX_DENOMINATOR: i64 = 12;
/// Numerators tried run from `-MAX_NUMERATOR` to `MAX_NUMERATOR` inclusive
pub const MAX_NUMERATOR: i64 = 12;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees in a full circle
pub const DEGREES_PER_TURN: f64 = 360.0;

/// Returns true when `value` is within [`TOLERANCE`] of zero
#[inline]
pub fn is_negligible(value: f64) -> bool {
    value.abs() < TOLERANCE
}
