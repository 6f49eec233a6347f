//! Mathematical utilities for angles.
//!
//! All angles are in radians unless the name says otherwise. Coordinate frame:
//! X-forward, Y-left, counter-clockwise positive rotation.

use std::f64::consts::PI;

/// Steering magnitude below which motion is treated as a straight line (0.5°).
///
/// Below this angle the turn radius `wheelbase / tan(steer)` grows past
/// ~115 wheelbases and the arc update loses precision, so both
/// [`VehicleModel::advance`](crate::VehicleModel::advance) and
/// [`VehicleModel::turning_radii`](crate::VehicleModel::turning_radii)
/// switch to their straight-line branch.
pub const MIN_TURN_STEER_RAD: f64 = 0.5 * PI / 180.0;

/// Convert degrees to radians.
///
/// # Example
/// ```
/// use ratha::core::math::deg_to_rad;
/// use std::f64::consts::PI;
///
/// assert!((deg_to_rad(180.0) - PI).abs() < 1e-12);
/// ```
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Clamp a value to a range.
///
/// Unlike [`f64::clamp`] this never panics when `min > max`; the upper
/// bound wins.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
