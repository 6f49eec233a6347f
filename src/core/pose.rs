//! Vehicle pose: rear-axle position, heading and steering angle.
//!
//! Coordinate frame:
//! - X-forward, Y-left (right-handed)
//! - Counter-clockwise positive rotation

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Instantaneous state of the vehicle.
///
/// The reference point `(x, y)` is the centre of the rear axle. Poses are
/// plain `Copy` values: tentative and historical poses are always copies, so
/// a preview can never alias the live pose held by the
/// [`Simulator`](crate::Simulator).
///
/// `heading` is never normalized; it only wraps through trigonometry, which
/// keeps long arcs composable without branch cuts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehiclePose {
    /// X position of the rear-axle centre.
    #[serde(default)]
    pub x: f64,
    /// Y position of the rear-axle centre.
    #[serde(default)]
    pub y: f64,
    /// Heading in radians, CCW positive from the X-axis.
    #[serde(default)]
    pub heading: f64,
    /// Front-wheel steering angle in radians (positive = left).
    #[serde(default)]
    pub steer: f64,
}

impl VehiclePose {
    /// Create a new pose.
    #[inline]
    pub const fn new(x: f64, y: f64, heading: f64, steer: f64) -> Self {
        Self {
            x,
            y,
            heading,
            steer,
        }
    }

    /// Pose at the origin, facing +X, wheels straight.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Get the position as a Point2D.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Forward direction (unit vector).
    #[inline]
    pub fn forward(&self) -> Point2D {
        let (sin, cos) = self.heading.sin_cos();
        Point2D::new(cos, sin)
    }

    /// Transform a point from the vehicle frame to the world frame.
    ///
    /// # Example
    /// ```
    /// use ratha::core::{Point2D, VehiclePose};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let pose = VehiclePose::new(1.0, 0.0, FRAC_PI_2, 0.0);
    /// let world = pose.transform_point(Point2D::new(1.0, 0.0));
    /// assert!((world.x - 1.0).abs() < 1e-12);
    /// assert!((world.y - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn transform_point(&self, local: Point2D) -> Point2D {
        let (sin, cos) = self.heading.sin_cos();
        Point2D {
            x: self.x + local.x * cos - local.y * sin,
            y: self.y + local.x * sin + local.y * cos,
        }
    }

    /// Check if this pose is approximately equal to another.
    #[inline]
    pub fn approx_eq(&self, other: &VehiclePose, pos_epsilon: f64, angle_epsilon: f64) -> bool {
        (self.x - other.x).abs() <= pos_epsilon
            && (self.y - other.y).abs() <= pos_epsilon
            && (self.heading - other.heading).abs() <= angle_epsilon
            && (self.steer - other.steer).abs() <= angle_epsilon
    }
}
