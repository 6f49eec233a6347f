//! Bicycle-model kinematics and body geometry.
//!
//! The vehicle is reduced to a single rear wheel at the rear-axle centre and
//! a single steered front wheel `wheelbase` ahead of it. For a steering angle
//! `δ` the rear axle follows a circle of radius `R = wheelbase / tan(δ)`
//! around the instantaneous centre of curvature (ICC), which lies on the
//! rear-axle line:
//!
//! ```text
//!                 ICC
//!                  o
//!                  |\
//!                R |  \
//!                  |    \  front wheel (steered by δ)
//!   rear axle  ----o------o--->
//!                  |<---->|
//!                 wheelbase
//! ```
//!
//! Positive `R` (left steer) puts the ICC on the left of the vehicle.

use crate::config::VehicleConfig;
use crate::core::{MIN_TURN_STEER_RAD, Point2D, VehiclePose, clamp};
use crate::error::Result;

/// World-space positions of the four wheel centres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelPositions {
    /// Rear axle, left side.
    pub rear_left: Point2D,
    /// Rear axle, right side.
    pub rear_right: Point2D,
    /// Front axle, left side.
    pub front_left: Point2D,
    /// Front axle, right side.
    pub front_right: Point2D,
}

impl WheelPositions {
    /// Wheels in `[rear_left, rear_right, front_left, front_right]` order.
    pub fn to_array(&self) -> [Point2D; 4] {
        [
            self.rear_left,
            self.rear_right,
            self.front_left,
            self.front_right,
        ]
    }
}

/// Oriented tyre rectangles, one per wheel.
///
/// Each rectangle uses the body polygon's winding: rear-left, front-left,
/// front-right, rear-right (relative to the wheel's own rolling direction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelFootprints {
    /// Rear axle, left side.
    pub rear_left: [Point2D; 4],
    /// Rear axle, right side.
    pub rear_right: [Point2D; 4],
    /// Front axle, left side (rotated by the steering angle).
    pub front_left: [Point2D; 4],
    /// Front axle, right side (rotated by the steering angle).
    pub front_right: [Point2D; 4],
}

/// Kinematic and geometric model of one vehicle.
///
/// Stateless apart from its fixed [`VehicleConfig`]; every operation takes a
/// [`VehiclePose`] by value and returns a new one, so the model can be shared
/// freely between the simulator and any read-only consumer.
///
/// # Example
///
/// ```
/// use ratha::{VehicleConfig, VehicleModel};
/// use ratha::core::VehiclePose;
///
/// let model = VehicleModel::new(VehicleConfig::with_wheelbase(2.9));
/// let pose = model.steer_to(VehiclePose::identity(), 30f64.to_radians());
/// let next = model.advance(pose, 10.0);
/// assert!(next.heading > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct VehicleModel {
    config: VehicleConfig,
    /// Cached `config.max_steer_deg` in radians.
    max_steer: f64,
}

impl VehicleModel {
    /// Create a model for a configuration known to be valid.
    ///
    /// The configuration is taken as-is. Use [`VehicleModel::try_new`] for
    /// configurations built from user input.
    pub fn new(config: VehicleConfig) -> Self {
        let max_steer = config.max_steer_rad();
        Self { config, max_steer }
    }

    /// Create a model after checking the configuration.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) for
    /// non-positive lengths or a steering limit outside `(0, 90)` degrees.
    pub fn try_new(config: VehicleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Fixed vehicle configuration.
    #[inline]
    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    /// Steering limit in radians.
    #[inline]
    pub fn max_steer(&self) -> f64 {
        self.max_steer
    }

    /// Clamp a steering angle to `[-max_steer, max_steer]`.
    #[inline]
    pub fn clamp_steer(&self, steer: f64) -> f64 {
        clamp(steer, -self.max_steer, self.max_steer)
    }

    /// Return `pose` with its steering angle set to the clamped `steer`.
    #[inline]
    pub fn steer_to(&self, pose: VehiclePose, steer: f64) -> VehiclePose {
        VehiclePose {
            steer: self.clamp_steer(steer),
            ..pose
        }
    }

    /// Signed turn radius for a steering angle, `None` when driving straight.
    ///
    /// Negative radius means a right turn.
    #[inline]
    pub fn turn_radius(&self, steer: f64) -> Option<f64> {
        if steer.abs() < MIN_TURN_STEER_RAD {
            None
        } else {
            Some(self.config.wheelbase / steer.tan())
        }
    }

    /// Instantaneous centre of curvature for the pose's steering angle.
    pub fn icc(&self, pose: &VehiclePose) -> Option<Point2D> {
        let radius = self.turn_radius(pose.steer)?;
        Some(icc_for(pose, radius))
    }

    /// Advance the pose by `distance` along its steering arc.
    ///
    /// Negative distances reverse. The arc update is exact: the rear axle is
    /// rotated about the ICC by `distance / R`, so a single call with a large
    /// distance lands on the same circle as many small ones.
    pub fn advance(&self, pose: VehiclePose, distance: f64) -> VehiclePose {
        let Some(radius) = self.turn_radius(pose.steer) else {
            let (sin, cos) = pose.heading.sin_cos();
            return VehiclePose {
                x: pose.x + cos * distance,
                y: pose.y + sin * distance,
                ..pose
            };
        };

        let d_theta = distance / radius;
        let icc = icc_for(&pose, radius);
        let heading = pose.heading + d_theta;
        let (sin, cos) = heading.sin_cos();

        VehiclePose {
            x: icc.x + radius * sin,
            y: icc.y - radius * cos,
            heading,
            steer: pose.steer,
        }
    }

    /// Transform a vehicle-frame point into the world frame.
    #[inline]
    pub fn local_to_world(&self, pose: &VehiclePose, local_x: f64, local_y: f64) -> Point2D {
        pose.transform_point(Point2D::new(local_x, local_y))
    }

    /// World positions of the four wheel centres.
    pub fn wheel_positions(&self, pose: &VehiclePose) -> WheelPositions {
        let wheelbase = self.config.wheelbase;
        let half_track = self.config.track / 2.0;

        WheelPositions {
            rear_left: self.local_to_world(pose, 0.0, half_track),
            rear_right: self.local_to_world(pose, 0.0, -half_track),
            front_left: self.local_to_world(pose, wheelbase, half_track),
            front_right: self.local_to_world(pose, wheelbase, -half_track),
        }
    }

    /// Body outline as `[rear_left, front_left, front_right, rear_right]`.
    ///
    /// The winding is stable (clockwise in a Y-up frame); SAT and contact
    /// resolution rely on consecutive vertices forming the body edges.
    pub fn body_polygon(&self, pose: &VehiclePose) -> [Point2D; 4] {
        let half_width = self.config.body_width / 2.0;
        let rear = -self.config.rear_overhang;
        let front = rear + self.config.body_length;

        [
            self.local_to_world(pose, rear, half_width),
            self.local_to_world(pose, front, half_width),
            self.local_to_world(pose, front, -half_width),
            self.local_to_world(pose, rear, -half_width),
        ]
    }

    /// Longitudinal midpoint of the body on the centre line.
    pub fn center_of_body(&self, pose: &VehiclePose) -> Point2D {
        let center_x = -self.config.rear_overhang + self.config.body_length / 2.0;
        self.local_to_world(pose, center_x, 0.0)
    }

    /// Oriented tyre rectangles; front tyres are turned by the steering angle.
    pub fn wheel_footprints(&self, pose: &VehiclePose) -> WheelFootprints {
        let wheels = self.wheel_positions(pose);
        let rear_heading = pose.heading;
        let front_heading = pose.heading + pose.steer;

        WheelFootprints {
            rear_left: self.tyre_rect(wheels.rear_left, rear_heading),
            rear_right: self.tyre_rect(wheels.rear_right, rear_heading),
            front_left: self.tyre_rect(wheels.front_left, front_heading),
            front_right: self.tyre_rect(wheels.front_right, front_heading),
        }
    }

    fn tyre_rect(&self, center: Point2D, heading: f64) -> [Point2D; 4] {
        let half_len = self.config.wheel_length / 2.0;
        let half_width = self.config.wheel_width / 2.0;
        let frame = VehiclePose::new(center.x, center.y, heading, 0.0);

        [
            frame.transform_point(Point2D::new(-half_len, half_width)),
            frame.transform_point(Point2D::new(half_len, half_width)),
            frame.transform_point(Point2D::new(half_len, -half_width)),
            frame.transform_point(Point2D::new(-half_len, -half_width)),
        ]
    }
}

impl Default for VehicleModel {
    fn default() -> Self {
        Self::new(VehicleConfig::default())
    }
}

/// ICC for a pose and a signed turn radius.
#[inline]
pub(crate) fn icc_for(pose: &VehiclePose, radius: f64) -> Point2D {
    let (sin, cos) = pose.heading.sin_cos();
    Point2D::new(pose.x - radius * sin, pose.y + radius * cos)
}
