//! Turning-radius envelopes around the instantaneous centre of curvature.
//!
//! These queries feed turn overlays: the inner/outer wheel circles and the
//! circles swept by the body corners for the current steering angle.

use super::model::{VehicleModel, icc_for};
use crate::core::{Point2D, VehiclePose};

/// Rear-axle turn radius and the wheel-track band around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurningRadii {
    /// Signed rear-axle radius (negative = turning right).
    pub radius: f64,
    /// `|radius| - track / 2`
    pub inner: f64,
    /// `|radius| + track / 2`
    pub outer: f64,
}

/// Circles swept by wheels and body about the ICC for one steering angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepEnvelope {
    /// Centre shared by every circle.
    pub icc: Point2D,
    /// Signed rear-axle radius (negative = turning right).
    pub radius: f64,
    /// Radius traced by each wheel centre, in
    /// `[rear_left, rear_right, front_left, front_right]` order.
    pub wheel_radii: [f64; 4],
    /// Radius traced by the front body corner on the outside of the turn.
    pub chassis_outer: f64,
    /// Radius traced by the inside body edge at the rear axle.
    pub chassis_inner: f64,
}

impl SweepEnvelope {
    /// Width of the annulus the body occupies while turning.
    #[inline]
    pub fn swept_width(&self) -> f64 {
        self.chassis_outer - self.chassis_inner
    }
}

impl VehicleModel {
    /// Turning radii for the pose's steering angle.
    ///
    /// Returns `None` below the straight-motion threshold, where the radius
    /// would be numerically huge and carry no useful turn centre.
    pub fn turning_radii(&self, pose: &VehiclePose) -> Option<TurningRadii> {
        let radius = self.turn_radius(pose.steer)?;
        let half_track = self.config().track / 2.0;

        Some(TurningRadii {
            radius,
            inner: radius.abs() - half_track,
            outer: radius.abs() + half_track,
        })
    }

    /// Circles swept by the wheels and body corners about the ICC.
    ///
    /// The outer chassis point is the front corner on the outside of the
    /// turn (front-left when turning right, front-right when turning left);
    /// the inner chassis point sits on the inside body edge at the rear axle.
    pub fn sweep_envelope(&self, pose: &VehiclePose) -> Option<SweepEnvelope> {
        let radius = self.turn_radius(pose.steer)?;
        let icc = icc_for(pose, radius);
        let turn_right = radius < 0.0;

        let wheels = self.wheel_positions(pose).to_array();
        let wheel_radii = wheels.map(|w| w.distance(&icc));

        let body = self.body_polygon(pose);
        let outer_corner = if turn_right { body[1] } else { body[2] };

        let half_body = self.config().body_width / 2.0;
        let inner_side = if turn_right { -half_body } else { half_body };
        let inner_point = self.local_to_world(pose, 0.0, inner_side);

        Some(SweepEnvelope {
            icc,
            radius,
            wheel_radii,
            chassis_outer: outer_corner.distance(&icc),
            chassis_inner: inner_point.distance(&icc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VehicleConfig;
    use crate::core::deg_to_rad;
    use approx::assert_relative_eq;

    #[test]
    fn test_turning_radii_band_equals_track() {
        let model = VehicleModel::default();
        for deg in [-32.5, -10.0, -0.6, 0.6, 5.0, 32.5] {
            let pose = VehiclePose::new(0.0, 0.0, 0.0, deg_to_rad(deg));
            let radii = model.turning_radii(&pose).unwrap();
            assert_relative_eq!(radii.outer - radii.inner, 60.6, epsilon = 1e-9);
            assert_eq!(radii.radius < 0.0, deg < 0.0);
        }
    }

    #[test]
    fn test_turning_radii_none_when_straight() {
        let model = VehicleModel::default();
        for deg in [0.0, 0.49, -0.49] {
            let pose = VehiclePose::new(0.0, 0.0, 0.0, deg_to_rad(deg));
            assert!(model.turning_radii(&pose).is_none());
            assert!(model.sweep_envelope(&pose).is_none());
        }
    }

    #[test]
    fn test_sweep_envelope_left_turn() {
        let config = VehicleConfig {
            wheelbase: 2.0,
            track: 1.0,
            body_length: 4.0,
            body_width: 1.6,
            rear_overhang: 1.0,
            front_overhang: 1.0,
            ..VehicleConfig::default()
        };
        let model = VehicleModel::new(config);
        let pose = VehiclePose::new(0.0, 0.0, 0.0, deg_to_rad(30.0));
        let envelope = model.sweep_envelope(&pose).unwrap();
        let r = 2.0 / deg_to_rad(30.0).tan();

        assert_relative_eq!(envelope.icc.y, r, epsilon = 1e-12);
        // Inner rear wheel is on the left: r - 0.5
        assert_relative_eq!(envelope.wheel_radii[0], r - 0.5, epsilon = 1e-9);
        assert_relative_eq!(envelope.wheel_radii[1], r + 0.5, epsilon = 1e-9);
        // Front-right corner (3, -0.8)
        assert_relative_eq!(
            envelope.chassis_outer,
            (3.0f64 * 3.0 + (r + 0.8) * (r + 0.8)).sqrt(),
            epsilon = 1e-9
        );
        assert_relative_eq!(envelope.chassis_inner, r - 0.8, epsilon = 1e-9);
        // Never narrower than the body itself
        assert!(envelope.swept_width() > 1.6);
    }

    #[test]
    fn test_sweep_envelope_mirrors_for_right_turn() {
        let model = VehicleModel::default();
        let left = VehiclePose::new(0.0, 0.0, 0.0, deg_to_rad(25.0));
        let right = VehiclePose::new(0.0, 0.0, 0.0, deg_to_rad(-25.0));

        let a = model.sweep_envelope(&left).unwrap();
        let b = model.sweep_envelope(&right).unwrap();

        assert_relative_eq!(a.radius, -b.radius, epsilon = 1e-9);
        assert_relative_eq!(a.chassis_outer, b.chassis_outer, epsilon = 1e-9);
        assert_relative_eq!(a.chassis_inner, b.chassis_inner, epsilon = 1e-9);
        assert_relative_eq!(a.wheel_radii[0], b.wheel_radii[1], epsilon = 1e-9);
        assert_relative_eq!(a.wheel_radii[2], b.wheel_radii[3], epsilon = 1e-9);
    }
}
