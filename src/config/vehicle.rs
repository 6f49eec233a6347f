//! Vehicle geometry configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::core::deg_to_rad;
use crate::error::{Error, Result};

/// Fixed dimensions and steering limit of a vehicle.
///
/// All lengths share the scene's unit. The rear-axle centre is the vehicle
/// origin; the front axle sits `wheelbase` ahead of it.
///
/// ```text
///   rear_overhang   wheelbase          front_overhang
///  |<-------->|<------------------>|<-------->|
///  +----------o--------------------o----------+  ^
///  |          |                    |          |  | body_width
///  +----------o--------------------o----------+  v
///  |<---------------- body_length ----------->|
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Distance between rear and front axle.
    #[serde(default = "defaults::wheelbase")]
    pub wheelbase: f64,

    /// Distance between left and right wheel centres.
    #[serde(default = "defaults::track")]
    pub track: f64,

    /// Overall body length.
    #[serde(default = "defaults::body_length")]
    pub body_length: f64,

    /// Overall body width.
    #[serde(default = "defaults::body_width")]
    pub body_width: f64,

    /// Body extent ahead of the front axle.
    #[serde(default = "defaults::front_overhang")]
    pub front_overhang: f64,

    /// Body extent behind the rear axle.
    #[serde(default = "defaults::rear_overhang")]
    pub rear_overhang: f64,

    /// Tyre contact length (wheel footprint, longitudinal).
    #[serde(default = "defaults::wheel_length")]
    pub wheel_length: f64,

    /// Tyre width (wheel footprint, lateral).
    #[serde(default = "defaults::wheel_width")]
    pub wheel_width: f64,

    /// Steering limit in degrees, symmetric left/right.
    #[serde(default = "defaults::max_steer_deg")]
    pub max_steer_deg: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            wheelbase: defaults::wheelbase(),
            track: defaults::track(),
            body_length: defaults::body_length(),
            body_width: defaults::body_width(),
            front_overhang: defaults::front_overhang(),
            rear_overhang: defaults::rear_overhang(),
            wheel_length: defaults::wheel_length(),
            wheel_width: defaults::wheel_width(),
            max_steer_deg: defaults::max_steer_deg(),
        }
    }
}

impl VehicleConfig {
    /// Default dimensions with a different wheelbase.
    pub fn with_wheelbase(wheelbase: f64) -> Self {
        Self {
            wheelbase,
            ..Self::default()
        }
    }

    /// Steering limit in radians.
    #[inline]
    pub fn max_steer_rad(&self) -> f64 {
        deg_to_rad(self.max_steer_deg)
    }

    /// Check that every length is positive and the steering limit is usable.
    ///
    /// `max_steer_deg` must lie in `(0, 90)`: at 90° the turn radius
    /// `wheelbase / tan(steer)` collapses to zero.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("wheelbase", self.wheelbase),
            ("track", self.track),
            ("body_length", self.body_length),
            ("body_width", self.body_width),
            ("front_overhang", self.front_overhang),
            ("rear_overhang", self.rear_overhang),
            ("wheel_length", self.wheel_length),
            ("wheel_width", self.wheel_width),
        ];
        for (name, value) in lengths {
            // NaN fails this comparison too
            if !(value > 0.0 && value.is_finite()) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive length, got {}",
                    name, value
                )));
            }
        }

        if !(self.max_steer_deg > 0.0 && self.max_steer_deg < 90.0) {
            return Err(Error::InvalidConfig(format!(
                "max_steer_deg must be in (0, 90), got {}",
                self.max_steer_deg
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VehicleConfig::default();
        assert_eq!(config.wheelbase, 106.3);
        assert_eq!(config.track, 60.6);
        assert_eq!(config.max_steer_deg, 32.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config: VehicleConfig = serde_yaml::from_str("wheelbase: 2.9\ntrack: 1.6").unwrap();
        assert_eq!(config.wheelbase, 2.9);
        assert_eq!(config.track, 1.6);
        assert_eq!(config.body_length, 184.8);
        assert_eq!(config.max_steer_deg, 32.5);
    }

    #[test]
    fn test_validate_rejects_non_positive_length() {
        let config = VehicleConfig {
            body_width: 0.0,
            ..VehicleConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("body_width"));

        let config = VehicleConfig {
            track: f64::NAN,
            ..VehicleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_steer_limit() {
        for deg in [0.0, -10.0, 90.0, 120.0] {
            let config = VehicleConfig {
                max_steer_deg: deg,
                ..VehicleConfig::default()
            };
            assert!(config.validate().is_err(), "{} should be rejected", deg);
        }
    }
}
