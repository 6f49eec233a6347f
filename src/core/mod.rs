//! Core types shared by the model, geometry and simulator.
//!
//! - [`Point2D`]: World/local point and vector math
//! - [`VehiclePose`]: Rear-axle position, heading and steering angle
//! - [`math`]: Angle conversion and the straight-motion threshold

pub mod math;
mod point;
mod pose;

pub use math::{MIN_TURN_STEER_RAD, clamp, deg_to_rad, rad_to_deg};
pub use point::Point2D;
pub use pose::VehiclePose;
