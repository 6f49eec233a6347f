//! Vehicle commands and playbook decoding.
//!
//! Wire format (JSON shown, YAML equivalent):
//!
//! ```json
//! [
//!   {"type": "setSteer", "deg": -30},
//!   {"type": "move", "distance": -2.6}
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{VehiclePose, deg_to_rad};
use crate::error::{Error, Result};
use crate::vehicle::VehicleModel;

/// A single step of a playbook.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Set the steering angle in degrees (clamped by the model).
    SetSteer {
        /// Steering angle, positive = left.
        deg: f64,
    },
    /// Drive along the current arc; negative distance reverses.
    Move {
        /// Signed arc length.
        distance: f64,
    },
}

impl Command {
    /// Shorthand for [`Command::SetSteer`].
    pub const fn set_steer(deg: f64) -> Self {
        Command::SetSteer { deg }
    }

    /// Shorthand for [`Command::Move`].
    pub const fn drive(distance: f64) -> Self {
        Command::Move { distance }
    }

    /// Pose after applying this command to `pose`.
    pub fn apply(&self, model: &VehicleModel, pose: VehiclePose) -> VehiclePose {
        match *self {
            Command::SetSteer { deg } => model.steer_to(pose, deg_to_rad(deg)),
            Command::Move { distance } => model.advance(pose, distance),
        }
    }
}

/// Decode a playbook from JSON.
///
/// # Errors
/// [`Error::InvalidCommand`] for unknown `type` tags, missing fields or
/// malformed input.
pub fn playbook_from_json(json: &str) -> Result<Vec<Command>> {
    serde_json::from_str(json).map_err(|e| Error::InvalidCommand(e.to_string()))
}

/// Decode a playbook from YAML.
///
/// # Errors
/// [`Error::InvalidCommand`] for unknown `type` tags, missing fields or
/// malformed input.
pub fn playbook_from_yaml(yaml: &str) -> Result<Vec<Command>> {
    serde_yaml::from_str(yaml).map_err(|e| Error::InvalidCommand(e.to_string()))
}
