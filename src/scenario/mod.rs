//! Named start pose plus playbook, loadable from YAML or JSON.
//!
//! ```yaml
//! name: Parallel Parking
//! start_pose: {x: -2.5, y: -1.2}
//! playbook:
//!   - {type: setSteer, deg: -30}
//!   - {type: move, distance: -2.6}
//! ```
//!
//! Playbook steps are decoded one by one so a bad step reports
//! [`Error::InvalidCommand`] with its index instead of a generic parse error.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::VehiclePose;
use crate::error::{Error, Result};
use crate::simulator::Command;

/// A replayable manoeuvre.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name.
    pub name: String,
    /// Pose the simulator is reset to before replay.
    #[serde(default)]
    pub start_pose: VehiclePose,
    /// Commands in replay order.
    #[serde(default)]
    pub playbook: Vec<Command>,
}

/// Scenario document with undecoded steps.
#[derive(Deserialize)]
struct RawScenario<V> {
    name: String,
    #[serde(default)]
    start_pose: VehiclePose,
    #[serde(default)]
    playbook: Vec<V>,
}

impl Scenario {
    /// Reverse into a kerbside gap: right lock back, left lock back, then
    /// straighten and creep forward.
    pub fn parallel_parking() -> Self {
        Self {
            name: "Parallel Parking".to_string(),
            start_pose: VehiclePose::new(-2.5, -1.2, 0.0, 0.0),
            playbook: vec![
                Command::set_steer(-30.0),
                Command::drive(-2.6),
                Command::set_steer(30.0),
                Command::drive(-2.2),
                Command::set_steer(0.0),
                Command::drive(0.6),
            ],
        }
    }

    /// Parse a scenario from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: RawScenario<serde_yaml::Value> = serde_yaml::from_str(yaml)?;
        let playbook = decode_steps(raw.playbook, serde_yaml::from_value::<Command>)?;
        Ok(Self {
            name: raw.name,
            start_pose: raw.start_pose,
            playbook,
        })
    }

    /// Parse a scenario from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawScenario<serde_json::Value> = serde_json::from_str(json)?;
        let playbook = decode_steps(raw.playbook, serde_json::from_value::<Command>)?;
        Ok(Self {
            name: raw.name,
            start_pose: raw.start_pose,
            playbook,
        })
    }

    /// Load a scenario file; `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
    }
}

fn decode_steps<V, E: std::fmt::Display>(
    steps: Vec<V>,
    decode: impl Fn(V) -> std::result::Result<Command, E>,
) -> Result<Vec<Command>> {
    steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| decode(step).map_err(|e| Error::InvalidCommand(format!("step {i}: {e}"))))
        .collect()
}
