//! Simulator configuration.
//!
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ratha::config::SimulatorConfig;
//!
//! // Load and validate from a file
//! let config = SimulatorConfig::from_yaml_file("vehicle.yaml")?;
//!
//! // Or use built-in defaults
//! let config = SimulatorConfig::default();
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! vehicle:
//!   wheelbase: 2.9
//!   track: 1.6
//!   max_steer_deg: 35.0
//! collision:
//!   min_amount: 800
//!   max_amount: 3000
//!   contact_hysteresis: 1.0
//!   random_seed: 42      # 0 = random each run
//! ```

mod collision;
mod defaults;
mod vehicle;

pub use collision::CollisionConfig;
pub use vehicle::VehicleConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Top-level configuration for a [`Simulator`](crate::Simulator).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Vehicle dimensions and steering limit.
    #[serde(default)]
    pub vehicle: VehicleConfig,

    /// Collision record parameters.
    #[serde(default)]
    pub collision: CollisionConfig,
}

impl SimulatorConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Load configuration from a YAML string and validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SimulatorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.vehicle.validate()?;
        self.collision.validate()
    }
}
