//! Collision bookkeeping configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{Error, Result};

/// Parameters for collision records produced by rejected moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Lowest damage amount drawn for a fresh collision.
    #[serde(default = "defaults::min_amount")]
    pub min_amount: u32,

    /// Highest damage amount drawn for a fresh collision.
    #[serde(default = "defaults::max_amount")]
    pub max_amount: u32,

    /// Multiplier applied when the obstacle kind is `"car"`.
    #[serde(default = "defaults::car_multiplier")]
    pub car_multiplier: u32,

    /// Contacts closer than this to the previous contact reuse its amount.
    #[serde(default = "defaults::contact_hysteresis")]
    pub contact_hysteresis: f64,

    /// Random seed for amount sampling (0 = seed from entropy).
    #[serde(default)]
    pub random_seed: u64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            min_amount: defaults::min_amount(),
            max_amount: defaults::max_amount(),
            car_multiplier: defaults::car_multiplier(),
            contact_hysteresis: defaults::contact_hysteresis(),
            random_seed: 0,
        }
    }
}

impl CollisionConfig {
    /// Default bounds with a fixed seed.
    pub fn seeded(random_seed: u64) -> Self {
        Self {
            random_seed,
            ..Self::default()
        }
    }

    /// Check amount bounds and hysteresis distance.
    pub fn validate(&self) -> Result<()> {
        if self.min_amount > self.max_amount {
            return Err(Error::InvalidConfig(format!(
                "min_amount ({}) exceeds max_amount ({})",
                self.min_amount, self.max_amount
            )));
        }
        if !(self.contact_hysteresis >= 0.0 && self.contact_hysteresis.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "contact_hysteresis must be non-negative, got {}",
                self.contact_hysteresis
            )));
        }
        Ok(())
    }
}
