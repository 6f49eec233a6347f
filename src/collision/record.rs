//! Collision records and damage amount sampling.
//!
//! A rejected move produces a [`CollisionRecord`]. Repeated contacts at
//! (almost) the same spot keep the previous amount so that nudging against
//! an obstacle does not re-roll the damage.

use rand::distributions::Standard;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::detect::Contact;
use super::world::CAR_KIND;
use crate::config::CollisionConfig;
use crate::core::Point2D;

/// Outcome of the most recent rejected move.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionRecord {
    /// Contact point in world coordinates.
    pub point: Point2D,
    /// Kind tag of the obstacle that was hit.
    pub kind: String,
    /// Damage amount attributed to the contact.
    pub amount: u32,
}

/// Random source for collision amounts.
///
/// If seed is 0, uses random entropy for non-deterministic behavior.
/// Otherwise, uses the provided seed for reproducible results.
#[derive(Clone, Debug)]
pub struct AmountGenerator<R: Rng = SmallRng> {
    rng: R,
}

impl AmountGenerator<SmallRng> {
    /// Create a generator from a seed (0 = entropy).
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }
}

impl<R: Rng> AmountGenerator<R> {
    /// Wrap an arbitrary random source.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.rng.sample(Standard)
    }

    /// Draw a fresh amount for an obstacle of `kind`.
    ///
    /// The base amount is skewed towards `min_amount` by squaring the uniform
    /// sample and always lands in `[min_amount, max_amount]`. Car obstacles
    /// are multiplied by `car_multiplier`.
    pub fn draw(&mut self, kind: &str, config: &CollisionConfig) -> u32 {
        let base = amount_from_sample(self.uniform(), config.min_amount, config.max_amount);
        if kind == CAR_KIND {
            base.saturating_mul(config.car_multiplier)
        } else {
            base
        }
    }
}

/// Map a uniform sample `r` in `[0, 1)` onto `[min, max]` with an `r²` skew.
pub fn amount_from_sample(r: f64, min: u32, max: u32) -> u32 {
    let span = f64::from(max) - f64::from(min) + 1.0;
    let value = (f64::from(min) + r * r * span).floor();
    // r < 1 keeps value <= max; the clamp only guards float rounding at the top
    (value as u32).clamp(min, max.max(min))
}

impl CollisionRecord {
    /// Build the record for a new rejected contact.
    ///
    /// If `previous` lies strictly closer than `contact_hysteresis` to the
    /// new contact point its amount is carried over, otherwise a fresh
    /// amount is drawn.
    pub fn resolve<R: Rng>(
        previous: Option<&CollisionRecord>,
        contact: Contact,
        config: &CollisionConfig,
        amounts: &mut AmountGenerator<R>,
    ) -> Self {
        let reused = previous
            .filter(|prev| prev.point.distance(&contact.point) < config.contact_hysteresis)
            .map(|prev| prev.amount);

        let amount = match reused {
            Some(amount) => amount,
            None => amounts.draw(&contact.kind, config),
        };

        Self {
            point: contact.point,
            kind: contact.kind,
            amount,
        }
    }
}
