//! Live vehicle state driven by commands.

use log::{debug, trace};
use rand::Rng;
use rand::rngs::SmallRng;

use super::command::Command;
use crate::collision::{AmountGenerator, CollisionRecord, World, detect_collision};
use crate::config::{CollisionConfig, SimulatorConfig};
use crate::core::{VehiclePose, deg_to_rad};
use crate::error::Result;
use crate::scenario::Scenario;
use crate::vehicle::VehicleModel;

/// Single-vehicle simulator.
///
/// Owns the authoritative pose. Every query and preview works on copies,
/// so nothing outside [`Simulator`] can alias or mutate the live state.
#[derive(Debug)]
pub struct Simulator<R: Rng = SmallRng> {
    model: VehicleModel,
    collision: CollisionConfig,
    pose: VehiclePose,
    last_collision: Option<CollisionRecord>,
    amounts: AmountGenerator<R>,
}

impl Simulator<SmallRng> {
    /// Create a simulator at the origin.
    ///
    /// Amounts are seeded from `config.collision.random_seed` (0 = entropy).
    ///
    /// # Errors
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) when either
    /// config section fails validation.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        let amounts = AmountGenerator::new(config.collision.random_seed);
        Ok(Self::with_amounts(config, amounts))
    }
}

impl Default for Simulator<SmallRng> {
    fn default() -> Self {
        let config = SimulatorConfig::default();
        let amounts = AmountGenerator::new(config.collision.random_seed);
        Self::with_amounts(config, amounts)
    }
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator drawing collision amounts from `rng`.
    ///
    /// `random_seed` in the configuration is ignored.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) when either
    /// config section fails validation.
    pub fn with_rng(config: SimulatorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_amounts(config, AmountGenerator::from_rng(rng)))
    }

    fn with_amounts(config: SimulatorConfig, amounts: AmountGenerator<R>) -> Self {
        Self {
            model: VehicleModel::new(config.vehicle),
            collision: config.collision,
            pose: VehiclePose::default(),
            last_collision: None,
            amounts,
        }
    }

    /// Vehicle model.
    #[inline]
    pub fn model(&self) -> &VehicleModel {
        &self.model
    }

    /// Collision parameters.
    #[inline]
    pub fn collision_config(&self) -> &CollisionConfig {
        &self.collision
    }

    /// Copy of the live pose.
    #[inline]
    pub fn pose(&self) -> VehiclePose {
        self.pose
    }

    /// Record of the most recent rejected move, cleared by the next accepted one.
    #[inline]
    pub fn last_collision(&self) -> Option<&CollisionRecord> {
        self.last_collision.as_ref()
    }

    /// Replace the live pose.
    ///
    /// The collision record is kept; it only clears on an accepted move.
    pub fn reset(&mut self, pose: VehiclePose) {
        self.pose = pose;
    }

    /// Return to the origin with zero heading and steer.
    pub fn reset_default(&mut self) {
        self.reset(VehiclePose::default());
    }

    /// Reset to a scenario's start pose.
    pub fn load_scenario(&mut self, scenario: &Scenario) {
        debug!(
            "[Simulator] Loading scenario '{}' ({} steps)",
            scenario.name,
            scenario.playbook.len()
        );
        self.reset(scenario.start_pose);
    }

    /// Set the steering angle in degrees.
    pub fn set_steer_deg(&mut self, deg: f64) {
        self.set_steer_rad(deg_to_rad(deg));
    }

    /// Set the steering angle in radians, clamped to the model limit.
    pub fn set_steer_rad(&mut self, steer: f64) {
        self.pose = self.model.steer_to(self.pose, steer);
    }

    /// Drive `distance` along the current arc without collision checks.
    pub fn advance(&mut self, distance: f64) {
        self.pose = self.model.advance(self.pose, distance);
    }

    /// Drive `distance` unless the resulting body overlaps a solid obstacle.
    ///
    /// Returns `true` and clears the collision record when the move is
    /// committed. Otherwise the live pose is untouched, the record is updated
    /// and `false` is returned.
    pub fn advance_with_collision(&mut self, distance: f64, world: &World) -> bool {
        let next = self.model.advance(self.pose, distance);

        let Some(contact) = detect_collision(&next, &self.model, world) else {
            self.last_collision = None;
            self.pose = next;
            return true;
        };

        let record = CollisionRecord::resolve(
            self.last_collision.as_ref(),
            contact,
            &self.collision,
            &mut self.amounts,
        );
        debug!(
            "[Simulator] Move of {:.2} rejected: hit {} at ({:.2}, {:.2}), amount {}",
            distance, record.kind, record.point.x, record.point.y, record.amount
        );
        self.last_collision = Some(record);
        false
    }

    /// Apply one command to the live pose.
    pub fn apply_command(&mut self, command: &Command) {
        trace!("[Simulator] {:?}", command);
        self.pose = command.apply(&self.model, self.pose);
    }

    /// Pose after replaying the first `upto` commands from the live pose.
    ///
    /// The live pose is not modified. `upto` past the end replays everything.
    pub fn apply_playbook(&self, commands: &[Command], upto: usize) -> VehiclePose {
        let upto = upto.min(commands.len());
        commands[..upto]
            .iter()
            .fold(self.pose, |pose, command| command.apply(&self.model, pose))
    }

    /// Pose after replaying every command.
    pub fn apply_playbook_all(&self, commands: &[Command]) -> VehiclePose {
        self.apply_playbook(commands, commands.len())
    }

    /// Preview pose for every step index `0..=commands.len()`.
    ///
    /// Frame `i` equals `apply_playbook(commands, i)`; frame 0 is the live pose.
    pub fn playbook_frames(&self, commands: &[Command]) -> Vec<VehiclePose> {
        let mut frames = Vec::with_capacity(commands.len() + 1);
        let mut pose = self.pose;
        frames.push(pose);
        for command in commands {
            pose = command.apply(&self.model, pose);
            frames.push(pose);
        }
        frames
    }
}
