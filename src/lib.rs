//! # Ratha: Bicycle-Model Vehicle Simulator
//!
//! Deterministic kinematics for a single steerable vehicle, command playback
//! and polygon collision against static 2D scenes.
//!
//! ## Features
//!
//! - **Exact arc integration**: the rear axle moves on the circle about the
//!   instantaneous centre of curvature, so step size never changes the path
//! - **Playbooks**: declarative `setSteer` / `move` steps with side-effect
//!   free preview of any prefix
//! - **SAT collision**: body rectangle vs. solid world rectangles, with a
//!   representative contact point and a damage amount per rejected move
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ratha::{Command, Scenario, Simulator, SimulatorConfig, World};
//!
//! let mut sim = Simulator::new(SimulatorConfig::default()).unwrap();
//! let scenario = Scenario::parallel_parking();
//! sim.load_scenario(&scenario);
//!
//! // Preview without touching the live pose
//! let parked = sim.apply_playbook_all(&scenario.playbook);
//! println!("Parked at ({:.2}, {:.2})", parked.x, parked.y);
//!
//! // Collision-aware driving
//! let world = World::from_yaml_str("objects: []").unwrap();
//! sim.apply_command(&Command::set_steer(15.0));
//! if !sim.advance_with_collision(50.0, &world) {
//!     println!("Blocked: {:?}", sim.last_collision());
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! - **X-forward**: Positive X is in front of the vehicle at zero heading
//! - **Y-left**: Positive Y is to the left
//! - **Rotation**: Counter-clockwise positive; positive steer turns left
//! - **Origin**: The pose is the centre of the rear axle
//!
//! ## Architecture
//!
//! - [`core`]: Point and pose types, angle helpers
//! - [`config`]: Vehicle dimensions and collision parameters
//! - [`vehicle`]: Bicycle model, body/wheel geometry, turn envelopes
//! - [`geometry`]: Segments, rectangles and SAT overlap
//! - [`collision`]: Worlds, contact detection and collision records
//! - [`simulator`]: Commands and the live simulator
//! - [`scenario`]: Named start pose plus playbook

pub mod collision;
pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod scenario;
pub mod simulator;
pub mod vehicle;

// Re-export main types at crate root
pub use collision::{CollisionRecord, Contact, World};
pub use config::{CollisionConfig, SimulatorConfig, VehicleConfig};
pub use core::{Point2D, VehiclePose};
pub use error::{Error, Result};
pub use scenario::Scenario;
pub use simulator::{Command, Simulator};
pub use vehicle::VehicleModel;
