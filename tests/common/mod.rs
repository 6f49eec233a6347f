//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ratha::collision::RectObject;
use ratha::{CollisionConfig, Simulator, SimulatorConfig, VehicleConfig, VehiclePose, World};

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Simulator with default dimensions and a fixed amount seed.
pub fn seeded_simulator(seed: u64) -> Simulator {
    Simulator::new(SimulatorConfig {
        collision: CollisionConfig::seeded(seed),
        ..SimulatorConfig::default()
    })
    .unwrap()
}

/// Simulator for a full-size car (metres) with a fixed amount seed.
pub fn metric_simulator(seed: u64) -> Simulator {
    Simulator::new(SimulatorConfig {
        vehicle: metric_vehicle(),
        collision: CollisionConfig::seeded(seed),
    })
    .unwrap()
}

/// Full-size car dimensions in metres.
pub fn metric_vehicle() -> VehicleConfig {
    VehicleConfig {
        wheelbase: 2.9,
        track: 1.6,
        body_length: 4.8,
        body_width: 1.9,
        front_overhang: 0.9,
        rear_overhang: 1.0,
        wheel_length: 0.7,
        wheel_width: 0.25,
        max_steer_deg: 35.0,
    }
}

/// A solid wall spanning `y` in `[-100, 100]` starting at `x`.
pub fn wall_at(x: f64, kind: Option<&str>) -> World {
    let mut wall = RectObject::solid(x, -100.0, 20.0, 200.0);
    wall.kind = kind.map(str::to_string);
    World::new("wall").with_rect(wall)
}

/// Poses spread over the plane with mixed headings and steering angles.
pub fn sample_poses() -> Vec<VehiclePose> {
    let mut poses = Vec::new();
    for (i, heading) in [-3.0, -1.2, 0.0, 0.7, 2.5, 7.0].iter().enumerate() {
        let x = i as f64 * 13.7 - 20.0;
        let y = 5.0 - i as f64 * 3.1;
        for steer in [-0.5, -0.1, 0.0, 0.05, 0.3] {
            poses.push(VehiclePose::new(x, y, *heading, steer));
        }
    }
    poses
}

/// Check the raw bit patterns of two poses.
pub fn bit_identical(a: &VehiclePose, b: &VehiclePose) -> bool {
    a.x.to_bits() == b.x.to_bits()
        && a.y.to_bits() == b.y.to_bits()
        && a.heading.to_bits() == b.heading.to_bits()
        && a.steer.to_bits() == b.steer.to_bits()
}
