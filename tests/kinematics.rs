//! Kinematic properties of the bicycle model.

mod common;

use approx::assert_relative_eq;
use common::{init_logging, metric_vehicle, sample_poses};
use ratha::core::{MIN_TURN_STEER_RAD, deg_to_rad};
use ratha::{Command, Simulator, SimulatorConfig, VehicleConfig, VehicleModel, VehiclePose};

#[test]
fn test_straight_motion_is_exact() {
    init_logging();
    let model = VehicleModel::default();

    for pose in sample_poses()
        .into_iter()
        .map(|p| VehiclePose { steer: 0.0, ..p })
    {
        for distance in [-50.0, -0.3, 0.0, 1.0, 123.4] {
            let next = model.advance(pose, distance);
            assert_relative_eq!(next.x, pose.x + distance * pose.heading.cos(), epsilon = 1e-9);
            assert_relative_eq!(next.y, pose.y + distance * pose.heading.sin(), epsilon = 1e-9);
            assert_eq!(next.heading, pose.heading);
            assert_eq!(next.steer, 0.0);
        }
    }
}

#[test]
fn test_arc_length_matches_distance() {
    let model = VehicleModel::default();

    for pose in sample_poses()
        .into_iter()
        .filter(|p| p.steer.abs() >= MIN_TURN_STEER_RAD)
    {
        let radius = model.turn_radius(pose.steer).unwrap();
        for distance in [-80.0, -1.0, 2.5, 40.0, 300.0] {
            let next = model.advance(pose, distance);

            // Arc length along the rear-axle circle
            let swept = (next.heading - pose.heading) * radius;
            assert_relative_eq!(swept, distance, epsilon = 1e-9);

            // Chord length consistent with that arc
            let chord = 2.0 * radius.abs() * (distance / (2.0 * radius)).sin().abs();
            let moved = pose.position().distance(&next.position());
            assert_relative_eq!(moved, chord, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_arc_composability_at_constant_steer() {
    let model = VehicleModel::default();

    for pose in sample_poses() {
        let split = model.advance(model.advance(pose, 37.0), -12.5);
        let single = model.advance(pose, 24.5);
        assert!(
            split.approx_eq(&single, 1e-8, 1e-10),
            "split {:?} vs single {:?}",
            split,
            single
        );
    }
}

#[test]
fn test_many_small_steps_match_one_large() {
    let model = VehicleModel::new(metric_vehicle());
    let start = model.steer_to(VehiclePose::default(), deg_to_rad(20.0));

    let mut stepped = start;
    for _ in 0..1000 {
        stepped = model.advance(stepped, 0.01);
    }
    let direct = model.advance(start, 10.0);
    assert!(stepped.approx_eq(&direct, 1e-8, 1e-10));
}

#[test]
fn test_clamp_never_exceeds_limit() {
    let model = VehicleModel::default();
    let limit = deg_to_rad(model.config().max_steer_deg);

    let inputs = [-1e9, -10.0, -limit, -0.1, 0.0, 0.2, limit * 1.5, 1e9];
    for steer in inputs.into_iter().chain([f64::INFINITY]) {
        let clamped = model.clamp_steer(steer);
        assert!(clamped.abs() <= limit + 1e-15, "steer {steer} -> {clamped}");
    }
    assert_eq!(model.clamp_steer(0.2), 0.2);
}

#[test]
fn test_turning_radii_threshold() {
    let model = VehicleModel::default();
    let track = model.config().track;

    for steer in [0.0, MIN_TURN_STEER_RAD * 0.99, -MIN_TURN_STEER_RAD * 0.5] {
        let pose = VehiclePose::new(0.0, 0.0, 0.0, steer);
        assert!(model.turning_radii(&pose).is_none());
        assert!(model.icc(&pose).is_none());
    }

    for steer in [MIN_TURN_STEER_RAD, -MIN_TURN_STEER_RAD, 0.3, -0.55] {
        let pose = VehiclePose::new(0.0, 0.0, 0.0, steer);
        let radii = model.turning_radii(&pose).unwrap();
        assert_relative_eq!(radii.outer - radii.inner, track, epsilon = 1e-9);
    }
}

#[test]
fn test_end_to_end_circle() {
    init_logging();
    let mut sim = Simulator::new(SimulatorConfig {
        vehicle: VehicleConfig::with_wheelbase(2.9),
        ..SimulatorConfig::default()
    })
    .unwrap();

    let start = sim.pose();
    sim.apply_command(&Command::set_steer(30.0));
    let icc = sim.model().icc(&sim.pose()).unwrap();
    sim.apply_command(&Command::drive(10.0));

    let radius = 2.9 / deg_to_rad(30.0).tan();
    let pose = sim.pose();
    assert_eq!(start, VehiclePose::default());
    assert_relative_eq!(pose.heading, 10.0 / radius, epsilon = 1e-12);
    assert_relative_eq!(icc.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(icc.y, radius, epsilon = 1e-12);
    assert_relative_eq!(pose.position().distance(&icc), radius.abs(), epsilon = 1e-9);
}

#[test]
fn test_body_geometry_follows_pose() {
    let model = VehicleModel::new(metric_vehicle());
    let pose = VehiclePose::new(3.0, -1.0, std::f64::consts::FRAC_PI_2, 0.0);

    let body = model.body_polygon(&pose);
    // Rear-left corner: 1 m behind the axle, 0.95 m to the left
    assert_relative_eq!(body[0].x, 3.0 - 0.95, epsilon = 1e-12);
    assert_relative_eq!(body[0].y, -1.0 - 1.0, epsilon = 1e-12);

    let center = model.center_of_body(&pose);
    assert_relative_eq!(center.x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(center.y, -1.0 + 1.4, epsilon = 1e-12);

    let wheels = model.wheel_positions(&pose);
    assert_relative_eq!(wheels.front_left.y, -1.0 + 2.9, epsilon = 1e-12);
    assert_relative_eq!(wheels.front_left.x, 3.0 - 0.8, epsilon = 1e-12);
}
