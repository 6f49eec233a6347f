//! Body-vs-obstacle overlap and contact point resolution.

use log::trace;

use crate::core::{Point2D, VehiclePose};
use crate::geometry::{Rect, edges, polygons_intersect};
use crate::vehicle::VehicleModel;

use super::world::World;

/// Where and against what the vehicle body touched an obstacle.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    /// Representative contact point in world coordinates.
    pub point: Point2D,
    /// Kind tag of the obstacle that was hit.
    pub kind: String,
}

/// Representative contact point between the car polygon and a rectangle.
///
/// Returns the first proper edge crossing (car edges outer, rectangle edges
/// inner). When no edges cross, for example when one shape contains the
/// other, falls back to the car-side point of the closest edge pair.
pub fn contact_point(car: &[Point2D], rect: &Rect) -> Point2D {
    let rect_poly = rect.to_polygon();

    for car_edge in edges(car) {
        for rect_edge in edges(&rect_poly) {
            if let Some(hit) = car_edge.intersection(&rect_edge) {
                return hit;
            }
        }
    }

    let mut best = car.first().copied().unwrap_or_default();
    let mut best_distance = f64::INFINITY;
    for car_edge in edges(car) {
        for rect_edge in edges(&rect_poly) {
            let closest = car_edge.closest_points(&rect_edge);
            if closest.distance_squared < best_distance {
                best_distance = closest.distance_squared;
                best = closest.on_self;
            }
        }
    }
    best
}

/// Test the body polygon at `pose` against every solid rectangle of `world`.
///
/// Obstacles are visited in declaration order; the first overlap wins.
pub fn detect_collision(
    pose: &VehiclePose,
    model: &VehicleModel,
    world: &World,
) -> Option<Contact> {
    let body = model.body_polygon(pose);

    world.solid_rects().find_map(|solid| {
        if !polygons_intersect(&body, &solid.rect.to_polygon()) {
            return None;
        }
        let point = contact_point(&body, &solid.rect);
        trace!(
            "[Collision] body at ({:.2}, {:.2}) hits {} at ({:.2}, {:.2})",
            pose.x, pose.y, solid.kind, point.x, point.y
        );
        Some(Contact {
            point,
            kind: solid.kind.to_string(),
        })
    })
}
