//! Convex polygon queries: edges, projections and SAT overlap.
//!
//! Polygons are plain vertex slices with a consistent winding; the last
//! vertex connects back to the first.

use super::segment::Segment2D;
use crate::core::Point2D;

/// Axis-aligned rectangle given by its minimum corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum X
    pub x: f64,
    /// Minimum Y
    pub y: f64,
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two corners `[min, max]`.
    #[inline]
    pub fn from_corners(min: Point2D, max: Point2D) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Shift by an offset.
    #[inline]
    pub fn translated(&self, offset: Point2D) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Corners in counter-clockwise order starting at the minimum corner.
    pub fn to_polygon(&self) -> [Point2D; 4] {
        [
            Point2D::new(self.x, self.y),
            Point2D::new(self.x + self.width, self.y),
            Point2D::new(self.x + self.width, self.y + self.height),
            Point2D::new(self.x, self.y + self.height),
        ]
    }
}

/// Iterate over the closed edges of a polygon.
pub fn edges(polygon: &[Point2D]) -> impl Iterator<Item = Segment2D> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| Segment2D::new(polygon[i], polygon[(i + 1) % n]))
}

/// Unit normals of every edge (SAT candidate axes).
///
/// A zero-length edge yields a zero axis, which projects everything to 0
/// and never separates.
fn axes(polygon: &[Point2D]) -> impl Iterator<Item = Point2D> + '_ {
    edges(polygon).map(|edge| {
        let normal = edge.direction().perpendicular();
        let length = normal.length();
        let length = if length > 0.0 { length } else { 1.0 };
        Point2D::new(normal.x / length, normal.y / length)
    })
}

/// Project every vertex onto `axis`, returning the `(min, max)` interval.
pub fn project(polygon: &[Point2D], axis: Point2D) -> (f64, f64) {
    polygon
        .iter()
        .map(|p| p.dot(&axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), proj| {
            (min.min(proj), max.max(proj))
        })
}

/// Separating Axis Theorem overlap test for two convex polygons.
///
/// Candidate axes are the edge normals of both polygons. Intervals that
/// merely touch count as overlapping. Results are only meaningful for
/// convex input.
pub fn polygons_intersect(a: &[Point2D], b: &[Point2D]) -> bool {
    for axis in axes(a).chain(axes(b)) {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        if max_a < min_b || max_b < min_a {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VehiclePose;
    use std::f64::consts::FRAC_PI_4;

    fn square(min: f64, max: f64) -> [Point2D; 4] {
        Rect::from_corners(Point2D::new(min, min), Point2D::new(max, max)).to_polygon()
    }

    #[test]
    fn test_separated_squares() {
        assert!(!polygons_intersect(&square(0.0, 1.0), &square(2.0, 3.0)));
    }

    #[test]
    fn test_overlapping_squares() {
        assert!(polygons_intersect(&square(0.0, 1.0), &square(0.5, 1.5)));
    }

    #[test]
    fn test_touching_edges_count() {
        assert!(polygons_intersect(&square(0.0, 1.0), &square(1.0, 2.0)));
    }

    #[test]
    fn test_contained() {
        assert!(polygons_intersect(&square(0.0, 10.0), &square(4.0, 5.0)));
        assert!(polygons_intersect(&square(4.0, 5.0), &square(0.0, 10.0)));
    }

    #[test]
    fn test_rotated_diamond_gap() {
        // Diamond whose bounding box overlaps the square but whose edge does not
        let pose = VehiclePose::new(2.6, 2.6, FRAC_PI_4, 0.0);
        let diamond: Vec<Point2D> = square(-0.5, 0.5)
            .iter()
            .map(|p| pose.transform_point(*p))
            .collect();
        assert!(!polygons_intersect(&square(0.0, 2.0), &diamond));
    }

    #[test]
    fn test_project() {
        let (min, max) = project(&square(1.0, 3.0), Point2D::new(1.0, 0.0));
        assert_eq!(min, 1.0);
        assert_eq!(max, 3.0);
    }

    #[test]
    fn test_edges_close_polygon() {
        let poly = square(0.0, 1.0);
        let all: Vec<Segment2D> = edges(&poly).collect();
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].end, poly[0]);
    }

    #[test]
    fn test_rect_translated() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0).translated(Point2D::new(-1.0, 1.0));
        assert_eq!(rect, Rect::new(0.0, 3.0, 3.0, 4.0));
    }
}
