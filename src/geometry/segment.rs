//! Line segment type using endpoint representation.

use crate::core::Point2D;

/// Determinant magnitude below which two segments count as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// A 2D line segment defined by its endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2D {
    /// Start point of the segment.
    pub start: Point2D,
    /// End point of the segment.
    pub end: Point2D,
}

/// Closest pair of points between two segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPoints {
    /// Point on the first segment.
    pub on_self: Point2D,
    /// Point on the second segment.
    pub on_other: Point2D,
    /// Squared distance between the two points.
    pub distance_squared: f64,
}

impl Segment2D {
    /// Create a new segment from two points.
    #[inline]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Point at parameter t along the segment (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: f64) -> Point2D {
        self.start + self.direction() * t
    }

    /// Intersection point of two segments, if they cross.
    ///
    /// Both parameters must fall in `[0, 1]`, so touching endpoints count.
    /// Parallel and collinear segments (`|d1 × d2| < PARALLEL_EPSILON`)
    /// return `None` even when they overlap.
    pub fn intersection(&self, other: &Segment2D) -> Option<Point2D> {
        let d1 = self.direction();
        let d2 = other.direction();

        let cross = d1.cross(&d2);
        if cross.abs() < PARALLEL_EPSILON {
            return None;
        }

        let origin_diff = other.start - self.start;
        let t = origin_diff.cross(&d2) / cross;
        let s = origin_diff.cross(&d1) / cross;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s) {
            Some(self.point_at(t))
        } else {
            None
        }
    }

    /// Closest points between this segment and another.
    ///
    /// Solves for the parameters minimizing the distance between the two
    /// infinite lines, then clamps them back onto the segments. Parallel or
    /// degenerate (zero-length) inputs fall through to endpoint projection,
    /// so the result is always defined.
    pub fn closest_points(&self, other: &Segment2D) -> ClosestPoints {
        let ab = self.direction();
        let cd = other.direction();
        let ac = self.start - other.start;

        let ab2 = ab.length_squared();
        let cd2 = cd.length_squared();
        let abcd = ab.dot(&cd);
        let abac = ab.dot(&ac);
        let cdac = cd.dot(&ac);

        let mut s = 0.0;
        let denom = ab2 * cd2 - abcd * abcd;
        if denom > PARALLEL_EPSILON {
            s = ((abcd * cdac - cd2 * abac) / denom).clamp(0.0, 1.0);
        }

        let mut t = (abcd * s + cdac) / (cd2 + PARALLEL_EPSILON);
        if t < 0.0 {
            t = 0.0;
            s = (-abac / (ab2 + PARALLEL_EPSILON)).clamp(0.0, 1.0);
        } else if t > 1.0 {
            t = 1.0;
            s = ((abcd - abac) / (ab2 + PARALLEL_EPSILON)).clamp(0.0, 1.0);
        }

        let on_self = self.point_at(s);
        let on_other = other.point_at(t);
        ClosestPoints {
            on_self,
            on_other,
            distance_squared: on_self.distance_squared(&on_other),
        }
    }
}
