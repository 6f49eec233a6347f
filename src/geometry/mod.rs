//! Stateless 2D geometry: segments, rectangles and convex polygon overlap.

pub mod polygon;
mod segment;

pub use polygon::{Rect, edges, polygons_intersect, project};
pub use segment::{ClosestPoints, PARALLEL_EPSILON, Segment2D};
