//! Planar shape kernel for touch point sets.
//!
//! Purpose
//! - Reduce a set of contact points to compact shapes: centroid, bounding-box
//!   center, minimum enclosing circle, convex hull, minimum-area oriented
//!   bounding box, polygon area.
//! - Pure functions over `&[Point]`. Every call allocates its own scratch and
//!   returns owned values; nothing is cached or shared, so concurrent callers
//!   need no coordination (the input slice must not change during a call).
//!
//! Degeneracy policy
//! - Plain `f64`, no exact predicates. Collinear, duplicate and tiny inputs are
//!   handled by explicit branches documented per function, never by errors.
//! - Precondition violations (empty input to `centroid`,
//!   `min_enclosing_circle`, `oriented_bbox`) panic.
//!
//! Data flow
//! - points → `centroid`, `bbox_center`, `min_enclosing_circle`
//! - points → `convex_hull` → `oriented_bbox`, `polygon_area`

mod circle;
mod hull;
mod obb;
pub mod point;
mod polygon;
mod stats;

pub use circle::{min_enclosing_circle, Circle};
pub use hull::convex_hull;
pub use obb::{oriented_bbox, rect_area, Rect};
pub use point::{cross, distance, distance2, line_intersect, perp, turn, unit_or_x, Point};
pub use polygon::polygon_area;
pub use stats::{bbox_center, centroid};
