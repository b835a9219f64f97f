//! One-shot shape summary of a contact snapshot.
//!
//! Runs every kernel operation on the same point slice, in the order the
//! presentation layer draws them. Recomputed from scratch per frame.

use crate::geom::{
    bbox_center, centroid, convex_hull, min_enclosing_circle, oriented_bbox, polygon_area,
    rect_area, Circle, Point, Rect,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub count: usize,
    pub centroid: Point,
    pub bbox_center: Point,
    pub circle: Circle,
    /// CCW hull vertices.
    pub hull: Vec<Point>,
    pub hull_area: f64,
    pub obb: Rect,
    pub obb_area: f64,
}

impl Analysis {
    /// `None` when there are no contacts.
    pub fn of(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let hull = convex_hull(points);
        let obb = oriented_bbox(&hull);
        Some(Self {
            count: points.len(),
            centroid: centroid(points),
            bbox_center: bbox_center(points),
            circle: min_enclosing_circle(points),
            hull_area: polygon_area(&hull),
            obb_area: rect_area(&obb),
            hull,
            obb,
        })
    }
}
