use nalgebra::Vector2;

use super::point::Point;

/// Arithmetic mean of the points.
///
/// Panics on an empty slice: the mean of nothing is a caller bug, not a
/// value.
pub fn centroid(points: &[Point]) -> Point {
    assert!(!points.is_empty(), "centroid of an empty point set");
    let sum = points.iter().fold(Vector2::zeros(), |acc: Point, p| acc + p);
    sum / points.len() as f64
}

/// Midpoint of the axis-aligned extents; `(0, 0)` for an empty slice.
pub fn bbox_center(points: &[Point]) -> Point {
    let Some((first, rest)) = points.split_first() else {
        return Vector2::zeros();
    };
    let (mut min, mut max) = (*first, *first);
    for p in rest {
        min = min.inf(p);
        max = max.sup(p);
    }
    (min + max) * 0.5
}
