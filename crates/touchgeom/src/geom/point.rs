//! Point/vector primitives on top of `nalgebra::Vector2<f64>`.
//!
//! nalgebra already covers add/sub/scale/dot/norm; this file adds the few
//! planar operations the kernel needs (perp, cross, turn, caliper line
//! intersection) plus a total order for sorting.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// A planar point (or free vector). Plain `Copy` value.
pub type Point = Vector2<f64>;

/// Rotate by +90°: `(x, y) ↦ (-y, x)`.
#[inline]
pub fn perp(p: Point) -> Point {
    Vector2::new(-p.y, p.x)
}

/// `perp(p) · q`, i.e. the signed area of the parallelogram spanned by `p, q`.
/// Positive when `q` lies counterclockwise of `p`.
#[inline]
pub fn cross(p: Point, q: Point) -> f64 {
    perp(p).dot(&q)
}

/// Twice the signed area of triangle `p, q, r`.
///
/// Same quantity as `cross(p,q) + cross(q,r) + cross(r,p)`, evaluated on
/// differences so exactly collinear inputs give exactly zero more often.
/// Strictly positive iff `r` lies left of the directed line `p → q`.
#[inline]
pub fn turn(p: Point, q: Point, r: Point) -> f64 {
    cross(q - p, r - p)
}

/// Unit vector in the direction of `p`; the zero vector maps to `(1, 0)`.
#[inline]
pub fn unit_or_x(p: Point) -> Point {
    let n = p.norm();
    if n > 0.0 && n.is_finite() {
        p / n
    } else {
        Vector2::new(1.0, 0.0)
    }
}

#[inline]
pub fn distance2(p: Point, q: Point) -> f64 {
    (q - p).norm_squared()
}

#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q - p).norm()
}

/// Intersection of the line `p + t r` with the line `q + u s`.
///
/// Pre: `r` and `s` are not parallel (`cross(r, s) != 0`); otherwise the
/// result is non-finite.
#[inline]
pub fn line_intersect(p: Point, r: Point, q: Point, s: Point) -> Point {
    let t = cross(q - p, s) / cross(r, s);
    p + r * t
}

/// Lexicographic `(x, y)` order using `f64::total_cmp`.
#[inline]
pub(crate) fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
