//! Minimum enclosing circle (deterministic incremental construction).
//!
//! Model
//! - Grow the circle over the points in input order. A point outside the
//!   current circle must lie on the boundary of the circle of the prefix, so
//!   the search restarts with that point fixed, and then with a pair fixed.
//! - No shuffling: the expected-linear bound of the randomized variant is
//!   traded for reproducibility. Touch sets are small.
//!
//! Tie policy (order-dependent on symmetric inputs)
//! - With `p, q` fixed, circumcircles through a third point are split by the
//!   side of `p → q` the third point lies on. Per side we keep the circle whose
//!   center is farthest to that side; the final answer is the smaller of the
//!   two sides (left wins on equal radius), or the only side present.
//! - When several circles are equally minimal, which one is returned depends
//!   on input order. Do not "fix" this by shuffling: callers compare results
//!   across runs.

use super::point::{cross, distance2, Point};
use crate::cfg::CIRCLE_REL_EPS;

/// Circle stored by squared radius; `radius()` takes the root on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub r2: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, r2: f64) -> Self {
        Self { center, r2 }
    }

    /// Zero-radius circle at `p`.
    #[inline]
    pub fn point(p: Point) -> Self {
        Self::new(p, 0.0)
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.r2.sqrt()
    }

    /// Membership with a relative slack of `CIRCLE_REL_EPS` on `r²`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        distance2(self.center, p) <= self.r2 * (1.0 + CIRCLE_REL_EPS)
    }

    #[inline]
    pub fn contains_all(&self, points: &[Point]) -> bool {
        points.iter().all(|&p| self.contains(p))
    }

    /// Circle having segment `pq` as a diameter.
    #[inline]
    pub fn from_diameter(p: Point, q: Point) -> Self {
        let c = (p + q) * 0.5;
        Self::new(c, distance2(c, p).max(distance2(c, q)))
    }

    /// Circle through `p, q, r`; `None` when the three are collinear.
    ///
    /// Coordinates are taken relative to the bounding-box midpoint of the
    /// triple before applying the determinant formula, which keeps the
    /// products small for touch coordinates in the thousands.
    pub fn circumscribe(p: Point, q: Point, r: Point) -> Option<Self> {
        let o = (p.inf(&q).inf(&r) + p.sup(&q).sup(&r)) * 0.5;
        let (a, b, c) = (p - o, q - o, r - o);
        let d = (cross(a, b) + cross(b, c) + cross(c, a)) * 2.0;
        if d == 0.0 {
            return None;
        }
        let (aa, bb, cc) = (a.norm_squared(), b.norm_squared(), c.norm_squared());
        let x = (aa * (b.y - c.y) + bb * (c.y - a.y) + cc * (a.y - b.y)) / d;
        let y = (aa * (c.x - b.x) + bb * (a.x - c.x) + cc * (b.x - a.x)) / d;
        let center = o + Point::new(x, y);
        if !(center.x.is_finite() && center.y.is_finite()) {
            return None;
        }
        let r2 = distance2(center, p)
            .max(distance2(center, q))
            .max(distance2(center, r));
        Some(Self::new(center, r2))
    }
}

/// Smallest circle containing every point.
///
/// Panics on an empty slice. Duplicates and collinear inputs are fine: a
/// single distinct point gives radius 0, a collinear set gives the circle on
/// its extreme pair.
pub fn min_enclosing_circle(points: &[Point]) -> Circle {
    assert!(!points.is_empty(), "enclosing circle of an empty point set");
    let mut c = Circle::point(points[0]);
    for (i, &p) in points.iter().enumerate().skip(1) {
        if !c.contains(p) {
            c = circle_one_fixed(&points[..i], p);
        }
    }
    c
}

/// Smallest circle containing `points` with `p` on its boundary.
fn circle_one_fixed(points: &[Point], p: Point) -> Circle {
    let mut c = Circle::point(p);
    for (j, &q) in points.iter().enumerate() {
        if c.contains(q) {
            continue;
        }
        c = if c.r2 == 0.0 {
            Circle::from_diameter(p, q)
        } else {
            circle_two_fixed(&points[..j], p, q)
        };
    }
    c
}

/// Smallest circle containing `points` with both `p` and `q` on its boundary.
fn circle_two_fixed(points: &[Point], p: Point, q: Point) -> Circle {
    let diameter = Circle::from_diameter(p, q);
    if diameter.contains_all(points) {
        return diameter;
    }

    let pq = q - p;
    let mut left: Option<Circle> = None;
    let mut right: Option<Circle> = None;
    for &r in points {
        let side = cross(pq, r - p);
        let Some(cc) = Circle::circumscribe(p, q, r) else {
            continue;
        };
        let offset = cross(pq, cc.center - p);
        if side > 0.0 && left.is_none_or(|l| offset > cross(pq, l.center - p)) {
            left = Some(cc);
        } else if side < 0.0 && right.is_none_or(|rc| offset < cross(pq, rc.center - p)) {
            right = Some(cc);
        }
    }

    match (left, right) {
        (Some(l), Some(r)) => {
            if l.r2 <= r.r2 {
                l
            } else {
                r
            }
        }
        (Some(c), None) | (None, Some(c)) => c,
        // Every outside point was collinear with p, q; nothing better exists.
        (None, None) => diameter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn assert_encloses(c: &Circle, pts: &[Point]) {
        let r = c.radius();
        for p in pts {
            let d = (p - c.center).norm();
            assert!(d <= r + 1e-9 * r.max(1.0), "point {p:?} outside: d={d}, r={r}");
        }
    }

    #[test]
    fn single_point_has_zero_radius() {
        let c = min_enclosing_circle(&[vector![3.0, -2.0]]);
        assert_eq!(c.center, vector![3.0, -2.0]);
        assert_eq!(c.r2, 0.0);
    }

    #[test]
    fn duplicates_collapse_to_point() {
        let p = vector![1.5, 1.5];
        let c = min_enclosing_circle(&[p, p, p, p]);
        assert_eq!(c.center, p);
        assert_eq!(c.radius(), 0.0);
    }

    #[test]
    fn two_points_use_diameter() {
        let c = min_enclosing_circle(&[vector![0.0, 0.0], vector![4.0, 0.0]]);
        assert!((c.center - vector![2.0, 0.0]).norm() < 1e-12);
        assert!((c.radius() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn unit_square_spot_check() {
        let pts = [vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0], vector![0.0, 1.0]];
        let c = min_enclosing_circle(&pts);
        assert!((c.center - vector![0.5, 0.5]).norm() < 1e-12);
        assert!((c.radius() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn acute_triangle_uses_circumcircle() {
        // Equilateral-ish triangle: no diameter circle covers all three.
        let pts = [vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 1.6]];
        let c = min_enclosing_circle(&pts);
        assert_encloses(&c, &pts);
        for p in &pts {
            assert!(((p - c.center).norm() - c.radius()).abs() < 1e-9);
        }
    }

    #[test]
    fn obtuse_triangle_uses_longest_side() {
        let pts = [vector![0.0, 0.0], vector![10.0, 0.0], vector![5.0, 1.0]];
        let c = min_enclosing_circle(&pts);
        assert!((c.center - vector![5.0, 0.0]).norm() < 1e-12);
        assert!((c.radius() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_points_use_extremes() {
        let pts = [vector![2.0, 2.0], vector![0.0, 0.0], vector![5.0, 5.0], vector![1.0, 1.0]];
        let c = min_enclosing_circle(&pts);
        assert!((c.center - vector![2.5, 2.5]).norm() < 1e-12);
        assert!((c.radius() - 2.5 * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn circumscribe_rejects_collinear() {
        assert!(Circle::circumscribe(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]).is_none());
        let c = Circle::circumscribe(vector![1.0, 0.0], vector![0.0, 1.0], vector![-1.0, 0.0]).unwrap();
        assert!(c.center.norm() < 1e-12);
        assert!((c.r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn large_screen_coordinates() {
        let pts = [
            vector![1910.0, 1075.0],
            vector![1920.5, 1080.25],
            vector![1931.0, 1072.0],
            vector![1921.0, 1060.0],
            vector![1915.0, 1070.0],
        ];
        let c = min_enclosing_circle(&pts);
        assert_encloses(&c, &pts);
    }

    #[test]
    fn result_is_deterministic_for_order() {
        let pts = [vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0], vector![0.0, 1.0], vector![0.5, 0.5]];
        assert_eq!(min_enclosing_circle(&pts), min_enclosing_circle(&pts));
    }

    #[test]
    #[should_panic(expected = "empty point set")]
    fn empty_input_panics() {
        min_enclosing_circle(&[]);
    }
}
