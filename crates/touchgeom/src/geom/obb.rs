//! Minimum-area oriented bounding box via rotating calipers.
//!
//! Model
//! - Four calipers start on the axis directions `(1,0), (0,1), (-1,0), (0,-1)`,
//!   anchored at the bottom, right, top and left extreme hull vertices. Each
//!   caliper keeps the hull on its left.
//! - Each step snaps the caliper with the smallest angle to its next hull edge
//!   onto that edge and advances its anchor; the other three follow as 90°
//!   rotations. One of the four calipers is always flush with a hull edge, so
//!   the minimum-area rectangle is among the visited ones.
//! - A 90° sweep covers every orientation (the rectangle is symmetric under
//!   quarter turns); the loop stops once caliper 0 points into `x <= 0`.
//!
//! Conventions
//! - Input is a CCW convex hull as returned by `convex_hull`.
//! - Angles to the next edge lie in `[0, π)`, so the largest cosine is the
//!   smallest angle. Ties go to the lowest caliper index.

use super::point::{line_intersect, perp, unit_or_x, Point};
use super::polygon::polygon_area;

/// Rectangle corners in CCW order (a zero-area rectangle may repeat corners).
pub type Rect = [Point; 4];

/// Area of a rectangle given by its corners in rotational order.
#[inline]
pub fn rect_area(rect: &Rect) -> f64 {
    (2.0 * polygon_area(&rect[..3])).abs()
}

/// Minimum-area rectangle (any rotation) containing the CCW hull.
///
/// Panics on an empty hull. One vertex gives four equal corners; two give the
/// segment `[a, b, b, a]`.
pub fn oriented_bbox(hull: &[Point]) -> Rect {
    assert!(!hull.is_empty(), "oriented bounding box of an empty hull");
    let n = hull.len();
    match n {
        1 => return [hull[0]; 4],
        2 => return [hull[0], hull[1], hull[1], hull[0]],
        _ => {}
    }

    let edges: Vec<Point> = (0..n)
        .map(|i| unit_or_x(hull[(i + 1) % n] - hull[i]))
        .collect();

    let mut cal = Calipers::axis_aligned(hull);
    let mut best = cal.corners(hull);
    let mut best_area = rect_area(&best);

    // Each step advances one anchor; a quarter sweep needs at most n of them.
    for _ in 0..4 * n {
        let k = cal.tightest(&edges);
        cal.snap(k, &edges, n);
        let rect = cal.corners(hull);
        let area = rect_area(&rect);
        if area < best_area {
            best = rect;
            best_area = area;
        }
        if cal.dir[0].x <= 0.0 {
            break;
        }
    }
    best
}

/// Four mutually perpendicular support lines, each through a hull vertex.
#[derive(Clone, Copy, Debug)]
struct Calipers {
    dir: [Point; 4],
    anchor: [usize; 4],
}

impl Calipers {
    fn axis_aligned(hull: &[Point]) -> Self {
        let n = hull.len();
        let (mut bottom, mut right, mut top, mut left) = (0, 0, 0, 0);
        for i in 0..n {
            let prev = hull[(i + n - 1) % n];
            let next = hull[(i + 1) % n];
            let p = hull[i];
            if p.y <= prev.y && p.y <= next.y {
                bottom = i;
            }
            if p.x >= prev.x && p.x >= next.x {
                right = i;
            }
            if p.y >= prev.y && p.y >= next.y {
                top = i;
            }
            if p.x <= prev.x && p.x <= next.x {
                left = i;
            }
        }
        Self {
            dir: [
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(-1.0, 0.0),
                Point::new(0.0, -1.0),
            ],
            anchor: [bottom, right, top, left],
        }
    }

    /// Caliper with the smallest angle to the edge leaving its anchor.
    fn tightest(&self, edges: &[Point]) -> usize {
        let mut best = 0;
        let mut best_cos = f64::NEG_INFINITY;
        for k in 0..4 {
            let c = self.dir[k].dot(&edges[self.anchor[k]]);
            if c > best_cos {
                best = k;
                best_cos = c;
            }
        }
        best
    }

    /// Align caliper `k` with its next edge and rotate the rest with it.
    fn snap(&mut self, k: usize, edges: &[Point], n: usize) {
        let mut d = edges[self.anchor[k]];
        self.anchor[k] = (self.anchor[k] + 1) % n;
        for j in 0..4 {
            self.dir[(k + j) % 4] = d;
            d = perp(d);
        }
    }

    /// Corner `j` is where caliper `j` meets caliper `j + 1`.
    fn corners(&self, hull: &[Point]) -> Rect {
        std::array::from_fn(|j| {
            let m = (j + 1) % 4;
            line_intersect(
                hull[self.anchor[j]],
                self.dir[j],
                hull[self.anchor[m]],
                self.dir[m],
            )
        })
    }
}
