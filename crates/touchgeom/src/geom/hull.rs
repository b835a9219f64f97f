use super::point::{cmp_xy, turn, Point};

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// - Starts at the lowest of the leftmost points.
/// - Collinear points on an edge are dropped (`turn <= 0` pops), as are exact
///   duplicates, so every vertex is extreme.
/// - 0 points → empty, 1 distinct point → `[p]`, all points collinear →
///   the two extreme endpoints.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut pts = points.to_vec();
    pts.sort_by(cmp_xy);
    pts.dedup();
    if pts.len() < 2 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        push_left_turn(&mut lower, p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        push_left_turn(&mut upper, p);
    }
    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[inline]
fn push_left_turn(chain: &mut Vec<Point>, p: Point) {
    while chain.len() >= 2 && turn(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
        chain.pop();
    }
    chain.push(p);
}
