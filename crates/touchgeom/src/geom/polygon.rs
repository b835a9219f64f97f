use super::point::Point;

/// Signed shoelace area: positive for CCW vertex order, negative for CW.
///
/// No simplicity check; a self-intersecting polygon yields a meaningless
/// number. Fewer than three vertices give 0.
pub fn polygon_area(poly: &[Point]) -> f64 {
    let Some(&last) = poly.last() else {
        return 0.0;
    };
    let mut prev = last;
    let mut acc = 0.0;
    for &p in poly {
        acc += (p.x + prev.x) * (p.y - prev.y);
        prev = p;
    }
    acc / 2.0
}
