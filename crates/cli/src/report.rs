//! JSON rendering of kernel results.

use serde_json::{json, Value};
use touchgeom::analysis::Analysis;
use touchgeom::geom::Point;

#[inline]
fn xy(p: &Point) -> Value {
    json!([p.x, p.y])
}

pub fn points_json(points: &[Point]) -> Value {
    Value::Array(points.iter().map(xy).collect())
}

/// `{"count": 0}` when there is nothing to analyze.
pub fn analysis_json(a: Option<&Analysis>) -> Value {
    let Some(a) = a else {
        return json!({ "count": 0 });
    };
    json!({
        "count": a.count,
        "centroid": xy(&a.centroid),
        "bbox_center": xy(&a.bbox_center),
        "circle": {
            "center": xy(&a.circle.center),
            "radius": a.circle.radius(),
        },
        "hull": points_json(&a.hull),
        "hull_area": a.hull_area,
        "obb": points_json(&a.obb),
        "obb_area": a.obb_area,
    })
}
