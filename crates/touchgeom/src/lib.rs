//! Shape analysis for simultaneous touch contacts.
//!
//! The kernel (`geom`) reduces a planar point set to centroid, bounding-box
//! center, minimum enclosing circle, convex hull, minimum-area oriented
//! bounding box and polygon area. It performs no I/O and knows nothing about
//! displays or input devices; `touch` holds the live contact set that a
//! windowing layer feeds, and `analysis` bundles one frame's worth of shapes.
//!
//! API Policy
//! - Points are `nalgebra::Vector2<f64>` values; all results are owned values
//!   computed fresh per call.
//! - Precondition violations (empty input where a shape needs a point) panic;
//!   degenerate geometry never does.

pub mod analysis;
pub mod cfg;
pub mod geom;
pub mod sample;
pub mod touch;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::Analysis;
    pub use crate::geom::{
        bbox_center, centroid, convex_hull, min_enclosing_circle, oriented_bbox, polygon_area,
        rect_area, Circle, Point, Rect,
    };
    pub use crate::sample::{draw_points, PointCount, ReplayToken, SampleCfg, Spread};
    pub use crate::touch::{TouchError, TouchEvent, TouchId, TouchSet};
}
