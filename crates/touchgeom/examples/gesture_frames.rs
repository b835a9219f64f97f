//! Print the per-frame shape summary for a scripted two-handed gesture.
//!
//! Usage:
//!   cargo run -p touchgeom --example gesture_frames
//!   cargo run -p touchgeom --example gesture_frames -- 5
//!
//! The optional argument is the number of fingers per hand (default 3).

use touchgeom::analysis::Analysis;
use touchgeom::sample::regular_polygon;
use touchgeom::touch::{TouchEvent, TouchId, TouchSet};
use touchgeom::Vec2;

fn main() {
    let fingers: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let mut set = TouchSet::with_capacity(2 * fingers);
    let left = regular_polygon(fingers, Vec2::new(600.0, 500.0), 80.0, 0.0);
    let right = regular_polygon(fingers, Vec2::new(1300.0, 500.0), 80.0, 0.4);

    let mut script = Vec::new();
    for (k, p) in left.iter().chain(right.iter()).enumerate() {
        script.push(TouchEvent::Begin {
            id: TouchId(k as u32),
            x: p.x,
            y: p.y,
        });
    }
    // Pinch: the right hand slides toward the left one.
    for step in 1..=3 {
        for (k, p) in right.iter().enumerate() {
            script.push(TouchEvent::Update {
                id: TouchId((fingers + k) as u32),
                x: p.x - 150.0 * step as f64,
                y: p.y,
            });
        }
    }
    for k in 0..2 * fingers {
        script.push(TouchEvent::End { id: TouchId(k as u32) });
    }

    for (frame, ev) in script.iter().enumerate() {
        if let Err(err) = set.apply(ev) {
            eprintln!("frame {frame}: {err}");
            continue;
        }
        match Analysis::of(set.points()) {
            Some(a) => println!(
                "frame {frame}: n={} C=({:.1}, {:.1}) r={:.1} hull={} area={:.0} obb={:.0}",
                a.count,
                a.centroid.x,
                a.centroid.y,
                a.circle.radius(),
                a.hull.len(),
                a.hull_area,
                a.obb_area
            ),
            None => println!("frame {frame}: no touches"),
        }
    }
}
