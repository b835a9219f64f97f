//! Seeded random contact sets (fixtures, benches, `touchgeom sample`).
//!
//! Model
//! - Draw a point count, then place points either uniformly on a
//!   `width × height` screen or clustered in a disk around a random center
//!   (a hand's worth of fingers).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of a run can be regenerated on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Placement of the points on the screen.
#[derive(Clone, Copy, Debug)]
pub enum Spread {
    /// Anywhere on the screen.
    Uniform,
    /// Uniform in a disk of this radius, center uniform on the screen.
    Cluster { radius: f64 },
}

#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: PointCount,
    pub spread: Spread,
    pub width: f64,
    pub height: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Uniform { min: 1, max: 10 },
            spread: Spread::Cluster { radius: 250.0 },
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    #[inline]
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw one contact set.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let w = cfg.width.max(0.0);
    let h = cfg.height.max(0.0);
    match cfg.spread {
        Spread::Uniform => (0..n)
            .map(|_| Vector2::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h))
            .collect(),
        Spread::Cluster { radius } => {
            let c = Vector2::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h);
            let r0 = radius.max(0.0);
            (0..n)
                .map(|_| {
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    // sqrt keeps the density uniform over the disk
                    let r = r0 * rng.gen::<f64>().sqrt();
                    c + Vector2::new(th.cos(), th.sin()) * r
                })
                .collect()
        }
    }
}

/// Vertices of a regular `n`-gon in CCW order, first vertex at angle `phase`.
pub fn regular_polygon(n: usize, center: Point, radius: f64, phase: f64) -> Vec<Point> {
    let delta = std::f64::consts::TAU / n.max(1) as f64;
    (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta;
            center + Vector2::new(th.cos(), th.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{convex_hull, min_enclosing_circle, polygon_area};
    use nalgebra::vector;

    #[test]
    fn reproducible_draw() {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(draw_points(cfg, tok), draw_points(cfg, tok));
        assert_ne!(draw_points(cfg, tok), draw_points(cfg, tok.advance()));
    }

    #[test]
    fn counts_and_bounds() {
        let cfg = SampleCfg {
            count: PointCount::Fixed(50),
            spread: Spread::Uniform,
            width: 800.0,
            height: 600.0,
        };
        let pts = draw_points(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(pts.len(), 50);
        assert!(pts
            .iter()
            .all(|p| (0.0..=800.0).contains(&p.x) && (0.0..=600.0).contains(&p.y)));

        let mut tok = ReplayToken { seed: 3, index: 0 };
        let cfg = SampleCfg {
            count: PointCount::Uniform { min: 2, max: 5 },
            ..SampleCfg::default()
        };
        for _ in 0..20 {
            let n = draw_points(cfg, tok).len();
            assert!((2..=5).contains(&n));
            tok = tok.advance();
        }
    }

    #[test]
    fn cluster_stays_in_disk() {
        let cfg = SampleCfg {
            count: PointCount::Fixed(30),
            spread: Spread::Cluster { radius: 40.0 },
            ..SampleCfg::default()
        };
        let pts = draw_points(cfg, ReplayToken { seed: 9, index: 2 });
        let c = min_enclosing_circle(&pts);
        assert!(c.radius() <= 40.0 + 1e-9);
    }

    #[test]
    fn regular_polygon_is_its_own_hull() {
        let poly = regular_polygon(6, vector![5.0, 5.0], 2.0, 0.1);
        let hull = convex_hull(&poly);
        assert_eq!(hull.len(), 6);
        // Area of a regular hexagon: (3√3/2) r²
        let expected = 1.5 * 3f64.sqrt() * 4.0;
        assert!((polygon_area(&poly) - expected).abs() < 1e-9);
    }
}
