//! Random star-shaped polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for non-convex test polygons used by
//!   property tests and benches. The generator is parameterizable, reproducible,
//!   and returns a validated `Polygon` (single outer ring, no holes).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the points in angle order. Sorting by angle keeps
//!   the ring simple (star-shaped around the origin) even with large radial jitter.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::{Point, Polygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with
    /// `u∈[-radial_jitter, radial_jitter]`. Values near 1 give spiky, deeply
    /// non-convex rings.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(24),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 100.0,
            random_phase: true,
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
        // SplitMix64-style mixing, cheap and stable.
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
}

/// Draw a random star-shaped polygon around the origin.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let ring: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    star_from_ring(ring)
}

/// Regular `n`-gon (counterclockwise) with circumradius `radius`.
///
/// Its inradius `radius · cos(π/n)` is the exact pole distance, attained at `center`.
pub fn regular_polygon(n: usize, radius: f64, center: Point) -> Polygon {
    let n = n.max(3);
    let delta = std::f64::consts::TAU / (n as f64);
    let ring: Vec<Point> = (0..n)
        .map(|k| {
            let th = (k as f64) * delta;
            center + Point::new(th.cos(), th.sin()) * radius
        })
        .collect();
    star_from_ring(ring)
}

fn star_from_ring(ring: Vec<Point>) -> Polygon {
    // n ≥ 3 finite points by construction.
    Polygon::new_unchecked(vec![ring])
}
