//! Random simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of star-shaped polygons for
//!   property tests and benchmarks of the layout engine.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter, and give every vertex its own jittered radius around `center`.
//! - Angles stay strictly increasing and every angular step stays below π,
//!   so the result is simple and star-shaped around `center`.
//! - With `snap > 0` vertices are rounded to that grid, which produces
//!   horizontal edges and collinear runs; the radius floor keeps the angular
//!   order intact after rounding.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::{Path, Point};
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

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped so
    /// that no angular step reaches π.
    pub angle_jitter_frac: f64,
    /// Radial jitter. Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`,
    /// clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    /// Grid to round vertices to; `0` keeps raw coordinates.
    pub snap: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 24 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            base_radius: 150.0,
            center: Point::new(200.0, 200.0),
            snap: 0.0,
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
    pub(crate) fn to_std_rng(self) -> StdRng {
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
}

/// Vertices of a random star-shaped polygon, clockwise on screen.
pub fn star_vertices(cfg: StarCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let delta = std::f64::consts::TAU / (n as f64);
    // Keep Δ·(1 + 2·aj) below π.
    let aj_max = ((std::f64::consts::PI / delta - 1.0) * 0.5 - 0.01).min(0.49);
    let aj = cfg.angle_jitter_frac.clamp(0.0, aj_max.max(0.0));
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-6);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    if cfg.snap > 0.0 {
        for p in &mut pts {
            p.x = (p.x / cfg.snap).round() * cfg.snap;
            p.y = (p.y / cfg.snap).round() * cfg.snap;
        }
        pts.dedup();
        if pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }
    }
    pts
}

/// Draw a random star-shaped polygon as a closed path.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Path {
    Path::polygon(&star_vertices(cfg, tok))
}
