//! Random point clouds in 2D (replay tokens + a few shapes).
//!
//! Purpose
//! - Deterministic inputs for hull tests, benchmarks and the CLI `sample`
//!   command. Every draw is keyed by a replay token `(seed, index)` mixed into
//!   a single RNG, so a cloud can be regenerated from its token alone.
//!
//! Shapes
//! - `uniform_square`: i.i.d. uniform in `[-half, half]²` (hull is a small
//!   fraction of the input).
//! - `on_circle`: `n` equally spaced points on a circle (every point extreme).
//! - `radial`: jittered angles and radii around the origin; the hull keeps a
//!   tunable share of the points.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::kernel::Pt2;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

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

/// Uniform points in the axis-aligned square `[-half, half]²`.
pub fn uniform_square(n: usize, half: f64, tok: ReplayToken) -> Vec<Pt2> {
    let mut rng = tok.to_std_rng();
    let h = half.abs().max(1e-9);
    (0..n)
        .map(|_| Point2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

/// `n` equally spaced points on the circle of radius `r`, starting at angle `phase`.
pub fn on_circle(n: usize, r: f64, phase: f64) -> Vec<Pt2> {
    let delta = std::f64::consts::TAU / (n.max(1) as f64);
    (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta;
            Point2::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Draw `n` points with jittered angles and radii (returned in angle order).
pub fn radial(n: usize, cfg: RadialCfg, tok: ReplayToken) -> Vec<Pt2> {
    let mut rng = tok.to_std_rng();
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n.max(1) as f64);
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
    angles.sort_by(|a, b| a.total_cmp(b));
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Point2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draws() {
        let tok = ReplayToken::new(42, 7);
        assert_eq!(uniform_square(50, 1.0, tok), uniform_square(50, 1.0, tok));
        let cfg = RadialCfg::default();
        assert_eq!(radial(20, cfg, tok), radial(20, cfg, tok));
        // a different index is a different draw
        assert_ne!(
            uniform_square(50, 1.0, tok),
            uniform_square(50, 1.0, ReplayToken::new(42, 8))
        );
    }

    #[test]
    fn square_draw_stays_in_bounds() {
        let pts = uniform_square(200, 2.5, ReplayToken::new(1, 0));
        assert_eq!(pts.len(), 200);
        assert!(pts.iter().all(|p| p.x.abs() <= 2.5 && p.y.abs() <= 2.5));
    }

    #[test]
    fn circle_points_have_radius() {
        let pts = on_circle(8, 2.0, 0.0);
        assert_eq!(pts.len(), 8);
        for p in &pts {
            assert!((p.coords.norm() - 2.0).abs() < 1e-12);
        }
        assert!((pts[2].x).abs() < 1e-12 && (pts[2].y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn radial_radii_within_jitter() {
        let cfg = RadialCfg {
            radial_jitter: 0.1,
            ..RadialCfg::default()
        };
        for p in radial(64, cfg, ReplayToken::new(3, 3)) {
            let r = p.coords.norm();
            assert!((0.9 - 1e-12..=1.1 + 1e-12).contains(&r));
        }
    }
}
