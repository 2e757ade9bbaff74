//! Tolerance config and half-spaces.
//!
//! - `HullCfg`: epsilon for equality and near-zero cross products, plus the
//!   size below which the driver stops forking (feature `parallel`).
//! - `Hs2`: closed half-space `n·x <= c`, used for hull containment checks.

use nalgebra::Vector2;

use super::kernel::Pt2;

/// Hull configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Equality and collinearity tolerance. Cross products with `|z| <= eps`
    /// count as collinear; points within `eps` per coordinate are duplicates.
    pub eps: f64,
    /// Slices at least this long recurse on both halves in parallel.
    /// Ignored without the `parallel` feature.
    pub parallel_cutoff: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps: 1e-9,
            parallel_cutoff: 4096,
        }
    }
}

impl HullCfg {
    /// Same config with a different tolerance, e.g. `0.0` for exact integer inputs.
    #[inline]
    pub fn with_eps(self, eps: f64) -> Self {
        Self { eps, ..self }
    }
}

/// Closed half‑space `n · x <= c` (no normalization required here).
#[derive(Clone, Copy, Debug)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }

    /// Outward half-space of the directed CCW edge p→q.
    /// For CCW order the outward normal is the edge turned 90° CW.
    #[inline]
    pub fn from_ccw_edge(p: Pt2, q: Pt2) -> Self {
        let edge = q - p;
        let n = Vector2::new(edge.y, -edge.x);
        Self::new(n, n.dot(&p.coords))
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Pt2, eps: f64) -> bool {
        self.n.dot(&p.coords) <= self.c + eps
    }
}
