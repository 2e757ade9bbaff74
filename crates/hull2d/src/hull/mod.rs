//! Divide-and-conquer convex hull.
//!
//! Purpose
//! - `convex_hull` validates the input, sorts and deduplicates it, then runs
//!   the recursive driver: halves of ≤ 3 points are solved directly
//!   (`base`), larger ones are split at the midpoint and recombined by the
//!   tangent merge (`merge`). O(n log n) overall.
//!
//! Output convention
//! - Vertices are counterclockwise, start at the `cmp_xy`-smallest vertex and
//!   contain no collinear triples. All-collinear inputs yield the two
//!   endpoints; the result is never an error for degenerate geometry.
//!
//! Code cross-refs: `geom2::{cross, sort_dedup, Ring, HullCfg}`, `oracle::monotone_chain`

mod base;
mod driver;
mod merge;
pub mod oracle;

use crate::error::{HullError, Result};
use crate::geom2::{cmp_xy, cross, distance, sort_dedup, HullCfg, Hs2, Pt2, Ring};

/// Convex hull of `points` with the default tolerance (`eps = 1e-9`).
pub fn convex_hull(points: &[Pt2]) -> Result<Hull> {
    convex_hull_with(points, HullCfg::default())
}

/// Convex hull of `points` with an explicit config.
///
/// Errors (all `ErrorKind::InvalidArgument`): empty input, a non-finite
/// coordinate, a bad tolerance, or fewer than 3 distinct points.
pub fn convex_hull_with(points: &[Pt2], cfg: HullCfg) -> Result<Hull> {
    let pts = prepare(points, cfg)?;
    let hull = Hull::from_ccw(driver::solve(&pts, cfg));
    tracing::debug!(
        input = points.len(),
        distinct = pts.len(),
        vertices = hull.len(),
        "convex_hull"
    );
    Ok(hull)
}

/// Validate, then sort and dedup.
pub(crate) fn prepare(points: &[Pt2], cfg: HullCfg) -> Result<Vec<Pt2>> {
    if !(cfg.eps.is_finite() && cfg.eps >= 0.0) {
        return Err(HullError::InvalidTolerance(cfg.eps));
    }
    if points.is_empty() {
        return Err(HullError::Empty);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    let pts = sort_dedup(points, cfg.eps);
    if pts.len() < 3 {
        return Err(HullError::TooFewPoints {
            distinct: pts.len(),
        });
    }
    Ok(pts)
}

/// A convex polygon as a CCW vertex list.
///
/// Invariants:
/// - Counterclockwise, no collinear consecutive triple.
/// - First vertex is the `cmp_xy` minimum.
/// - 1 or 2 vertices encode a point or a segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    verts: Vec<Pt2>,
}

impl Hull {
    /// Wrap a CCW vertex list, rotating it to start at the `cmp_xy` minimum.
    pub(crate) fn from_ccw(mut verts: Vec<Pt2>) -> Self {
        if let Some(start) = verts
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| cmp_xy(a, b))
            .map(|(k, _)| k)
        {
            verts.rotate_left(start);
        }
        Self { verts }
    }

    #[inline]
    pub fn vertices(&self) -> &[Pt2] {
        &self.verts
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Pt2> {
        self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// A point or a segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.verts.len() < 3
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pt2> {
        self.verts.iter()
    }

    /// Directed boundary edges `(v_k, v_{k+1})`, closing back to the start.
    pub fn edges(&self) -> impl Iterator<Item = (Pt2, Pt2)> + '_ {
        let ring = Ring::new(&self.verts);
        (0..ring.len()).map(move |k| (ring.at(k), ring.at(ring.next(k))))
    }

    /// Shoelace area; positive for CCW, zero for degenerate hulls.
    pub fn signed_area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        0.5 * self
            .edges()
            .map(|(p, q)| p.x * q.y - q.x * p.y)
            .sum::<f64>()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Length of the closed boundary. A segment hull counts its length twice.
    pub fn perimeter(&self) -> f64 {
        if self.verts.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(p, q)| distance(p, q)).sum()
    }

    /// Area centroid; `None` for degenerate hulls.
    pub fn centroid(&self) -> Option<Pt2> {
        if self.is_degenerate() {
            return None;
        }
        let mut a: f64 = 0.0;
        let mut cx: f64 = 0.0;
        let mut cy: f64 = 0.0;
        for (p, q) in self.edges() {
            let w = p.x * q.y - q.x * p.y;
            a += w;
            cx += (p.x + q.x) * w;
            cy += (p.y + q.y) * w;
        }
        a *= 0.5;
        if a == 0.0 {
            return None;
        }
        Some(Pt2::new(cx / (6.0 * a), cy / (6.0 * a)))
    }

    /// Outward half-spaces `n·x <= c`, one per edge (empty for degenerate hulls).
    pub fn edge_halfspaces(&self) -> Vec<Hs2> {
        if self.is_degenerate() {
            return Vec::new();
        }
        self.edges().map(|(p, q)| Hs2::from_ccw_edge(p, q)).collect()
    }

    /// Closed-region membership with slack `eps` (in cross-product units).
    pub fn contains_eps(&self, p: Pt2, eps: f64) -> bool {
        match self.verts.as_slice() {
            [] => false,
            [a] => distance(*a, p) <= eps,
            [a, b] => on_segment(*a, *b, p, eps),
            _ => self.edge_halfspaces().iter().all(|h| h.satisfies_eps(p, eps)),
        }
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Pt2;
    type IntoIter = std::slice::Iter<'a, Pt2>;

    fn into_iter(self) -> Self::IntoIter {
        self.verts.iter()
    }
}

/// `p` on segment a–b within `eps`: collinear and inside the bounding box.
fn on_segment(a: Pt2, b: Pt2, p: Pt2, eps: f64) -> bool {
    if cross(a, b, p).abs() > eps {
        return false;
    }
    let within = |s: f64, t: f64, v: f64| v >= s.min(t) - eps && v <= s.max(t) + eps;
    within(a.x, b.x, p.x) && within(a.y, b.y, p.y)
}
