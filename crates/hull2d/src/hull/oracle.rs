//! Andrew’s monotone chain: the cross-check for the divide-and-conquer path
//! and the fallback its merger rebuilds with.
//!
//! Shares validation, dedup and the eps policy with the divide-and-conquer
//! path, so both return identical canonical hulls.
//!
//! Collinear triples
//! - Among three points within eps of a line, the one lying between the other
//!   two is dropped. Rounding can make the sorted order disagree with the
//!   order along a near-vertical line, so "middle" is decided by projection,
//!   not by position in the sort.
//! - The two half chains may then start or end on different points; the
//!   joined ring is tidied cyclically until no collinear middle is left.

use crate::error::Result;
use crate::geom2::{cross, projects_inside, HullCfg, Pt2, Ring};

use super::{prepare, Hull};

/// Hull via monotone chain (returns the canonical CCW `Hull`).
pub fn monotone_chain_with(points: &[Pt2], cfg: HullCfg) -> Result<Hull> {
    let pts = prepare(points, cfg)?;
    Ok(Hull::from_ccw(chain(&pts, cfg.eps)))
}

/// [`monotone_chain_with`] with the default config.
pub fn monotone_chain(points: &[Pt2]) -> Result<Hull> {
    monotone_chain_with(points, HullCfg::default())
}

/// CCW hull of `cmp_xy`-sorted, deduplicated points: lower chain, then upper.
pub(crate) fn chain(pts: &[Pt2], eps: f64) -> Vec<Pt2> {
    if pts.len() < 2 {
        return pts.to_vec();
    }
    let mut ring = half_chain(pts.iter().copied(), eps);
    ring.extend(half_chain(pts.iter().rev().copied(), eps));
    tidy(&mut ring, eps);
    ring
}

/// One monotone half, keeping only left turns.
fn half_chain(pts: impl Iterator<Item = Pt2>, eps: f64) -> Vec<Pt2> {
    let mut out: Vec<Pt2> = Vec::new();
    'points: for p in pts {
        while let &[.., a, b] = out.as_slice() {
            let z = cross(a, b, p);
            if z.abs() <= eps {
                if projects_inside(a, b, p) {
                    continue 'points;
                }
                if projects_inside(b, p, a) {
                    out.remove(out.len() - 2);
                } else {
                    out.pop();
                }
            } else if z < 0.0 {
                out.pop();
            } else {
                break;
            }
        }
        out.push(p);
    }
    out
}

/// Drop repeated vertices and collinear middles around the closed ring.
fn tidy(ring: &mut Vec<Pt2>, eps: f64) {
    'scan: while ring.len() >= 3 {
        let r = Ring::new(ring.as_slice());
        for k in 0..r.len() {
            let (pk, nk) = (r.prev(k), r.next(k));
            let (a, b, c) = (r.at(pk), r.at(k), r.at(nk));
            let drop = if a == b {
                Some(k)
            } else if cross(a, b, c).abs() > eps {
                None
            } else if a == c || projects_inside(a, c, b) {
                Some(k)
            } else if projects_inside(b, c, a) {
                Some(pk)
            } else if projects_inside(a, b, c) {
                Some(nk)
            } else {
                None
            };
            if let Some(d) = drop {
                ring.remove(d);
                continue 'scan;
            }
        }
        break;
    }
    if ring.len() == 2 && ring[0] == ring[1] {
        ring.pop();
    }
}
