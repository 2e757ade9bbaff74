//! Merge two CCW hulls separated in (x, y) order.
//!
//! Purpose
//! - Find the upper and lower tangents between `left` and `right` by the
//!   rotating walk, then splice the outer chains into one CCW hull.
//!
//! Preconditions
//! - Both inputs are CCW hulls (size 1 and 2 allowed).
//! - Every vertex of `left` precedes every vertex of `right` in `cmp_xy`
//!   order. Strict x-separation is not required; vertical ties work.
//!
//! Tangent walk
//! - Line a→b from the current left vertex `a` to the current right vertex `b`.
//!   "Above" means `cross(a, b, p) > 0`.
//! - Upper: the left index steps CCW and the right index steps CW while the
//!   candidate lies above the line. Lower: the left index steps CW and the
//!   right index steps CCW while the candidate lies below.
//! - A candidate within eps of the line is taken only when it lies behind the
//!   current vertex (farther from the other hull). Each such step drops a
//!   collinear vertex and strictly lengthens the tangent.
//! - Each index only moves one way round its ring and never comes back to a
//!   vertex it left: at most `len - 1` steps per hull.
//!
//! Verification
//! - Near-collinear inputs can make rounded `cross` signs disagree, so the
//!   walk may stop on a line that does not support both hulls, or on one with
//!   a collinear vertex past its end. Both tangents are checked against every
//!   vertex (eps plus a rounding bound); if either fails, the union is rebuilt
//!   with the monotone chain.

use std::cmp::Ordering;

use crate::geom2::{cmp_xy, cross, Pt2, Ring};

use super::oracle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Upper,
    Lower,
}

impl Side {
    #[inline]
    fn sign(self) -> f64 {
        match self {
            Side::Upper => 1.0,
            Side::Lower => -1.0,
        }
    }
    #[inline]
    fn step_left(self, ring: &Ring<'_>, i: usize) -> usize {
        match self {
            Side::Upper => ring.next(i),
            Side::Lower => ring.prev(i),
        }
    }
    #[inline]
    fn step_right(self, ring: &Ring<'_>, j: usize) -> usize {
        match self {
            Side::Upper => ring.prev(j),
            Side::Lower => ring.next(j),
        }
    }
}

/// CCW hull of the union of two separated CCW hulls. Inputs are not modified.
pub(crate) fn merge(left: &[Pt2], right: &[Pt2], eps: f64) -> Vec<Pt2> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }
    let l = Ring::new(left);
    let r = Ring::new(right);
    // rightmost of left (max x, then max y), leftmost of right (min x, then min y)
    let i0 = l.argmax_by(|a, b| cmp_xy(a, b) == Ordering::Greater);
    let j0 = r.argmax_by(|a, b| cmp_xy(a, b) == Ordering::Less);

    let upper = tangent(&l, &r, i0, j0, Side::Upper, eps);
    let lower = tangent(&l, &r, i0, j0, Side::Lower, eps);
    if !(supports(left, right, upper, Side::Upper, eps)
        && supports(left, right, lower, Side::Lower, eps))
    {
        tracing::warn!(
            left = left.len(),
            right = right.len(),
            "tangent walk stopped on a non-supporting line; rebuilding by monotone chain"
        );
        return rebuild(left, right, eps);
    }
    let ((iu, ju), (il, jl)) = (upper, lower);

    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend(l.walk(iu, il));
    out.extend(r.walk(jl, ju));
    out
}

/// Walk both indices until the line `l[i]→r[j]` supports both hulls on `side`.
fn tangent(
    l: &Ring<'_>,
    r: &Ring<'_>,
    mut i: usize,
    mut j: usize,
    side: Side,
    eps: f64,
) -> (usize, usize) {
    let (mut left_steps, mut right_steps) = (0, 0);
    loop {
        let mut moved = false;
        while left_steps + 1 < l.len() {
            let ni = side.step_left(l, i);
            if !beats(l.at(i), r.at(j), l.at(ni), l.at(i), r.at(j), side, eps) {
                break;
            }
            i = ni;
            left_steps += 1;
            moved = true;
        }
        while right_steps + 1 < r.len() {
            let nj = side.step_right(r, j);
            if !beats(l.at(i), r.at(j), r.at(nj), r.at(j), l.at(i), side, eps) {
                break;
            }
            j = nj;
            right_steps += 1;
            moved = true;
        }
        if !moved {
            return (i, j);
        }
    }
}

/// No vertex of either hull lies beyond the line `left[i]→right[j]`, and
/// none on the line lies outside the segment between the two.
fn supports(left: &[Pt2], right: &[Pt2], (i, j): (usize, usize), side: Side, eps: f64) -> bool {
    let (a, b) = (left[i], right[j]);
    left.iter().chain(right).all(|&p| {
        let tol = eps + cross_error(a, b, p);
        let z = side.sign() * cross(a, b, p);
        if z > tol {
            false
        } else if z >= -tol {
            (p - a).dot(&(b - a)) >= -eps && (p - b).dot(&(a - b)) >= -eps
        } else {
            true
        }
    })
}

/// Bound on the rounding error of `cross(a, b, p)`.
#[inline]
fn cross_error(a: Pt2, b: Pt2, p: Pt2) -> f64 {
    let (ab, ap) = (b - a, p - a);
    8.0 * f64::EPSILON * ((ab.x * ap.y).abs() + (ab.y * ap.x).abs())
}

/// Hull of both vertex sets by monotone chain.
fn rebuild(left: &[Pt2], right: &[Pt2], eps: f64) -> Vec<Pt2> {
    let mut pts: Vec<Pt2> = left.iter().chain(right).copied().collect();
    pts.sort_by(cmp_xy);
    oracle::chain(&pts, eps)
}

/// Whether `cand` should replace `cur` as the tangent vertex of line a→b.
///
/// `cur` is the endpoint being moved and `other` the fixed endpoint.
#[inline]
fn beats(a: Pt2, b: Pt2, cand: Pt2, cur: Pt2, other: Pt2, side: Side, eps: f64) -> bool {
    let z = side.sign() * cross(a, b, cand);
    if z > eps {
        true
    } else if z >= -eps {
        (cand - cur).dot(&(other - cur)) < 0.0
    } else {
        false
    }
}
