//! Recursive split/solve/merge over a sorted, deduplicated slice.

use crate::geom2::{HullCfg, Pt2};

use super::{base, merge};

/// CCW hull of `pts`, which must be `cmp_xy`-sorted and free of duplicates.
pub(crate) fn solve(pts: &[Pt2], cfg: HullCfg) -> Vec<Pt2> {
    if pts.len() <= 3 {
        return base::small_hull(pts, cfg.eps);
    }
    let (lo, hi) = pts.split_at(pts.len() / 2);
    let (left, right) = solve_halves(lo, hi, cfg);
    merge::merge(&left, &right, cfg.eps)
}

#[cfg(feature = "parallel")]
fn solve_halves(lo: &[Pt2], hi: &[Pt2], cfg: HullCfg) -> (Vec<Pt2>, Vec<Pt2>) {
    if lo.len() + hi.len() >= cfg.parallel_cutoff {
        rayon::join(|| solve(lo, cfg), || solve(hi, cfg))
    } else {
        (solve(lo, cfg), solve(hi, cfg))
    }
}

#[cfg(not(feature = "parallel"))]
fn solve_halves(lo: &[Pt2], hi: &[Pt2], cfg: HullCfg) -> (Vec<Pt2>, Vec<Pt2>) {
    (solve(lo, cfg), solve(hi, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{rand::uniform_square, rand::ReplayToken, sort_dedup};
    use nalgebra::point;

    #[test]
    fn four_points_split_two_two() {
        let pts = [
            point![0.0, 0.0],
            point![0.0, 1.0],
            point![1.0, 0.0],
            point![1.0, 1.0],
        ];
        let h = solve(&pts, HullCfg::default());
        assert_eq!(h.len(), 4);
        assert!(h.contains(&point![0.0, 1.0]) && h.contains(&point![1.0, 0.0]));
    }

    #[test]
    fn base_case_is_returned_directly() {
        let pts = [point![0.0, 0.0], point![1.0, 1.0], point![2.0, 0.0]];
        assert_eq!(
            solve(&pts, HullCfg::default()),
            vec![point![0.0, 0.0], point![2.0, 0.0], point![1.0, 1.0]]
        );
    }

    #[test]
    fn forking_matches_sequential() {
        let pts = sort_dedup(&uniform_square(3000, 1.0, ReplayToken::new(11, 0)), 1e-9);
        let seq = solve(&pts, HullCfg::default());
        let forked = solve(
            &pts,
            HullCfg {
                parallel_cutoff: 16,
                ..HullCfg::default()
            },
        );
        assert_eq!(seq, forked);
    }
}
