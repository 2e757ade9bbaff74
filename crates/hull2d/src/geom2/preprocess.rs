//! Dedup + lexicographic sort, the input shape the divide step needs.

use super::kernel::{approx_eq, cmp_xy, Pt2};

/// Sort by (x, y) and drop tolerance-duplicates.
///
/// Points within `eps` per coordinate of an already kept point are dropped, so
/// each cluster keeps its lexicographically first member. Since the kept list
/// is x-sorted, only its tail within `eps` in x needs scanning.
pub fn sort_dedup(points: &[Pt2], eps: f64) -> Vec<Pt2> {
    let mut pts = points.to_vec();
    pts.sort_by(cmp_xy);
    let mut out: Vec<Pt2> = Vec::with_capacity(pts.len());
    for p in pts {
        let dup = out
            .iter()
            .rev()
            .take_while(|q| p.x - q.x <= eps)
            .any(|q| approx_eq(*q, p, eps));
        if !dup {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn sorts_by_x_then_y() {
        let pts = vec![
            point![1.0, 0.0],
            point![0.0, 1.0],
            point![0.0, -1.0],
            point![-2.0, 5.0],
        ];
        let out = sort_dedup(&pts, 1e-9);
        assert_eq!(
            out,
            vec![
                point![-2.0, 5.0],
                point![0.0, -1.0],
                point![0.0, 1.0],
                point![1.0, 0.0]
            ]
        );
    }

    #[test]
    fn drops_exact_and_near_duplicates() {
        let pts = vec![
            point![0.0, 0.0],
            point![1.0, 0.0],
            point![0.0, 0.0],
            point![1.0 + 1e-12, 1e-12],
            point![0.0, 1.0],
        ];
        let out = sort_dedup(&pts, 1e-9);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], point![0.0, 0.0]);
        assert_eq!(out[2], point![1.0, 0.0]);
    }

    #[test]
    fn near_duplicates_need_not_be_adjacent() {
        // (1e-12, 0) sorts after (0, 5) but duplicates (0, 0).
        let pts = vec![point![0.0, 0.0], point![0.0, 5.0], point![1e-12, 0.0]];
        let out = sort_dedup(&pts, 1e-9);
        assert_eq!(out, vec![point![0.0, 0.0], point![0.0, 5.0]]);
    }

    #[test]
    fn zero_eps_keeps_distinct_points() {
        let pts = vec![point![0.0, 0.0], point![1e-12, 0.0], point![0.0, 0.0]];
        assert_eq!(sort_dedup(&pts, 0.0).len(), 2);
    }
}
