//! Direct hulls for at most three points.

use crate::geom2::{cross, distance, Pt2};

/// Hull of `pts` (len ≤ 3, already deduplicated) in CCW order.
///
/// - 0, 1, 2 points come back unchanged.
/// - 3 collinear points (|cross| ≤ eps) collapse to the farthest pair.
/// - 3 proper points are returned CCW, swapping the last two if needed.
pub(crate) fn small_hull(pts: &[Pt2], eps: f64) -> Vec<Pt2> {
    debug_assert!(pts.len() <= 3, "base case called with {} points", pts.len());
    match *pts {
        [p1, p2, p3] => {
            let z = cross(p1, p2, p3);
            if z.abs() <= eps {
                farthest_pair(p1, p2, p3).to_vec()
            } else if z > 0.0 {
                vec![p1, p2, p3]
            } else {
                vec![p1, p3, p2]
            }
        }
        _ => pts.to_vec(),
    }
}

/// Endpoints of three collinear points, in input order.
fn farthest_pair(p1: Pt2, p2: Pt2, p3: Pt2) -> [Pt2; 2] {
    let d12 = distance(p1, p2);
    let d13 = distance(p1, p3);
    let d23 = distance(p2, p3);
    if d13 >= d12 && d13 >= d23 {
        [p1, p3]
    } else if d12 >= d23 {
        [p1, p2]
    } else {
        [p2, p3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    const EPS: f64 = 1e-9;

    #[test]
    fn tiny_inputs_pass_through() {
        assert!(small_hull(&[], EPS).is_empty());
        let one = [point![1.0, 2.0]];
        assert_eq!(small_hull(&one, EPS), one.to_vec());
        let two = [point![1.0, 2.0], point![0.0, 0.0]];
        assert_eq!(small_hull(&two, EPS), two.to_vec());
    }

    #[test]
    fn triangle_is_ccw() {
        let a = point![0.0, 0.0];
        let b = point![1.0, 0.0];
        let c = point![0.0, 1.0];
        assert_eq!(small_hull(&[a, b, c], EPS), vec![a, b, c]);
        // clockwise input is reordered
        let h = small_hull(&[a, c, b], EPS);
        assert_eq!(h, vec![a, b, c]);
        assert!(cross(h[0], h[1], h[2]) > 0.0);
    }

    #[test]
    fn collinear_collapses_to_extremes() {
        let a = point![0.0, 0.0];
        let m = point![1.0, 1.0];
        let b = point![2.0, 2.0];
        assert_eq!(small_hull(&[a, m, b], EPS), vec![a, b]);
        assert_eq!(small_hull(&[m, a, b], EPS), vec![a, b]);
        assert_eq!(small_hull(&[a, b, m], EPS), vec![a, b]);
        // within tolerance counts as collinear
        let near = point![1.0, 1.0 + 1e-12];
        assert_eq!(small_hull(&[a, near, b], EPS).len(), 2);
    }
}
