//! Orientation kernel: the only turn predicate used by hull construction.
//!
//! - `cross`: signed doubled triangle area; sign is the turn direction of a→b→c.
//! - `orientation`: eps-aware classification of `cross`.
//! - `approx_eq`, `cmp_xy`: tolerance equality and the lexicographic order
//!   the divide step relies on.
//!
//! References
//! - Code cross-refs: `preprocess::sort_dedup`, `hull::merge`, `hull::base`

use std::cmp::Ordering;

use nalgebra::Point2;

/// Point type used throughout the crate.
pub type Pt2 = Point2<f64>;

/// Turn direction of a path a→b→c under a tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn (counterclockwise).
    Ccw,
    /// Right turn (clockwise).
    Cw,
    /// |cross| within eps.
    Collinear,
}

/// Signed area ×2 of triangle (a, b, c).
/// Positive when `c` is left of the ray a→b, negative when right, zero when collinear.
#[inline]
pub fn cross(a: Pt2, b: Pt2, c: Pt2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Euclidean distance.
#[inline]
pub fn distance(a: Pt2, b: Pt2) -> f64 {
    (b - a).norm()
}

#[inline]
pub fn orientation(a: Pt2, b: Pt2, c: Pt2, eps: f64) -> Orientation {
    let z = cross(a, b, c);
    if z > eps {
        Orientation::Ccw
    } else if z < -eps {
        Orientation::Cw
    } else {
        Orientation::Collinear
    }
}

/// `p` projects strictly inside segment a–b, i.e. between the normals at `a` and `b`.
#[inline]
pub fn projects_inside(a: Pt2, b: Pt2, p: Pt2) -> bool {
    (p - a).dot(&(b - a)) > 0.0 && (p - b).dot(&(a - b)) > 0.0
}

/// Componentwise equality within `eps`.
#[inline]
pub fn approx_eq(a: Pt2, b: Pt2, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Total lexicographic order: x ascending, ties by y ascending.
#[inline]
pub fn cmp_xy(a: &Pt2, b: &Pt2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn cross_sign_matches_turn() {
        let a = point![0.0, 0.0];
        let b = point![1.0, 0.0];
        assert!(cross(a, b, point![0.5, 1.0]) > 0.0);
        assert!(cross(a, b, point![0.5, -1.0]) < 0.0);
        assert_eq!(cross(a, b, point![3.0, 0.0]), 0.0);
        // unit right triangle has doubled area 1
        assert!((cross(a, b, point![0.0, 1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cross_is_antisymmetric_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let mut p = || point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let (a, b, c) = (p(), p(), p());
            assert!((cross(a, b, c) + cross(a, c, b)).abs() < 1e-9);
            // cyclic shifts preserve the sign
            assert!((cross(a, b, c) - cross(b, c, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn orientation_respects_eps() {
        let a = point![0.0, 0.0];
        let b = point![1.0, 0.0];
        let c = point![2.0, 1e-12];
        assert_eq!(orientation(a, b, c, 1e-9), Orientation::Collinear);
        assert_eq!(orientation(a, b, c, 0.0), Orientation::Ccw);
        assert_eq!(orientation(a, c, b, 0.0), Orientation::Cw);
    }

    #[test]
    fn distance_and_equality() {
        assert!((distance(point![0.0, 0.0], point![3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert!(approx_eq(point![1.0, 1.0], point![1.0 + 1e-10, 1.0], 1e-9));
        assert!(!approx_eq(point![1.0, 1.0], point![1.0, 1.0 + 1e-6], 1e-9));
    }

    #[test]
    fn projection_inside_segment_is_strict() {
        let a = point![0.0, 0.0];
        let b = point![4.0, 0.0];
        assert!(projects_inside(a, b, point![1.0, 3.0]));
        assert!(!projects_inside(a, b, a));
        assert!(!projects_inside(a, b, point![5.0, 0.0]));
        assert!(!projects_inside(a, b, point![-1.0, 0.0]));
    }

    #[test]
    fn cmp_xy_breaks_ties_by_y() {
        assert_eq!(cmp_xy(&point![0.0, 1.0], &point![1.0, 0.0]), Ordering::Less);
        assert_eq!(cmp_xy(&point![1.0, 2.0], &point![1.0, 0.0]), Ordering::Greater);
        assert_eq!(cmp_xy(&point![1.0, 2.0], &point![1.0, 2.0]), Ordering::Equal);
    }
}
