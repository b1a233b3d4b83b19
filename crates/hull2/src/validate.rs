//! Checks for computed hulls: convexity, containment, canonical rotation.
//!
//! Used by the tests and by the CLI `compare` command. All checks are exact;
//! with non-integer coordinates, points within rounding of a hull edge may be
//! misjudged.

use crate::predicates::{is_between, lex_cmp, orientation, Point2};

/// True iff every cyclic consecutive triple of `hull` turns strictly left.
///
/// Hulls of fewer than three vertices are trivially convex.
pub fn is_convex_ccw(hull: &[Point2]) -> bool {
    let n = hull.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]) > 0.0)
}

/// True iff no point of `points` lies strictly outside the counterclockwise polygon `hull`.
pub fn contains_all(hull: &[Point2], points: &[Point2]) -> bool {
    match hull {
        [] => points.is_empty(),
        [only] => points.iter().all(|p| p == only),
        [a, b] => points
            .iter()
            .all(|&p| orientation(*a, *b, p) == 0.0 && is_between(*a, p, *b)),
        _ => {
            let n = hull.len();
            points
                .iter()
                .all(|&p| (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], p) >= 0.0))
        }
    }
}

/// `hull` rotated to start at its lexicographically smallest vertex.
pub fn canonical(hull: &[Point2]) -> Vec<Point2> {
    let mut out = hull.to_vec();
    if let Some(start) = (0..out.len()).min_by(|&i, &j| lex_cmp(&out[i], &out[j])) {
        out.rotate_left(start);
    }
    out
}
