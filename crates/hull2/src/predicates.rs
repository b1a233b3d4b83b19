//! Point type, orientation predicate, and the lexicographic total order.
//!
//! Purpose
//! - One place for every turn decision and every point comparison, so the four
//!   hull strategies agree on collinear and boundary cases.
//!
//! Conventions
//! - `orientation > 0`: counterclockwise (left) turn, `< 0`: clockwise (right)
//!   turn, `== 0`: collinear. No epsilon: integer-valued coordinates of moderate
//!   size are decided exactly.
//! - Coordinates must be finite. NaN ordering falls back to `Equal` and is not
//!   meaningful.

use std::cmp::Ordering;

/// A planar point. Equality is exact component-wise equality.
pub type Point2 = nalgebra::Point2<f64>;

/// Twice the signed area of the triangle `(p0, p1, p2)`.
///
/// Positive when `p0 → p1 → p2` turns left at `p1`.
#[inline]
pub fn orientation(p0: Point2, p1: Point2, p2: Point2) -> f64 {
    p0.x * (p1.y - p2.y) + p1.x * (p2.y - p0.y) + p2.x * (p0.y - p1.y)
}

/// True iff `b` lies in the axis-aligned bounding box of `a` and `c`.
///
/// Only meaningful as a tie-break for collinear triples, where it means
/// "`b` lies on the segment `a c`".
#[inline]
pub fn is_between(a: Point2, b: Point2, c: Point2) -> bool {
    let in_x = a.x.min(c.x) <= b.x && b.x <= a.x.max(c.x);
    let in_y = a.y.min(c.y) <= b.y && b.y <= a.y.max(c.y);
    in_x && in_y
}

/// Compares two points first by `x`, then by `y`.
#[inline]
pub fn lex_cmp(a: &Point2, b: &Point2) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Lexicographically sorted copy of `points` with exact duplicates removed.
pub fn sorted_distinct(points: &[Point2]) -> Vec<Point2> {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    pts
}

/// Extreme points of a sorted, duplicate-free slice whose points all lie on one line.
///
/// Returns `None` if fewer than two points are given or any point is off the
/// line through the first and last point.
pub fn collinear_extremes(sorted: &[Point2]) -> Option<[Point2; 2]> {
    let (&first, &last) = (sorted.first()?, sorted.last()?);
    if sorted.len() < 2 {
        return None;
    }
    sorted
        .iter()
        .all(|&p| orientation(first, last, p) == 0.0)
        .then_some([first, last])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn orientation_signs() {
        let o = point![0.0, 0.0];
        assert!(orientation(o, point![1.0, 0.0], point![1.0, 1.0]) > 0.0);
        assert!(orientation(o, point![1.0, 0.0], point![1.0, -1.0]) < 0.0);
        assert_eq!(orientation(o, point![1.0, 1.0], point![3.0, 3.0]), 0.0);
        // twice the triangle area
        assert_eq!(orientation(o, point![4.0, 0.0], point![0.0, 3.0]), 12.0);
    }

    #[test]
    fn between_is_bounding_box_membership() {
        let a = point![0.0, 0.0];
        let c = point![4.0, 2.0];
        assert!(is_between(a, point![2.0, 1.0], c));
        assert!(is_between(a, a, c));
        assert!(is_between(a, c, c));
        assert!(!is_between(a, point![5.0, 2.5], c));
        assert!(!is_between(c, a, point![2.0, 1.0]));
    }

    #[test]
    fn lex_order_breaks_ties_on_y() {
        let mut pts = vec![
            point![1.0, 2.0],
            point![0.0, 5.0],
            point![1.0, -1.0],
            point![0.0, 5.0],
        ];
        pts.sort_by(lex_cmp);
        assert_eq!(
            pts,
            vec![
                point![0.0, 5.0],
                point![0.0, 5.0],
                point![1.0, -1.0],
                point![1.0, 2.0]
            ]
        );
        assert_eq!(sorted_distinct(&pts).len(), 3);
    }

    #[test]
    fn collinear_extremes_detects_lines_only() {
        let line = sorted_distinct(&[point![2.0, 2.0], point![0.0, 0.0], point![1.0, 1.0]]);
        assert_eq!(
            collinear_extremes(&line),
            Some([point![0.0, 0.0], point![2.0, 2.0]])
        );
        let tri = sorted_distinct(&[point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]]);
        assert_eq!(collinear_extremes(&tri), None);
        assert_eq!(collinear_extremes(&[point![1.0, 1.0]]), None);
    }
}
