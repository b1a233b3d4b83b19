//! Quickhull in the plane.
//!
//! Purpose
//! - Start from the quadrilateral of the leftmost, bottommost, rightmost and
//!   topmost points; for each of its edges `(a, b)` find the point strictly
//!   right of `a → b` furthest from the line and expand the edge into
//!   `(a, c)` and `(c, b)`, each fed only the points strictly right of it.
//!
//! Conventions
//! - Input is sorted lexicographically and deduplicated first, so "first
//!   scanned" below means lexicographically smallest.
//! - Extreme points are strict hull vertices: leftmost/rightmost use the
//!   lexicographic order, bottommost/topmost order by `(y, x)`.
//! - The furthest point is the first one scanned achieving the maximum
//!   distance. Points tied at that distance lie on one line parallel to the
//!   edge, and the lexicographically smallest of them is an end of that run,
//!   never a point inside a hull edge.
//! - A last pass drops any vertex collinear with its neighbours, in case
//!   rounding let one through.
//! - Expansion runs on an explicit work stack, so skewed inputs can't exhaust
//!   the call stack.
//!
//! Complexity: O(n log n) on average, O(n²) worst case.
//!
//! References
//! - C. Bradford Barber et al. 1996. The Quickhull Algorithm for Convex Hulls.

use std::cmp::Ordering;

use crate::observe::{HullObserver, Silent, Stage};
use crate::predicates::{lex_cmp, orientation, sorted_distinct, Point2};

/// Convex hull by quickhull, counterclockwise from the leftmost point.
///
/// Fewer than three input points are returned unchanged.
pub fn quick_hull(points: &[Point2]) -> Vec<Point2> {
    quick_hull_observed(points, &mut Silent)
}

/// [`quick_hull`] reporting the quadrilateral and every inserted vertex.
pub fn quick_hull_observed<O>(points: &[Point2], observer: &mut O) -> Vec<Point2>
where
    O: HullObserver + ?Sized,
{
    if points.len() < 3 {
        return points.to_vec();
    }
    let pts = sorted_distinct(points);
    if pts.len() < 3 {
        observer.snapshot(&pts, Stage::FinalHull);
        return pts;
    }
    let corners = extreme_quadrangle(&pts);
    observer.snapshot(&corners, Stage::Quadrangle);

    let mut hull: Vec<Point2> = Vec::new();
    for (k, &a) in corners.iter().enumerate() {
        let b = corners[(k + 1) % corners.len()];
        if hull.last() != Some(&a) {
            hull.push(a);
        }
        expand_edge(a, b, right_of(a, b, &pts), &mut hull, observer);
    }
    // The quadrilateral closes on its first corner; coinciding corners leave a copy at the end.
    if hull.len() > 1 && hull.first() == hull.last() {
        hull.pop();
    }
    drop_collinear(&mut hull);

    observer.snapshot(&hull, Stage::FinalHull);
    hull
}

/// `[leftmost, bottommost, rightmost, topmost]`, a counterclockwise sequence of hull vertices.
///
/// Corners may coincide (e.g. a point that is both leftmost and bottommost).
fn extreme_quadrangle(points: &[Point2]) -> [Point2; 4] {
    let by_y = |a: &Point2, b: &Point2| {
        a.y.partial_cmp(&b.y)
            .unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    };
    let mut left = points[0];
    let mut lower = points[0];
    let mut right = points[0];
    let mut upper = points[0];
    for p in &points[1..] {
        if lex_cmp(p, &left) == Ordering::Less {
            left = *p;
        }
        if by_y(p, &lower) == Ordering::Less {
            lower = *p;
        }
        if lex_cmp(p, &right) == Ordering::Greater {
            right = *p;
        }
        if by_y(p, &upper) == Ordering::Greater {
            upper = *p;
        }
    }
    [left, lower, right, upper]
}

/// Points strictly right of the directed line `a → b`.
fn right_of(a: Point2, b: Point2, points: &[Point2]) -> Vec<Point2> {
    points
        .iter()
        .copied()
        .filter(|&p| orientation(a, b, p) < 0.0)
        .collect()
}

/// Point of `points` furthest from the line through `a` and `b`, first one on ties.
fn furthest_from_line(a: Point2, b: Point2, points: &[Point2]) -> Option<Point2> {
    // Line through a and b as `la * x + lb * y + lc = 0`.
    let la = a.y - b.y;
    let lb = b.x - a.x;
    let lc = a.x * b.y - b.x * a.y;
    let norm = (la * la + lb * lb).sqrt();
    if norm == 0.0 {
        return None;
    }
    let mut best = None;
    let mut best_distance = -1.0;
    for &p in points {
        let distance = (la * p.x + lb * p.y + lc).abs() / norm;
        if distance > best_distance {
            best_distance = distance;
            best = Some(p);
        }
    }
    best
}

/// Remove every vertex of the closed polygon `hull` lying on the line through its neighbours.
fn drop_collinear(hull: &mut Vec<Point2>) {
    let n = hull.len();
    if n < 3 {
        return;
    }
    let keep: Vec<bool> = (0..n)
        .map(|i| orientation(hull[(i + n - 1) % n], hull[i], hull[(i + 1) % n]) != 0.0)
        .collect();
    // A fully collinear cycle keeps its points rather than vanishing.
    if keep.iter().all(|k| !k) {
        return;
    }
    let mut flags = keep.into_iter();
    hull.retain(|_| flags.next().unwrap_or(true));
}

enum Task {
    Edge {
        a: Point2,
        b: Point2,
        outside: Vec<Point2>,
    },
    Emit(Point2),
}

/// Append the hull vertices strictly between `a` and `b` (in order) to `hull`.
///
/// `outside` holds the candidates strictly right of `a → b`.
fn expand_edge<O>(
    a: Point2,
    b: Point2,
    outside: Vec<Point2>,
    hull: &mut Vec<Point2>,
    observer: &mut O,
) where
    O: HullObserver + ?Sized,
{
    let mut stack = vec![Task::Edge { a, b, outside }];
    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(c) => {
                hull.push(c);
                observer.snapshot(hull, Stage::PartialHull);
            }
            Task::Edge { a, b, outside } => {
                let Some(c) = furthest_from_line(a, b, &outside) else {
                    continue;
                };
                let before = right_of(a, c, &outside);
                let after = right_of(c, b, &outside);
                // LIFO: the (a, c) side must come out first.
                stack.push(Task::Edge {
                    a: c,
                    b,
                    outside: after,
                });
                stack.push(Task::Emit(c));
                stack.push(Task::Edge {
                    a,
                    b: c,
                    outside: before,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Recorder;
    use crate::validate::is_convex_ccw;
    use nalgebra::point;

    #[test]
    fn square_with_center() {
        let pts = vec![
            point![0.0, 0.0],
            point![4.0, 0.0],
            point![4.0, 4.0],
            point![0.0, 4.0],
            point![2.0, 2.0],
        ];
        assert_eq!(
            quick_hull(&pts),
            vec![
                point![0.0, 0.0],
                point![4.0, 0.0],
                point![4.0, 4.0],
                point![0.0, 4.0]
            ]
        );
    }

    #[test]
    fn collinear_edge_point_is_dropped() {
        let pts = vec![
            point![0.0, 0.0],
            point![1.0, 0.0],
            point![2.0, 0.0],
            point![0.0, 1.0],
        ];
        assert_eq!(
            quick_hull(&pts),
            vec![point![0.0, 0.0], point![2.0, 0.0], point![0.0, 1.0]]
        );
    }

    #[test]
    fn quadrangle_corners_prefer_strict_vertices() {
        // Leftmost column has three points; only its ends are vertices.
        let pts = vec![
            point![0.0, 2.0],
            point![0.0, 0.0],
            point![0.0, 4.0],
            point![5.0, 2.0],
        ];
        assert_eq!(
            extreme_quadrangle(&pts),
            [
                point![0.0, 0.0],
                point![0.0, 0.0],
                point![5.0, 2.0],
                point![0.0, 4.0]
            ]
        );
        assert_eq!(
            quick_hull(&pts),
            vec![point![0.0, 0.0], point![5.0, 2.0], point![0.0, 4.0]]
        );
    }

    #[test]
    fn furthest_point_keeps_first_on_ties() {
        let a = point![0.0, 0.0];
        let b = point![4.0, 0.0];
        let pts = [point![1.0, -2.0], point![3.0, -2.0], point![2.0, -1.0]];
        assert_eq!(furthest_from_line(a, b, &pts), Some(point![1.0, -2.0]));
        assert_eq!(furthest_from_line(a, a, &pts), None);
    }

    #[test]
    fn tied_furthest_run_contributes_only_its_ends() {
        // (1,-3), (2,-2), (3,-1) are equally far below the diagonal; the middle one comes first.
        let pts = vec![
            point![2.0, -2.0],
            point![3.0, 3.0],
            point![-3.0, -3.0],
            point![1.0, -3.0],
            point![3.0, -1.0],
        ];
        let hull = quick_hull(&pts);
        assert!(is_convex_ccw(&hull), "{hull:?}");
        assert_eq!(
            hull,
            vec![
                point![-3.0, -3.0],
                point![1.0, -3.0],
                point![3.0, -1.0],
                point![3.0, 3.0]
            ]
        );
    }

    #[test]
    fn collinear_vertices_are_pruned() {
        let mut hull = vec![
            point![0.0, 0.0],
            point![1.0, 0.0],
            point![2.0, 0.0],
            point![2.0, 2.0],
            point![0.0, 2.0],
            point![0.0, 1.0],
        ];
        drop_collinear(&mut hull);
        assert_eq!(
            hull,
            vec![
                point![0.0, 0.0],
                point![2.0, 0.0],
                point![2.0, 2.0],
                point![0.0, 2.0]
            ]
        );
        let mut line = vec![point![0.0, 0.0], point![1.0, 0.0], point![2.0, 0.0]];
        drop_collinear(&mut line);
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn duplicates_collapse_before_expansion() {
        let pts = vec![
            point![0.0, 0.0],
            point![4.0, 0.0],
            point![0.0, 0.0],
            point![2.0, 3.0],
            point![4.0, 0.0],
        ];
        assert_eq!(
            quick_hull(&pts),
            vec![point![0.0, 0.0], point![4.0, 0.0], point![2.0, 3.0]]
        );
        let pair = vec![point![1.0, 1.0], point![5.0, 1.0], point![1.0, 1.0]];
        assert_eq!(quick_hull(&pair), vec![point![1.0, 1.0], point![5.0, 1.0]]);
    }

    #[test]
    fn octagon_needs_recursion_on_every_edge() {
        let pts: Vec<_> = [
            (2.0, 0.0),
            (4.0, 0.0),
            (6.0, 2.0),
            (6.0, 4.0),
            (4.0, 6.0),
            (2.0, 6.0),
            (0.0, 4.0),
            (0.0, 2.0),
            (3.0, 3.0),
            (1.0, 3.0),
        ]
        .iter()
        .map(|&(x, y)| point![x, y])
        .collect();
        assert_eq!(
            quick_hull(&pts),
            vec![
                point![0.0, 2.0],
                point![2.0, 0.0],
                point![4.0, 0.0],
                point![6.0, 2.0],
                point![6.0, 4.0],
                point![4.0, 6.0],
                point![2.0, 6.0],
                point![0.0, 4.0],
            ]
        );
    }

    #[test]
    fn degenerate_sets_terminate() {
        let same = vec![point![1.0, 1.0]; 4];
        assert_eq!(quick_hull(&same), vec![point![1.0, 1.0]]);
        let line: Vec<_> = (0..5).map(|i| point![i as f64, 3.0]).collect();
        assert_eq!(quick_hull(&line), vec![point![0.0, 3.0], point![4.0, 3.0]]);
        let vertical: Vec<_> = (0..5).rev().map(|i| point![-1.0, i as f64]).collect();
        assert_eq!(
            quick_hull(&vertical),
            vec![point![-1.0, 0.0], point![-1.0, 4.0]]
        );
    }

    #[test]
    fn snapshots_follow_insertions() {
        let pts = vec![
            point![0.0, 0.0],
            point![2.0, -1.0],
            point![4.0, 0.0],
            point![2.0, 3.0],
            point![1.0, -0.8],
        ];
        let mut rec = Recorder::new();
        let hull = quick_hull_observed(&pts, &mut rec);
        assert_eq!(rec.snapshots[0].stage, Stage::Quadrangle);
        assert_eq!(rec.snapshots.last().unwrap().points, hull);
        // (1, -0.8) is the only vertex found by recursion.
        assert_eq!(rec.with_stage(Stage::PartialHull).count(), 1);
        assert_eq!(hull.len(), 5);
    }
}
