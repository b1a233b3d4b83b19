//! Graham scan, monotone-chain variant.
//!
//! Sort lexicographically, then build the upper chain left-to-right and the
//! lower chain right-to-left, popping the middle of the last three points
//! whenever they fail to turn clockwise. Collinear points on an edge are
//! dropped, so only extreme vertices survive.
//!
//! Complexity: O(n log n) for the sort; each point is pushed once and popped
//! at most once per chain.
//!
//! References
//! - A. M. Andrew. 1979. Another efficient algorithm for convex hulls in two dimensions.

use crate::observe::{HullObserver, Silent, Stage};
use crate::predicates::{orientation, sorted_distinct, Point2};

/// Convex hull by Graham scan, counterclockwise from the lexicographically smallest vertex.
///
/// Fewer than three input points are returned unchanged.
pub fn graham_scan(points: &[Point2]) -> Vec<Point2> {
    graham_scan_observed(points, &mut Silent)
}

/// [`graham_scan`] reporting every chain append and pop to `observer`.
pub fn graham_scan_observed<O>(points: &[Point2], observer: &mut O) -> Vec<Point2>
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

    let upper = clockwise_chain(pts.iter().copied(), Stage::UpperHull, observer);
    let lower = clockwise_chain(pts.iter().rev().copied(), Stage::LowerHull, observer);

    // Upper chain followed by the lower chain without its endpoints walks the
    // boundary clockwise; flip it and restart at the leftmost point.
    let mut hull = upper;
    hull.extend_from_slice(&lower[1..lower.len() - 1]);
    hull.reverse();
    hull.rotate_right(1);

    observer.snapshot(&hull, Stage::FinalHull);
    hull
}

/// Chain of the points in iteration order keeping only clockwise turns.
fn clockwise_chain<I, O>(points: I, stage: Stage, observer: &mut O) -> Vec<Point2>
where
    I: ExactSizeIterator<Item = Point2>,
    O: HullObserver + ?Sized,
{
    let mut chain: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        chain.push(p);
        observer.snapshot(&chain, stage);
        while chain.len() > 2 {
            let n = chain.len();
            if orientation(chain[n - 3], chain[n - 2], chain[n - 1]) < 0.0 {
                break;
            }
            chain.swap_remove(n - 2);
            observer.snapshot(&chain, stage);
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Recorder;
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
            graham_scan(&pts),
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
            graham_scan(&pts),
            vec![point![0.0, 0.0], point![2.0, 0.0], point![0.0, 1.0]]
        );
    }

    #[test]
    fn all_collinear_reduces_to_endpoints() {
        let pts: Vec<_> = (0..6).map(|i| point![i as f64, 2.0 * i as f64]).collect();
        assert_eq!(graham_scan(&pts), vec![point![0.0, 0.0], point![5.0, 10.0]]);
    }

    #[test]
    fn duplicates_collapse() {
        let pts = vec![point![1.0, 1.0]; 5];
        assert_eq!(graham_scan(&pts), vec![point![1.0, 1.0]]);
    }

    #[test]
    fn snapshots_are_labelled_by_chain() {
        let pts = vec![
            point![0.0, 0.0],
            point![2.0, 1.0],
            point![4.0, 0.0],
            point![2.0, 3.0],
        ];
        let mut rec = Recorder::new();
        let hull = graham_scan_observed(&pts, &mut rec);
        assert!(rec.with_stage(Stage::UpperHull).count() >= pts.len());
        assert!(rec.with_stage(Stage::LowerHull).count() >= pts.len());
        let last = rec.snapshots.last().unwrap();
        assert_eq!(last.stage, Stage::FinalHull);
        assert_eq!(last.points, hull);
        assert_eq!(hull, graham_scan(&pts));
    }
}
