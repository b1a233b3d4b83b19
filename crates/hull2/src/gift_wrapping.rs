//! Gift wrapping (Jarvis march).
//!
//! Starting from the lexicographically smallest point, repeatedly pick the
//! candidate `u` such that no other point lies strictly clockwise of the ray
//! `r → u`. Among collinear candidates the farthest one wins, so interior
//! points of hull edges never enter the output.
//!
//! Degenerate input
//! - All-collinear sets are answered up front with their two extreme points.
//! - The wrapping loop is bounded by the number of distinct points, so it ends
//!   even if rounding makes the orientation test inconsistent.
//!
//! Complexity: O(nh) for h hull vertices, O(n²) worst case.

use crate::observe::{HullObserver, Silent, Stage};
use crate::predicates::{collinear_extremes, is_between, orientation, sorted_distinct, Point2};

/// Convex hull by gift wrapping, counterclockwise from the lexicographically smallest vertex.
///
/// Fewer than three input points are returned unchanged.
pub fn gift_wrapping(points: &[Point2]) -> Vec<Point2> {
    gift_wrapping_observed(points, &mut Silent)
}

/// [`gift_wrapping`] reporting the vertex chain after every selected vertex.
pub fn gift_wrapping_observed<O>(points: &[Point2], observer: &mut O) -> Vec<Point2>
where
    O: HullObserver + ?Sized,
{
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut candidates = sorted_distinct(points);
    if candidates.len() < 3 {
        observer.snapshot(&candidates, Stage::FinalHull);
        return candidates;
    }
    if let Some(ends) = collinear_extremes(&candidates) {
        observer.snapshot(&ends, Stage::FinalHull);
        return ends.to_vec();
    }

    // `candidates[0]` is the start and stays at index 0: only later indices are
    // ever removed, and the wrap ends as soon as the start is selected again.
    let start = candidates[0];
    let mut current = start;
    let mut chain = vec![start];
    observer.snapshot(&chain, Stage::VertexChain);

    for _ in 0..candidates.len() {
        let next = most_clockwise(current, &candidates);
        if next == 0 {
            break;
        }
        current = candidates.swap_remove(next);
        chain.push(current);
        observer.snapshot(&chain, Stage::VertexChain);
    }

    observer.snapshot(&chain, Stage::FinalHull);
    chain
}

/// Index of the candidate `u` with every other candidate left of (or behind) `r → u`.
fn most_clockwise(r: Point2, candidates: &[Point2]) -> usize {
    let mut best = 0;
    for (i, &t) in candidates.iter().enumerate() {
        let u = candidates[best];
        if t == u {
            continue;
        }
        let turn = orientation(r, u, t);
        if turn < 0.0 || (turn == 0.0 && is_between(r, u, t)) {
            best = i;
        }
    }
    best
}
