//! Divide-and-conquer hull with a linear-time bridge merge.
//!
//! Purpose
//! - Sort once, split by index (not by coordinate), hull both halves
//!   recursively and join them through their upper and lower bridges.
//!
//! Representation
//! - Sub-hulls are cyclic doubly-linked chains stored in an index arena
//!   (`chain.rs`). Links exist only during one call; the result is a plain
//!   `Vec<Point2>`.
//!
//! Merge
//! - Upper bridge: from (rightmost of left, leftmost of right), walk the right
//!   endpoint clockwise while the next vertex turns left and the left endpoint
//!   counterclockwise while the next vertex turns right, until a full pass
//!   moves neither. Lower bridge mirrors it.
//! - A walk also advances onto a collinear next vertex that is farther from the
//!   pivot, so collinear points never end up as bridge endpoints.
//! - Walks are capped by chain sizes, so a merge always terminates.
//!
//! Complexity: O(n log n); O(n) per recursion level.
//!
//! References
//! - F. P. Preparata, S. J. Hong. 1977. Convex hulls of finite sets of points in two and three dimensions.

mod chain;

use std::ops::Range;

use crate::observe::{HullObserver, Silent, Stage};
use crate::predicates::{sorted_distinct, Point2};
use chain::{Arena, Chain, Rotation, Side, VertexId};

/// Convex hull by divide and conquer, counterclockwise from the left end of the top-level upper bridge.
///
/// Fewer than three input points are returned unchanged.
pub fn divide_and_conquer(points: &[Point2]) -> Vec<Point2> {
    divide_and_conquer_observed(points, &mut Silent)
}

/// [`divide_and_conquer`] reporting every merged sub-hull.
pub fn divide_and_conquer_observed<O>(points: &[Point2], observer: &mut O) -> Vec<Point2>
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

    let mut arena = Arena::from_points(&pts);
    let chain = build(&mut arena, 0..pts.len(), observer);
    let hull = arena.ccw_points(&chain);
    observer.snapshot(&hull, Stage::FinalHull);
    hull
}

fn build<O>(arena: &mut Arena, range: Range<usize>, observer: &mut O) -> Chain
where
    O: HullObserver + ?Sized,
{
    if range.len() == 1 {
        return arena.singleton(VertexId(range.start));
    }
    let mid = range.start + range.len() / 2;
    let left = build(arena, range.start..mid, observer);
    let right = build(arena, mid..range.end, observer);
    let merged = merge(arena, left, right);
    if observer.is_active() {
        observer.snapshot(&arena.ccw_points(&merged), Stage::MergedHull);
    }
    merged
}

/// Join two chains separated in lexicographic order (`left` entirely before `right`).
fn merge(arena: &mut Arena, left: Chain, right: Chain) -> Chain {
    let (upper_a, upper_b) = bridge(arena, &left, &right, Bridge::Upper);
    let (lower_a, lower_b) = bridge(arena, &left, &right, Bridge::Lower);

    // Vertices strictly between the bridges on the inner sides drop out of the cycle.
    arena.link_cw(upper_a, upper_b);
    arena.link_cw(lower_b, lower_a);

    Chain {
        leftmost: left.leftmost,
        rightmost: right.rightmost,
        entry: upper_a,
        len: arena.cycle_len(upper_a),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bridge {
    Upper,
    Lower,
}

/// Endpoints `(a, b)` of the bridge, `a` on `left` and `b` on `right`.
fn bridge(arena: &Arena, left: &Chain, right: &Chain, which: Bridge) -> (VertexId, VertexId) {
    let (a_walk, b_walk) = match which {
        Bridge::Upper => (
            (Rotation::CounterClockwise, Side::Right),
            (Rotation::Clockwise, Side::Left),
        ),
        Bridge::Lower => (
            (Rotation::Clockwise, Side::Left),
            (Rotation::CounterClockwise, Side::Right),
        ),
    };
    let (mut a, mut b) = (left.rightmost, right.leftmost);
    for _ in 0..=left.len + right.len {
        let (next_b, moved_b) = arena.walk(a, b, b_walk.0, b_walk.1, right.len);
        b = next_b;
        let (next_a, moved_a) = arena.walk(b, a, a_walk.0, a_walk.1, left.len);
        a = next_a;
        if !moved_a && !moved_b {
            break;
        }
    }
    (a, b)
}
