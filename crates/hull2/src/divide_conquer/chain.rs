//! Arena of cyclic doubly-linked hull vertices.
//!
//! Every vertex of one divide-and-conquer call lives in a single `Vec`;
//! neighbours are referenced by [`VertexId`]. A [`Chain`] names one closed cycle
//! in the arena and is consumed by value when merged, so a retired chain can't
//! be used again.

use std::ops::{Index, IndexMut};

use crate::predicates::{is_between, orientation, Point2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct VertexId(pub usize);

/// A point with its clockwise and counterclockwise neighbours.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HullVertex {
    pub point: Point2,
    pub cw: VertexId,
    pub ccw: VertexId,
}

/// Walking direction around a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Which side of `pivot → current` the next vertex must lie on for a walk to advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    fn holds(self, turn: f64) -> bool {
        match self {
            Side::Left => turn > 0.0,
            Side::Right => turn < 0.0,
        }
    }
}

/// One closed cycle in the arena.
///
/// Invariants: following `ccw` from `entry` visits `len` distinct vertices and
/// returns to `entry`; `cw`/`ccw` are mutual inverses; `leftmost`/`rightmost`
/// are the lexicographic extremes of the cycle.
#[derive(Debug)]
pub(crate) struct Chain {
    pub leftmost: VertexId,
    pub rightmost: VertexId,
    pub entry: VertexId,
    pub len: usize,
}

/// Vertex storage for one divide-and-conquer invocation.
#[derive(Debug)]
pub(crate) struct Arena {
    vertices: Vec<HullVertex>,
}

impl Arena {
    /// One self-linked vertex per point; ids follow the slice order.
    pub fn from_points(points: &[Point2]) -> Self {
        let vertices = points
            .iter()
            .enumerate()
            .map(|(i, &point)| HullVertex {
                point,
                cw: VertexId(i),
                ccw: VertexId(i),
            })
            .collect();
        Self { vertices }
    }

    /// The trivial chain made of vertex `id` alone.
    pub fn singleton(&self, id: VertexId) -> Chain {
        debug_assert_eq!(self[id].cw, id);
        debug_assert_eq!(self[id].ccw, id);
        Chain {
            leftmost: id,
            rightmost: id,
            entry: id,
            len: 1,
        }
    }

    #[inline]
    pub fn point(&self, id: VertexId) -> Point2 {
        self[id].point
    }

    #[inline]
    pub fn step(&self, id: VertexId, rotation: Rotation) -> VertexId {
        match rotation {
            Rotation::Clockwise => self[id].cw,
            Rotation::CounterClockwise => self[id].ccw,
        }
    }

    /// Make `to` the clockwise neighbour of `from` (and `from` the counterclockwise neighbour of `to`).
    #[inline]
    pub fn link_cw(&mut self, from: VertexId, to: VertexId) {
        self[from].cw = to;
        self[to].ccw = from;
    }

    /// Advance `current` around its chain while the next vertex lies on `side` of
    /// `pivot → current`, or is collinear and farther from `pivot`.
    ///
    /// Returns the final vertex and whether it moved. At most `limit` steps.
    pub fn walk(
        &self,
        pivot: VertexId,
        mut current: VertexId,
        rotation: Rotation,
        side: Side,
        limit: usize,
    ) -> (VertexId, bool) {
        let p = self.point(pivot);
        let mut moved = false;
        for _ in 0..limit {
            let next = self.step(current, rotation);
            if next == current {
                break;
            }
            let (c, n) = (self.point(current), self.point(next));
            let turn = orientation(p, c, n);
            if side.holds(turn) || (turn == 0.0 && is_between(p, c, n)) {
                current = next;
                moved = true;
            } else {
                break;
            }
        }
        (current, moved)
    }

    /// Points of `chain` in counterclockwise order starting at its entry.
    pub fn ccw_points(&self, chain: &Chain) -> Vec<Point2> {
        let mut out = Vec::with_capacity(chain.len);
        let mut id = chain.entry;
        loop {
            out.push(self.point(id));
            id = self[id].ccw;
            if id == chain.entry || out.len() > self.vertices.len() {
                break;
            }
        }
        out
    }

    /// Number of vertices on the cycle through `entry`.
    pub fn cycle_len(&self, entry: VertexId) -> usize {
        let mut len = 1;
        let mut id = self[entry].ccw;
        while id != entry && len <= self.vertices.len() {
            len += 1;
            id = self[id].ccw;
        }
        len
    }
}

impl Index<VertexId> for Arena {
    type Output = HullVertex;

    #[inline]
    fn index(&self, id: VertexId) -> &HullVertex {
        &self.vertices[id.0]
    }
}

impl IndexMut<VertexId> for Arena {
    #[inline]
    fn index_mut(&mut self, id: VertexId) -> &mut HullVertex {
        &mut self.vertices[id.0]
    }
}
