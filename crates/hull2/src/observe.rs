//! Step instrumentation for external visualization.
//!
//! Algorithms report intermediate hull states to a caller-supplied
//! [`HullObserver`]. Observation is purely additive: the returned hull never
//! depends on the observer. The plain entry points use [`Silent`].

use std::fmt;

use crate::predicates::Point2;

/// Label attached to a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Graham scan, left-to-right chain.
    UpperHull,
    /// Graham scan, right-to-left chain.
    LowerHull,
    /// Gift wrapping, vertices selected so far.
    VertexChain,
    /// Divide-and-conquer, result of one merge.
    MergedHull,
    /// Quickhull, the four extreme points.
    Quadrangle,
    /// Quickhull, hull after inserting one extra vertex.
    PartialHull,
    /// Every algorithm, the returned hull.
    FinalHull,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::UpperHull => "Upper Hull",
            Stage::LowerHull => "Lower Hull",
            Stage::VertexChain => "Vertex Chain",
            Stage::MergedHull => "Merged Hull",
            Stage::Quadrangle => "Quadrangle",
            Stage::PartialHull => "Partial Hull",
            Stage::FinalHull => "Final Hull",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of intermediate hull states, in emission order.
///
/// Implementors must not assume the slice outlives the call; copy what you keep.
pub trait HullObserver {
    fn snapshot(&mut self, points: &[Point2], stage: Stage);

    /// `false` lets algorithms skip assembling snapshots nobody reads.
    fn is_active(&self) -> bool {
        true
    }
}

/// Observer that drops every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl HullObserver for Silent {
    #[inline]
    fn snapshot(&mut self, _points: &[Point2], _stage: Stage) {}

    #[inline]
    fn is_active(&self) -> bool {
        false
    }
}

impl<F> HullObserver for F
where
    F: FnMut(&[Point2], Stage),
{
    #[inline]
    fn snapshot(&mut self, points: &[Point2], stage: Stage) {
        self(points, stage)
    }
}

/// One recorded hull state.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub points: Vec<Point2>,
    pub stage: Stage,
}

/// Observer that keeps every snapshot.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub snapshots: Vec<Snapshot>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots carrying `stage`, in emission order.
    pub fn with_stage(&self, stage: Stage) -> impl Iterator<Item = &Snapshot> + '_ {
        self.snapshots.iter().filter(move |s| s.stage == stage)
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl HullObserver for Recorder {
    fn snapshot(&mut self, points: &[Point2], stage: Stage) {
        self.snapshots.push(Snapshot {
            points: points.to_vec(),
            stage,
        });
    }
}
