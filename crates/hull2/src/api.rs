//! Algorithm selector.
//!
//! Names the four hull strategies so callers (CLI, benches, cross-checks) can
//! pick one at runtime. Every variant returns the hull counterclockwise; only
//! the starting vertex differs.

use std::fmt;
use std::str::FromStr;

use crate::divide_conquer::divide_and_conquer_observed;
use crate::gift_wrapping::gift_wrapping_observed;
use crate::graham::graham_scan_observed;
use crate::observe::{HullObserver, Silent};
use crate::predicates::Point2;
use crate::quickhull::quick_hull_observed;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    GrahamScan,
    GiftWrapping,
    DivideAndConquer,
    QuickHull,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::GrahamScan,
        Algorithm::GiftWrapping,
        Algorithm::DivideAndConquer,
        Algorithm::QuickHull,
    ];

    /// Short name, accepted back by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::GrahamScan => "graham",
            Algorithm::GiftWrapping => "gift",
            Algorithm::DivideAndConquer => "dc",
            Algorithm::QuickHull => "quick",
        }
    }

    #[inline]
    pub fn hull(self, points: &[Point2]) -> Vec<Point2> {
        self.hull_observed(points, &mut Silent)
    }

    pub fn hull_observed<O>(self, points: &[Point2], observer: &mut O) -> Vec<Point2>
    where
        O: HullObserver + ?Sized,
    {
        match self {
            Algorithm::GrahamScan => graham_scan_observed(points, observer),
            Algorithm::GiftWrapping => gift_wrapping_observed(points, observer),
            Algorithm::DivideAndConquer => divide_and_conquer_observed(points, observer),
            Algorithm::QuickHull => quick_hull_observed(points, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `Algorithm::from_str` for names it doesn't know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown hull algorithm `{}` (expected one of: graham, gift, dc, quick)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "graham" | "graham_scan" => Ok(Algorithm::GrahamScan),
            "gift" | "gift_wrapping" | "jarvis" => Ok(Algorithm::GiftWrapping),
            "dc" | "divide_and_conquer" => Ok(Algorithm::DivideAndConquer),
            "quick" | "quickhull" | "quick_hull" => Ok(Algorithm::QuickHull),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
