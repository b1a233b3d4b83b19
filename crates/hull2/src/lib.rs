//! Planar convex hulls: four classical algorithms over one predicate layer.
//!
//! Purpose
//! - Graham scan, gift wrapping, divide and conquer, and quickhull, all
//!   returning the hull counterclockwise without a closing duplicate.
//! - One orientation predicate and one total order (`predicates`) decide every
//!   turn and every comparison, so the strategies agree on collinear input.
//!
//! Conventions
//! - Inputs with fewer than three points come back unchanged; nothing here
//!   fails or panics on finite coordinates.
//! - Collinear points on a hull edge are never reported; exact duplicates
//!   collapse.
//! - Step-by-step output for visualization goes through `observe::HullObserver`;
//!   the plain entry points use the no-op `Silent` observer.

pub mod api;
pub mod divide_conquer;
pub mod gift_wrapping;
pub mod graham;
pub mod observe;
pub mod predicates;
pub mod quickhull;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{Algorithm, UnknownAlgorithm};
pub use divide_conquer::{divide_and_conquer, divide_and_conquer_observed};
pub use gift_wrapping::{gift_wrapping, gift_wrapping_observed};
pub use graham::{graham_scan, graham_scan_observed};
pub use observe::{HullObserver, Recorder, Silent, Snapshot, Stage};
pub use predicates::{is_between, lex_cmp, orientation, Point2};
pub use quickhull::{quick_hull, quick_hull_observed};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::observe::{HullObserver, Recorder, Silent, Stage};
    pub use crate::predicates::{orientation, Point2};
    pub use crate::validate::{canonical, contains_all, is_convex_ccw};
    pub use crate::{
        divide_and_conquer, gift_wrapping, graham_scan, quick_hull, Algorithm,
    };
    pub use nalgebra::point;
}
