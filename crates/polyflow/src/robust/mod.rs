//! Robust geometric predicates.
//!
//! Purpose
//! - Exact-sign orientation tests (2, 3 and 4 points) so that near-collinear
//!   boundary points never flip classification through rounding.
//! - Point-in-polygon and segment tests that delegate every edge decision to
//!   those predicates.
//!
//! Why adaptive
//! - The float determinant settles almost every query; the expansion path
//!   runs only when the result lies inside the forward error bound.

pub mod contains;
pub mod expansion;
mod orient;

pub use contains::{contains, on_segment, path_contains, segment_meets_rect, segments_intersect};
pub use expansion::Expansion;
pub use orient::{orientation_2pt, orientation_3pt, orientation_4pt, Orientation};
