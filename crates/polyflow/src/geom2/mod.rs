//! 2D value types for the layout engine.
//!
//! Purpose
//! - Points, sizes, rectangles and affine maps with epsilon-tolerant equality.
//! - Straight-edged paths as a tagged segment list (`Segment`), the only
//!   polygon input the engine accepts.
//! - A seeded random polygon sampler for tests and benchmarks.
//!
//! Tolerances live in `FlowCfg`; predicates that must be exact live in
//! `crate::robust`, not here.

mod path;
pub mod rand;
mod types;

pub use path::{Path, Segment};
pub use types::{Aff2, ApproxEq, FlowCfg, Point, Rect, Size, EPS};
