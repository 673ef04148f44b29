//! Word wrapping inside a polygon.
//!
//! Purpose
//! - `WordWrap` owns the sweep state of one polygon and places boxes pulled
//!   from a `WordSource` into rows, left to right and top to bottom.
//! - Slices are extended lazily: only the events within two box heights of
//!   the cursor are consumed, so the cost of a layout follows the rows it
//!   actually fills.
//!
//! Placement rules
//! - A row continues while the next box fits to the right of the previous one
//!   in the band `[row_y, row_y + h]`; it may jump to a slice further right.
//! - A new row starts at the topmost candidate at or below the previous
//!   row's bottom, over all slices; the leftmost slice wins ties.
//! - The last box of a slice, row and layout carries the matching flag.
//!
//! Tolerances come from `FlowCfg` on the engine.

mod engine;
mod fit;
mod place;
mod source;

pub use engine::WordWrap;
pub use fit::{point_for_box_at_edge, point_for_box_at_top, point_for_box_in_corner_core};
pub use place::WrapOutcome;
pub use source::{BoxList, WordBox, WordSource};

#[cfg(test)]
mod tests;
