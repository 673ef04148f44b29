//! Sweep/slice model of a polygon.
//!
//! Purpose
//! - Represent the boundary as downward edges (`SweepEvent`) consumed in
//!   sweep order from a `SweepBuffer`.
//! - Represent the interior as `Slice`s: left/right wall chains bounding a
//!   vertical corridor over some y-range.
//!
//! Ownership
//! - Every event a layout touches lives in one `EventArena`; chains hold
//!   `EventId`s. Splitting an edge pushes two new entries and edits the id
//!   list, so no slice ever aliases another's storage.

mod buffer;
mod event;
mod slice;

pub use buffer::SweepBuffer;
pub use event::{EventArena, EventId, JointId, SweepEvent};
pub use slice::{Chain, Closure, CornerEvents, Slice};
