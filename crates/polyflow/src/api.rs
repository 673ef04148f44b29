//! Curated surface for callers embedding the layout engine.
//!
//! Important
//! - Everything needed to drive a layout end to end is re-exported here:
//!   path construction, the orchestrator, the source capability, and the
//!   predicates used to validate results.
//! - Lower-level sweep types stay reachable through `crate::sweep` for tests
//!   and diagnostics.

// Geometry
pub use crate::geom2::{Aff2, ApproxEq, FlowCfg, Path, Point, Rect, Segment, Size};
// Random polygons
pub use crate::geom2::rand::{draw_star_polygon, ReplayToken as PolygonReplay, StarCfg, VertexCount};
// Predicates
pub use crate::robust::{
    contains, orientation_2pt, orientation_3pt, orientation_4pt, path_contains, Orientation,
};
// Layout
pub use crate::error::FlowError;
pub use crate::wrap::{BoxList, WordBox, WordSource, WordWrap, WrapOutcome};
