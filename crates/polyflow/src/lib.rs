//! Polygon-constrained text flow.
//!
//! Word boxes supplied by a caller are packed left-to-right and wrapped
//! top-to-bottom inside a simple polygon. The polygon is swept downward on
//! demand and decomposed into vertical corridors ("slices"); every placement
//! is searched inside those corridors, and geometric decisions go through
//! exact-sign predicates.
//!
//! Layers (leaf to root)
//! - `geom2`: points, sizes, rectangles, affine maps, paths, random polygons.
//! - `robust`: expansion arithmetic, orientation predicates, point-in-polygon.
//! - `sweep`: sweep events, the event arena, the sweep buffer, slices.
//! - `wrap`: the `WordWrap` orchestrator and the `WordSource` capability.
//!
//! Coordinates are screen-style: `y` grows downward.

pub mod api;
pub mod error;
pub mod geom2;
pub mod robust;
pub mod sweep;
pub mod wrap;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::FlowError;
pub use geom2::{Aff2, ApproxEq, FlowCfg, Path, Point, Rect, Segment, Size};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
pub use wrap::{BoxList, WordBox, WordSource, WordWrap, WrapOutcome};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::FlowError;
    pub use crate::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
    pub use crate::geom2::{Aff2, ApproxEq, FlowCfg, Path, Point, Rect, Segment, Size};
    pub use crate::robust::{contains, orientation_3pt, path_contains, Orientation};
    pub use crate::wrap::{BoxList, WordBox, WordSource, WordWrap, WrapOutcome};
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
