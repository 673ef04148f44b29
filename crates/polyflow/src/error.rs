//! Error taxonomy for path input and layout.
//!
//! Two classes abort a layout call: unsupported input (curves, several
//! contours, malformed paths, non-finite vertices, unusable box sizes) and
//! invariant violations (geometry the sweep cannot reconcile, which means a
//! self-intersecting or otherwise malformed polygon). Running out of room is
//! not an error; it is reported through `WrapOutcome::complete`.

use thiserror::Error;

/// Errors raised by path handling and the layout engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("curved segment at index {index}: only straight edges are supported")]
    UnsupportedCurve { index: usize },

    #[error("path has {count} contours, exactly one closed contour is supported")]
    MultipleContours { count: usize },

    #[error("segment at index {index} is not preceded by a move")]
    MissingMove { index: usize },

    #[error("vertex of segment {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    #[error("invalid box size {width}x{height}")]
    InvalidBoxSize { width: f64, height: f64 },

    #[error("no partner event for the local top at ({x}, {y})")]
    UnpairedEvent { x: f64, y: f64 },

    #[error("boundary closes at y={y} without a matching corridor")]
    DanglingBoundary { y: f64 },

    #[error("edge does not cross the probe line y={y}")]
    MissingIntersection { y: f64 },
}

impl FlowError {
    /// True for errors that indicate a malformed polygon rather than bad input shape.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            FlowError::UnpairedEvent { .. }
                | FlowError::DanglingBoundary { .. }
                | FlowError::MissingIntersection { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
