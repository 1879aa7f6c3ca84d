use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BezError {
    #[error("curve requires at least one control point")]
    EmptyControlPoints,

    #[error("control point {index} has cardinality {found}, expected {expected}")]
    CardinalityMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("control point index {index} out of range for curve of order {order}")]
    PointIndexOutOfRange { index: usize, order: usize },

    #[error("refinement iteration count must be at least 1, got {0}")]
    InvalidRefinement(usize),
}

pub type Result<T> = std::result::Result<T, BezError>;
