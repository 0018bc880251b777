//! Error types for matrix operations

use crate::shape::{Axis, Shape};

/// Errors that can occur while indexing, constructing or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// An index exceeded the declared shape along `axis`
    #[error("invalid matrix index: tried to access {axis} {index} (bound is {bound})")]
    IndexOutOfBounds {
        axis: Axis,
        index: usize,
        bound: usize,
    },
    /// Operand shapes are incompatible for `op`
    #[error("incompatible matrix dimensions: {lhs} {op} {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    /// A listed-value constructor received the wrong number of values
    #[error("malformed construction: expected {expected} values, got {actual}")]
    MalformedConstruction { expected: usize, actual: usize },
    /// A slice range runs backwards or has a zero step
    #[error("invalid {axis} slice: {start}..={stop} by {step}")]
    InvalidSlice {
        axis: Axis,
        start: usize,
        stop: usize,
        step: usize,
    },
    /// A scalar division had a zero divisor
    #[error("division of a matrix by zero")]
    DivisionByZero,
}

impl MatrixError {
    /// Whether this error came from an out-of-range access
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, MatrixError::IndexOutOfBounds { .. })
    }

    /// Whether this error came from incompatible operand shapes
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, MatrixError::DimensionMismatch { .. })
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
