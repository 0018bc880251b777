//! Slice range validation
//!
//! Slices take an inclusive `start..=stop` range and a step along each axis.
//! The extent of the resulting view along an axis is the number of indices
//! the stepped range visits.

use core::ops::RangeInclusive;

use crate::error::{MatrixError, Result};
use crate::shape::Axis;

/// Validate one axis of a slice against `bound`, returning the view extent
///
/// Fails with `InvalidSlice` for a zero step or a backwards range and with
/// `IndexOutOfBounds` when either end lies outside `[0, bound)`.
pub fn stepped_extent(
    axis: Axis,
    range: &RangeInclusive<usize>,
    step: usize,
    bound: usize,
) -> Result<usize> {
    let (start, stop) = (*range.start(), *range.end());
    if step == 0 || stop < start {
        return Err(MatrixError::InvalidSlice {
            axis,
            start,
            stop,
            step,
        });
    }
    if stop >= bound {
        return Err(MatrixError::IndexOutOfBounds {
            axis,
            index: stop,
            bound,
        });
    }
    Ok((stop - start) / step + 1)
}
