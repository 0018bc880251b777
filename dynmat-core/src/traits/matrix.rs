//! Shared read/write-by-index capability
//!
//! Owned matrices, borrowed views and fixed-size arrays all implement
//! [`MatrixRead`], so any of them can be the right-hand operand of the
//! arithmetic operators regardless of how its slots are stored.

use super::element::MatrixElement;
use crate::error::Result;
use crate::shape::Shape;
use crate::validation::{check_index, check_linear};

/// Bounds-checked read access to a matrix-shaped value
pub trait MatrixRead {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get matrix dimensions
    fn shape(&self) -> Shape;

    /// Read the element at `(row, col)`
    ///
    /// Fails with `IndexOutOfBounds` when `row >= rows` or `col >= cols`.
    fn get(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Read the element at row-major linear `index`
    ///
    /// Fails with `IndexOutOfBounds` when `index >= rows * cols`.
    fn get_linear(&self, index: usize) -> Result<Self::Element>;

    fn nrows(&self) -> usize {
        self.shape().rows
    }

    fn ncols(&self) -> usize {
        self.shape().cols
    }
}

/// Bounds-checked write access to a matrix-shaped value
pub trait MatrixWrite: MatrixRead {
    /// Overwrite the element at `(row, col)`
    fn set(&mut self, row: usize, col: usize, value: Self::Element) -> Result<()>;

    /// Overwrite the element at row-major linear `index`
    fn set_linear(&mut self, index: usize, value: Self::Element) -> Result<()>;
}

impl<T: MatrixElement, const R: usize, const C: usize> MatrixRead for [[T; C]; R] {
    type Element = T;

    fn shape(&self) -> Shape {
        Shape::new(R, C)
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        check_index(Shape::new(R, C), row, col)?;
        Ok(self[row][col])
    }

    fn get_linear(&self, index: usize) -> Result<T> {
        let shape = Shape::new(R, C);
        check_linear(shape, index)?;
        let (row, col) = shape.position(index);
        Ok(self[row][col])
    }
}

impl<T: MatrixElement, const R: usize, const C: usize> MatrixWrite for [[T; C]; R] {
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(Shape::new(R, C), row, col)?;
        self[row][col] = value;
        Ok(())
    }

    fn set_linear(&mut self, index: usize, value: T) -> Result<()> {
        let shape = Shape::new(R, C);
        check_linear(shape, index)?;
        let (row, col) = shape.position(index);
        self[row][col] = value;
        Ok(())
    }
}
