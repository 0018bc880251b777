//! Borrowed sub-matrix views
//!
//! A [`MatrixView`] is produced by [`Matrix::slice`](crate::Matrix::slice).
//! It owns no element storage: its dense backend holds one mutable reference
//! per slot into the parent matrix, and the borrow checker keeps the parent
//! alive and otherwise untouched for as long as the view exists.
//!
//! Reads dereference the slots; every write goes through them into the
//! parent's backend.

use std::fmt;

use dynmat_core::{
    check_index, check_linear, check_same_shape, MatrixElement, MatrixRead, MatrixWrite, Result,
    Shape, StorageBackend,
};

use crate::dense_backend::DenseBackend;
use crate::display::write_rows;
use crate::matrix::{DenseMatrix, Matrix};

/// A non-owning matrix of references into another matrix's storage
#[derive(Debug)]
pub struct MatrixView<'a, T> {
    shape: Shape,
    slots: DenseBackend<&'a mut T>,
}

impl<'a, T: MatrixElement> MatrixView<'a, T> {
    pub(crate) fn new(shape: Shape, slots: Vec<&'a mut T>) -> Self {
        debug_assert_eq!(slots.len(), shape.len());
        Self {
            shape,
            slots: DenseBackend::from_vec(slots),
        }
    }

    /// Get view dimensions
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn nrows(&self) -> usize {
        self.shape.rows
    }

    pub fn ncols(&self) -> usize {
        self.shape.cols
    }

    pub fn len(&self) -> usize {
        self.shape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Read the referenced element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let index = check_index(self.shape, row, col)?;
        Ok(*self.slots.as_slice()[index])
    }

    /// Mutable handle to the parent slot referenced at `(row, col)`
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let index = check_index(self.shape, row, col)?;
        Ok(&mut *self.slots.as_mut_slice()[index])
    }

    /// Write `value` through to the parent slot referenced at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    pub fn get_linear(&self, index: usize) -> Result<T> {
        let index = check_linear(self.shape, index)?;
        Ok(*self.slots.as_slice()[index])
    }

    pub fn get_linear_mut(&mut self, index: usize) -> Result<&mut T> {
        let index = check_linear(self.shape, index)?;
        Ok(&mut *self.slots.as_mut_slice()[index])
    }

    pub fn set_linear(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_linear_mut(index)? = value;
        Ok(())
    }

    /// Iterate over the referenced values in row-major order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.slots.as_slice().iter().map(|slot| **slot)
    }

    /// Copy every element of `source` into the referenced parent slots
    ///
    /// Fails with `DimensionMismatch` unless `source` has the view's shape;
    /// nothing is written in that case.
    pub fn assign<R>(&mut self, source: &R) -> Result<()>
    where
        R: MatrixRead<Element = T> + ?Sized,
    {
        check_same_shape("=", self.shape, source.shape())?;
        for (index, slot) in self.slots.as_mut_slice().iter_mut().enumerate() {
            **slot = source.get_linear(index)?;
        }
        Ok(())
    }

    /// Write `value` into every referenced parent slot
    pub fn fill(&mut self, value: T) {
        for slot in self.slots.as_mut_slice() {
            **slot = value;
        }
    }

    /// Add `other` elementwise into the referenced parent slots
    pub fn try_add_assign<R>(&mut self, other: &R) -> Result<()>
    where
        R: MatrixRead<Element = T> + ?Sized,
    {
        check_same_shape("+=", self.shape, other.shape())?;
        for (index, slot) in self.slots.as_mut_slice().iter_mut().enumerate() {
            **slot += other.get_linear(index)?;
        }
        Ok(())
    }

    /// Subtract `other` elementwise from the referenced parent slots
    pub fn try_sub_assign<R>(&mut self, other: &R) -> Result<()>
    where
        R: MatrixRead<Element = T> + ?Sized,
    {
        check_same_shape("-=", self.shape, other.shape())?;
        for (index, slot) in self.slots.as_mut_slice().iter_mut().enumerate() {
            **slot -= other.get_linear(index)?;
        }
        Ok(())
    }

    /// Apply `f` to every referenced value, producing an owned dense matrix
    pub fn map<U, F>(&self, mut f: F) -> DenseMatrix<U>
    where
        U: MatrixElement,
        F: FnMut(T) -> U,
    {
        Matrix::from_fn(self.shape, |index| f(*self.slots.as_slice()[index]))
    }

    /// Copy the referenced values into an independent dense matrix
    pub fn to_owned(&self) -> DenseMatrix<T> {
        self.to_owned_as()
    }

    /// Copy the referenced values into an independent matrix on backend `B`
    pub fn to_owned_as<B>(&self) -> Matrix<B>
    where
        B: StorageBackend<Elem = T>,
    {
        Matrix::from_fn(self.shape, |index| *self.slots.as_slice()[index])
    }

    /// Row-major text dump of the referenced values
    pub fn show(&self) -> String {
        self.to_string()
    }
}

impl<T: MatrixElement> fmt::Display for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.shape, self.iter())
    }
}

impl<T: MatrixElement> MatrixRead for MatrixView<'_, T> {
    type Element = T;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        let index = check_index(self.shape, row, col)?;
        Ok(*self.slots.as_slice()[index])
    }

    fn get_linear(&self, index: usize) -> Result<T> {
        let index = check_linear(self.shape, index)?;
        Ok(*self.slots.as_slice()[index])
    }
}

impl<T: MatrixElement> MatrixWrite for MatrixView<'_, T> {
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let index = check_index(self.shape, row, col)?;
        *self.slots.as_mut_slice()[index] = value;
        Ok(())
    }

    fn set_linear(&mut self, index: usize, value: T) -> Result<()> {
        let index = check_linear(self.shape, index)?;
        *self.slots.as_mut_slice()[index] = value;
        Ok(())
    }
}
