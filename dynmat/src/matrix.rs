//! Owned matrices over any storage backend
//!
//! A [`Matrix`] owns exactly one backend holding `rows * cols` logical
//! slots. All indexing is bounds checked here; the backend never sees an
//! out-of-range index.

use std::fmt;
use std::iter::StepBy;
use std::ops::{Range, RangeInclusive};

use dynmat_core::{
    check_index, check_linear, check_value_count, stepped_extent, Axis, MatrixElement,
    MatrixError, MatrixRead, MatrixWrite, One, Result, Shape, StorageBackend, Zero,
};
use tracing::trace;

use crate::config::SparseConfig;
use crate::dense_backend::DenseBackend;
use crate::display::{write_rows, SparseDump};
use crate::sparse_backend::SparseBackend;
use crate::view::MatrixView;

/// Matrix with every slot materialized
pub type DenseMatrix<T> = Matrix<DenseBackend<T>>;

/// Matrix storing only the slots that were written
pub type SparseMatrix<T> = Matrix<SparseBackend<T>>;

/// A `rows x cols` matrix owning its storage backend
#[derive(Debug, Clone)]
pub struct Matrix<B> {
    pub(crate) shape: Shape,
    pub(crate) backend: B,
}

impl<B: StorageBackend> Matrix<B> {
    /// Create a zero matrix of the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            backend: B::new(rows, cols),
        }
    }

    /// Wrap an existing backend, which must hold exactly `rows * cols` slots
    pub fn with_backend(rows: usize, cols: usize, backend: B) -> Result<Self> {
        let shape = Shape::new(rows, cols);
        check_value_count(shape, backend.len())?;
        Ok(Self { shape, backend })
    }

    /// Create a matrix from exactly `rows * cols` values in row-major order
    ///
    /// Fails with `MalformedConstruction` if the iterator yields a different
    /// number of values. At most `rows * cols + 1` values are pulled, so an
    /// oversized or unbounded iterator reports `actual = rows * cols + 1`.
    pub fn from_values<I>(rows: usize, cols: usize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = B::Elem>,
    {
        let shape = Shape::new(rows, cols);
        let zero = B::Elem::zero();
        let mut matrix = Self::new(rows, cols);

        let mut actual = 0;
        for value in values.into_iter().take(shape.len() + 1) {
            if actual < shape.len() && value != zero {
                matrix.backend.set(actual, value);
            }
            actual += 1;
        }
        check_value_count(shape, actual)?;
        Ok(matrix)
    }

    /// Create a matrix from a list of equally long rows
    pub fn from_rows<const C: usize>(rows: &[[B::Elem; C]]) -> Self {
        let shape = Shape::new(rows.len(), C);
        Self::from_fn(shape, |index| {
            let (row, col) = shape.position(index);
            rows[row][col]
        })
    }

    /// Zero matrix with ones on the leading diagonal
    ///
    /// For non-square shapes the ones occupy `(i, i)` for every
    /// `i < min(rows, cols)`.
    pub fn identity(rows: usize, cols: usize) -> Self {
        let mut matrix = Self::new(rows, cols);
        for i in 0..rows.min(cols) {
            matrix.backend.set(matrix.shape.linear_index(i, i), B::Elem::one());
        }
        matrix
    }

    /// Build a matrix by evaluating `f` at every linear index
    pub(crate) fn from_fn<F>(shape: Shape, mut f: F) -> Self
    where
        F: FnMut(usize) -> B::Elem,
    {
        let zero = B::Elem::zero();
        let mut matrix = Self::new(shape.rows, shape.cols);
        for index in 0..shape.len() {
            let value = f(index);
            if value != zero {
                matrix.backend.set(index, value);
            }
        }
        matrix
    }

    /// Like [`Matrix::from_fn`], on an empty backend with `self`'s policy
    pub(crate) fn from_fn_like<F>(&self, shape: Shape, mut f: F) -> Self
    where
        F: FnMut(usize) -> B::Elem,
    {
        let zero = B::Elem::zero();
        let mut backend = self.backend.empty_like(shape.rows, shape.cols);
        for index in 0..shape.len() {
            let value = f(index);
            if value != zero {
                backend.set(index, value);
            }
        }
        Self { shape, backend }
    }

    /// Fallible variant of [`Matrix::from_fn_like`]; stops at the first error
    pub(crate) fn try_from_fn_like<F>(&self, shape: Shape, mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<B::Elem>,
    {
        let zero = B::Elem::zero();
        let mut backend = self.backend.empty_like(shape.rows, shape.cols);
        for index in 0..shape.len() {
            let value = f(index)?;
            if value != zero {
                backend.set(index, value);
            }
        }
        Ok(Self { shape, backend })
    }

    /// Get matrix dimensions
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn nrows(&self) -> usize {
        self.shape.rows
    }

    pub fn ncols(&self) -> usize {
        self.shape.cols
    }

    /// Total number of logical slots
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Get a reference to the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Read the element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<B::Elem> {
        let index = check_index(self.shape, row, col)?;
        Ok(self.backend.get(index))
    }

    /// Get a mutable handle to the element at `(row, col)`
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut B::Elem> {
        let index = check_index(self.shape, row, col)?;
        Ok(self.backend.get_mut(index))
    }

    /// Overwrite the element at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: B::Elem) -> Result<()> {
        let index = check_index(self.shape, row, col)?;
        self.backend.set(index, value);
        Ok(())
    }

    /// Read the element at row-major linear `index`
    pub fn get_linear(&self, index: usize) -> Result<B::Elem> {
        let index = check_linear(self.shape, index)?;
        Ok(self.backend.get(index))
    }

    /// Get a mutable handle to the element at row-major linear `index`
    pub fn get_linear_mut(&mut self, index: usize) -> Result<&mut B::Elem> {
        let index = check_linear(self.shape, index)?;
        Ok(self.backend.get_mut(index))
    }

    /// Overwrite the element at row-major linear `index`
    pub fn set_linear(&mut self, index: usize, value: B::Elem) -> Result<()> {
        let index = check_linear(self.shape, index)?;
        self.backend.set(index, value);
        Ok(())
    }

    /// Iterate over every logical value in row-major order
    pub fn iter(&self) -> impl Iterator<Item = B::Elem> + '_ {
        (0..self.shape.len()).map(move |index| self.backend.get(index))
    }

    /// New matrix with rows and columns swapped
    pub fn transpose(&self) -> Self {
        let shape = self.shape.transposed();
        self.from_fn_like(shape, |index| {
            let (row, col) = shape.position(index);
            self.backend.get(self.shape.linear_index(col, row))
        })
    }

    /// Apply `f` to every element, producing a matrix on the same kind of backend
    pub fn map<U, F>(&self, mut f: F) -> Matrix<B::Rebind<U>>
    where
        U: MatrixElement,
        F: FnMut(B::Elem) -> U,
    {
        Matrix::from_fn(self.shape, |index| f(self.backend.get(index)))
    }

    /// Linear indices of the elements in `row`
    pub fn row_indices(&self, row: usize) -> Result<Range<usize>> {
        if row >= self.shape.rows {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Row,
                index: row,
                bound: self.shape.rows,
            });
        }
        let start = row * self.shape.cols;
        Ok(start..start + self.shape.cols)
    }

    /// Linear indices of the elements in `col`
    pub fn column_indices(&self, col: usize) -> Result<StepBy<Range<usize>>> {
        if col >= self.shape.cols {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: col,
                bound: self.shape.cols,
            });
        }
        Ok((col..self.shape.len()).step_by(self.shape.cols))
    }

    /// Copy of `row` as a `1 x cols` matrix
    pub fn row(&self, row: usize) -> Result<Self> {
        let indices = self.row_indices(row)?;
        Ok(self.from_fn_like(Shape::new(1, self.shape.cols), |offset| {
            self.backend.get(indices.start + offset)
        }))
    }

    /// Copy of `col` as a `rows x 1` matrix
    pub fn column(&self, col: usize) -> Result<Self> {
        let indices: Vec<usize> = self.column_indices(col)?.collect();
        Ok(self.from_fn_like(Shape::new(self.shape.rows, 1), |offset| {
            self.backend.get(indices[offset])
        }))
    }

    /// Borrow the block `rows x cols` (both ends inclusive) as a view
    pub fn slice(
        &mut self,
        rows: RangeInclusive<usize>,
        cols: RangeInclusive<usize>,
    ) -> Result<MatrixView<'_, B::Elem>> {
        self.slice_stepped(rows, cols, 1, 1)
    }

    /// Borrow every `row_step`-th row and `col_step`-th column of the block
    /// `rows x cols` (both ends inclusive) as a view
    ///
    /// Element `(i, j)` of the view refers to
    /// `self(rows.start + i * row_step, cols.start + j * col_step)`.
    ///
    /// The extent along each axis is `(stop - start) / step + 1`, the number
    /// of indices the stepped range visits, so the last one never passes
    /// `stop`. This differs from `(stop - start + 1) / step` whenever the
    /// step does not divide the range length; for a 4x5 matrix stepped by 2
    /// over `0..=4` columns the view has 3 columns (0, 2 and 4), not 2.
    pub fn slice_stepped(
        &mut self,
        rows: RangeInclusive<usize>,
        cols: RangeInclusive<usize>,
        row_step: usize,
        col_step: usize,
    ) -> Result<MatrixView<'_, B::Elem>> {
        let view_rows = stepped_extent(Axis::Row, &rows, row_step, self.shape.rows)?;
        let view_cols = stepped_extent(Axis::Column, &cols, col_step, self.shape.cols)?;

        let shape = self.shape;
        let indices: Vec<usize> = rows
            .step_by(row_step)
            .flat_map(|row| {
                cols.clone()
                    .step_by(col_step)
                    .map(move |col| shape.linear_index(row, col))
            })
            .collect();
        debug_assert_eq!(indices.len(), view_rows * view_cols);

        trace!(rows = view_rows, cols = view_cols, "slice view");
        let slots = self.backend.get_many_mut(&indices);
        Ok(MatrixView::new(Shape::new(view_rows, view_cols), slots))
    }

    /// Sum of every element
    pub fn element_sum(&self) -> B::Elem {
        let mut sum = B::Elem::zero();
        for value in self.iter() {
            sum += value;
        }
        sum
    }

    /// Square root of the sum of squared elements, computed in `f64`
    pub fn frobenius_norm(&self) -> f64 {
        self.iter()
            .map(|value| {
                let x = value.to_f64();
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Row-major text dump: one line per row, values separated by a space
    pub fn show(&self) -> String {
        self.to_string()
    }
}

impl<T: MatrixElement> Matrix<DenseBackend<T>> {
    /// Get the row-major data as a slice
    pub fn as_slice(&self) -> &[T] {
        self.backend.as_slice()
    }

    /// Get the row-major data as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.backend.as_mut_slice()
    }

    /// View the row-major data as raw bytes
    pub fn as_bytes(&self) -> &[u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(self.backend.as_slice())
    }
}

impl<T: MatrixElement> Matrix<SparseBackend<T>> {
    /// Create an empty sparse matrix with a custom eviction policy
    pub fn with_config(rows: usize, cols: usize, config: &SparseConfig) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            backend: SparseBackend::with_config(rows, cols, config),
        }
    }

    /// Number of physically stored entries
    pub fn stored_len(&self) -> usize {
        self.backend.stored_len()
    }

    /// Run a compaction sweep now
    pub fn compact(&mut self) {
        self.backend.compact();
    }

    /// Iterate over stored `(row, col, value)` entries in storage order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let shape = self.shape;
        self.backend.entries().map(move |(index, value)| {
            let (row, col) = shape.position(index);
            (row, col, value)
        })
    }

    /// Debug dump of stored entries as `(row,col)value` in storage order
    pub fn show_entries(&self) -> String {
        SparseDump::new(self.shape, &self.backend).to_string()
    }
}

impl<B, const R: usize, const C: usize> From<[[B::Elem; C]; R]> for Matrix<B>
where
    B: StorageBackend,
{
    fn from(rows: [[B::Elem; C]; R]) -> Self {
        Self::from_rows(&rows)
    }
}

impl<B, C> PartialEq<Matrix<C>> for Matrix<B>
where
    B: StorageBackend,
    C: StorageBackend<Elem = B::Elem>,
{
    /// Matrices are equal when their shapes and logical values agree,
    /// whatever their backends
    fn eq(&self, other: &Matrix<C>) -> bool {
        self.shape == other.shape && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<B: StorageBackend> fmt::Display for Matrix<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.shape, self.iter())
    }
}

impl<B: StorageBackend> MatrixRead for Matrix<B> {
    type Element = B::Elem;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Result<B::Elem> {
        let index = check_index(self.shape, row, col)?;
        Ok(self.backend.get(index))
    }

    fn get_linear(&self, index: usize) -> Result<B::Elem> {
        let index = check_linear(self.shape, index)?;
        Ok(self.backend.get(index))
    }
}

impl<B: StorageBackend> MatrixWrite for Matrix<B> {
    fn set(&mut self, row: usize, col: usize, value: B::Elem) -> Result<()> {
        let index = check_index(self.shape, row, col)?;
        self.backend.set(index, value);
        Ok(())
    }

    fn set_linear(&mut self, index: usize, value: B::Elem) -> Result<()> {
        let index = check_linear(self.shape, index)?;
        self.backend.set(index, value);
        Ok(())
    }
}
