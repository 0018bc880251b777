//! Textual dumps of matrix contents
//!
//! The dense dump writes one line per row with values separated by a single
//! space and no trailing newline. The sparse dump lists stored entries as
//! `(row,col)value` in storage iteration order.

use std::fmt::{self, Display, Write};

use dynmat_core::{MatrixElement, Shape};

use crate::sparse_backend::SparseBackend;

/// Write `values` (row-major, exactly `shape.len()` of them) as rows
pub(crate) fn write_rows<W, I>(out: &mut W, shape: Shape, values: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut values = values.into_iter();
    for row in 0..shape.rows {
        if row > 0 {
            out.write_char('\n')?;
        }
        for col in 0..shape.cols {
            if col > 0 {
                out.write_char(' ')?;
            }
            if let Some(value) = values.next() {
                write!(out, "{value}")?;
            }
        }
    }
    Ok(())
}

/// Write sparse `(index, value)` entries as `(row,col)value` triples
pub(crate) fn write_entries<W, I, T>(out: &mut W, shape: Shape, entries: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = (usize, T)>,
    T: Display,
{
    for (n, (index, value)) in entries.into_iter().enumerate() {
        if n > 0 {
            out.write_char(' ')?;
        }
        let (row, col) = shape.position(index);
        write!(out, "({row},{col}){value}")?;
    }
    Ok(())
}

/// Lazily formatted `(row,col)value` dump of a sparse backend
pub(crate) struct SparseDump<'a, T> {
    shape: Shape,
    backend: &'a SparseBackend<T>,
}

impl<'a, T> SparseDump<'a, T> {
    pub(crate) fn new(shape: Shape, backend: &'a SparseBackend<T>) -> Self {
        Self { shape, backend }
    }
}

impl<T: MatrixElement> Display for SparseDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.shape, self.backend.entries())
    }
}
