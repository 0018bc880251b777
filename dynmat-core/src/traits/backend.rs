//! Storage backend contract
//!
//! A backend is a keyed container mapping a row-major linear index in
//! `[0, rows * cols)` to an element. Bounds checking is the matrix layer's
//! job; backends may assume every index they receive is in range.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Trait for containers that store the slots of one matrix
pub trait StorageBackend {
    /// The element type stored in this backend
    type Elem: MatrixElement;

    /// The same kind of backend holding a different element type
    type Rebind<U: MatrixElement>: StorageBackend<Elem = U>;

    /// Allocate a backend for `rows * cols` logical slots, all zero
    fn new(rows: usize, cols: usize) -> Self
    where
        Self: Sized;

    /// Allocate an empty backend of the same kind and policy as `self`
    fn empty_like(&self, rows: usize, cols: usize) -> Self
    where
        Self: Sized,
    {
        Self::new(rows, cols)
    }

    /// Number of logical slots
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the value at `index`
    ///
    /// Backends that do not materialize every slot return the zero element
    /// for slots they do not hold.
    fn get(&self, index: usize) -> Self::Elem;

    /// Get a mutable handle to the value at `index`
    ///
    /// Backends that do not materialize every slot create a zero entry when
    /// the slot is absent.
    fn get_mut(&mut self, index: usize) -> &mut Self::Elem;

    /// Overwrite the value at `index`
    fn set(&mut self, index: usize, value: Self::Elem) {
        *self.get_mut(index) = value;
    }

    /// Get simultaneous mutable handles to several slots
    ///
    /// `indices` must be strictly increasing and in range. The handles are
    /// returned in the order of `indices`.
    #[cfg(feature = "alloc")]
    fn get_many_mut(&mut self, indices: &[usize]) -> Vec<&mut Self::Elem>;
}
