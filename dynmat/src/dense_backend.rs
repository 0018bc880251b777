//! Contiguous storage backend
//!
//! Every slot is materialized in a single `Vec` whose length is fixed at
//! construction. The same container also backs views, where the slots are
//! mutable references into another matrix.

use dynmat_core::{MatrixElement, StorageBackend};

/// Dense row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct DenseBackend<T> {
    data: Vec<T>,
}

impl<T> DenseBackend<T> {
    /// Wrap an existing row-major buffer
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the underlying data as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the underlying data as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: MatrixElement> StorageBackend for DenseBackend<T> {
    type Elem = T;
    type Rebind<U: MatrixElement> = DenseBackend<U>;

    fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
        }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> T {
        self.data[index]
    }

    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    fn get_many_mut(&mut self, indices: &[usize]) -> Vec<&mut T> {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));

        let mut wanted = indices.iter().copied().peekable();
        let mut slots = Vec::with_capacity(indices.len());
        for (index, slot) in self.data.iter_mut().enumerate() {
            match wanted.peek() {
                Some(&next) if next == index => {
                    slots.push(slot);
                    wanted.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        slots
    }
}
