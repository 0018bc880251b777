//! dynmat - dense, sparse and view-backed matrices
//!
//! This library provides one matrix type, [`Matrix`], generic over where its
//! elements live, plus borrowed [`MatrixView`]s that read and write a
//! rectangular (optionally strided) region of another matrix in place.
//!
//! ## Architecture
//!
//! dynmat follows a contract/implementation separation:
//!
//! - **dynmat-core**: shapes, errors, element and backend traits, validation (no_std)
//! - **dynmat**: concrete backends, owned matrices, views, arithmetic and dumps
//!
//! ## Quick Start
//!
//! ```rust
//! use dynmat::{DenseMatrix, SparseMatrix};
//!
//! fn example() -> dynmat::Result<()> {
//!     let mut m = DenseMatrix::<f64>::new(3, 3);
//!     {
//!         let mut view = m.slice(0..=1, 0..=1)?;
//!         view.fill(5.0);
//!     }
//!     assert_eq!(m.get(1, 1)?, 5.0);
//!
//!     let id = SparseMatrix::<f64>::identity(3, 3);
//!     let product = (&m * &id)?;
//!     assert_eq!(product, m);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Backends
//!
//! - **Dense**: a contiguous row-major `Vec`, every slot materialized
//! - **Sparse**: a hash map of written slots with amortized eviction of zeros
//! - **View**: one mutable reference per slot into a parent matrix

// Re-export core abstractions
pub use dynmat_core::{
    // Core traits
    MatrixElement, MatrixRead, MatrixWrite, StorageBackend,
    // Shapes
    Axis, Shape,
    // Error handling
    MatrixError, Result,
};

// Implementation modules
pub mod config;
pub mod dense_backend;
mod display;
pub mod matrix;
pub mod ops;
pub mod sparse_backend;
pub mod view;

// Public exports
pub use config::SparseConfig;
pub use dense_backend::DenseBackend;
pub use matrix::{DenseMatrix, Matrix, SparseMatrix};
pub use ops::{dot, scale};
pub use sparse_backend::SparseBackend;
pub use view::MatrixView;
