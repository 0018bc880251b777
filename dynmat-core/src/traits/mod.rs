//! Abstract interfaces for matrix storage and access
//!
//! This module defines all trait abstractions shared by the backends,
//! owned matrices and views. Traits are pure interfaces; the array impls
//! in `matrix` are the only concrete types here.

pub mod backend;
pub mod element;
pub mod matrix;

pub use backend::StorageBackend;
pub use element::MatrixElement;
pub use matrix::{MatrixRead, MatrixWrite};
