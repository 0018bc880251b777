#![no_std]

//! dynmat core - shapes, element types and storage contracts
//!
//! This crate provides the definitions shared by every matrix backend:
//! the error type, shape arithmetic, the element trait, the storage backend
//! capability and the read/write-by-index capability that owned matrices and
//! views both implement. It contains no concrete storage.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod shape;
pub mod traits;
pub mod validation;

pub use error::*;
pub use shape::*;
pub use traits::*;
pub use validation::*;

pub use num_traits::{One, Zero};
