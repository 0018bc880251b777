//! Validation utilities for matrix access and arithmetic
//!
//! This module contains pure validation functions with no allocation.
//! All functions are checks on indices and shapes.

pub mod bounds;
pub mod slice;

pub use bounds::{
    check_dot, check_index, check_linear, check_product, check_same_shape, check_value_count,
};
pub use slice::stepped_extent;
