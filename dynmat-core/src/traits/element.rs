//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use core::fmt::{Debug, Display};
use core::ops::{AddAssign, Div, Sub, SubAssign};

use num_traits::{One, Zero};

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: read out of any backend by value
/// - PartialEq: compared against zero by the sparse eviction sweep
/// - Zero/One: the logical zero of absent sparse slots and the identity diagonal
/// - Display: rendered by the textual dump
pub trait MatrixElement:
    Copy
    + PartialEq
    + Debug
    + Display
    + Zero
    + One
    + Sub<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Convert from f64 for generic construction
    ///
    /// Used by widened accumulation, where sums are carried in `f64` and
    /// converted back per element.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

macro_rules! impl_matrix_element {
    ($($t:ty),*) => {$(
        impl MatrixElement for $t {
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_matrix_element!(f32, f64, i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_truncates_and_saturates() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i64::from_f64(-2.9), -2);
        assert_eq!(u32::from_f64(-1.0), 0);
        assert_eq!(i32::from_f64(1e12), i32::MAX);
        assert_eq!(f32::from_f64(0.5), 0.5f32);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(7u64.to_f64(), 7.0);
        assert_eq!((-3i32).to_f64(), -3.0);
        assert_eq!(0.25f32.to_f64(), 0.25);
    }
}
