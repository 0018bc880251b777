//! Index and shape validation
//!
//! Pure functions that check an access or an operand pairing against the
//! declared shapes and report the offending values on failure.

use crate::error::{MatrixError, Result};
use crate::shape::{Axis, Shape};

/// Validate `(row, col)` against `shape`, returning the linear index
pub const fn check_index(shape: Shape, row: usize, col: usize) -> Result<usize> {
    if row >= shape.rows {
        return Err(MatrixError::IndexOutOfBounds {
            axis: Axis::Row,
            index: row,
            bound: shape.rows,
        });
    }
    if col >= shape.cols {
        return Err(MatrixError::IndexOutOfBounds {
            axis: Axis::Column,
            index: col,
            bound: shape.cols,
        });
    }
    Ok(shape.linear_index(row, col))
}

/// Validate a row-major linear index against `shape`
pub const fn check_linear(shape: Shape, index: usize) -> Result<usize> {
    if index >= shape.len() {
        return Err(MatrixError::IndexOutOfBounds {
            axis: Axis::Linear,
            index,
            bound: shape.len(),
        });
    }
    Ok(index)
}

/// Validate that two operands of an elementwise operation have equal shapes
pub fn check_same_shape(op: &'static str, lhs: Shape, rhs: Shape) -> Result<()> {
    if lhs != rhs {
        return Err(MatrixError::DimensionMismatch { op, lhs, rhs });
    }
    Ok(())
}

/// Validate a matrix product, returning the shape of the result
pub fn check_product(lhs: Shape, rhs: Shape) -> Result<Shape> {
    if lhs.cols != rhs.rows {
        return Err(MatrixError::DimensionMismatch { op: "*", lhs, rhs });
    }
    Ok(Shape::new(lhs.rows, rhs.cols))
}

/// Validate a dot product of a `1 x n` row by an `n x 1` column, returning `n`
pub fn check_dot(lhs: Shape, rhs: Shape) -> Result<usize> {
    if lhs.rows != 1 || rhs.cols != 1 || lhs.cols != rhs.rows {
        return Err(MatrixError::DimensionMismatch {
            op: "dot",
            lhs,
            rhs,
        });
    }
    Ok(lhs.cols)
}

/// Validate the number of values supplied to a listed-value constructor
pub const fn check_value_count(shape: Shape, actual: usize) -> Result<()> {
    if actual != shape.len() {
        return Err(MatrixError::MalformedConstruction {
            expected: shape.len(),
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        let shape = Shape::new(2, 3);

        assert_eq!(check_index(shape, 1, 2), Ok(5));
        assert_eq!(check_index(shape, 0, 0), Ok(0));

        assert_eq!(
            check_index(shape, 2, 0),
            Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Row,
                index: 2,
                bound: 2
            })
        );
        assert_eq!(
            check_index(shape, 0, 3),
            Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: 3,
                bound: 3
            })
        );
    }

    #[test]
    fn test_check_linear() {
        let shape = Shape::new(2, 3);
        assert_eq!(check_linear(shape, 5), Ok(5));
        assert_eq!(
            check_linear(shape, 6),
            Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Linear,
                index: 6,
                bound: 6
            })
        );

        // Nothing is addressable in an empty matrix
        assert!(check_linear(Shape::new(0, 3), 0).is_err());
    }

    #[test]
    fn test_check_shapes() {
        let a = Shape::new(2, 3);
        let b = Shape::new(3, 2);

        assert_eq!(check_same_shape("+", a, a), Ok(()));
        assert_eq!(
            check_same_shape("+", a, b),
            Err(MatrixError::DimensionMismatch {
                op: "+",
                lhs: a,
                rhs: b
            })
        );

        assert_eq!(check_product(a, Shape::new(3, 4)), Ok(Shape::new(2, 4)));
        assert!(check_product(a, a).unwrap_err().is_dimension_mismatch());

        assert_eq!(check_dot(Shape::new(1, 4), Shape::new(4, 1)), Ok(4));
        assert!(check_dot(Shape::new(1, 4), Shape::new(3, 1)).is_err());
        assert!(check_dot(Shape::new(2, 2), Shape::new(2, 1)).is_err());
    }

    #[test]
    fn test_check_value_count() {
        assert_eq!(check_value_count(Shape::new(2, 2), 4), Ok(()));
        assert_eq!(
            check_value_count(Shape::new(2, 2), 3),
            Err(MatrixError::MalformedConstruction {
                expected: 4,
                actual: 3
            })
        );
    }
}
