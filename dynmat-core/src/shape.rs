//! Matrix shape and row-major index arithmetic

use core::fmt;

/// The axis an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Row,
    Column,
    /// A single row-major index over all slots
    Linear,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::Linear => "index",
        };
        f.write_str(name)
    }
}

/// Number of rows and columns of a matrix
///
/// All linear addressing is row-major: `(row, col)` maps to `col + row * cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of logical slots
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Shape with rows and columns swapped
    pub const fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Row-major linear index of `(row, col)`; does not check bounds
    pub const fn linear_index(&self, row: usize, col: usize) -> usize {
        col + row * self.cols
    }

    /// Inverse of [`Shape::linear_index`]
    ///
    /// Only meaningful for `index < self.len()`, which implies `cols > 0`.
    pub const fn position(&self, index: usize) -> (usize, usize) {
        let col = index % self.cols;
        ((index - col) / self.cols, col)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_index_round_trip() {
        let shape = Shape::new(2, 3);
        assert_eq!(shape.len(), 6);
        assert_eq!(shape.linear_index(0, 0), 0);
        assert_eq!(shape.linear_index(1, 2), 5);
        assert_eq!(shape.position(4), (1, 1));
        assert_eq!(shape.position(2), (0, 2));
    }

    #[test]
    fn test_transposed() {
        let shape = Shape::new(2, 5);
        assert_eq!(shape.transposed(), Shape::new(5, 2));
        assert!(!shape.is_square());
        assert!(Shape::new(3, 3).is_square());
        assert!(Shape::new(0, 4).is_empty());
    }
}
