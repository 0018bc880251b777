//! Arithmetic over matrices
//!
//! The left operand is always an owned [`Matrix`]; the right operand can be
//! anything implementing [`MatrixRead`] (another matrix on any backend, a
//! view, or a fixed-size array). Results are freshly allocated on the left
//! operand's kind of backend and with its sparse eviction policy. Only the
//! `*_assign` forms mutate.
//!
//! Operators that can fail on shape return `Result`, so the `std::ops`
//! impls have `Output = Result<Matrix<B>>` and are used as `(&a + &b)?`.

use std::ops::{Add, Div, Mul, Sub};

use dynmat_core::{
    check_dot, check_product, check_same_shape, MatrixElement, MatrixError, MatrixRead, Result,
    Shape, StorageBackend, Zero,
};

use crate::matrix::Matrix;

impl<B: StorageBackend> Matrix<B> {
    /// Multiply every element by `factor`
    pub fn scale(&self, factor: B::Elem) -> Self {
        self.from_fn_like(self.shape, |index| factor * self.backend.get(index))
    }

    /// Divide every element by `divisor`
    ///
    /// Fails with `DivisionByZero` when `divisor` is zero, for floating-point
    /// elements as well as integers.
    pub fn try_div_scalar(&self, divisor: B::Elem) -> Result<Self> {
        if divisor == B::Elem::zero() {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.from_fn_like(self.shape, |index| self.backend.get(index) / divisor))
    }

    /// Divide every element by `divisor` in place
    ///
    /// Leaves `self` untouched when `divisor` is zero.
    pub fn try_div_assign_scalar(&mut self, divisor: B::Elem) -> Result<()> {
        *self = self.try_div_scalar(divisor)?;
        Ok(())
    }

    /// Elementwise sum; shapes must be identical
    pub fn try_add<R>(&self, rhs: &R) -> Result<Self>
    where
        R: MatrixRead<Element = B::Elem> + ?Sized,
    {
        check_same_shape("+", self.shape, rhs.shape())?;
        self.try_from_fn_like(self.shape, |index| {
            Ok(self.backend.get(index) + rhs.get_linear(index)?)
        })
    }

    /// Elementwise difference; shapes must be identical
    pub fn try_sub<R>(&self, rhs: &R) -> Result<Self>
    where
        R: MatrixRead<Element = B::Elem> + ?Sized,
    {
        check_same_shape("-", self.shape, rhs.shape())?;
        self.try_from_fn_like(self.shape, |index| {
            Ok(self.backend.get(index) - rhs.get_linear(index)?)
        })
    }

    /// Add `rhs` elementwise in place; shapes must be identical
    pub fn try_add_assign<R>(&mut self, rhs: &R) -> Result<()>
    where
        R: MatrixRead<Element = B::Elem> + ?Sized,
    {
        check_same_shape("+=", self.shape, rhs.shape())?;
        let zero = B::Elem::zero();
        for index in 0..self.shape.len() {
            let value = rhs.get_linear(index)?;
            if value != zero {
                *self.backend.get_mut(index) += value;
            }
        }
        Ok(())
    }

    /// Subtract `rhs` elementwise in place; shapes must be identical
    pub fn try_sub_assign<R>(&mut self, rhs: &R) -> Result<()>
    where
        R: MatrixRead<Element = B::Elem> + ?Sized,
    {
        check_same_shape("-=", self.shape, rhs.shape())?;
        let zero = B::Elem::zero();
        for index in 0..self.shape.len() {
            let value = rhs.get_linear(index)?;
            if value != zero {
                *self.backend.get_mut(index) -= value;
            }
        }
        Ok(())
    }

    /// Matrix product, accumulated in the element type
    ///
    /// Requires `self.ncols() == rhs.nrows()`; the result is
    /// `self.nrows() x rhs.ncols()`.
    pub fn matmul<R>(&self, rhs: &R) -> Result<Self>
    where
        R: MatrixRead<Element = B::Elem> + ?Sized,
    {
        let shape = check_product(self.shape, rhs.shape())?;
        self.try_from_fn_like(shape, |index| {
            let (row, col) = shape.position(index);
            let mut sum = B::Elem::zero();
            for k in 0..self.shape.cols {
                sum += self.backend.get(self.shape.linear_index(row, k)) * rhs.get(k, col)?;
            }
            Ok(sum)
        })
    }

    /// Matrix product with each sum accumulated in `f64` and converted back
    ///
    /// For integer elements this rounds toward zero when converting back.
    pub fn matmul_widened<R>(&self, rhs: &R) -> Result<Self>
    where
        R: MatrixRead<Element = B::Elem> + ?Sized,
    {
        let shape = check_product(self.shape, rhs.shape())?;
        self.try_from_fn_like(shape, |index| {
            let (row, col) = shape.position(index);
            let mut sum = 0.0f64;
            for k in 0..self.shape.cols {
                let lhs = self.backend.get(self.shape.linear_index(row, k));
                sum += lhs.to_f64() * rhs.get(k, col)?.to_f64();
            }
            Ok(B::Elem::from_f64(sum))
        })
    }

    /// Replace `self` with `self * rhs`; `rhs` must be `ncols x ncols`
    pub fn try_mul_assign<R>(&mut self, rhs: &R) -> Result<()>
    where
        R: MatrixRead<Element = B::Elem> + ?Sized,
    {
        let square = Shape::new(self.shape.cols, self.shape.cols);
        if rhs.shape() != square {
            return Err(MatrixError::DimensionMismatch {
                op: "*=",
                lhs: self.shape,
                rhs: rhs.shape(),
            });
        }
        *self = self.matmul(rhs)?;
        Ok(())
    }

    /// Dot product of a `1 x n` row with an `n x 1` column
    pub fn dot<R>(&self, rhs: &R) -> Result<B::Elem>
    where
        R: MatrixRead<Element = B::Elem> + ?Sized,
    {
        let n = check_dot(self.shape, rhs.shape())?;
        let mut sum = B::Elem::zero();
        for index in 0..n {
            sum += self.backend.get(index) * rhs.get_linear(index)?;
        }
        Ok(sum)
    }
}

impl<B, R> Add<&R> for &Matrix<B>
where
    B: StorageBackend,
    R: MatrixRead<Element = B::Elem>,
{
    type Output = Result<Matrix<B>>;

    fn add(self, rhs: &R) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<B, R> Sub<&R> for &Matrix<B>
where
    B: StorageBackend,
    R: MatrixRead<Element = B::Elem>,
{
    type Output = Result<Matrix<B>>;

    fn sub(self, rhs: &R) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<B, R> Mul<&R> for &Matrix<B>
where
    B: StorageBackend,
    R: MatrixRead<Element = B::Elem>,
{
    type Output = Result<Matrix<B>>;

    fn mul(self, rhs: &R) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<B: StorageBackend> Div<B::Elem> for &Matrix<B> {
    type Output = Result<Matrix<B>>;

    fn div(self, divisor: B::Elem) -> Self::Output {
        self.try_div_scalar(divisor)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {$(
        impl<B: StorageBackend<Elem = $t>> Mul<&Matrix<B>> for $t {
            type Output = Matrix<B>;

            fn mul(self, rhs: &Matrix<B>) -> Matrix<B> {
                rhs.scale(self)
            }
        }
    )*};
}

impl_scalar_mul!(f32, f64, i32, i64, u32, u64);

/// Scalar multiple `factor * m` on the backend of `m`
pub fn scale<B: StorageBackend>(factor: B::Elem, m: &Matrix<B>) -> Matrix<B> {
    m.scale(factor)
}

/// Dot product of a `1 x n` row with an `n x 1` column
pub fn dot<L, R, T>(lhs: &L, rhs: &R) -> Result<T>
where
    T: MatrixElement,
    L: MatrixRead<Element = T> + ?Sized,
    R: MatrixRead<Element = T> + ?Sized,
{
    let n = check_dot(lhs.shape(), rhs.shape())?;
    let mut sum = T::zero();
    for index in 0..n {
        sum += lhs.get_linear(index)? * rhs.get_linear(index)?;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SparseConfig;
    use crate::matrix::{DenseMatrix, SparseMatrix};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_square(rng: &mut StdRng, n: usize) -> DenseMatrix<f64> {
        DenseMatrix::from_values(n, n, (0..n * n).map(|_| rng.gen_range(-5.0..5.0))).unwrap()
    }

    #[test]
    fn test_scalar_multiplication() {
        let m = DenseMatrix::from([[1, 2], [3, 4]]);
        assert_eq!(3i32 * &m, DenseMatrix::from([[3, 6], [9, 12]]));
        assert_eq!(scale(2, &m), m.scale(2));

        let sparse = SparseMatrix::from([[0.0, 1.5], [0.0, 0.0]]);
        let scaled = 2.0f64 * &sparse;
        assert_eq!(scaled.get(0, 1), Ok(3.0));
        assert_eq!(scaled.stored_len(), 1);
    }

    #[test]
    fn test_scalar_division() {
        let mut m = DenseMatrix::from([[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!((&m / 2.0).unwrap(), DenseMatrix::from([[1.0, 2.0], [3.0, 4.0]]));
        m.try_div_assign_scalar(4.0).unwrap();
        assert_eq!(m.get(1, 1), Ok(2.0));
    }

    #[test]
    fn test_division_by_zero() {
        let mut m = DenseMatrix::from([[1, 2]]);
        assert_eq!(m.try_div_scalar(0).unwrap_err(), MatrixError::DivisionByZero);
        assert_eq!((&m / 0).unwrap_err(), MatrixError::DivisionByZero);
        assert!(m.try_div_assign_scalar(0).is_err());
        assert_eq!(m, DenseMatrix::from([[1, 2]]));

        let floats = SparseMatrix::from([[1.0, 0.0]]);
        assert!(floats.try_div_scalar(0.0).is_err());
    }

    #[test]
    fn test_in_place_ops_keep_sparse_policy() {
        let config = SparseConfig::with_eviction_percent(50);
        let mut m = SparseMatrix::<f64>::with_config(10, 10, &config);
        m.set(2, 3, 8.0).unwrap();
        assert_eq!(m.backend().eviction_threshold(), 50);

        m.try_div_assign_scalar(2.0).unwrap();
        assert_eq!(m.backend().eviction_threshold(), 50);
        assert_eq!(m.get(2, 3), Ok(4.0));

        let mut small = SparseMatrix::<i32>::with_config(2, 2, &config);
        small.set(0, 1, 3).unwrap();
        assert_eq!(small.backend().eviction_threshold(), 2);
        small.try_mul_assign(&[[2, 0], [0, 2]]).unwrap();
        assert_eq!(small.backend().eviction_threshold(), 2);
        assert_eq!(small.get(0, 1), Ok(6));

        let sum = small.try_add(&[[1, 0], [0, 0]]).unwrap();
        assert_eq!(sum.backend().config(), &config);
        assert_eq!(small.scale(2).backend().config(), &config);
    }

    #[test]
    fn test_add_sub() {
        let a = DenseMatrix::from([[1, 2, 3], [4, 5, 6]]);
        let b = SparseMatrix::from([[0, 0, 1], [1, 0, 0]]);

        let sum = (&a + &b).unwrap();
        assert_eq!(sum, DenseMatrix::from([[1, 2, 4], [5, 5, 6]]));
        assert_eq!((&sum - &b).unwrap(), a);
        assert_eq!(b.try_add(&a).unwrap(), sum);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = DenseMatrix::<f64>::new(2, 3);
        let b = DenseMatrix::<f64>::new(3, 2);
        assert_eq!(
            (&a + &b).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: "+",
                lhs: Shape::new(2, 3),
                rhs: Shape::new(3, 2)
            }
        );
        assert!((&a - &b).unwrap_err().is_dimension_mismatch());
    }

    #[test]
    fn test_add_sub_inverse_random() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 1..6 {
            let a = random_square(&mut rng, n);
            let b = random_square(&mut rng, n);
            let back = (&(&a + &b).unwrap() - &b).unwrap();
            for (x, y) in back.iter().zip(a.iter()) {
                assert_relative_eq!(x, y, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_compound_add_sub() {
        let mut m = SparseMatrix::from([[1, 0], [0, 1]]);
        m.try_add_assign(&[[0, 2], [0, -1]]).unwrap();
        assert_eq!(m, DenseMatrix::from([[1, 2], [0, 0]]));
        m.try_sub_assign(&[[1, 0], [0, 0]]).unwrap();
        assert_eq!(m.get(0, 0), Ok(0));
        assert!(m.try_add_assign(&[[1, 2, 3]]).is_err());
    }

    #[test]
    fn test_matmul_literal() {
        let a = DenseMatrix::from([[1, 2, 3], [4, 5, 6]]);
        let b = DenseMatrix::from([[7, 8, 9, 10], [11, 12, 13, 14], [15, 16, 17, 18]]);

        let product = (&a * &b).unwrap();
        assert_eq!(product.shape(), Shape::new(2, 4));
        assert_eq!(
            product,
            DenseMatrix::from([[74, 80, 86, 92], [173, 188, 203, 218]])
        );

        let sparse_b: SparseMatrix<i32> = SparseMatrix::from_rows(&[
            [7, 8, 9, 10],
            [11, 12, 13, 14],
            [15, 16, 17, 18],
        ]);
        assert_eq!(a.matmul(&sparse_b).unwrap(), product);
        assert_eq!(a.matmul_widened(&b).unwrap(), product);
    }

    #[test]
    fn test_matmul_static_rhs() {
        let a = SparseMatrix::from([[1.0, 0.0], [0.0, 2.0]]);
        let product = a.matmul(&[[3.0], [4.0]]).unwrap();
        assert_eq!(product, DenseMatrix::from([[3.0], [8.0]]));
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = DenseMatrix::<i32>::new(2, 3);
        let b = DenseMatrix::<i32>::new(2, 3);
        assert_eq!(
            a.matmul(&b).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: "*",
                lhs: Shape::new(2, 3),
                rhs: Shape::new(2, 3)
            }
        );
    }

    #[test]
    fn test_identity_products_random() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in 1..7 {
            let m = random_square(&mut rng, n);
            let id = DenseMatrix::<f64>::identity(n, n);
            assert_eq!((&id * &m).unwrap(), m);
            assert_eq!((&m * &id).unwrap(), m);

            let sparse_id = SparseMatrix::<f64>::identity(n, n);
            assert_eq!(m.matmul(&sparse_id).unwrap(), m);
        }
    }

    #[test]
    fn test_matmul_accumulation_modes() {
        // native accumulation keeps integer products exact
        let big = (1i64 << 53) + 1;
        let a = DenseMatrix::from([[big, 1]]);
        let b = DenseMatrix::from([[1], [0]]);
        assert_eq!(a.matmul(&b).unwrap().get(0, 0), Ok(big));
        assert_eq!(a.matmul_widened(&b).unwrap().get(0, 0), Ok(big - 1));

        let f = DenseMatrix::from([[0.5f32, 0.25]]);
        let g = DenseMatrix::from([[2.0f32], [4.0]]);
        assert_relative_eq!(f.matmul_widened(&g).unwrap().get(0, 0).unwrap(), 2.0);
    }

    #[test]
    fn test_mul_assign() {
        let mut m = DenseMatrix::from([[1, 2], [3, 4]]);
        m.try_mul_assign(&[[0, 1], [1, 0]]).unwrap();
        assert_eq!(m, DenseMatrix::from([[2, 1], [4, 3]]));

        let mut wide = DenseMatrix::<i32>::new(2, 3);
        assert!(matches!(
            wide.try_mul_assign(&DenseMatrix::<i32>::new(3, 2)),
            Err(MatrixError::DimensionMismatch { op: "*=", .. })
        ));
    }

    #[test]
    fn test_dot() {
        let row = DenseMatrix::from([[1.0, 2.0, 3.0]]);
        let col = SparseMatrix::from([[4.0], [0.0], [6.0]]);
        assert_eq!(row.dot(&col), Ok(22.0));
        assert_eq!(dot(&row, &col), Ok(22.0));
        assert_eq!(dot(&[[1, 1]], &[[2], [3]]), Ok(5));

        assert!(row.dot(&row).unwrap_err().is_dimension_mismatch());
        assert!(col.dot(&row).is_err());
    }
}
