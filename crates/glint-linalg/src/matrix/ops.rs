use std::ops::{Index, IndexMut, Mul};

use crate::{approx::ApproxEq, traits::Number, Matrix, Tuple};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

/// Element-wise approximate equality.
impl<T, const N: usize> ApproxEq for Matrix<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

/// Matrix * Matrix.
impl<T, const N: usize> Mul for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const N: usize> Mul<T> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Tuple, treating the tuple as a column vector.
///
/// Only the 4x4 `f32` matrix can be applied to a [`Tuple`].
impl Mul<Tuple> for Matrix<f32, 4> {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        let row = |i: usize| {
            self[(i, 0)] * rhs.x + self[(i, 1)] * rhs.y + self[(i, 2)] * rhs.z + self[(i, 3)] * rhs.w
        };
        Tuple::new(row(0), row(1), row(2), row(3))
    }
}
