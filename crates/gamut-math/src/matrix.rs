//! Color-space-tagged matrices.
//!
//! [`Matrix<S, D>`](Matrix) is a [`Mat3`] that converts values of type `S`
//! into values of type `D`. The tag is a zero-sized [`PhantomData`], so
//! misuse is a compile error and there is no runtime cost.
//!
//! # Composition
//!
//! ```rust
//! use gamut_core::Xyz;
//! use gamut_math::{compose, Matrix, Vec3};
//!
//! let double: Matrix<Vec3, Xyz> = Matrix::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 2.0, 0.0],
//!     [0.0, 0.0, 2.0],
//! ]);
//! let swap: Matrix<Xyz, Vec3> = Matrix::from_rows([
//!     [0.0, 1.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//!
//! let both: Matrix<Vec3, Vec3> = compose(&double, &swap);
//! assert_eq!(both.apply(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(4.0, 2.0, 6.0));
//! ```

use crate::{Mat3, Vec3};
use gamut_core::Vector3D;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Mul;

/// A 3x3 linear transform from values of type `S` to values of type `D`.
///
/// Applying `Matrix<A, B>` to an `A` yields a `B`; composing `Matrix<A, B>`
/// with `Matrix<B, C>` yields `Matrix<A, C>` such that
/// `m3.apply(x) == m2.apply(m1.apply(x))` up to rounding.
pub struct Matrix<S, D> {
    mat: Mat3,
    _spaces: PhantomData<fn(S) -> D>,
}

impl<S: Vector3D, D: Vector3D> Matrix<S, D> {
    /// Creates a tagged matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::from_mat3(Mat3::from_rows(rows))
    }

    /// Tags an untyped matrix.
    #[inline]
    pub const fn from_mat3(mat: Mat3) -> Self {
        Self {
            mat,
            _spaces: PhantomData,
        }
    }

    /// Returns the untyped coefficients.
    #[inline]
    pub const fn as_mat3(&self) -> &Mat3 {
        &self.mat
    }

    /// Converts a value of the source space into the target space.
    #[inline]
    pub fn apply(&self, value: S) -> D {
        D::from_array(self.mat.transform(Vec3::from_array(value.to_array())).to_array())
    }

    /// Returns the matrix that applies `self` and then `next`.
    ///
    /// This is the matrix product `next * self`.
    #[inline]
    pub fn then<E: Vector3D>(&self, next: &Matrix<D, E>) -> Matrix<S, E> {
        Matrix::from_mat3(next.mat.mul_mat(&self.mat))
    }

    /// Returns true if the coefficients are within `tolerance` of `other`'s.
    #[inline]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.mat.approx_eq(&other.mat, tolerance)
    }
}

/// Composes `first: A -> B` with `second: B -> C` into `A -> C`.
#[inline]
pub fn compose<A, B, C>(first: &Matrix<A, B>, second: &Matrix<B, C>) -> Matrix<A, C>
where
    A: Vector3D,
    B: Vector3D,
    C: Vector3D,
{
    first.then(second)
}

impl<S, D> Clone for Matrix<S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, D> Copy for Matrix<S, D> {}

impl<S, D> PartialEq for Matrix<S, D> {
    fn eq(&self, other: &Self) -> bool {
        self.mat == other.mat
    }
}

impl<S, D> fmt::Debug for Matrix<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("source", &std::any::type_name::<S>())
            .field("target", &std::any::type_name::<D>())
            .field("m", &self.mat.m)
            .finish()
    }
}

// Matrix<B, C> * Matrix<A, B> = Matrix<A, C>, in mathematical order.
impl<A: Vector3D, B: Vector3D, C: Vector3D> Mul<Matrix<A, B>> for Matrix<B, C> {
    type Output = Matrix<A, C>;

    #[inline]
    fn mul(self, rhs: Matrix<A, B>) -> Matrix<A, C> {
        rhs.then(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gamut_core::{Lab, Xyz};

    const A_TO_B: Matrix<Vec3, Xyz> = Matrix::from_rows([
        [0.4, 0.3, 0.2],
        [0.2, 0.7, 0.1],
        [0.0, 0.1, 0.9],
    ]);

    const B_TO_C: Matrix<Xyz, Lab> = Matrix::from_rows([
        [3.0, -1.5, -0.5],
        [-1.0, 1.9, 0.0],
        [0.0, -0.2, 1.1],
    ]);

    #[test]
    fn test_apply_tags_output() {
        let xyz: Xyz = A_TO_B.apply(Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(xyz.x, 0.9, epsilon = 1e-12);
        assert_relative_eq!(xyz.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(xyz.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_then_matches_sequential_apply() {
        let direct: Matrix<Vec3, Lab> = A_TO_B.then(&B_TO_C);
        let v = Vec3::new(0.3, -0.2, 0.8);
        let expected = B_TO_C.apply(A_TO_B.apply(v));
        let actual = direct.apply(v);
        assert_relative_eq!(actual.l, expected.l, epsilon = 1e-12);
        assert_relative_eq!(actual.a, expected.a, epsilon = 1e-12);
        assert_relative_eq!(actual.b, expected.b, epsilon = 1e-12);
    }

    #[test]
    fn test_mul_is_mathematical_order() {
        assert_eq!(B_TO_C * A_TO_B, compose(&A_TO_B, &B_TO_C));
    }

    #[test]
    fn test_compose_associative() {
        let c_to_d: Matrix<Lab, Vec3> = Matrix::from_mat3(Mat3::diagonal(0.5, 2.0, -1.0));
        let left = compose(&compose(&A_TO_B, &B_TO_C), &c_to_d);
        let right = compose(&A_TO_B, &compose(&B_TO_C, &c_to_d));
        assert!(left.approx_eq(&right, 1e-12));
    }

    #[test]
    fn test_debug_names_spaces() {
        let s = format!("{:?}", A_TO_B);
        assert!(s.contains("Xyz"));
    }
}
