//! Fixed-size numeric tuple capabilities.
//!
//! [`Vector3D`] and [`Vector2D`] let generic matrix code treat every color
//! tuple uniformly: construct from components, construct from an ordered
//! array, and decompose back into an array.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{Vector3D, Xyz};
//!
//! let xyz = Xyz::from_array([0.25, 0.5, 0.75]);
//! assert_eq!(xyz.to_array(), [0.25, 0.5, 0.75]);
//! ```

use std::fmt;

/// A value made of exactly three ordered `f64` components.
///
/// Implementations are plain `Copy` values; every transform produces a new
/// tuple rather than mutating one in place.
pub trait Vector3D: Copy + PartialEq + fmt::Debug {
    /// Creates a value from its three components, in order.
    fn from_components(a: f64, b: f64, c: f64) -> Self;

    /// Returns the components as an ordered array.
    fn to_array(self) -> [f64; 3];

    /// Creates a value from an ordered array.
    #[inline]
    fn from_array(array: [f64; 3]) -> Self {
        let [a, b, c] = array;
        Self::from_components(a, b, c)
    }

    /// Returns true if every component is finite.
    #[inline]
    fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

/// A value made of exactly two ordered `f64` components.
///
/// Used by chromaticity coordinates such as `xy` and `u'v'`.
pub trait Vector2D: Copy + PartialEq + fmt::Debug {
    /// Creates a value from its two components, in order.
    fn from_components(a: f64, b: f64) -> Self;

    /// Returns the components as an ordered array.
    fn to_array(self) -> [f64; 2];

    /// Creates a value from an ordered array.
    #[inline]
    fn from_array(array: [f64; 2]) -> Self {
        let [a, b] = array;
        Self::from_components(a, b)
    }
}

/// Implements [`Vector3D`] for a struct with three named `f64` fields.
#[macro_export]
macro_rules! impl_vector3d {
    ($ty:ty, $a:ident, $b:ident, $c:ident) => {
        impl $crate::Vector3D for $ty {
            #[inline]
            fn from_components($a: f64, $b: f64, $c: f64) -> Self {
                Self { $a, $b, $c }
            }

            #[inline]
            fn to_array(self) -> [f64; 3] {
                [self.$a, self.$b, self.$c]
            }
        }

        impl From<[f64; 3]> for $ty {
            #[inline]
            fn from(array: [f64; 3]) -> Self {
                <Self as $crate::Vector3D>::from_array(array)
            }
        }

        impl From<$ty> for [f64; 3] {
            #[inline]
            fn from(value: $ty) -> Self {
                $crate::Vector3D::to_array(value)
            }
        }
    };
}

/// Implements [`Vector2D`] for a struct with two named `f64` fields.
#[macro_export]
macro_rules! impl_vector2d {
    ($ty:ty, $a:ident, $b:ident) => {
        impl $crate::Vector2D for $ty {
            #[inline]
            fn from_components($a: f64, $b: f64) -> Self {
                Self { $a, $b }
            }

            #[inline]
            fn to_array(self) -> [f64; 2] {
                [self.$a, self.$b]
            }
        }
    };
}
