//! # gamut-math
//!
//! Math utilities for color conversion.
//!
//! This crate provides the linear-algebra primitives behind every conversion:
//!
//! - [`Mat3`] - Untyped 3x3 matrices (apply, product, inverse)
//! - [`Vec3`] - Untyped 3D vectors
//! - [`Matrix`] - 3x3 matrices tagged with a source and target color space
//! - Interpolation utilities ([`lerp`], [`inverse_lerp`])
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! [`Matrix<S, D>`](Matrix) adds a zero-sized tag so that applying and
//! composing matrices is checked at compile time.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{Srgb, Xyz};
//! use gamut_math::Matrix;
//!
//! let to_xyz: Matrix<Srgb, Xyz> = Matrix::from_rows([
//!     [0.4123908, 0.3575843, 0.1804808],
//!     [0.2126390, 0.7151687, 0.0721923],
//!     [0.0193308, 0.1191948, 0.9505322],
//! ]);
//!
//! let xyz: Xyz = to_xyz.apply(Srgb::new(1.0, 1.0, 1.0));
//! assert!((xyz.y - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`gamut-core`] - Vector capabilities and color tuples
//! - [`glam`] - Interop with `DMat3`/`DVec3`
//!
//! # Used By
//!
//! - `gamut-primaries` - RGB/XYZ matrix derivation
//! - `gamut-color` - Color space conversions and the gamut solver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod matrix;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use matrix::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
