//! # gamut-core
//!
//! Core types for color conversion and gamut mapping.
//!
//! This crate provides the foundational types used throughout gamut-rs:
//!
//! - [`Vector3D`], [`Vector2D`] - Fixed-size tuple capabilities used by the matrix engine
//! - [`Xyz`], [`Srgb`], [`Rec709`], [`Rec2020`] - Linear tristimulus and RGB tuples
//! - [`Lab`], [`Luv`], [`LchAb`], [`LchUv`] - Perceptual tuples and their polar forms
//! - [`Xy`], [`UvPrime`] - Chromaticity pairs
//! - [`ColorSpace`], [`ColorSpaceId`] - Compile-time and runtime color space identity
//! - [`Error`] - Error type for the few fallible lookups
//!
//! ## Design Philosophy
//!
//! Every color is a distinct type. A matrix tagged `Srgb -> Xyz` cannot be
//! applied to a `Rec2020` value, and composing two matrices only type-checks
//! when the inner spaces agree:
//!
//! ```ignore
//! let to_xyz: Matrix<Rec2020, Xyz> = Rec2020::TO_XYZ;
//! let to_709: Matrix<Xyz, Rec709> = Rec709::FROM_XYZ;
//! let direct: Matrix<Rec2020, Rec709> = to_xyz.then(&to_709);
//! // let bad = to_709.then(&to_xyz).then(&to_709); // Compile error!
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! gamut-core (this crate)
//!    ^
//!    |
//!    +-- gamut-math (Mat3, typed Matrix)
//!    +-- gamut-primaries (white points, RGB matrices)
//!    +-- gamut-color (perceptual conversions, gamut solver)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize color tuples and [`ColorSpaceId`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod vector;

pub use colorspace::*;
pub use error::*;
pub use vector::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gamut_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colorspace::{
        ColorSpace, ColorSpaceId, Lab, LchAb, LchUv, Luv, Rec2020, Rec709, Srgb, UvPrime, Xy,
        Xyz,
    };
    pub use crate::error::{Error, Result};
    pub use crate::vector::{Vector2D, Vector3D};
}
