//! Error types for gamut-core operations.
//!
//! Conversions between color tuples are total functions and never fail.
//! The errors here cover lookups by name and derivation of matrices from
//! user-supplied primaries.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{ColorSpaceId, Error};
//!
//! let err = "cmyk".parse::<ColorSpaceId>().unwrap_err();
//! assert!(matches!(err, Error::UnknownColorSpace(_)));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::colorspace::ColorSpaceId`] - Parsing from strings
//! - `gamut-primaries` - White point lookup, matrix derivation
//! - `gamut-cli` - Argument parsing

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by lookups and matrix derivation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The name does not denote a supported color space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_core::Error;
    ///
    /// let err = Error::UnknownColorSpace("cmyk".into());
    /// assert!(err.to_string().contains("cmyk"));
    /// ```
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// The name does not denote a known reference white.
    #[error("unknown white point: {0}")]
    UnknownWhitePoint(String),

    /// The primaries are collinear, so no RGB to XYZ matrix exists.
    #[error("primaries of {0} are degenerate (singular matrix)")]
    DegeneratePrimaries(String),
}
