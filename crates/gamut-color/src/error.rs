//! Error types for color operations.
//!
//! Conversions themselves are infallible. Errors come from the gamut
//! solver, which reports a missing boundary as a value rather than
//! returning a misleading chroma, and from runtime lookups by name.

use thiserror::Error;

/// Outcome of a boundary search that did not locate a transition.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoundaryError {
    /// The bracket is empty, reversed, or not finite.
    #[error("invalid bracket [{low}, {high}]")]
    InvalidBracket {
        /// Lower end.
        low: f64,
        /// Upper end.
        high: f64,
    },

    /// Both ends of the bracket score the same side of the boundary.
    #[error("no gamut boundary in [{low}, {high}]")]
    NoSignChange {
        /// Lower end.
        low: f64,
        /// Upper end.
        high: f64,
    },

    /// The iteration budget ran out before the interval reached tolerance.
    #[error("boundary search did not converge after {iterations} iterations (interval [{low}, {high}])")]
    NotConverged {
        /// Iterations performed.
        iterations: u32,
        /// Last in-gamut end.
        low: f64,
        /// Last out-of-gamut end.
        high: f64,
    },
}

/// Result type for boundary searches.
pub type BoundaryResult<T> = Result<T, BoundaryError>;

/// Color operation error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Lookup of a color space or white point failed.
    #[error(transparent)]
    Core(#[from] gamut_core::Error),

    /// Gamut boundary search failed.
    #[error("gamut boundary: {0}")]
    Boundary(#[from] BoundaryError),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
