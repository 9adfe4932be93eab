//! Interpolation utilities.
//!
//! Used by chroma-dampening policies to blend between a knee and a
//! gamut boundary.
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{inverse_lerp, lerp};
//!
//! let t = inverse_lerp(20.0, 40.0, 25.0);
//! assert_eq!(t, 0.25);
//! assert_eq!(lerp(20.0, 40.0, t), 25.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// A degenerate range yields `0.0`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-12 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}
