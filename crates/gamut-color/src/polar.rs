//! Cylindrical forms of Lab and Luv.
//!
//! Chroma is the distance from the neutral axis, hue the angle in radians,
//! normalized to `[0, 2π)`. Neutral colors (zero chroma) have hue `0`.

use gamut_core::{Lab, LchAb, LchUv, Luv};
use std::f64::consts::TAU;

/// Wraps an angle in radians into `[0, 2π)`.
///
/// # Example
///
/// ```rust
/// use gamut_color::normalize_hue;
/// use std::f64::consts::PI;
///
/// assert!((normalize_hue(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// assert_eq!(normalize_hue(2.0 * PI), 0.0);
/// ```
#[inline]
pub fn normalize_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if h >= TAU { 0.0 } else { h }
}

#[inline]
fn to_polar(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    if c == 0.0 {
        (0.0, 0.0)
    } else {
        (c, normalize_hue(b.atan2(a)))
    }
}

#[inline]
fn from_polar(c: f64, h: f64) -> (f64, f64) {
    let (sin, cos) = h.sin_cos();
    (c * cos, c * sin)
}

/// Converts Lab to LCh(ab).
#[inline]
pub fn lab_to_lch(lab: Lab) -> LchAb {
    let (c, h) = to_polar(lab.a, lab.b);
    LchAb::new(lab.l, c, h)
}

/// Converts LCh(ab) to Lab.
#[inline]
pub fn lch_to_lab(lch: LchAb) -> Lab {
    let (a, b) = from_polar(lch.c, lch.h);
    Lab::new(lch.l, a, b)
}

/// Converts Luv to LCh(uv).
#[inline]
pub fn luv_to_lch(luv: Luv) -> LchUv {
    let (c, h) = to_polar(luv.u, luv.v);
    LchUv::new(luv.l, c, h)
}

/// Converts LCh(uv) to Luv.
#[inline]
pub fn lch_to_luv(lch: LchUv) -> Luv {
    let (u, v) = from_polar(lch.c, lch.h);
    Luv::new(lch.l, u, v)
}
