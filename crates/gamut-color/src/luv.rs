//! CIE 1976 L\*u\*v\* conversions.
//!
//! Lightness uses the same piecewise curve as Lab. Chroma axes come from
//! the u'v' chromaticity of the sample, measured from the white point's own
//! u'v' and scaled by lightness.

use crate::{CIE_EPSILON, CIE_KAPPA};
use gamut_core::{Luv, Xyz};
use gamut_primaries::WhitePoint;

/// Converts XYZ to Luv relative to `white`.
///
/// Black (and any sample with no chromaticity) maps to zero `u` and `v`.
#[inline]
pub fn xyz_to_luv(xyz: Xyz, white: &WhitePoint) -> Luv {
    let yr = xyz.y / white.xyz.y;
    let l = if yr > CIE_EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        CIE_KAPPA * yr
    };

    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if l == 0.0 || denom.abs() < 1e-12 {
        return Luv::new(l, 0.0, 0.0);
    }

    let u_prime = 4.0 * xyz.x / denom;
    let v_prime = 9.0 * xyz.y / denom;

    Luv::new(
        l,
        13.0 * l * (u_prime - white.uv.u),
        13.0 * l * (v_prime - white.uv.v),
    )
}

/// Converts Luv to XYZ relative to `white`.
///
/// Non-positive lightness is black.
#[inline]
pub fn luv_to_xyz(luv: Luv, white: &WhitePoint) -> Xyz {
    if luv.l <= 0.0 {
        return Xyz::default();
    }

    let u_prime = luv.u / (13.0 * luv.l) + white.uv.u;
    let v_prime = luv.v / (13.0 * luv.l) + white.uv.v;

    let yr = if luv.l > CIE_KAPPA * CIE_EPSILON {
        let t = (luv.l + 16.0) / 116.0;
        t * t * t
    } else {
        luv.l / CIE_KAPPA
    };
    let y = yr * white.xyz.y;

    Xyz::new(
        y * 9.0 * u_prime / (4.0 * v_prime),
        y,
        y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime),
    )
}
