//! CIE 1976 L\*a\*b\* conversions.
//!
//! XYZ is divided by the reference white, passed through a piecewise cube
//! root, and recombined into lightness and two opponent axes. The linear
//! segment below [`CIE_EPSILON`] keeps the function finite with a matching
//! slope at the break point, so black maps to `(0, 0, 0)`.
//!
//! # Example
//!
//! ```rust
//! use gamut_color::{lab_to_xyz, xyz_to_lab};
//! use gamut_primaries::D65;
//!
//! let lab = xyz_to_lab(D65.xyz, &D65);
//! assert!((lab.l - 100.0).abs() < 1e-9);
//!
//! let back = lab_to_xyz(lab, &D65);
//! assert!((back.x - D65.xyz.x).abs() < 1e-9);
//! ```

use gamut_core::{Lab, Xyz};
use gamut_primaries::WhitePoint;

/// CIE break-even point, `(6/29)^3`.
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// CIE slope of the linear segment, `(29/3)^3`.
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > CIE_EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / CIE_KAPPA
    }
}

/// Converts XYZ to Lab relative to `white`.
#[inline]
pub fn xyz_to_lab(xyz: Xyz, white: &WhitePoint) -> Lab {
    let fx = lab_f(xyz.x / white.xyz.x);
    let fy = lab_f(xyz.y / white.xyz.y);
    let fz = lab_f(xyz.z / white.xyz.z);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Converts Lab to XYZ relative to `white`.
#[inline]
pub fn lab_to_xyz(lab: Lab, white: &WhitePoint) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let yr = if lab.l > CIE_KAPPA * CIE_EPSILON {
        fy * fy * fy
    } else {
        lab.l / CIE_KAPPA
    };

    Xyz::new(
        lab_f_inv(fx) * white.xyz.x,
        yr * white.xyz.y,
        lab_f_inv(fz) * white.xyz.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gamut_primaries::{D50, D65, D65_10};

    #[test]
    fn test_constants() {
        assert_abs_diff_eq!(CIE_EPSILON, (6.0_f64 / 29.0).powi(3), epsilon = 1e-15);
        assert_abs_diff_eq!(CIE_KAPPA, (29.0_f64 / 3.0).powi(3), epsilon = 1e-9);
        // Both segments meet at the break point
        assert_abs_diff_eq!(
            CIE_EPSILON.cbrt(),
            (CIE_KAPPA * CIE_EPSILON + 16.0) / 116.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_white_is_fixed_point() {
        for white in [D65, D65_10, D50] {
            let lab = xyz_to_lab(white.xyz, &white);
            assert_abs_diff_eq!(lab.l, 100.0, epsilon = 1e-9);
            assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(lab.b, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_black() {
        let lab = xyz_to_lab(Xyz::default(), &D65);
        assert_abs_diff_eq!(lab.l, 0.0, epsilon = 1e-12);
        assert_eq!(lab.a, 0.0);
        assert_eq!(lab.b, 0.0);

        let xyz = lab_to_xyz(Lab::default(), &D65);
        assert_abs_diff_eq!(xyz.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(xyz.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(xyz.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_segment_roundtrip() {
        // Y well below the break point
        let xyz = Xyz::new(0.002, 0.003, 0.004);
        let back = lab_to_xyz(xyz_to_lab(xyz, &D65), &D65);
        assert_abs_diff_eq!(back.x, xyz.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, xyz.y, epsilon = 1e-12);
        assert_abs_diff_eq!(back.z, xyz.z, epsilon = 1e-12);
    }

    #[test]
    fn test_srgb_red() {
        let lab = xyz_to_lab(Xyz::new(0.412_390_799, 0.212_639_006, 0.019_330_819), &D65);
        assert_abs_diff_eq!(lab.l, 53.237_12, epsilon = 1e-4);
        assert_abs_diff_eq!(lab.a, 80.090_11, epsilon = 1e-4);
        assert_abs_diff_eq!(lab.b, 67.203_26, epsilon = 1e-4);
    }
}
