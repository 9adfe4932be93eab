//! # gamut-primaries
//!
//! White points, RGB primaries, and RGB-XYZ matrices.
//!
//! This crate binds the linear RGB tuple types from `gamut-core` to their
//! conversion matrices, and exposes the reference white points used by the
//! perceptual conversions.
//!
//! # Baked vs Derived Matrices
//!
//! The built-in spaces ([`Srgb`](gamut_core::Srgb),
//! [`Rec709`](gamut_core::Rec709), [`Rec2020`](gamut_core::Rec2020)) carry
//! both directions as literal tables through [`RgbSpace`]. For custom
//! primaries, [`rgb_to_xyz_matrix`] derives the matrix at runtime:
//!
//! ```rust
//! use gamut_core::Xy;
//! use gamut_primaries::{rgb_to_xyz_matrix, Primaries, D65};
//!
//! let display_p3 = Primaries {
//!     r: Xy::new(0.680, 0.320),
//!     g: Xy::new(0.265, 0.690),
//!     b: Xy::new(0.150, 0.060),
//!     white: D65,
//!     name: "Display P3",
//! };
//! let m = rgb_to_xyz_matrix(&display_p3).unwrap();
//! assert!((m.m[1].iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Included Color Spaces
//!
//! | Color Space | Gamut Size | Primary Use |
//! |-------------|------------|-------------|
//! | sRGB / Rec.709 | Small | Web, HDTV |
//! | Rec.2020 | Large | UHDTV, HDR |
//!
//! # Dependencies
//!
//! - [`gamut-core`] - Color tuples and errors
//! - [`gamut-math`] - Matrix operations
//!
//! # Used By
//!
//! - `gamut-color` - Perceptual conversions and the gamut solver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod rgb;
mod white;

pub use rgb::*;
pub use white::*;

use gamut_core::{ColorSpaceId, Error, Result, Xy};
use gamut_math::Mat3;

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors and white point, all as
/// CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary chromaticity
    pub r: Xy,
    /// Green primary chromaticity
    pub g: Xy,
    /// Blue primary chromaticity
    pub b: Xy,
    /// Reference white
    pub white: WhitePoint,
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// Returns the primaries of a built-in RGB space, or `None` for
    /// non-RGB ids.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_core::ColorSpaceId;
    /// use gamut_primaries::Primaries;
    ///
    /// assert_eq!(Primaries::from_id(ColorSpaceId::Rec2020).unwrap().name, "Rec.2020");
    /// assert!(Primaries::from_id(ColorSpaceId::Lab).is_none());
    /// ```
    pub const fn from_id(id: ColorSpaceId) -> Option<Self> {
        match id {
            ColorSpaceId::Srgb => Some(SRGB),
            ColorSpaceId::Rec709 => Some(REC709),
            ColorSpaceId::Rec2020 => Some(REC2020),
            _ => None,
        }
    }
}

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// sRGB primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: Xy::new(0.6400, 0.3300),
    g: Xy::new(0.3000, 0.6000),
    b: Xy::new(0.1500, 0.0600),
    white: D65,
    name: "sRGB",
};

/// Rec.709 primaries (identical to sRGB).
pub const REC709: Primaries = Primaries {
    name: "Rec.709",
    ..SRGB
};

/// Rec.2020 primaries (D65 white point).
///
/// Ultra HD TV color space with a much wider gamut than Rec.709.
pub const REC2020: Primaries = Primaries {
    r: Xy::new(0.7080, 0.2920),
    g: Xy::new(0.1700, 0.7970),
    b: Xy::new(0.1310, 0.0460),
    white: D65,
    name: "Rec.2020",
};

// ============================================================================
// Matrix Derivation
// ============================================================================

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white maps to the white point
/// 3. Multiply primaries by scaling factors
///
/// # Errors
///
/// [`Error::DegeneratePrimaries`] if the primaries are collinear (or one has
/// `y = 0`), which leaves the primary matrix singular.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Result<Mat3> {
    let r_xyz = xy_to_xyz(primaries.r);
    let g_xyz = xy_to_xyz(primaries.g);
    let b_xyz = xy_to_xyz(primaries.b);

    let m = Mat3::from_cols([r_xyz.into(), g_xyz.into(), b_xyz.into()]);

    // S = M^-1 * W
    let m_inv = m
        .inverse()
        .ok_or_else(|| Error::DegeneratePrimaries(primaries.name.to_owned()))?;
    let s = m_inv * gamut_math::Vec3::from_array(primaries.white.xyz.into());

    Ok(m.mul_mat(&Mat3::diagonal(s.x, s.y, s.z)))
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Result<Mat3> {
    rgb_to_xyz_matrix(primaries)?
        .inverse()
        .ok_or_else(|| Error::DegeneratePrimaries(primaries.name.to_owned()))
}

/// Computes a matrix converting from one RGB space to another through XYZ.
///
/// No chromatic adaptation is applied; both sets of primaries are expected to
/// share a white point.
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Result<Mat3> {
    let src_to_xyz = rgb_to_xyz_matrix(src)?;
    let xyz_to_dst = xyz_to_rgb_matrix(dst)?;
    Ok(xyz_to_dst * src_to_xyz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamut_math::Vec3;

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();
        assert!((m.m[0][0] - 0.4123908).abs() < 1e-6);
        assert!((m.m[1][0] - 0.2126390).abs() < 1e-6);
    }

    #[test]
    fn test_white_point() {
        for p in [SRGB, REC709, REC2020] {
            let white = rgb_to_xyz_matrix(&p).unwrap() * Vec3::ONE;
            assert!((white.y - 1.0).abs() < 1e-12, "{} white Y = {}", p.name, white.y);
            assert!((white.x - p.white.xyz.x).abs() < 1e-12);
            assert!((white.z - p.white.xyz.z).abs() < 1e-12);
        }
    }

    #[test]
    fn test_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&REC2020).unwrap();
        let to_rgb = xyz_to_rgb_matrix(&REC2020).unwrap();

        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = to_rgb * (to_xyz * rgb);
        assert!((rgb - back).length() < 1e-12);
    }

    #[test]
    fn test_rgb_to_rgb() {
        let m = rgb_to_rgb_matrix(&SRGB, &REC709).unwrap();
        assert!(m.approx_eq(&Mat3::IDENTITY, 1e-12));

        let wide = rgb_to_rgb_matrix(&SRGB, &REC2020).unwrap();
        assert!((wide.m[0][0] - 0.6274).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_primaries() {
        let collinear = Primaries {
            r: Xy::new(0.2, 0.3),
            g: Xy::new(0.3, 0.3),
            b: Xy::new(0.4, 0.3),
            white: D65,
            name: "Collinear",
        };
        assert_eq!(
            rgb_to_xyz_matrix(&collinear),
            Err(Error::DegeneratePrimaries("Collinear".into()))
        );
        assert!(rgb_to_rgb_matrix(&SRGB, &collinear).is_err());
    }

    #[test]
    fn test_from_id() {
        for id in ColorSpaceId::ALL {
            assert_eq!(Primaries::from_id(id).is_some(), id.is_rgb());
        }
    }
}
