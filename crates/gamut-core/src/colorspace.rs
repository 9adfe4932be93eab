//! Color tuple types and color space identity.
//!
//! Each color space is a concrete tuple type implementing [`Vector3D`] and
//! [`ColorSpace`]. Conversions between them live in `gamut-primaries`
//! (linear RGB <-> XYZ) and `gamut-color` (Lab, Luv and polar forms).
//!
//! # Supported Color Spaces
//!
//! ## Tristimulus
//! - [`Xyz`] - CIE 1931 XYZ, normalized so the reference white has `Y = 1`
//!
//! ## Linear RGB (gamut = unit cube)
//! - [`Srgb`] - sRGB primaries, D65
//! - [`Rec709`] - ITU-R BT.709 primaries (same as sRGB), D65
//! - [`Rec2020`] - ITU-R BT.2020 wide gamut primaries, D65
//!
//! ## Perceptual
//! - [`Lab`] - CIE 1976 L\*a\*b\*
//! - [`Luv`] - CIE 1976 L\*u\*v\*
//! - [`LchAb`] - Polar form of Lab (hue in radians)
//! - [`LchUv`] - Polar form of Luv (hue in radians)
//!
//! ## Chromaticity
//! - [`Xy`] - CIE 1931 xy
//! - [`UvPrime`] - CIE 1976 u'v'
//!
//! # Usage
//!
//! ```
//! use gamut_core::{ColorSpace, ColorSpaceId, Srgb};
//!
//! assert_eq!(Srgb::NAME, "sRGB");
//! assert_eq!("rec.2020".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Rec2020);
//! ```

use crate::error::{Error, Result};
use crate::{impl_vector2d, impl_vector3d, Vector3D};
use std::fmt;
use std::str::FromStr;

/// Compile-time identity of a 3-component color tuple type.
pub trait ColorSpace: Vector3D {
    /// Human-readable name.
    const NAME: &'static str;

    /// Runtime identifier of this space.
    const ID: ColorSpaceId;
}

// ============================================================================
// Runtime Identity
// ============================================================================

/// Runtime identifier for the supported color spaces.
///
/// Used where the space is only known at runtime, e.g. from command line
/// arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpaceId {
    /// CIE XYZ.
    Xyz,
    /// Linear sRGB.
    Srgb,
    /// Linear Rec.709.
    Rec709,
    /// Linear Rec.2020.
    Rec2020,
    /// CIE L\*a\*b\*.
    Lab,
    /// CIE L\*u\*v\*.
    Luv,
    /// Polar L\*a\*b\*.
    LchAb,
    /// Polar L\*u\*v\*.
    LchUv,
}

impl ColorSpaceId {
    /// All supported spaces.
    pub const ALL: [Self; 8] = [
        Self::Xyz,
        Self::Srgb,
        Self::Rec709,
        Self::Rec2020,
        Self::Lab,
        Self::Luv,
        Self::LchAb,
        Self::LchUv,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xyz => Xyz::NAME,
            Self::Srgb => Srgb::NAME,
            Self::Rec709 => Rec709::NAME,
            Self::Rec2020 => Rec2020::NAME,
            Self::Lab => Lab::NAME,
            Self::Luv => Luv::NAME,
            Self::LchAb => LchAb::NAME,
            Self::LchUv => LchUv::NAME,
        }
    }

    /// Whether this is a bounded linear RGB space.
    pub const fn is_rgb(self) -> bool {
        matches!(self, Self::Srgb | Self::Rec709 | Self::Rec2020)
    }

    /// Whether this is a polar (lightness, chroma, hue) space.
    pub const fn is_polar(self) -> bool {
        matches!(self, Self::LchAb | Self::LchUv)
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '.' | ' ' | '(' | ')'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "xyz" | "ciexyz" => Ok(Self::Xyz),
            "srgb" | "linearsrgb" => Ok(Self::Srgb),
            "rec709" | "bt709" => Ok(Self::Rec709),
            "rec2020" | "bt2020" => Ok(Self::Rec2020),
            "lab" | "cielab" => Ok(Self::Lab),
            "luv" | "cieluv" => Ok(Self::Luv),
            "lchab" | "lch" => Ok(Self::LchAb),
            "lchuv" | "hcl" => Ok(Self::LchUv),
            _ => Err(Error::UnknownColorSpace(s.to_owned())),
        }
    }
}

// ============================================================================
// Tristimulus
// ============================================================================

/// CIE 1931 XYZ tristimulus values.
///
/// Normalized so that the reference white has `Y = 1`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X component
    pub x: f64,
    /// Y component (luminance)
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Xyz {
    /// Creates a new XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl_vector3d!(Xyz, x, y, z);

impl ColorSpace for Xyz {
    const NAME: &'static str = "XYZ";
    const ID: ColorSpaceId = ColorSpaceId::Xyz;
}

// ============================================================================
// Linear RGB
// ============================================================================

/// Linear sRGB.
///
/// # Characteristics
/// - **Primaries**: Rec.709 / sRGB
/// - **White Point**: D65
/// - **Transfer**: none (linear light)
/// - **Gamut**: components in `[0, 1]`
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Srgb {
    /// Creates a new linear sRGB value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl_vector3d!(Srgb, r, g, b);

impl ColorSpace for Srgb {
    const NAME: &'static str = "sRGB";
    const ID: ColorSpaceId = ColorSpaceId::Srgb;
}

/// Linear Rec.709.
///
/// Same primaries and white as [`Srgb`], kept as a distinct type so that
/// broadcast and web pipelines cannot be mixed up silently.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rec709 {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Rec709 {
    /// Creates a new linear Rec.709 value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl_vector3d!(Rec709, r, g, b);

impl ColorSpace for Rec709 {
    const NAME: &'static str = "Rec.709";
    const ID: ColorSpaceId = ColorSpaceId::Rec709;
}

/// Linear Rec.2020.
///
/// # Characteristics
/// - **Primaries**: Rec.2020 (wide gamut)
/// - **White Point**: D65
/// - **Transfer**: none (linear light)
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rec2020 {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Rec2020 {
    /// Creates a new linear Rec.2020 value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl_vector3d!(Rec2020, r, g, b);

impl ColorSpace for Rec2020 {
    const NAME: &'static str = "Rec.2020";
    const ID: ColorSpaceId = ColorSpaceId::Rec2020;
}

// ============================================================================
// Perceptual
// ============================================================================

/// CIE 1976 L\*a\*b\*.
///
/// `l` is in `[0, 100]` for physical colors; `a` and `b` are unbounded.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red opponent axis
    pub a: f64,
    /// Blue-yellow opponent axis
    pub b: f64,
}

impl Lab {
    /// Creates a new Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl_vector3d!(Lab, l, a, b);

impl ColorSpace for Lab {
    const NAME: &'static str = "Lab";
    const ID: ColorSpaceId = ColorSpaceId::Lab;
}

/// CIE 1976 L\*u\*v\*.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Luv {
    /// Lightness
    pub l: f64,
    /// u\* chroma axis
    pub u: f64,
    /// v\* chroma axis
    pub v: f64,
}

impl Luv {
    /// Creates a new Luv value.
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }
}

impl_vector3d!(Luv, l, u, v);

impl ColorSpace for Luv {
    const NAME: &'static str = "Luv";
    const ID: ColorSpaceId = ColorSpaceId::Luv;
}

/// Polar form of [`Lab`]: lightness, chroma, hue.
///
/// Hue is in radians, normalized to `[0, 2π)`. It is `0` when chroma is `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LchAb {
    /// Lightness
    pub l: f64,
    /// Chroma (distance from the neutral axis)
    pub c: f64,
    /// Hue angle in radians
    pub h: f64,
}

impl LchAb {
    /// Creates a new LCh(ab) value.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

impl_vector3d!(LchAb, l, c, h);

impl ColorSpace for LchAb {
    const NAME: &'static str = "LCh(ab)";
    const ID: ColorSpaceId = ColorSpaceId::LchAb;
}

/// Polar form of [`Luv`]: lightness, chroma, hue.
///
/// Hue is in radians, normalized to `[0, 2π)`. It is `0` when chroma is `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LchUv {
    /// Lightness
    pub l: f64,
    /// Chroma (distance from the neutral axis)
    pub c: f64,
    /// Hue angle in radians
    pub h: f64,
}

impl LchUv {
    /// Creates a new LCh(uv) value.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

impl_vector3d!(LchUv, l, c, h);

impl ColorSpace for LchUv {
    const NAME: &'static str = "LCh(uv)";
    const ID: ColorSpaceId = ColorSpaceId::LchUv;
}

// ============================================================================
// Chromaticity
// ============================================================================

/// CIE 1931 xy chromaticity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xy {
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
}

impl Xy {
    /// Creates a new xy pair.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl_vector2d!(Xy, x, y);

/// CIE 1976 u'v' chromaticity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UvPrime {
    /// u' chromaticity
    pub u: f64,
    /// v' chromaticity
    pub v: f64,
}

impl UvPrime {
    /// Creates a new u'v' pair.
    #[inline]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

impl_vector2d!(UvPrime, u, v);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorspace_names() {
        assert_eq!(Srgb::NAME, "sRGB");
        assert_eq!(Rec2020::NAME, "Rec.2020");
        assert_eq!(LchUv::NAME, "LCh(uv)");
        assert_eq!(ColorSpaceId::Lab.to_string(), "Lab");
    }

    #[test]
    fn test_id_parsing() {
        assert_eq!("sRGB".parse::<ColorSpaceId>(), Ok(ColorSpaceId::Srgb));
        assert_eq!("Rec.2020".parse::<ColorSpaceId>(), Ok(ColorSpaceId::Rec2020));
        assert_eq!("bt-709".parse::<ColorSpaceId>(), Ok(ColorSpaceId::Rec709));
        assert_eq!("LCh_uv".parse::<ColorSpaceId>(), Ok(ColorSpaceId::LchUv));
        assert_eq!("lch".parse::<ColorSpaceId>(), Ok(ColorSpaceId::LchAb));
        assert!("cmyk".parse::<ColorSpaceId>().is_err());
    }

    #[test]
    fn test_id_roundtrips_through_name() {
        for id in ColorSpaceId::ALL {
            assert_eq!(id.name().parse::<ColorSpaceId>(), Ok(id), "{}", id);
        }
    }

    #[test]
    fn test_id_classification() {
        assert!(ColorSpaceId::Srgb.is_rgb());
        assert!(!ColorSpaceId::Lab.is_rgb());
        assert!(ColorSpaceId::LchAb.is_polar());
        assert!(!ColorSpaceId::Luv.is_polar());
        assert_eq!(Rec709::ID, ColorSpaceId::Rec709);
    }
}
