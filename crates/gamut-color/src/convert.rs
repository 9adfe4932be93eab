//! Conversions between any two color spaces through XYZ.
//!
//! [`Convert`] gives every 3-component color type a path to and from
//! white-relative XYZ. Linear RGB types use their fixed D65 matrices and
//! ignore the white point argument; Lab, Luv and their polar forms are
//! computed against it.
//!
//! # Example
//!
//! ```rust
//! use gamut_color::convert;
//! use gamut_core::{LchUv, Srgb};
//! use gamut_primaries::D65;
//!
//! let lch: LchUv = convert(Srgb::new(1.0, 0.0, 0.0), &D65);
//! assert!((lch.c - 179.038).abs() < 1e-3);
//! ```
//!
//! When the spaces are only known at runtime, use [`convert_coords`].

use crate::{
    lab_to_lch, lab_to_xyz, lch_to_lab, lch_to_luv, luv_to_lch, luv_to_xyz, xyz_to_lab,
    xyz_to_luv,
};
use gamut_core::{
    ColorSpace, ColorSpaceId, Lab, LchAb, LchUv, Luv, Rec2020, Rec709, Srgb, Vector3D, Xyz,
};
use gamut_primaries::{RgbSpace, WhitePoint};

/// Conversion to and from XYZ relative to a reference white.
pub trait Convert: ColorSpace {
    /// Converts to XYZ.
    fn to_xyz_relative(self, white: &WhitePoint) -> Xyz;

    /// Converts from XYZ.
    fn from_xyz_relative(xyz: Xyz, white: &WhitePoint) -> Self;
}

impl Convert for Xyz {
    #[inline]
    fn to_xyz_relative(self, _white: &WhitePoint) -> Xyz {
        self
    }

    #[inline]
    fn from_xyz_relative(xyz: Xyz, _white: &WhitePoint) -> Self {
        xyz
    }
}

macro_rules! impl_convert_rgb {
    ($($ty:ty),+) => {
        $(
            impl Convert for $ty {
                #[inline]
                fn to_xyz_relative(self, _white: &WhitePoint) -> Xyz {
                    RgbSpace::to_xyz(self)
                }

                #[inline]
                fn from_xyz_relative(xyz: Xyz, _white: &WhitePoint) -> Self {
                    <$ty as RgbSpace>::from_xyz(xyz)
                }
            }
        )+
    };
}

impl_convert_rgb!(Srgb, Rec709, Rec2020);

impl Convert for Lab {
    #[inline]
    fn to_xyz_relative(self, white: &WhitePoint) -> Xyz {
        lab_to_xyz(self, white)
    }

    #[inline]
    fn from_xyz_relative(xyz: Xyz, white: &WhitePoint) -> Self {
        xyz_to_lab(xyz, white)
    }
}

impl Convert for Luv {
    #[inline]
    fn to_xyz_relative(self, white: &WhitePoint) -> Xyz {
        luv_to_xyz(self, white)
    }

    #[inline]
    fn from_xyz_relative(xyz: Xyz, white: &WhitePoint) -> Self {
        xyz_to_luv(xyz, white)
    }
}

impl Convert for LchAb {
    #[inline]
    fn to_xyz_relative(self, white: &WhitePoint) -> Xyz {
        lab_to_xyz(lch_to_lab(self), white)
    }

    #[inline]
    fn from_xyz_relative(xyz: Xyz, white: &WhitePoint) -> Self {
        lab_to_lch(xyz_to_lab(xyz, white))
    }
}

impl Convert for LchUv {
    #[inline]
    fn to_xyz_relative(self, white: &WhitePoint) -> Xyz {
        luv_to_xyz(lch_to_luv(self), white)
    }

    #[inline]
    fn from_xyz_relative(xyz: Xyz, white: &WhitePoint) -> Self {
        luv_to_lch(xyz_to_luv(xyz, white))
    }
}

/// Converts a color from space `A` to space `B`.
#[inline]
pub fn convert<A: Convert, B: Convert>(value: A, white: &WhitePoint) -> B {
    B::from_xyz_relative(value.to_xyz_relative(white), white)
}

fn to_xyz_dyn(id: ColorSpaceId, coords: [f64; 3], white: &WhitePoint) -> Xyz {
    match id {
        ColorSpaceId::Xyz => Xyz::from_array(coords),
        ColorSpaceId::Srgb => Srgb::from_array(coords).to_xyz_relative(white),
        ColorSpaceId::Rec709 => Rec709::from_array(coords).to_xyz_relative(white),
        ColorSpaceId::Rec2020 => Rec2020::from_array(coords).to_xyz_relative(white),
        ColorSpaceId::Lab => Lab::from_array(coords).to_xyz_relative(white),
        ColorSpaceId::Luv => Luv::from_array(coords).to_xyz_relative(white),
        ColorSpaceId::LchAb => LchAb::from_array(coords).to_xyz_relative(white),
        ColorSpaceId::LchUv => LchUv::from_array(coords).to_xyz_relative(white),
    }
}

fn from_xyz_dyn(id: ColorSpaceId, xyz: Xyz, white: &WhitePoint) -> [f64; 3] {
    match id {
        ColorSpaceId::Xyz => xyz.to_array(),
        ColorSpaceId::Srgb => Srgb::from_xyz_relative(xyz, white).to_array(),
        ColorSpaceId::Rec709 => Rec709::from_xyz_relative(xyz, white).to_array(),
        ColorSpaceId::Rec2020 => Rec2020::from_xyz_relative(xyz, white).to_array(),
        ColorSpaceId::Lab => Lab::from_xyz_relative(xyz, white).to_array(),
        ColorSpaceId::Luv => Luv::from_xyz_relative(xyz, white).to_array(),
        ColorSpaceId::LchAb => LchAb::from_xyz_relative(xyz, white).to_array(),
        ColorSpaceId::LchUv => LchUv::from_xyz_relative(xyz, white).to_array(),
    }
}

/// Converts raw coordinates between spaces chosen at runtime.
///
/// Identical spaces return the input unchanged.
///
/// # Example
///
/// ```rust
/// use gamut_color::convert_coords;
/// use gamut_core::ColorSpaceId;
/// use gamut_primaries::D65;
///
/// let lab = convert_coords(ColorSpaceId::Srgb, ColorSpaceId::Lab, [1.0, 1.0, 1.0], &D65);
/// assert!((lab[0] - 100.0).abs() < 1e-9);
/// ```
pub fn convert_coords(
    from: ColorSpaceId,
    to: ColorSpaceId,
    coords: [f64; 3],
    white: &WhitePoint,
) -> [f64; 3] {
    if from == to {
        return coords;
    }
    from_xyz_dyn(to, to_xyz_dyn(from, coords, white), white)
}
