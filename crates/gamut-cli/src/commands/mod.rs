//! CLI command implementations

pub mod boundary;
pub mod convert;
pub mod map;

use anyhow::{bail, Context, Result};
use gamut_color::{
    map_into_gamut, max_chroma, normalize_hue, BoundaryResult, ChromaPolicy, PolarSpace,
    SolverConfig,
};
use gamut_core::{ColorSpaceId, LchAb, LchUv, Rec2020, Rec709, Srgb};
use gamut_primaries::WhitePoint;

/// Parse a color space name
pub fn parse_space(name: &str) -> Result<ColorSpaceId> {
    name.parse::<ColorSpaceId>()
        .with_context(|| format!("Invalid color space '{}'", name))
}

/// Bounded RGB space a boundary query runs against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gamut {
    Srgb,
    Rec709,
    Rec2020,
}

impl Gamut {
    pub fn parse(name: &str) -> Result<Self> {
        match parse_space(name)? {
            ColorSpaceId::Srgb => Ok(Self::Srgb),
            ColorSpaceId::Rec709 => Ok(Self::Rec709),
            ColorSpaceId::Rec2020 => Ok(Self::Rec2020),
            other => bail!("'{}' is not an RGB space (expected srgb, rec709 or rec2020)", other),
        }
    }

    pub fn id(self) -> ColorSpaceId {
        match self {
            Self::Srgb => ColorSpaceId::Srgb,
            Self::Rec709 => ColorSpaceId::Rec709,
            Self::Rec2020 => ColorSpaceId::Rec2020,
        }
    }
}

/// Polar space lightness and hue are given in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polar {
    Ab,
    Uv,
}

impl Polar {
    pub fn parse(name: &str) -> Result<Self> {
        match parse_space(name)? {
            ColorSpaceId::LchAb => Ok(Self::Ab),
            ColorSpaceId::LchUv => Ok(Self::Uv),
            other => bail!("'{}' is not a polar space (expected lch-ab or lch-uv)", other),
        }
    }

    pub fn id(self) -> ColorSpaceId {
        match self {
            Self::Ab => ColorSpaceId::LchAb,
            Self::Uv => ColorSpaceId::LchUv,
        }
    }
}

/// Degrees from the command line to radians.
pub fn hue_to_radians(degrees: f64) -> f64 {
    normalize_hue(degrees.to_radians())
}

/// Radians to degrees in `[0, 360)`.
pub fn hue_to_degrees(radians: f64) -> f64 {
    let degrees = normalize_hue(radians).to_degrees();
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Largest in-gamut chroma, dispatched on runtime space choices.
pub fn max_chroma_dyn(
    gamut: Gamut,
    polar: Polar,
    lightness: f64,
    hue: f64,
    white: &WhitePoint,
    config: &SolverConfig,
) -> BoundaryResult<f64> {
    match polar {
        Polar::Ab => max_chroma_in::<LchAb>(gamut, lightness, hue, white, config),
        Polar::Uv => max_chroma_in::<LchUv>(gamut, lightness, hue, white, config),
    }
}

fn max_chroma_in<P: PolarSpace>(
    gamut: Gamut,
    lightness: f64,
    hue: f64,
    white: &WhitePoint,
    config: &SolverConfig,
) -> BoundaryResult<f64> {
    match gamut {
        Gamut::Srgb => max_chroma::<Srgb, P>(lightness, hue, white, config),
        Gamut::Rec709 => max_chroma::<Rec709, P>(lightness, hue, white, config),
        Gamut::Rec2020 => max_chroma::<Rec2020, P>(lightness, hue, white, config),
    }
}

/// Maps `[L, C, h]` into the gamut, dispatched on runtime space choices.
pub fn map_dyn(
    gamut: Gamut,
    polar: Polar,
    lch: [f64; 3],
    white: &WhitePoint,
    policy: &dyn ChromaPolicy,
    config: &SolverConfig,
) -> BoundaryResult<[f64; 3]> {
    match polar {
        Polar::Ab => map_in::<LchAb>(gamut, lch, white, policy, config),
        Polar::Uv => map_in::<LchUv>(gamut, lch, white, policy, config),
    }
}

fn map_in<P: PolarSpace>(
    gamut: Gamut,
    lch: [f64; 3],
    white: &WhitePoint,
    policy: &dyn ChromaPolicy,
    config: &SolverConfig,
) -> BoundaryResult<[f64; 3]> {
    let color = P::from_array(lch);
    let mapped = match gamut {
        Gamut::Srgb => map_into_gamut::<Srgb, P, _>(color, white, policy, config)?,
        Gamut::Rec709 => map_into_gamut::<Rec709, P, _>(color, white, policy, config)?,
        Gamut::Rec2020 => map_into_gamut::<Rec2020, P, _>(color, white, policy, config)?,
    };
    Ok(mapped.to_array())
}

/// RGB coordinates of a polar color in the given gamut.
pub fn polar_to_rgb(gamut: Gamut, polar: Polar, lch: [f64; 3], white: &WhitePoint) -> [f64; 3] {
    gamut_color::convert_coords(polar.id(), gamut.id(), lch, white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamut_core::Vector3D;
    use gamut_primaries::{RgbSpace, D65};

    #[test]
    fn test_gamut_parse() {
        assert_eq!(Gamut::parse("sRGB").unwrap(), Gamut::Srgb);
        assert_eq!(Gamut::parse("bt2020").unwrap(), Gamut::Rec2020);
        assert!(Gamut::parse("lab").is_err());
        assert!(Gamut::parse("p3").is_err());
    }

    #[test]
    fn test_polar_parse() {
        assert_eq!(Polar::parse("lch-uv").unwrap(), Polar::Uv);
        assert_eq!(Polar::parse("LCh(ab)").unwrap(), Polar::Ab);
        assert!(Polar::parse("luv").is_err());
    }

    #[test]
    fn test_hue_degrees() {
        assert!((hue_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((hue_to_radians(-90.0) - 1.5 * std::f64::consts::PI).abs() < 1e-12);
        assert!((hue_to_degrees(hue_to_radians(725.0)) - 5.0).abs() < 1e-9);
        assert_eq!(hue_to_degrees(0.0), 0.0);
    }

    #[test]
    fn test_dispatch_matches_typed() {
        let config = SolverConfig::default();
        let dynamic = max_chroma_dyn(Gamut::Rec2020, Polar::Ab, 60.0, 1.0, &D65, &config);
        let typed = max_chroma::<Rec2020, LchAb>(60.0, 1.0, &D65, &config);
        assert_eq!(dynamic, typed);
    }

    #[test]
    fn test_map_dyn_in_gamut() {
        let config = SolverConfig::default();
        let policy = gamut_color::Clip;
        let mapped = map_dyn(Gamut::Srgb, Polar::Uv, [60.0, 200.0, 4.0], &D65, &policy, &config)
            .unwrap();
        assert_eq!(mapped[0], 60.0);
        assert!(mapped[1] < 200.0);
        let rgb = Srgb::from_array(polar_to_rgb(Gamut::Srgb, Polar::Uv, mapped, &D65));
        assert!(!rgb.is_out_of_gamut(1e-6));
    }
}
