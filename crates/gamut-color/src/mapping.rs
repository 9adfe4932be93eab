//! Chroma reduction at constant lightness and hue.
//!
//! [`max_chroma`] finds the largest chroma a hue line at fixed lightness
//! reaches inside an RGB gamut. [`map_into_gamut`] pulls an out-of-gamut
//! color back along that line, leaving `L` and `h` untouched. How the
//! chroma is reduced is left to a [`ChromaPolicy`].
//!
//! In Luv a hue line is straight in XYZ, so the in-gamut part of it is a
//! single segment from the neutral axis. In Lab it is curved and may leave
//! the gamut and come back, as it does at sRGB yellow. Both searches use
//! [`find_outer_boundary`] to cope with that.
//!
//! # Example
//!
//! ```rust
//! use gamut_color::{map_into_gamut, Convert, SoftKnee, SolverConfig};
//! use gamut_core::{LchUv, Srgb};
//! use gamut_primaries::{RgbSpace, D65};
//!
//! let vivid = LchUv::new(60.0, 150.0, 4.0);
//! let mapped = map_into_gamut::<Srgb, _, _>(
//!     vivid,
//!     &D65,
//!     &SoftKnee::new(0.8),
//!     &SolverConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(mapped.l, vivid.l);
//! assert_eq!(mapped.h, vivid.h);
//! let rgb = Srgb::from_xyz(mapped.to_xyz_relative(&D65));
//! assert!(!rgb.is_out_of_gamut(1e-9));
//! ```

use crate::{
    find_outer_boundary, BoundaryError, BoundaryResult, Bracket, Convert, GamutScore, SolverConfig,
};
use gamut_core::{LchAb, LchUv};
use gamut_math::{inverse_lerp, lerp};
use gamut_primaries::{RgbSpace, WhitePoint};
use tracing::{debug, trace};

/// A cylindrical space with lightness, chroma and hue components.
pub trait PolarSpace: Convert {
    /// Lightness component.
    #[inline]
    fn lightness(self) -> f64 {
        self.to_array()[0]
    }

    /// Chroma component.
    #[inline]
    fn chroma(self) -> f64 {
        self.to_array()[1]
    }

    /// Hue component in radians.
    #[inline]
    fn hue(self) -> f64 {
        self.to_array()[2]
    }

    /// Builds a value from lightness, chroma and hue.
    #[inline]
    fn from_lch(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self::from_components(lightness, chroma, hue)
    }
}

impl PolarSpace for LchAb {}
impl PolarSpace for LchUv {}

/// Signed distance from the unit cube of `S` along a fixed lightness and hue.
///
/// Each candidate chroma is converted to `S` through XYZ. Negative is
/// inside.
pub fn chroma_distance<S, P>(lightness: f64, hue: f64, white: &WhitePoint) -> impl Fn(f64) -> f64
where
    S: RgbSpace,
    P: PolarSpace,
{
    let white = *white;
    move |chroma| {
        let xyz = P::from_lch(lightness, chroma, hue).to_xyz_relative(&white);
        S::from_xyz(xyz).gamut_distance()
    }
}

/// Builds the scoring function for chroma along a fixed lightness and hue.
pub fn chroma_score<S, P>(
    lightness: f64,
    hue: f64,
    white: &WhitePoint,
    epsilon: f64,
) -> impl Fn(f64) -> GamutScore
where
    S: RgbSpace,
    P: PolarSpace,
{
    let distance = chroma_distance::<S, P>(lightness, hue, white);
    move |chroma| GamutScore::from_distance(distance(chroma), epsilon)
}

/// Returns the largest in-gamut chroma of `S` at the given lightness and hue.
///
/// Black (`L = 0`) and white (`L = 100`) have no chroma and return `0`.
///
/// # Errors
///
/// - [`BoundaryError::NoSignChange`] with both ends `0` for lightness
///   outside `[0, 100]` or NaN
/// - Any [`find_outer_boundary`] failure, e.g. a gamut wider than
///   `chroma_limit` or a non-finite hue
pub fn max_chroma<S, P>(
    lightness: f64,
    hue: f64,
    white: &WhitePoint,
    config: &SolverConfig,
) -> BoundaryResult<f64>
where
    S: RgbSpace,
    P: PolarSpace,
{
    outer_chroma::<S, P>(lightness, hue, white, config.chroma_limit, config)
}

/// Largest in-gamut chroma in `[0, limit]`.
fn outer_chroma<S, P>(
    lightness: f64,
    hue: f64,
    white: &WhitePoint,
    limit: f64,
    config: &SolverConfig,
) -> BoundaryResult<f64>
where
    S: RgbSpace,
    P: PolarSpace,
{
    if lightness == 0.0 || lightness == 100.0 {
        return Ok(0.0);
    }
    if !(0.0..=100.0).contains(&lightness) {
        debug!(lightness, "Lightness outside [0, 100]");
        return Err(BoundaryError::NoSignChange { low: 0.0, high: 0.0 });
    }
    let distance = chroma_distance::<S, P>(lightness, hue, white);
    find_outer_boundary(distance, Bracket::new(0.0, limit), config)
}

// ============================================================================
// Policies
// ============================================================================

/// Decides the output chroma given the requested chroma and the boundary.
///
/// Any `Fn(chroma, boundary) -> f64` closure is a policy.
pub trait ChromaPolicy {
    /// Returns the chroma to use.
    fn apply(&self, chroma: f64, boundary: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> ChromaPolicy for F {
    fn apply(&self, chroma: f64, boundary: f64) -> f64 {
        self(chroma, boundary)
    }
}

/// Hard clip to the boundary. In-gamut chroma is unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clip;

impl ChromaPolicy for Clip {
    #[inline]
    fn apply(&self, chroma: f64, boundary: f64) -> f64 {
        chroma.min(boundary)
    }
}

/// Gradual dampening above a knee.
///
/// Chroma below `knee * boundary` passes through. Above it, chroma is
/// compressed with `tanh` so it approaches but never exceeds the boundary,
/// with slope 1 at the knee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftKnee {
    /// Fraction of the boundary where compression starts, in `[0, 1]`.
    pub knee: f64,
}

impl SoftKnee {
    /// Creates a policy, clamping `knee` to `[0, 1]`.
    pub fn new(knee: f64) -> Self {
        Self {
            knee: knee.clamp(0.0, 1.0),
        }
    }
}

impl Default for SoftKnee {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl ChromaPolicy for SoftKnee {
    fn apply(&self, chroma: f64, boundary: f64) -> f64 {
        let knee_c = boundary * self.knee;
        if chroma <= knee_c {
            chroma
        } else if boundary <= knee_c {
            boundary
        } else {
            let t = inverse_lerp(knee_c, boundary, chroma);
            lerp(knee_c, boundary, t.tanh())
        }
    }
}

/// Brings a polar color inside `S` by changing only its chroma.
///
/// The policy sees the largest in-gamut chroma at or below the input for
/// out-of-gamut colors, and [`max_chroma`] (never less than the input) for
/// in-gamut ones, so [`Clip`] leaves in-gamut colors unchanged. A policy
/// result that still lands outside, e.g. in a gap of a curved Lab hue line,
/// is clipped to the in-gamut chroma below it.
///
/// # Errors
///
/// Propagates [`max_chroma`] failures. Callers choose the fallback, e.g.
/// leaving the color unmapped or clipping in RGB.
pub fn map_into_gamut<S, P, C>(
    color: P,
    white: &WhitePoint,
    policy: &C,
    config: &SolverConfig,
) -> BoundaryResult<P>
where
    S: RgbSpace,
    P: PolarSpace,
    C: ChromaPolicy + ?Sized,
{
    let (l, c, h) = (color.lightness(), color.chroma(), color.hue());
    let score = chroma_score::<S, P>(l, h, white, config.gamut_epsilon);

    let boundary = match score(c) {
        GamutScore::Outside => outer_chroma::<S, P>(l, h, white, c, config)?,
        GamutScore::Inside | GamutScore::Boundary => {
            max_chroma::<S, P>(l, h, white, config)?.max(c)
        }
    };

    let mut mapped = policy.apply(c, boundary);
    if score(mapped) == GamutScore::Outside {
        trace!(space = S::NAME, l, h, mapped, "Policy result outside, clipping");
        mapped = outer_chroma::<S, P>(l, h, white, mapped, config)?;
    }

    if mapped != c {
        debug!(space = S::NAME, l, h, chroma = c, boundary, mapped, "Chroma reduced");
    }
    Ok(P::from_lch(l, mapped, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gamut_core::{Rec2020, Srgb};
    use gamut_primaries::D65;

    #[test]
    fn test_clip_policy() {
        assert_eq!(Clip.apply(30.0, 50.0), 30.0);
        assert_eq!(Clip.apply(80.0, 50.0), 50.0);
    }

    #[test]
    fn test_soft_knee_policy() {
        let policy = SoftKnee::new(0.5);
        assert_eq!(policy.apply(20.0, 100.0), 20.0);
        assert_eq!(policy.apply(50.0, 100.0), 50.0);

        let a = policy.apply(60.0, 100.0);
        let b = policy.apply(90.0, 100.0);
        let c = policy.apply(500.0, 100.0);
        assert!(50.0 < a && a < 60.0);
        assert!(a < b && b < c && c < 100.0);

        // knee of 1 behaves like a clip
        assert_eq!(SoftKnee::new(1.0).apply(120.0, 100.0), 100.0);
        assert_eq!(SoftKnee::new(3.0).knee, 1.0);
    }

    #[test]
    fn test_closure_policy() {
        let half_way = |c: f64, b: f64| if c > b { 0.5 * (c + b) } else { c };
        assert_eq!(half_way.apply(120.0, 100.0), 110.0);
    }

    #[test]
    fn test_max_chroma_extremes() {
        let config = SolverConfig::default();
        for l in [0.0, 100.0] {
            assert_eq!(max_chroma::<Srgb, LchAb>(l, 1.0, &D65, &config), Ok(0.0));
            assert_eq!(max_chroma::<Srgb, LchUv>(l, 1.0, &D65, &config), Ok(0.0));
        }
        for l in [-5.0, -1e-12, 100.000_001, 140.0, f64::NAN] {
            assert_eq!(
                max_chroma::<Srgb, LchAb>(l, 1.0, &D65, &config),
                Err(BoundaryError::NoSignChange { low: 0.0, high: 0.0 })
            );
        }
    }

    #[test]
    fn test_map_rejects_lightness_out_of_range() {
        let config = SolverConfig::default();
        for color in [LchAb::new(120.0, 30.0, 1.0), LchAb::new(-3.0, 10.0, 1.0)] {
            assert!(map_into_gamut::<Srgb, _, _>(color, &D65, &Clip, &config).is_err());
        }
        // Black and white collapse to the neutral axis
        let white = LchAb::new(100.0, 30.0, 1.0);
        let mapped = map_into_gamut::<Srgb, _, _>(white, &D65, &Clip, &config).unwrap();
        assert_eq!(mapped.c, 0.0);
    }

    #[test]
    fn test_max_chroma_wider_gamut() {
        let config = SolverConfig::default();
        for hue in [0.3, 1.5, 2.5, 4.0, 5.5] {
            let narrow = max_chroma::<Srgb, LchUv>(50.0, hue, &D65, &config).unwrap();
            let wide = max_chroma::<Rec2020, LchUv>(50.0, hue, &D65, &config).unwrap();
            assert!(narrow > 0.0);
            assert!(wide >= narrow - config.tolerance, "hue {hue}: {wide} < {narrow}");
        }
    }

    #[test]
    fn test_map_keeps_in_gamut_color() {
        let config = SolverConfig::default();
        let grey = LchAb::new(50.0, 0.0, 0.0);
        let mapped = map_into_gamut::<Srgb, _, _>(grey, &D65, &Clip, &config).unwrap();
        assert_eq!(mapped, grey);
    }

    #[test]
    fn test_map_clip_lands_on_boundary() {
        let config = SolverConfig::default();
        let color = LchAb::new(70.0, 130.0, 2.2);
        let mapped = map_into_gamut::<Srgb, _, _>(color, &D65, &Clip, &config).unwrap();

        assert_eq!(mapped.l, color.l);
        assert_eq!(mapped.h, color.h);
        assert!(mapped.c < color.c);

        let score = chroma_score::<Srgb, LchAb>(70.0, 2.2, &D65, config.gamut_epsilon);
        assert_ne!(score(mapped.c), GamutScore::Outside);
        assert_eq!(score(mapped.c + 2.0 * config.tolerance), GamutScore::Outside);
        assert_abs_diff_eq!(
            mapped.c,
            max_chroma::<Srgb, LchAb>(70.0, 2.2, &D65, &config).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_yellow_hue_line_lab() {
        let config = SolverConfig::default();
        let yellow: LchAb = crate::convert(Srgb::new(1.0, 1.0, 0.0), &D65);
        let (l, h) = (yellow.l, yellow.h);

        // The hue line leaves sRGB near C=26 and only touches it again at yellow
        let score = chroma_score::<Srgb, LchAb>(l, h, &D65, config.gamut_epsilon);
        assert_eq!(score(60.0), GamutScore::Outside);
        assert_ne!(score(yellow.c), GamutScore::Outside);

        let c = max_chroma::<Srgb, LchAb>(l, h, &D65, &config).unwrap();
        assert_abs_diff_eq!(c, yellow.c, epsilon = 1e-5);

        let mapped = map_into_gamut::<Srgb, _, _>(yellow, &D65, &Clip, &config).unwrap();
        assert_eq!(mapped, yellow);

        for chroma in [97.5, 110.0, 150.0] {
            let color = LchAb::new(l, chroma, h);
            let mapped = map_into_gamut::<Srgb, _, _>(color, &D65, &Clip, &config).unwrap();
            assert_abs_diff_eq!(mapped.c, yellow.c, epsilon = 1e-5);
        }

        // Below yellow the largest in-gamut chroma is on the first segment
        let mapped =
            map_into_gamut::<Srgb, _, _>(LchAb::new(l, 60.0, h), &D65, &Clip, &config).unwrap();
        assert!(mapped.c > 20.0 && mapped.c < 30.0);
        assert_ne!(score(mapped.c), GamutScore::Outside);

        // A knee result in the gap is clipped back to the first segment
        let color = LchAb::new(l, 110.0, h);
        let knee = SoftKnee::new(0.8);
        let mapped = map_into_gamut::<Srgb, _, _>(color, &D65, &knee, &config).unwrap();
        assert!(mapped.c < 30.0);
        assert_ne!(score(mapped.c), GamutScore::Outside);
    }

    #[test]
    fn test_map_propagates_failure() {
        let config = SolverConfig::default();
        let color = LchUv::new(f64::NAN, 10.0, 1.0);
        assert!(map_into_gamut::<Srgb, _, _>(color, &D65, &Clip, &config).is_err());
    }
}
