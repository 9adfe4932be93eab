//! Reference white points and chromaticity helpers.
//!
//! A [`WhitePoint`] carries the same illuminant in three forms: xy
//! chromaticity, XYZ normalized to `Y = 1`, and CIE 1976 u'v'. All three are
//! computed at compile time from the literal xy pair.

use gamut_core::{Error, Result, UvPrime, Xy, Xyz};

/// A reference illuminant.
///
/// # Example
///
/// ```rust
/// use gamut_primaries::D65;
///
/// assert_eq!(D65.xyz.y, 1.0);
/// assert!((D65.xyz.x - 0.95046).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Short name, e.g. `"D65"`
    pub name: &'static str,
    /// CIE 1931 xy chromaticity
    pub xy: Xy,
    /// Tristimulus values with `Y = 1`
    pub xyz: Xyz,
    /// CIE 1976 u'v' chromaticity
    pub uv: UvPrime,
}

impl WhitePoint {
    /// Builds a white point from xy chromaticity.
    ///
    /// # Panics
    ///
    /// Panics if the chromaticity is not physically valid (`x > 0`, `y > 0`,
    /// `x + y < 1`). In a `const` item this is a compile error.
    pub const fn from_xy(name: &'static str, x: f64, y: f64) -> Self {
        assert!(x > 0.0 && y > 0.0, "white point chromaticity must be positive");
        assert!(x + y < 1.0, "white point chromaticity outside the xy triangle");

        let denom = -2.0 * x + 12.0 * y + 3.0;
        Self {
            name,
            xy: Xy::new(x, y),
            xyz: Xyz::new(x / y, 1.0, (1.0 - x - y) / y),
            uv: UvPrime::new(4.0 * x / denom, 9.0 * y / denom),
        }
    }

    /// Looks up a named white point.
    ///
    /// Accepts `d65`, `d65-10` (10° observer) and `d50`, ignoring case and
    /// separators.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_primaries::{WhitePoint, D65_10};
    ///
    /// assert_eq!(WhitePoint::lookup("D65_10").unwrap(), D65_10);
    /// assert!(WhitePoint::lookup("E").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '°' | '/'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "d65" | "d652" => Ok(D65),
            "d6510" => Ok(D65_10),
            "d50" | "d502" => Ok(D50),
            _ => Err(Error::UnknownWhitePoint(name.to_owned())),
        }
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        D65
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65, CIE 1931 2° observer (daylight, ~6500K).
pub const D65: WhitePoint = WhitePoint::from_xy("D65", 0.31270, 0.32900);

/// D65, CIE 1964 10° observer.
pub const D65_10: WhitePoint = WhitePoint::from_xy("D65/10", 0.31382, 0.33100);

/// D50, CIE 1931 2° observer (~5000K, print).
pub const D50: WhitePoint = WhitePoint::from_xy("D50", 0.34567, 0.35850);

// ============================================================================
// Chromaticity Helpers
// ============================================================================

/// Converts xy chromaticity to XYZ with `Y = 1`.
///
/// A zero `y` has no luminance direction and yields XYZ zero.
#[inline]
pub fn xy_to_xyz(xy: Xy) -> Xyz {
    if xy.y.abs() < 1e-12 {
        Xyz::default()
    } else {
        Xyz::new(xy.x / xy.y, 1.0, (1.0 - xy.x - xy.y) / xy.y)
    }
}

/// Converts xy chromaticity to u'v'.
#[inline]
pub fn xy_to_uv(xy: Xy) -> UvPrime {
    let denom = -2.0 * xy.x + 12.0 * xy.y + 3.0;
    UvPrime::new(4.0 * xy.x / denom, 9.0 * xy.y / denom)
}

/// Projects XYZ onto xy chromaticity.
///
/// Black has no chromaticity; the white point's own xy is returned.
#[inline]
pub fn xyz_to_xy(xyz: Xyz, white: &WhitePoint) -> Xy {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum.abs() < 1e-12 {
        white.xy
    } else {
        Xy::new(xyz.x / sum, xyz.y / sum)
    }
}

/// Projects XYZ onto u'v' chromaticity.
///
/// Black has no chromaticity; the white point's own u'v' is returned.
#[inline]
pub fn xyz_to_uv(xyz: Xyz, white: &WhitePoint) -> UvPrime {
    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if denom.abs() < 1e-12 {
        white.uv
    } else {
        UvPrime::new(4.0 * xyz.x / denom, 9.0 * xyz.y / denom)
    }
}
