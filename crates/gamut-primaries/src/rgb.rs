//! Linear RGB spaces bound to their XYZ matrices.
//!
//! Each built-in space carries a forward and a reverse matrix as literal
//! tables. The tables are exact rationals (derived offline from the
//! primaries and the D65 xy chromaticity), so the two members of each pair
//! are inverses to within one rounding step and no inversion happens at
//! runtime.

use crate::Primaries;
use gamut_core::{ColorSpace, Rec2020, Rec709, Srgb, Vector3D, Xyz};
use gamut_math::{Mat3, Matrix};

// ============================================================================
// Baked Matrices
// ============================================================================

/// Linear sRGB / Rec.709 to XYZ (D65).
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [506752.0 / 1228815.0, 87881.0 / 245763.0, 12673.0 / 70218.0],
    [87098.0 / 409605.0, 175762.0 / 245763.0, 12673.0 / 175545.0],
    [7918.0 / 409605.0, 87881.0 / 737289.0, 1001167.0 / 1053270.0],
]);

/// XYZ (D65) to linear sRGB / Rec.709.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [12831.0 / 3959.0, -329.0 / 214.0, -1974.0 / 3959.0],
    [-851781.0 / 878810.0, 1648619.0 / 878810.0, 36519.0 / 878810.0],
    [705.0 / 12673.0, -2585.0 / 12673.0, 705.0 / 667.0],
]);

/// Linear Rec.2020 to XYZ (D65).
pub const REC2020_TO_XYZ: Mat3 = Mat3::from_rows([
    [63426534.0 / 99577255.0, 20160776.0 / 139408157.0, 47086771.0 / 278816314.0],
    [26158966.0 / 99577255.0, 472592308.0 / 697040785.0, 8267143.0 / 139408157.0],
    [0.0, 19567812.0 / 697040785.0, 295819943.0 / 278816314.0],
]);

/// XYZ (D65) to linear Rec.2020.
pub const XYZ_TO_REC2020: Mat3 = Mat3::from_rows([
    [30757411.0 / 17917100.0, -6372589.0 / 17917100.0, -4539589.0 / 17917100.0],
    [-19765991.0 / 29648200.0, 47925759.0 / 29648200.0, 467509.0 / 29648200.0],
    [792561.0 / 44930125.0, -1921689.0 / 44930125.0, 42328811.0 / 44930125.0],
]);

// ============================================================================
// RgbSpace
// ============================================================================

/// A linear RGB space whose gamut is the unit cube.
///
/// # Example
///
/// ```rust
/// use gamut_core::{Rec2020, Srgb};
/// use gamut_primaries::RgbSpace;
///
/// let xyz = Srgb::new(1.0, 0.0, 0.0).to_xyz();
/// let wide = Rec2020::from_xyz(xyz);
/// assert!(!wide.is_out_of_gamut(1e-9));
///
/// let back = Srgb::from_xyz(Rec2020::new(1.0, 0.0, 0.0).to_xyz());
/// assert!(back.is_out_of_gamut(1e-9));
/// ```
pub trait RgbSpace: ColorSpace {
    /// Primaries and white point this space was derived from.
    const PRIMARIES: Primaries;

    /// Forward matrix.
    const TO_XYZ: Matrix<Self, Xyz>;

    /// Reverse matrix.
    const FROM_XYZ: Matrix<Xyz, Self>;

    /// Converts to XYZ.
    #[inline]
    fn to_xyz(self) -> Xyz {
        Self::TO_XYZ.apply(self)
    }

    /// Converts from XYZ.
    #[inline]
    fn from_xyz(xyz: Xyz) -> Self {
        Self::FROM_XYZ.apply(xyz)
    }

    /// Signed distance from the unit cube along the worst channel.
    ///
    /// Negative inside, zero on a face, positive outside. Non-finite
    /// components are infinitely far out.
    #[inline]
    fn gamut_distance(self) -> f64 {
        if !self.is_finite() {
            return f64::INFINITY;
        }
        let [r, g, b] = self.to_array();
        let lo = r.min(g).min(b);
        let hi = r.max(g).max(b);
        (-lo).max(hi - 1.0)
    }

    /// Returns true if any channel lies more than `epsilon` outside `[0, 1]`.
    #[inline]
    fn is_out_of_gamut(self, epsilon: f64) -> bool {
        self.gamut_distance() > epsilon
    }

    /// Clamps every channel to `[0, 1]`.
    #[inline]
    fn clip(self) -> Self {
        Self::from_array(self.to_array().map(|c| c.clamp(0.0, 1.0)))
    }
}

impl RgbSpace for Srgb {
    const PRIMARIES: Primaries = crate::SRGB;
    const TO_XYZ: Matrix<Self, Xyz> = Matrix::from_mat3(SRGB_TO_XYZ);
    const FROM_XYZ: Matrix<Xyz, Self> = Matrix::from_mat3(XYZ_TO_SRGB);
}

impl RgbSpace for Rec709 {
    const PRIMARIES: Primaries = crate::REC709;
    const TO_XYZ: Matrix<Self, Xyz> = Matrix::from_mat3(SRGB_TO_XYZ);
    const FROM_XYZ: Matrix<Xyz, Self> = Matrix::from_mat3(XYZ_TO_SRGB);
}

impl RgbSpace for Rec2020 {
    const PRIMARIES: Primaries = crate::REC2020;
    const TO_XYZ: Matrix<Self, Xyz> = Matrix::from_mat3(REC2020_TO_XYZ);
    const FROM_XYZ: Matrix<Xyz, Self> = Matrix::from_mat3(XYZ_TO_REC2020);
}

/// Returns the direct matrix from one RGB space to another through XYZ.
///
/// # Example
///
/// ```rust
/// use gamut_core::{Rec2020, Srgb};
/// use gamut_primaries::rgb_to_rgb;
///
/// let m = rgb_to_rgb::<Srgb, Rec2020>();
/// let white = m.apply(Srgb::new(1.0, 1.0, 1.0));
/// assert!((white.g - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rgb_to_rgb<S: RgbSpace, D: RgbSpace>() -> Matrix<S, D> {
    S::TO_XYZ.then(&D::FROM_XYZ)
}
