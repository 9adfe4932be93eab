//! Root finding for gamut boundaries.
//!
//! The solver works on any scoring function that classifies a scalar
//! (usually chroma) as inside, on, or outside a gamut. It brackets the
//! transition from inside to outside and bisects until the bracket is
//! narrower than the configured tolerance.
//!
//! [`find_outer_boundary`] works on a signed distance instead, so it can
//! also find gamut regions that a hue line only touches or re-enters
//! between samples.
//!
//! The result is always a [`BoundaryResult`]: a bracket with no transition,
//! or one that did not converge within the iteration budget, is reported as
//! an error instead of a chroma value.
//!
//! # Example
//!
//! ```rust
//! use gamut_color::{find_boundary, Bracket, GamutScore, SolverConfig};
//!
//! // Everything up to 42 is inside
//! let score = |c: f64| GamutScore::from_distance(c - 42.0, 1e-12);
//!
//! let c = find_boundary(score, Bracket::new(0.0, 100.0), &SolverConfig::default()).unwrap();
//! assert!((c - 42.0).abs() < 1e-6);
//! ```

use crate::{BoundaryError, BoundaryResult};
use tracing::{debug, trace};

// ============================================================================
// Score
// ============================================================================

/// Classification of a candidate against a gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamutScore {
    /// Strictly inside.
    Inside,
    /// Within the tolerance band of the boundary.
    Boundary,
    /// Outside.
    Outside,
}

impl GamutScore {
    /// Returns `-1`, `0` or `+1`.
    #[inline]
    pub const fn signum(self) -> i8 {
        match self {
            Self::Inside => -1,
            Self::Boundary => 0,
            Self::Outside => 1,
        }
    }

    /// Classifies a signed distance from the gamut surface.
    ///
    /// Distances within `epsilon` of zero are on the boundary. NaN is
    /// outside.
    #[inline]
    pub fn from_distance(distance: f64, epsilon: f64) -> Self {
        if distance.is_nan() || distance > epsilon {
            Self::Outside
        } else if distance < -epsilon {
            Self::Inside
        } else {
            Self::Boundary
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// An interval expected to contain an inside-to-outside transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Inside end.
    pub low: f64,
    /// Outside end.
    pub high: f64,
}

impl Bracket {
    /// Creates a bracket.
    #[inline]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Width of the interval.
    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    fn validate(&self) -> BoundaryResult<()> {
        if self.low.is_finite() && self.high.is_finite() && self.low < self.high {
            Ok(())
        } else {
            Err(BoundaryError::InvalidBracket {
                low: self.low,
                high: self.high,
            })
        }
    }
}

/// Solver parameters.
///
/// # Example
///
/// ```rust
/// use gamut_color::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_tolerance(1e-4)
///     .with_max_iterations(20);
/// assert_eq!(config.max_iterations, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Bisection stops once the bracket is this narrow.
    pub tolerance: f64,
    /// Upper bound on bisection steps.
    pub max_iterations: u32,
    /// Half-width of the boundary band used by gamut scoring.
    pub gamut_epsilon: f64,
    /// First step when expanding an open bracket, and the sample spacing
    /// of [`find_outer_boundary`].
    pub initial_step: f64,
    /// Searches never go past this value.
    pub chroma_limit: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-7,
            max_iterations: 64,
            gamut_epsilon: 1e-9,
            initial_step: 16.0,
            chroma_limit: 1000.0,
        }
    }
}

impl SolverConfig {
    /// Sets the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the boundary band half-width.
    pub fn with_gamut_epsilon(mut self, gamut_epsilon: f64) -> Self {
        self.gamut_epsilon = gamut_epsilon;
        self
    }

    /// Sets the first expansion step.
    pub fn with_initial_step(mut self, initial_step: f64) -> Self {
        self.initial_step = initial_step;
        self
    }

    /// Sets the expansion limit.
    pub fn with_chroma_limit(mut self, chroma_limit: f64) -> Self {
        self.chroma_limit = chroma_limit;
        self
    }
}

// ============================================================================
// Search
// ============================================================================

/// Finds the transition from inside to outside within `bracket`.
///
/// `bracket.low` must score inside (or on the boundary) and `bracket.high`
/// outside (or on the boundary). Returns the inside end of the final
/// interval, or a point that scored [`GamutScore::Boundary`].
///
/// # Errors
///
/// - [`BoundaryError::InvalidBracket`] if the bracket is empty or not finite
/// - [`BoundaryError::NoSignChange`] if both ends lie on the same side
/// - [`BoundaryError::NotConverged`] if `max_iterations` ran out
pub fn find_boundary<F>(
    mut score: F,
    bracket: Bracket,
    config: &SolverConfig,
) -> BoundaryResult<f64>
where
    F: FnMut(f64) -> GamutScore,
{
    bracket.validate()?;

    match (score(bracket.low), score(bracket.high)) {
        (GamutScore::Boundary, GamutScore::Outside | GamutScore::Boundary) => Ok(bracket.low),
        (GamutScore::Inside, GamutScore::Boundary) => Ok(bracket.high),
        (GamutScore::Inside, GamutScore::Outside) => bisect(score, bracket, config),
        _ => {
            debug!(low = bracket.low, high = bracket.high, "No sign change in bracket");
            Err(BoundaryError::NoSignChange {
                low: bracket.low,
                high: bracket.high,
            })
        }
    }
}

/// Finds the transition above `start`, growing the bracket as needed.
///
/// The upper end starts at `start + initial_step` and the step doubles
/// until a candidate leaves the gamut or `chroma_limit` is reached.
///
/// # Errors
///
/// As [`find_boundary`]. `NoSignChange` covers both a `start` that is
/// already outside and a gamut that extends past `chroma_limit`.
pub fn find_boundary_from<F>(
    mut score: F,
    start: f64,
    config: &SolverConfig,
) -> BoundaryResult<f64>
where
    F: FnMut(f64) -> GamutScore,
{
    let limit = config.chroma_limit;
    if !(start.is_finite() && limit.is_finite() && start < limit && config.initial_step > 0.0) {
        return Err(BoundaryError::InvalidBracket { low: start, high: limit });
    }

    match score(start) {
        GamutScore::Boundary => return Ok(start),
        GamutScore::Outside => {
            debug!(start, "Search start is outside the gamut");
            return Err(BoundaryError::NoSignChange { low: start, high: start });
        }
        GamutScore::Inside => {}
    }

    let mut low = start;
    let mut step = config.initial_step;
    loop {
        let high = (start + step).min(limit);
        match score(high) {
            GamutScore::Outside => {
                trace!(low, high, "Bracket expanded");
                return bisect(score, Bracket::new(low, high), config);
            }
            GamutScore::Boundary => return Ok(high),
            GamutScore::Inside if high >= limit => {
                debug!(start, limit, "Gamut extends past chroma limit");
                return Err(BoundaryError::NoSignChange { low: start, high: limit });
            }
            GamutScore::Inside => {
                low = high;
                step *= 2.0;
            }
        }
    }
}

/// Finds the largest value in `bracket` whose distance is not outside.
///
/// `distance` is signed: negative inside, positive outside, scored with
/// `gamut_epsilon`. Unlike [`find_boundary`] the in-gamut set need not be
/// an interval starting at `bracket.low`. The bracket is sampled every
/// `initial_step` from the top down. Samples that are local minima of the
/// distance are refined by ternary search, which catches regions that
/// only touch the gamut between two outside samples. The first region
/// found is then bisected to its upper edge.
///
/// # Errors
///
/// - [`BoundaryError::InvalidBracket`] if the bracket is empty or not
///   finite, or `initial_step` is not positive
/// - [`BoundaryError::NoSignChange`] if `bracket.high` is inside or nothing
///   in the bracket is
/// - [`BoundaryError::NotConverged`] from the final bisection
pub fn find_outer_boundary<F>(
    mut distance: F,
    bracket: Bracket,
    config: &SolverConfig,
) -> BoundaryResult<f64>
where
    F: FnMut(f64) -> f64,
{
    bracket.validate()?;
    if config.initial_step.is_nan() || config.initial_step <= 0.0 {
        return Err(BoundaryError::InvalidBracket {
            low: bracket.low,
            high: bracket.high,
        });
    }

    let eps = config.gamut_epsilon;
    let top = distance(bracket.high);
    match GamutScore::from_distance(top, eps) {
        GamutScore::Boundary => return Ok(bracket.high),
        GamutScore::Inside => {
            debug!(low = bracket.low, high = bracket.high, "Gamut extends past bracket");
            return Err(BoundaryError::NoSignChange {
                low: bracket.low,
                high: bracket.high,
            });
        }
        GamutScore::Outside => {}
    }

    let n = (bracket.width() / config.initial_step).ceil().max(1.0) as usize;
    let at = move |k: usize| {
        if k >= n {
            bracket.high
        } else {
            bracket.low + bracket.width() * (k as f64 / n as f64)
        }
    };
    let mut samples: Vec<f64> = (0..n).map(|k| distance(at(k))).collect();
    samples.push(top);

    for k in (0..=n).rev() {
        let upper = at(k + 1);
        let local_min =
            k > 0 && samples[k] <= samples[k - 1] && (k == n || samples[k] <= samples[k + 1]);
        if local_min {
            let cell = Bracket::new(at(k - 1), upper);
            if let Some(touch) = touch_point(&mut distance, cell, config) {
                trace!(touch, upper, "Gamut reached between samples");
                let score = |c: f64| GamutScore::from_distance(distance(c), eps);
                return find_boundary(score, Bracket::new(touch, upper), config);
            }
        }
        if k < n && GamutScore::from_distance(samples[k], eps) != GamutScore::Outside {
            let score = |c: f64| GamutScore::from_distance(distance(c), eps);
            return find_boundary(score, Bracket::new(at(k), upper), config);
        }
    }

    debug!(low = bracket.low, high = bracket.high, "No gamut point in bracket");
    Err(BoundaryError::NoSignChange {
        low: bracket.low,
        high: bracket.high,
    })
}

/// Ternary search for a point in `bracket` that is not outside.
fn touch_point<F>(distance: &mut F, bracket: Bracket, config: &SolverConfig) -> Option<f64>
where
    F: FnMut(f64) -> f64,
{
    let eps = config.gamut_epsilon;
    let reached = |d: f64| GamutScore::from_distance(d, eps) != GamutScore::Outside;
    let mut bracket = bracket;

    for _ in 0..config.max_iterations {
        let third = bracket.width() / 3.0;
        let (a, b) = (bracket.low + third, bracket.high - third);
        let (da, db) = (distance(a), distance(b));
        if reached(da) {
            return Some(a);
        }
        if reached(db) {
            return Some(b);
        }
        if da <= db {
            bracket.high = b;
        } else {
            bracket.low = a;
        }
    }

    let mid = bracket.low + 0.5 * bracket.width();
    reached(distance(mid)).then_some(mid)
}

/// Bisects a bracket whose low end is inside and high end outside.
fn bisect<F>(mut score: F, bracket: Bracket, config: &SolverConfig) -> BoundaryResult<f64>
where
    F: FnMut(f64) -> GamutScore,
{
    let mut bracket = bracket;

    for iteration in 0..config.max_iterations {
        if bracket.width() <= config.tolerance {
            trace!(iteration, low = bracket.low, high = bracket.high, "Boundary converged");
            return Ok(bracket.low);
        }

        let mid = bracket.low + 0.5 * bracket.width();
        match score(mid) {
            GamutScore::Inside => bracket.low = mid,
            GamutScore::Outside => bracket.high = mid,
            GamutScore::Boundary => {
                trace!(iteration, mid, "Boundary hit");
                return Ok(mid);
            }
        }
    }

    if bracket.width() <= config.tolerance {
        return Ok(bracket.low);
    }

    let Bracket { low, high } = bracket;
    debug!(
        iterations = config.max_iterations,
        low, high, "Boundary search did not converge"
    );
    Err(BoundaryError::NotConverged {
        iterations: config.max_iterations,
        low,
        high,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn step_at(edge: f64) -> impl Fn(f64) -> GamutScore {
        move |c| GamutScore::from_distance(c - edge, 0.0)
    }

    #[test]
    fn test_score_from_distance() {
        assert_eq!(GamutScore::from_distance(-0.5, 1e-9), GamutScore::Inside);
        assert_eq!(GamutScore::from_distance(1e-12, 1e-9), GamutScore::Boundary);
        assert_eq!(GamutScore::from_distance(0.5, 1e-9), GamutScore::Outside);
        assert_eq!(GamutScore::from_distance(f64::NAN, 1e-9), GamutScore::Outside);
        assert_eq!(GamutScore::from_distance(f64::INFINITY, 1e-9), GamutScore::Outside);
    }

    #[test]
    fn test_signum() {
        assert_eq!(GamutScore::Inside.signum(), -1);
        assert_eq!(GamutScore::Boundary.signum(), 0);
        assert_eq!(GamutScore::Outside.signum(), 1);
    }

    #[test]
    fn test_find_boundary_step() {
        let config = SolverConfig::default();
        let c = find_boundary(step_at(37.25), Bracket::new(0.0, 200.0), &config).unwrap();
        assert!(c <= 37.25);
        assert_abs_diff_eq!(c, 37.25, epsilon = config.tolerance);
    }

    #[test]
    fn test_boundary_ends() {
        let config = SolverConfig::default();
        assert_eq!(find_boundary(step_at(0.0), Bracket::new(0.0, 10.0), &config), Ok(0.0));
        assert_eq!(find_boundary(step_at(10.0), Bracket::new(0.0, 10.0), &config), Ok(10.0));
    }

    #[test]
    fn test_boundary_low_with_inside_high() {
        let config = SolverConfig::default();
        let score = |c: f64| {
            if c == 0.0 {
                GamutScore::Boundary
            } else {
                GamutScore::Inside
            }
        };
        assert_eq!(
            find_boundary(score, Bracket::new(0.0, 10.0), &config),
            Err(BoundaryError::NoSignChange { low: 0.0, high: 10.0 })
        );
    }

    #[test]
    fn test_bracket_width() {
        assert_eq!(Bracket::new(2.0, 10.5).width(), 8.5);
        assert_eq!(Bracket::new(3.0, 3.0).width(), 0.0);
    }

    #[test]
    fn test_invalid_bracket() {
        let config = SolverConfig::default();
        for bracket in [
            Bracket::new(5.0, 5.0),
            Bracket::new(5.0, 1.0),
            Bracket::new(0.0, f64::NAN),
            Bracket::new(f64::NEG_INFINITY, 1.0),
        ] {
            assert!(matches!(
                find_boundary(step_at(1.0), bracket, &config),
                Err(BoundaryError::InvalidBracket { .. })
            ));
        }
    }

    #[test]
    fn test_no_sign_change() {
        let config = SolverConfig::default();
        let inside = |_: f64| GamutScore::Inside;
        let outside = |_: f64| GamutScore::Outside;
        assert_eq!(
            find_boundary(inside, Bracket::new(0.0, 1.0), &config),
            Err(BoundaryError::NoSignChange { low: 0.0, high: 1.0 })
        );
        assert_eq!(
            find_boundary(outside, Bracket::new(0.0, 1.0), &config),
            Err(BoundaryError::NoSignChange { low: 0.0, high: 1.0 })
        );
    }

    #[test]
    fn test_not_converged() {
        let config = SolverConfig::default().with_max_iterations(5);
        let result = find_boundary(step_at(0.3), Bracket::new(0.0, 1.0), &config);
        match result {
            Err(BoundaryError::NotConverged { iterations, low, high }) => {
                assert_eq!(iterations, 5);
                assert!(low <= 0.3 && 0.3 <= high);
                assert_abs_diff_eq!(high - low, 1.0 / 32.0, epsilon = 1e-15);
            }
            other => panic!("expected NotConverged, got {other:?}"),
        }
    }

    #[test]
    fn test_iteration_count_bounded() {
        let config = SolverConfig::default();
        let mut calls = 0u32;
        let score = |c: f64| {
            calls += 1;
            GamutScore::from_distance(c - 123.456, 0.0)
        };
        find_boundary(score, Bracket::new(0.0, 1000.0), &config).unwrap();
        assert!(calls <= config.max_iterations + 2);
    }

    #[test]
    fn test_find_boundary_from_expands() {
        let config = SolverConfig::default();
        let c = find_boundary_from(step_at(300.0), 0.0, &config).unwrap();
        assert_abs_diff_eq!(c, 300.0, epsilon = config.tolerance);
    }

    #[test]
    fn test_find_boundary_from_limit() {
        let config = SolverConfig::default().with_chroma_limit(50.0);
        assert_eq!(
            find_boundary_from(step_at(300.0), 0.0, &config),
            Err(BoundaryError::NoSignChange { low: 0.0, high: 50.0 })
        );
        assert_eq!(
            find_boundary_from(step_at(-1.0), 0.0, &config),
            Err(BoundaryError::NoSignChange { low: 0.0, high: 0.0 })
        );
        assert!(matches!(
            find_boundary_from(step_at(1.0), 60.0, &config),
            Err(BoundaryError::InvalidBracket { .. })
        ));
    }

    #[test]
    fn test_outer_boundary_single_region() {
        let config = SolverConfig::default();
        let c = find_outer_boundary(|c| c - 37.25, Bracket::new(0.0, 200.0), &config).unwrap();
        assert_abs_diff_eq!(c, 37.25, epsilon = config.tolerance);
    }

    #[test]
    fn test_outer_boundary_takes_highest_region() {
        let config = SolverConfig::default();
        // Inside on [0, 10] and [40, 50]
        let distance = |c: f64| (c - 10.0).min((c - 45.0).abs() - 5.0);

        let c = find_outer_boundary(distance, Bracket::new(0.0, 100.0), &config).unwrap();
        assert_abs_diff_eq!(c, 50.0, epsilon = config.tolerance);

        let c = find_outer_boundary(distance, Bracket::new(0.0, 30.0), &config).unwrap();
        assert_abs_diff_eq!(c, 10.0, epsilon = config.tolerance);
    }

    #[test]
    fn test_outer_boundary_finds_touching_point() {
        let config = SolverConfig::default();
        // Inside on [0, 10], touches the gamut only at 70.3
        let distance = |c: f64| (c - 10.0).min((c - 70.3).abs());
        let c = find_outer_boundary(distance, Bracket::new(0.0, 100.0), &config).unwrap();
        assert_abs_diff_eq!(c, 70.3, epsilon = 1e-8);

        // A near miss is not a gamut point
        let distance = |c: f64| (c - 10.0).min((c - 70.3).abs() + 0.5);
        let c = find_outer_boundary(distance, Bracket::new(0.0, 100.0), &config).unwrap();
        assert_abs_diff_eq!(c, 10.0, epsilon = config.tolerance);
    }

    #[test]
    fn test_outer_boundary_errors() {
        let config = SolverConfig::default();
        assert_eq!(
            find_outer_boundary(|c| c - 300.0, Bracket::new(0.0, 100.0), &config),
            Err(BoundaryError::NoSignChange { low: 0.0, high: 100.0 })
        );
        assert_eq!(
            find_outer_boundary(|c| c + 1.0, Bracket::new(0.0, 100.0), &config),
            Err(BoundaryError::NoSignChange { low: 0.0, high: 100.0 })
        );
        assert_eq!(
            find_outer_boundary(|c| c - 100.0, Bracket::new(0.0, 100.0), &config),
            Ok(100.0)
        );
        assert!(matches!(
            find_outer_boundary(|c| c, Bracket::new(0.0, 1.0), &config.with_initial_step(0.0)),
            Err(BoundaryError::InvalidBracket { .. })
        ));
    }
}
