//! Batch conversion and boundary queries.
//!
//! Every call is independent, so slices are processed in parallel when the
//! `parallel` feature is enabled and sequentially otherwise. Output order
//! always matches input order.

use crate::{convert, max_chroma, BoundaryResult, Convert, PolarSpace, SolverConfig};
use gamut_primaries::{RgbSpace, WhitePoint};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maps a slice in parallel.
#[cfg(feature = "parallel")]
fn map_slice<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    items.par_iter().map(f).collect()
}

/// Maps a slice (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
fn map_slice<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Converts every value from `A` to `B`.
///
/// # Example
///
/// ```rust
/// use gamut_color::batch::convert_all;
/// use gamut_core::{Lab, Srgb};
/// use gamut_primaries::D65;
///
/// let pixels = vec![Srgb::new(1.0, 1.0, 1.0), Srgb::new(0.0, 0.0, 0.0)];
/// let labs: Vec<Lab> = convert_all(&pixels, &D65);
/// assert!((labs[0].l - 100.0).abs() < 1e-9);
/// assert!(labs[1].l.abs() < 1e-9);
/// ```
pub fn convert_all<A, B>(values: &[A], white: &WhitePoint) -> Vec<B>
where
    A: Convert + Sync,
    B: Convert + Send,
{
    trace!(count = values.len(), from = A::NAME, to = B::NAME, "convert_all");
    map_slice(values, |&value| convert::<A, B>(value, white))
}

/// Computes [`max_chroma`] for each `(lightness, hue)` pair.
pub fn max_chroma_all<S, P>(
    queries: &[(f64, f64)],
    white: &WhitePoint,
    config: &SolverConfig,
) -> Vec<BoundaryResult<f64>>
where
    S: RgbSpace,
    P: PolarSpace,
{
    trace!(count = queries.len(), space = S::NAME, "max_chroma_all");
    map_slice(queries, |&(lightness, hue)| {
        max_chroma::<S, P>(lightness, hue, white, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamut_core::{Lab, LchUv, Srgb, Xyz};
    use gamut_primaries::D65;

    #[test]
    fn test_convert_all_preserves_order() {
        let values: Vec<Srgb> = (0..256)
            .map(|i| {
                let t = i as f64 / 255.0;
                Srgb::new(t, 1.0 - t, 0.5)
            })
            .collect();

        let batch: Vec<Lab> = convert_all(&values, &D65);
        assert_eq!(batch.len(), values.len());
        for (value, lab) in values.iter().zip(&batch) {
            assert_eq!(*lab, convert::<Srgb, Lab>(*value, &D65));
        }
    }

    #[test]
    fn test_convert_all_empty() {
        let out: Vec<Xyz> = convert_all::<Srgb, Xyz>(&[], &D65);
        assert!(out.is_empty());
    }

    #[test]
    fn test_max_chroma_all() {
        let config = SolverConfig::default();
        let queries = [(50.0, 0.5), (0.0, 1.0), (f64::NAN, 1.0), (75.0, 3.0)];
        let results = max_chroma_all::<Srgb, LchUv>(&queries, &D65, &config);

        assert_eq!(results.len(), 4);
        assert_eq!(
            results[0],
            max_chroma::<Srgb, LchUv>(50.0, 0.5, &D65, &config)
        );
        assert_eq!(results[1], Ok(0.0));
        assert!(results[2].is_err());
        assert!(results[3].as_ref().is_ok_and(|c| *c > 0.0));
    }
}
