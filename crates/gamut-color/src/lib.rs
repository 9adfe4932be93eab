//! # gamut-color
//!
//! Perceptual color conversions and gamut-boundary search.
//!
//! This crate builds on the linear engine in `gamut-math` and
//! `gamut-primaries`:
//!
//! - **Lab / Luv** - CIE 1976 perceptual spaces relative to a white point
//! - **LCh** - Cylindrical forms of both, hue in radians
//! - **Convert** - Typed and runtime conversion between any two spaces
//! - **Boundary solver** - Bracketing and bisection on a gamut score
//! - **Mapping** - Maximum chroma per lightness/hue and pluggable chroma policies
//!
//! # Architecture
//!
//! ```text
//!                 gamut-color
//!                      |
//!          +-----------+-----------+
//!          |                       |
//!   gamut-primaries           gamut-math
//!          |                       |
//!          +-----------+-----------+
//!                      |
//!                 gamut-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gamut_color::{convert, max_chroma, SolverConfig};
//! use gamut_core::{LchUv, Srgb};
//! use gamut_primaries::D65;
//!
//! // sRGB red in LCh(uv)
//! let red: LchUv = convert(Srgb::new(1.0, 0.0, 0.0), &D65);
//!
//! // Red is a gamut vertex: its chroma is the largest sRGB allows
//! let c = max_chroma::<Srgb, LchUv>(red.l, red.h, &D65, &SolverConfig::default()).unwrap();
//! assert!((c - red.c).abs() < 1e-5);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Use rayon in [`batch`]
//!
//! # Dependencies
//!
//! - [`gamut-core`] - Color tuples
//! - [`gamut-math`] - Matrices and interpolation
//! - [`gamut-primaries`] - RGB matrices and white points
//! - [`tracing`] - Solver diagnostics
//!
//! # Used By
//!
//! - `gamut-cli` - Command line tool
//! - `gamut-bench` - Benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod boundary;
pub mod convert;
mod error;
mod lab;
mod luv;
mod mapping;
mod polar;
pub mod batch;

pub use boundary::{
    find_boundary, find_boundary_from, find_outer_boundary, Bracket, GamutScore, SolverConfig,
};
pub use convert::{convert, convert_coords, Convert};
pub use error::{BoundaryError, BoundaryResult, ColorError, ColorResult};
pub use lab::{lab_to_xyz, xyz_to_lab, CIE_EPSILON, CIE_KAPPA};
pub use luv::{luv_to_xyz, xyz_to_luv};
pub use mapping::{
    chroma_distance, chroma_score, map_into_gamut, max_chroma, ChromaPolicy, Clip, PolarSpace,
    SoftKnee,
};
pub use polar::{lab_to_lch, lch_to_lab, lch_to_luv, luv_to_lch, normalize_hue};

// Re-export sub-crates for convenience
pub use gamut_math as math;
pub use gamut_primaries as primaries;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        convert, map_into_gamut, max_chroma, ChromaPolicy, Clip, Convert, PolarSpace,
        SoftKnee, SolverConfig,
    };
    pub use gamut_core::prelude::*;
    pub use gamut_primaries::{RgbSpace, WhitePoint, D50, D65, D65_10};
}
