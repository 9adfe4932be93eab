//! Maximum chroma query.

use super::{hue_to_degrees, hue_to_radians, max_chroma_dyn, polar_to_rgb, Gamut, Polar};
use crate::{BoundaryArgs, Settings};
use anyhow::{Context, Result};
use gamut_core::ColorSpaceId;
use serde::Serialize;

#[derive(Serialize)]
struct BoundaryOutput {
    space: ColorSpaceId,
    polar: ColorSpaceId,
    white: &'static str,
    lightness: f64,
    hue: f64,
    max_chroma: f64,
    rgb: [f64; 3],
}

/// Runs the boundary command.
///
/// Fails when the solver cannot bracket the boundary, e.g. for a
/// lightness outside [0, 100] or a gamut wider than the search limit.
pub fn run(args: BoundaryArgs, settings: &Settings) -> Result<()> {
    let gamut = Gamut::parse(&args.space)?;
    let polar = Polar::parse(&args.polar)?;
    let hue = hue_to_radians(args.hue);

    let white = &settings.white;
    let chroma = max_chroma_dyn(gamut, polar, args.lightness, hue, white, &settings.config)
        .with_context(|| {
            format!(
                "No {} boundary at L={} h={}° in {}",
                gamut.id(),
                args.lightness,
                args.hue,
                polar.id()
            )
        })?;

    let rgb = polar_to_rgb(gamut, polar, [args.lightness, chroma, hue], white);

    if settings.json {
        let out = BoundaryOutput {
            space: gamut.id(),
            polar: polar.id(),
            white: settings.white.name,
            lightness: args.lightness,
            hue: hue_to_degrees(hue),
            max_chroma: chroma,
            rgb,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:.6}", chroma);
        if settings.verbose {
            println!(
                "  {} at boundary: {:.6} {:.6} {:.6}",
                gamut.id(),
                rgb[0],
                rgb[1],
                rgb[2]
            );
        }
    }

    Ok(())
}
