//! Gamut mapping of a single polar color.

use super::{hue_to_degrees, hue_to_radians, map_dyn, polar_to_rgb, Gamut, Polar};
use crate::{MapArgs, PolicyArg, Settings};
use anyhow::{Context, Result};
use gamut_color::{ChromaPolicy, Clip, SoftKnee};
use gamut_core::ColorSpaceId;
use serde::Serialize;

#[derive(Serialize)]
struct MapOutput {
    space: ColorSpaceId,
    polar: ColorSpaceId,
    white: &'static str,
    input: [f64; 3],
    output: [f64; 3],
    rgb: [f64; 3],
    changed: bool,
}

fn policy(args: &MapArgs) -> Box<dyn ChromaPolicy> {
    match args.policy {
        PolicyArg::Clip => Box::new(Clip),
        PolicyArg::Soft => Box::new(SoftKnee::new(args.knee)),
    }
}

/// Runs the map command.
pub fn run(args: MapArgs, settings: &Settings) -> Result<()> {
    let gamut = Gamut::parse(&args.space)?;
    let polar = Polar::parse(&args.polar)?;
    let policy = policy(&args);
    let lch = [args.lightness, args.chroma, hue_to_radians(args.hue)];

    let mapped = map_dyn(gamut, polar, lch, &settings.white, policy.as_ref(), &settings.config)
        .with_context(|| {
            format!(
                "Cannot map L={} C={} h={}° into {}",
                args.lightness,
                args.chroma,
                args.hue,
                gamut.id()
            )
        })?;

    let rgb = polar_to_rgb(gamut, polar, mapped, &settings.white);
    let output = [mapped[0], mapped[1], hue_to_degrees(mapped[2])];

    if settings.json {
        let out = MapOutput {
            space: gamut.id(),
            polar: polar.id(),
            white: settings.white.name,
            input: [args.lightness, args.chroma, args.hue],
            output,
            rgb,
            changed: mapped[1] != args.chroma,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:.6} {:.6} {:.6}", output[0], output[1], output[2]);
        if settings.verbose {
            println!("  {}: {:.6} {:.6} {:.6}", gamut.id(), rgb[0], rgb[1], rgb[2]);
        }
    }

    Ok(())
}
