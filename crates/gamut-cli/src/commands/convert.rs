//! Single color conversion between any two spaces.
//!
//! Polar hues are read and printed in degrees.

use super::{hue_to_degrees, hue_to_radians, parse_space};
use crate::{ConvertArgs, Settings};
use anyhow::{ensure, Result};
use gamut_color::convert_coords;
use gamut_core::ColorSpaceId;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct ConvertOutput {
    from: ColorSpaceId,
    to: ColorSpaceId,
    white: &'static str,
    input: [f64; 3],
    output: [f64; 3],
}

/// Runs the convert command.
pub fn run(args: ConvertArgs, settings: &Settings) -> Result<()> {
    let from = parse_space(&args.from)?;
    let to = parse_space(&args.to)?;
    ensure!(args.values.len() == 3, "Expected 3 components, got {}", args.values.len());

    let input = [args.values[0], args.values[1], args.values[2]];
    let mut coords = input;
    if from.is_polar() {
        coords[2] = hue_to_radians(coords[2]);
    }

    debug!(%from, %to, white = settings.white.name, ?coords, "convert");
    let mut output = convert_coords(from, to, coords, &settings.white);
    if to.is_polar() {
        output[2] = hue_to_degrees(output[2]);
    }

    if settings.json {
        let out = ConvertOutput {
            from,
            to,
            white: settings.white.name,
            input,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        if settings.verbose {
            println!("{} -> {} (white {})", from, to, settings.white.name);
        }
        println!("{:.6} {:.6} {:.6}", output[0], output[1], output[2]);
    }

    Ok(())
}
