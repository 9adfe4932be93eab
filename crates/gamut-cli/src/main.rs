//! gamut - color conversion and gamut-boundary queries
//!
//! Thin command line front end over `gamut-color`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gamut_color::SolverConfig;
use gamut_primaries::WhitePoint;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "gamut")]
#[command(author, version, about = "Color conversion and gamut-boundary queries")]
#[command(long_about = "
Converts single colors between XYZ, linear RGB (sRGB, Rec.709, Rec.2020),
Lab, Luv and their LCh forms, and finds gamut boundaries at constant
lightness and hue.

Hues on the command line are in degrees.

Examples:
  gamut convert --from srgb --to lch-uv 1 0 0
  gamut convert --from rec2020 --to rec709 0.396 0.447 0.667
  gamut boundary --space srgb 53.24 12.18
  gamut map --space srgb --policy soft --knee 0.7 60 150 230
  gamut --json --white d50 convert --from lab --to xyz 50 20 -10
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Reference white: d65, d65-10, d50
    #[arg(long, global = true, default_value = "d65")]
    white: String,

    /// Solver convergence tolerance (chroma units)
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Solver iteration budget
    #[arg(long, global = true)]
    max_iterations: Option<u32>,

    /// Half-width of the gamut boundary band (RGB units)
    #[arg(long, global = true)]
    epsilon: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color between two spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Find the largest in-gamut chroma at a lightness and hue
    #[command(visible_alias = "b")]
    Boundary(BoundaryArgs),

    /// Bring an LCh color into gamut by reducing chroma
    #[command(visible_alias = "m")]
    Map(MapArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Source color space
    #[arg(short, long)]
    from: String,

    /// Target color space
    #[arg(short, long)]
    to: String,

    /// Three components in the source space
    #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(Args)]
struct BoundaryArgs {
    /// Target RGB space
    #[arg(short, long, default_value = "srgb")]
    space: String,

    /// Polar space the lightness and hue refer to: lch-ab or lch-uv
    #[arg(short, long, default_value = "lch-uv")]
    polar: String,

    /// Lightness (0-100)
    lightness: f64,

    /// Hue in degrees
    #[arg(allow_negative_numbers = true)]
    hue: f64,
}

/// Chroma reduction policy.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum PolicyArg {
    /// Hard clip to the boundary
    Clip,
    /// Gradual dampening above a knee
    Soft,
}

#[derive(Args)]
struct MapArgs {
    /// Target RGB space
    #[arg(short, long, default_value = "srgb")]
    space: String,

    /// Polar space of the input: lch-ab or lch-uv
    #[arg(short, long, default_value = "lch-uv")]
    polar: String,

    /// Chroma policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Clip)]
    policy: PolicyArg,

    /// Knee for the soft policy, as a fraction of the boundary
    #[arg(long, default_value_t = 0.8)]
    knee: f64,

    /// Lightness (0-100)
    lightness: f64,

    /// Chroma
    chroma: f64,

    /// Hue in degrees
    #[arg(allow_negative_numbers = true)]
    hue: f64,
}

/// Settings shared by all commands.
pub(crate) struct Settings {
    pub white: WhitePoint,
    pub config: SolverConfig,
    pub json: bool,
    pub verbose: bool,
}

impl Settings {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let white = WhitePoint::lookup(&cli.white)
            .with_context(|| format!("Invalid --white '{}'", cli.white))?;

        let mut config = SolverConfig::default();
        if let Some(tolerance) = cli.tolerance {
            config = config.with_tolerance(tolerance);
        }
        if let Some(max_iterations) = cli.max_iterations {
            config = config.with_max_iterations(max_iterations);
        }
        if let Some(epsilon) = cli.epsilon {
            config = config.with_gamut_epsilon(epsilon);
        }

        Ok(Self {
            white,
            config,
            json: cli.json,
            verbose: cli.verbose,
        })
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "gamut_color=debug,gamut=debug"
    } else {
        "gamut_color=warn,gamut=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::from_cli(&cli)?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &settings),
        Commands::Boundary(args) => commands::boundary::run(args, &settings),
        Commands::Map(args) => commands::map::run(args, &settings),
    }
}
