//! Sheen CLI
//!
//! List easing curves, expand anchor colors into smoothed sequences and
//! render gradient files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod output;

use output::OutputFormat;
use sheen_animation::Easing;
use sheen_core::Color;
use sheen_gradient::{ColorInterpolator, SmoothGradient, DEFAULT_SMOOTHNESS};

#[derive(Parser)]
#[command(name = "sheen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Smooth multi-stop gradients", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every easing curve with its label
    Eases {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand anchor colors into an eased color sequence
    Interpolate {
        /// Anchor colors: #rgb, #rrggbb, #rrggbbaa or gray:<white>[:<alpha>]
        #[arg(required = true)]
        colors: Vec<Color>,

        /// Easing curve between anchors (see `sheen eases`)
        #[arg(short, long, default_value = "ease-in-out-sine")]
        easing: Easing,

        /// Intermediate colors between each pair of anchors
        #[arg(short, long, default_value_t = DEFAULT_SMOOTHNESS)]
        steps: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Rgba)]
        format: OutputFormat,
    },

    /// Render a gradient file to a renderer-neutral JSON description
    Render {
        /// Gradient file (TOML)
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Eases { json } => cmd_eases(json),

        Commands::Interpolate {
            colors,
            easing,
            steps,
            format,
        } => cmd_interpolate(colors, easing, steps, format),

        Commands::Render { config } => cmd_render(&config),
    }
}

fn cmd_eases(json: bool) -> Result<()> {
    println!("{}", output::format_easings(json)?);
    Ok(())
}

fn cmd_interpolate(colors: Vec<Color>, easing: Easing, steps: u32, format: OutputFormat) -> Result<()> {
    let interpolator = ColorInterpolator::new(colors, easing, steps);
    let sequence = interpolator.interpolate();

    info!(
        "Interpolated {} anchors into {} colors ({})",
        interpolator.colors().len(),
        sequence.len(),
        easing
    );

    println!("{}", output::format_colors(&sequence, format)?);
    Ok(())
}

fn cmd_render(path: &Path) -> Result<()> {
    let gradient = SmoothGradient::load(path)
        .with_context(|| format!("Failed to load gradient from {}", path.display()))?;
    let rendered = gradient.to_gradient();

    info!(
        "Rendered {:?} gradient with {} stops from {}",
        rendered.kind(),
        rendered.stops().len(),
        path.display()
    );

    println!("{}", output::format_gradient(&rendered)?);
    Ok(())
}
