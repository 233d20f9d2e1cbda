//! Text rendering of CLI results

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use sheen_animation::Easing;
use sheen_core::{Color, Gradient};

/// How color sequences are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `rgba(r, g, b, a)` line per color
    #[default]
    Rgba,
    /// One hex code per line
    Hex,
    /// JSON array
    Json,
}

#[derive(Serialize)]
struct EasingEntry {
    name: &'static str,
    label: &'static str,
}

/// Catalog listing, one curve per line or as JSON
pub fn format_easings(json: bool) -> Result<String> {
    if json {
        let entries: Vec<EasingEntry> = Easing::all()
            .map(|easing| EasingEntry {
                name: easing.name(),
                label: easing.label(),
            })
            .collect();
        return serde_json::to_string_pretty(&entries).context("Failed to serialize easing list");
    }

    let width = Easing::all().map(|e| e.name().len()).max().unwrap_or(0);
    Ok(Easing::all()
        .map(|easing| format!("{:width$}  {}", easing.name(), easing.label()))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Color sequence in the requested format. Text formats always print the
/// normalized RGBA value.
pub fn format_colors(colors: &[Color], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Rgba => Ok(colors
            .iter()
            .map(|color| color.to_rgba().to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Hex => Ok(colors
            .iter()
            .map(Color::to_hex_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(colors).context("Failed to serialize colors")
        }
    }
}

pub fn format_gradient(gradient: &Gradient) -> Result<String> {
    serde_json::to_string_pretty(gradient).context("Failed to serialize gradient")
}
