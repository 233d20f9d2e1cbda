//! Color values
//!
//! A [`Color`] is either a four-channel RGBA value or a single-channel
//! grayscale value with alpha. Both models keep their native components.
//! Mixing always produces RGBA, so a grayscale anchor keeps its model only
//! where the interpolator emits it without mixing: the final anchor, or
//! every anchor when the step count is zero. Consumers that need four
//! channels call [`Color::to_array`] or [`Color::to_rgba`], which replicate
//! the gray intensity into R, G and B.
//!
//! Channel values are nominally in `[0.0, 1.0]` but are never clamped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

/// Errors produced when parsing a color from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex code with a digit count other than 3, 6 or 8
    #[error("invalid hex color length {0}, expected 3, 6 or 8 digits")]
    InvalidLength(usize),

    /// Hex code containing non-hex characters
    #[error("invalid hex digits in color '{0}'")]
    InvalidDigits(String),

    /// Malformed `gray:<white>[:<alpha>]` literal
    #[error("invalid grayscale color '{0}'")]
    InvalidGray(String),
}

/// RGBA or grayscale color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "ColorRepr")]
pub enum Color {
    /// Four-channel color
    Rgba { r: f32, g: f32, b: f32, a: f32 },
    /// Single intensity channel plus alpha
    Gray { white: f32, alpha: f32 },
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Opaque grayscale color
    pub const fn gray(white: f32) -> Self {
        Self::Gray { white, alpha: 1.0 }
    }

    pub const fn gray_alpha(white: f32, alpha: f32) -> Self {
        Self::Gray { white, alpha }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse a hex color code, with or without a leading `#`.
    ///
    /// Accepts 3-digit (`#f80`), 6-digit (`#ff8800`) and 8-digit
    /// (`#ff880080`, alpha last) codes.
    pub fn from_hex_str(code: &str) -> Result<Self, ParseColorError> {
        let code = code.trim().trim_start_matches('#');
        if !code.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigits(code.to_string()));
        }
        let value = match code.len() {
            3 | 6 | 8 => u32::from_str_radix(code, 16)
                .map_err(|_| ParseColorError::InvalidDigits(code.to_string()))?,
            len => return Err(ParseColorError::InvalidLength(len)),
        };

        let channel = |v: u32| v as f32 / 255.0;
        Ok(match code.len() {
            3 => Self::rgb(
                channel(((value & 0xF00) >> 8) * 0x11),
                channel(((value & 0x0F0) >> 4) * 0x11),
                channel((value & 0x00F) * 0x11),
            ),
            6 => Self::from_hex(value),
            _ => Self::rgba(
                channel((value >> 24) & 0xFF),
                channel((value >> 16) & 0xFF),
                channel((value >> 8) & 0xFF),
                channel(value & 0xFF),
            ),
        })
    }

    /// Hex code of the normalized color. Alpha is appended only when the
    /// color is not fully opaque.
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        if a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    pub fn is_grayscale(&self) -> bool {
        matches!(self, Color::Gray { .. })
    }

    /// Native components in model order: `[r, g, b, a]` or `[white, alpha]`
    pub fn components(&self) -> SmallVec<[f32; 4]> {
        match *self {
            Color::Rgba { r, g, b, a } => smallvec![r, g, b, a],
            Color::Gray { white, alpha } => smallvec![white, alpha],
        }
    }

    /// Normalized `[r, g, b, a]`; grayscale intensity is replicated into
    /// the three color channels.
    pub fn to_array(&self) -> [f32; 4] {
        match *self {
            Color::Rgba { r, g, b, a } => [r, g, b, a],
            Color::Gray { white, alpha } => [white, white, white, alpha],
        }
    }

    /// Same color expressed in the four-channel model
    pub fn to_rgba(&self) -> Color {
        let [r, g, b, a] = self.to_array();
        Color::rgba(r, g, b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r:.3}, {g:.3}, {b:.3}, {a:.3})"),
            Color::Gray { white, alpha } => write!(f, "gray({white:.3}, {alpha:.3})"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses hex codes or `gray:<white>[:<alpha>]` literals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(gray) = s.strip_prefix("gray:") else {
            return Self::from_hex_str(s);
        };

        let invalid = || ParseColorError::InvalidGray(s.to_string());
        let mut parts = gray.split(':');
        let white = parts
            .next()
            .and_then(|w| w.trim().parse::<f32>().ok())
            .ok_or_else(invalid)?;
        let alpha = match parts.next() {
            Some(a) => a.trim().parse::<f32>().map_err(|_| invalid())?,
            None => 1.0,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::gray_alpha(white, alpha))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serialized form
// ─────────────────────────────────────────────────────────────────────────────

fn opaque() -> f32 {
    1.0
}

/// Accepted on-disk shapes: `"#rrggbb"`, `{ r, g, b, a? }`, `{ gray, alpha? }`
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Rgba {
        r: f32,
        g: f32,
        b: f32,
        #[serde(default = "opaque")]
        a: f32,
    },
    Gray {
        gray: f32,
        #[serde(default = "opaque")]
        alpha: f32,
    },
}

impl TryFrom<ColorRepr> for Color {
    type Error = ParseColorError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(code) => code.parse(),
            ColorRepr::Rgba { r, g, b, a } => Ok(Color::rgba(r, g, b, a)),
            ColorRepr::Gray { gray, alpha } => Ok(Color::gray_alpha(gray, alpha)),
        }
    }
}

impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        match color {
            Color::Rgba { r, g, b, a } => ColorRepr::Rgba { r, g, b, a },
            Color::Gray { white, alpha } => ColorRepr::Gray { gray: white, alpha },
        }
    }
}
