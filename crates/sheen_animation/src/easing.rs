//! Easing curves
//!
//! Easing functions specify the rate of change of a parameter over time.
//! Every curve follows Robert Penner's reference definitions and is
//! evaluated with the classic four-argument form
//! `calculate_with(t, begin, change, duration)`. Gradient interpolation only
//! ever uses the normalized form [`Easing::calculate`], i.e. `begin = 0`,
//! `change = 1`, `duration = 1`.
//!
//! Input outside `[0, duration]` is not clamped. Back and elastic curves
//! overshoot `[begin, begin + change]` by design of the formulas.
//!
//! Curves are compared by catalog entry: two variants are never equal even
//! where their formulas agree.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overshoot amount of the back curves
const BACK_OVERSHOOT: f32 = 1.70158;
/// Extra overshoot scale applied by the back in/out curve
const BACK_IN_OUT_SCALE: f32 = 1.525;

/// Error returned when a curve name is not in the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown easing curve '{0}'")]
pub struct ParseEasingError(pub String);

/// A named easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Easing {
    Linear,

    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,

    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,

    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,

    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,

    EaseInSine,
    EaseOutSine,
    #[default]
    EaseInOutSine,

    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,

    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,

    EaseInBack,
    EaseOutBack,
    EaseInOutBack,

    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,

    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
}

impl Easing {
    /// Every curve in the catalog
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInCirc,
        Easing::EaseOutCirc,
        Easing::EaseInOutCirc,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
        Easing::EaseInBounce,
        Easing::EaseOutBounce,
        Easing::EaseInOutBounce,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
    ];

    /// Iterate over the whole catalog
    pub fn all() -> impl Iterator<Item = Easing> {
        Self::ALL.into_iter()
    }

    /// Stable identifier used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "ease-in-quad",
            Easing::EaseOutQuad => "ease-out-quad",
            Easing::EaseInOutQuad => "ease-in-out-quad",
            Easing::EaseInCubic => "ease-in-cubic",
            Easing::EaseOutCubic => "ease-out-cubic",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
            Easing::EaseInQuart => "ease-in-quart",
            Easing::EaseOutQuart => "ease-out-quart",
            Easing::EaseInOutQuart => "ease-in-out-quart",
            Easing::EaseInQuint => "ease-in-quint",
            Easing::EaseOutQuint => "ease-out-quint",
            Easing::EaseInOutQuint => "ease-in-out-quint",
            Easing::EaseInSine => "ease-in-sine",
            Easing::EaseOutSine => "ease-out-sine",
            Easing::EaseInOutSine => "ease-in-out-sine",
            Easing::EaseInCirc => "ease-in-circ",
            Easing::EaseOutCirc => "ease-out-circ",
            Easing::EaseInOutCirc => "ease-in-out-circ",
            Easing::EaseInExpo => "ease-in-expo",
            Easing::EaseOutExpo => "ease-out-expo",
            Easing::EaseInOutExpo => "ease-in-out-expo",
            Easing::EaseInBack => "ease-in-back",
            Easing::EaseOutBack => "ease-out-back",
            Easing::EaseInOutBack => "ease-in-out-back",
            Easing::EaseInBounce => "ease-in-bounce",
            Easing::EaseOutBounce => "ease-out-bounce",
            Easing::EaseInOutBounce => "ease-in-out-bounce",
            Easing::EaseInElastic => "ease-in-elastic",
            Easing::EaseOutElastic => "ease-out-elastic",
            Easing::EaseInOutElastic => "ease-in-out-elastic",
        }
    }

    /// Human-readable label, for display only
    pub fn label(self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::EaseInQuad => "Quadratic Ease In",
            Easing::EaseOutQuad => "Quadratic Ease Out",
            Easing::EaseInOutQuad => "Quadratic Ease In/Out",
            Easing::EaseInCubic => "Cubic Ease In",
            Easing::EaseOutCubic => "Cubic Ease Out",
            Easing::EaseInOutCubic => "Cubic Ease In/Out",
            Easing::EaseInQuart => "Quartic Ease In",
            Easing::EaseOutQuart => "Quartic Ease Out",
            Easing::EaseInOutQuart => "Quartic Ease In/Out",
            Easing::EaseInQuint => "Quintic Ease In",
            Easing::EaseOutQuint => "Quintic Ease Out",
            Easing::EaseInOutQuint => "Quintic Ease In/Out",
            Easing::EaseInSine => "Sine Ease In",
            Easing::EaseOutSine => "Sine Ease Out",
            Easing::EaseInOutSine => "Sine Ease In/Out (Default)",
            Easing::EaseInCirc => "Circular Ease In",
            Easing::EaseOutCirc => "Circular Ease Out",
            Easing::EaseInOutCirc => "Circular Ease In/Out",
            Easing::EaseInExpo => "Expo Ease In",
            Easing::EaseOutExpo => "Expo Ease Out",
            Easing::EaseInOutExpo => "Expo Ease In/Out",
            Easing::EaseInBack => "Back Ease In",
            Easing::EaseOutBack => "Back Ease Out",
            Easing::EaseInOutBack => "Back Ease In/Out",
            Easing::EaseInBounce => "Bounce Ease In",
            Easing::EaseOutBounce => "Bounce Ease Out",
            Easing::EaseInOutBounce => "Bounce Ease In/Out",
            Easing::EaseInElastic => "Elastic Ease In",
            Easing::EaseOutElastic => "Elastic Ease Out",
            Easing::EaseInOutElastic => "Elastic Ease In/Out",
        }
    }

    /// Normalized evaluation: progress in `[0, 1]` to eased progress
    #[inline]
    pub fn calculate(self, t: f32) -> f32 {
        self.calculate_with(t, 0.0, 1.0, 1.0)
    }

    /// Evaluate the curve at time `t` for a value starting at `b`, changing
    /// by `c` over duration `d`
    pub fn calculate_with(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        match self {
            Easing::Linear => c * (t / d) + b,

            // Quadratic
            Easing::EaseInQuad => {
                let t = t / d;
                c * t * t + b
            }
            Easing::EaseOutQuad => {
                let t = t / d;
                -c * t * (t - 2.0) + b
            }
            Easing::EaseInOutQuad => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t + b;
                }
                let t = t - 1.0;
                -c / 2.0 * (t * (t - 2.0) - 1.0) + b
            }

            // Cubic
            Easing::EaseInCubic => {
                let t = t / d;
                c * t * t * t + b
            }
            Easing::EaseOutCubic => {
                let t = t / d - 1.0;
                c * (t * t * t + 1.0) + b
            }
            Easing::EaseInOutCubic => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t * t + b;
                }
                let t = t - 2.0;
                c / 2.0 * (t * t * t + 2.0) + b
            }

            // Quartic
            Easing::EaseInQuart => {
                let t = t / d;
                c * t * t * t * t + b
            }
            Easing::EaseOutQuart => {
                let t = t / d - 1.0;
                -c * (t * t * t * t - 1.0) + b
            }
            Easing::EaseInOutQuart => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t * t * t + b;
                }
                let t = t - 2.0;
                -c / 2.0 * (t * t * t * t - 2.0) + b
            }

            // Quintic
            Easing::EaseInQuint => {
                let t = t / d;
                c * t * t * t * t * t + b
            }
            Easing::EaseOutQuint => {
                let t = t / d - 1.0;
                c * (t * t * t * t * t + 1.0) + b
            }
            Easing::EaseInOutQuint => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * t * t * t * t * t + b;
                }
                let t = t - 2.0;
                c / 2.0 * (t * t * t * t * t + 2.0) + b
            }

            // Sine
            Easing::EaseInSine => -c * (t / d * (PI / 2.0)).cos() + c + b,
            Easing::EaseOutSine => c * (t / d * (PI / 2.0)).sin() + b,
            Easing::EaseInOutSine => -c / 2.0 * ((PI * t / d).cos() - 1.0) + b,

            // Circular
            Easing::EaseInCirc => {
                let t = t / d;
                -c * ((1.0 - t * t).sqrt() - 1.0) + b
            }
            Easing::EaseOutCirc => {
                let t = t / d - 1.0;
                c * (1.0 - t * t).sqrt() + b
            }
            Easing::EaseInOutCirc => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
                }
                let t = t - 2.0;
                c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
            }

            // Exponential; flat endpoints avoid the 2^-10 residue at the edges
            Easing::EaseInExpo => {
                if t == 0.0 {
                    return b;
                }
                c * 2f32.powf(10.0 * (t / d - 1.0)) + b
            }
            Easing::EaseOutExpo => {
                if t == d {
                    return b + c;
                }
                c * (-(2f32.powf(-10.0 * t / d)) + 1.0) + b
            }
            Easing::EaseInOutExpo => {
                if t == 0.0 {
                    return b;
                }
                if t == d {
                    return b + c;
                }
                // First half runs on the un-halved progress
                let halved = t / (d / 2.0);
                if halved < 1.0 {
                    return c / 2.0 * 2f32.powf(10.0 * (t / d - 1.0)) + b;
                }
                c / 2.0 * (-(2f32.powf(-10.0 * (halved - 1.0))) + 2.0) + b
            }

            // Back
            Easing::EaseInBack => {
                let s = BACK_OVERSHOOT;
                let t = t / d;
                c * t * t * ((s + 1.0) * t - s) + b
            }
            Easing::EaseOutBack => {
                let s = BACK_OVERSHOOT;
                let t = t / d - 1.0;
                c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
            }
            Easing::EaseInOutBack => {
                let s = BACK_OVERSHOOT * BACK_IN_OUT_SCALE;
                let t = t / (d / 2.0);
                if t < 1.0 {
                    return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
                }
                let t = t - 2.0;
                c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
            }

            // Bounce
            Easing::EaseInBounce => c - bounce_out(d - t, 0.0, c, d) + b,
            Easing::EaseOutBounce => bounce_out(t, b, c, d),
            Easing::EaseInOutBounce => {
                if t < d / 2.0 {
                    return Easing::EaseInBounce.calculate_with(t * 2.0, 0.0, c, d) * 0.5 + b;
                }
                bounce_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
            }

            // Elastic
            Easing::EaseInElastic => {
                if t == 0.0 {
                    return b;
                }
                let t = t / d;
                if t == 1.0 {
                    return b + c;
                }
                let (p, a) = (d * 0.3, c);
                let s = p / 4.0;
                let t = t - 1.0;
                -(a * 2f32.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
            }
            Easing::EaseOutElastic => {
                if t == 0.0 {
                    return b;
                }
                let t = t / d;
                if t == 1.0 {
                    return b + c;
                }
                let (p, a) = (d * 0.3, c);
                let s = p / 4.0;
                a * 2f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
            }
            Easing::EaseInOutElastic => {
                if t == 0.0 {
                    return b;
                }
                let t = t / (d / 2.0);
                if t == 2.0 {
                    return b + c;
                }
                let (p, a) = (d * (0.3 * 1.5), c);
                let s = p / 4.0;
                let t = t - 1.0;
                let wave = ((t * d - s) * (2.0 * PI) / p).sin();
                if t < 0.0 {
                    return -0.5 * (a * 2f32.powf(10.0 * t) * wave) + b;
                }
                a * 2f32.powf(-10.0 * t) * wave * 0.5 + c + b
            }
        }
    }
}

/// Piecewise parabolic bounce shared by all bounce variants
fn bounce_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    /// Accepts the kebab-case identifier as well as snake_case and
    /// camelCase spellings (`ease_in_out_sine`, `easeInOutSine`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        Self::all()
            .find(|easing| squash(easing.name()) == wanted)
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl TryFrom<String> for Easing {
    type Error = ParseEasingError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Easing> for &'static str {
    fn from(easing: Easing) -> Self {
        easing.name()
    }
}
