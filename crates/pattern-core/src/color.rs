//! Coordinate-to-color strategies.
//!
//! One strategy is picked per redraw and applied to every cell of that redraw.
//! Each strategy mixes the cell coordinates with fresh random draws, so cells
//! share a family of colors without sharing exact values.

use rand::Rng;
use std::fmt;

/// A color in CSS HSL terms. Components are kept unclamped so the markup
/// reflects exactly what the strategy produced; browsers clamp on parse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit sRGB the way a CSS parser would: hue wrapped into
    /// [0, 360), saturation and lightness clamped to [0, 100].
    pub fn to_rgb8(&self) -> [u8; 3] {
        let h = finite_or_zero(self.hue).rem_euclid(360.0) / 360.0;
        let s = finite_or_zero(self.saturation).clamp(0.0, 100.0) / 100.0;
        let l = finite_or_zero(self.lightness).clamp(0.0, 100.0) / 100.0;
        if s == 0.0 {
            let v = to_byte(l);
            return [v, v, v];
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_byte(hue_to_channel(p, q, h)),
            to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
        ]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Truncated remainder with a zero divisor mapped to zero instead of NaN.
#[inline]
fn rem_or_zero(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a % b
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFunction {
    /// Hue from the coordinate product modulo a random angle.
    Modulo,
    /// Like `Modulo` but shaped through cosine/sine of the draws.
    Wave,
    /// Wider hue and lightness swing than `Wave`.
    Ripple,
    /// Hue bands following the vertical coordinate.
    Banded,
}

impl ColorFunction {
    pub const ALL: [ColorFunction; 4] = [
        ColorFunction::Modulo,
        ColorFunction::Wave,
        ColorFunction::Ripple,
        ColorFunction::Banded,
    ];

    /// Pick one strategy uniformly.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n = Self::ALL.len();
        let idx = ((rng.gen::<f64>() * n as f64) as usize).min(n - 1);
        Self::ALL[idx]
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorFunction::Modulo => "modulo",
            ColorFunction::Wave => "wave",
            ColorFunction::Ripple => "ripple",
            ColorFunction::Banded => "banded",
        }
    }

    /// Color for a cell at `(x, y)`. Draws are taken in the order the
    /// components are listed: hue, saturation, lightness.
    pub fn apply<R: Rng + ?Sized>(self, x: f64, y: f64, rng: &mut R) -> Hsl {
        let xy = x * y;
        match self {
            ColorFunction::Modulo => {
                let hue = rem_or_zero(xy, rng.gen::<f64>() * 360.0);
                let saturation = 25.0 + rng.gen::<f64>() * 50.0;
                let lightness = 15.0 + rng.gen::<f64>() * 45.0;
                Hsl::new(hue, saturation, lightness)
            }
            ColorFunction::Wave => {
                let hue = rem_or_zero(xy, rng.gen::<f64>().cos() * 180.0);
                let saturation = 15.0 + rng.gen::<f64>().sin() * 50.0;
                let lightness = (rng.gen::<f64>().cos() + rng.gen::<f64>().sin()) * 35.0;
                Hsl::new(hue, saturation, lightness)
            }
            ColorFunction::Ripple => {
                let hue = rem_or_zero(xy, rng.gen::<f64>().sin() * 360.0);
                let saturation = 25.0 + rng.gen::<f64>().cos() * 50.0;
                let lightness = (rng.gen::<f64>().sin() + rng.gen::<f64>().cos()) * 45.0;
                Hsl::new(hue, saturation, lightness)
            }
            ColorFunction::Banded => {
                let hue = rem_or_zero(y, 360.0);
                let saturation = 50.0 + rng.gen::<f64>() * rem_or_zero(x, 50.0);
                let lightness = 45.0 + rng.gen::<f64>() * rem_or_zero(xy, 5.0);
                Hsl::new(hue, saturation, lightness)
            }
        }
    }
}

impl fmt::Display for ColorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
