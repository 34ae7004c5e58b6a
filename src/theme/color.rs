//! RGBA colors: hex parsing, HSL conversion, and weight shifting.
//!
//! The only fallible surface of the crate lives here: turning a hex string
//! into a [`Color`]. Everything downstream is a total function.

use std::fmt;
use std::str::FromStr;

/// Errors from color parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Create an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
    /// The leading `#` is optional.
    pub fn parse_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let err = || ColorError::InvalidHex(s.to_string());
        let nibble = |c: u8| -> Result<u8, ColorError> {
            (c as char).to_digit(16).map(|d| d as u8).ok_or_else(&err)
        };
        let bytes = hex.as_bytes();
        match bytes.len() {
            3 | 4 => {
                let mut out = [0u8; 4];
                out[3] = 0xff;
                for (i, &c) in bytes.iter().enumerate() {
                    let n = nibble(c)?;
                    out[i] = n << 4 | n;
                }
                Ok(Self::rgba(out[0], out[1], out[2], out[3]))
            }
            6 | 8 => {
                let mut out = [0u8; 4];
                out[3] = 0xff;
                for i in 0..bytes.len() / 2 {
                    out[i] = nibble(bytes[2 * i])? << 4 | nibble(bytes[2 * i + 1])?;
                }
                Ok(Self::rgba(out[0], out[1], out[2], out[3]))
            }
            _ => Err(err()),
        }
    }

    /// Format as a hex string: `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Convert to HSL. Hue is in degrees `[0, 360)`, saturation and
    /// lightness in `[0, 1]`. Alpha is dropped.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return (0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h * 60.0, s, l)
    }

    /// Build an opaque color from HSL components (see [`Color::to_hsl`]).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        fn hue(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self::rgb(v, v, v);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::rgb(
            (hue(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            (hue(p, q, h) * 255.0).round() as u8,
            (hue(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
        )
    }

    /// Move lightness toward white by `amount` in `[0, 1]`.
    pub fn lighten(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        let shifted = Self::from_hsl(h, s, l + (1.0 - l) * amount.clamp(0.0, 1.0));
        Self { a: self.a, ..shifted }
    }

    /// Move lightness toward black by `amount` in `[0, 1]`.
    pub fn darken(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        let shifted = Self::from_hsl(h, s, l * (1.0 - amount.clamp(0.0, 1.0)));
        Self { a: self.a, ..shifted }
    }
}

/// Shift a color by a signed weight amount: positive darkens, negative
/// lightens, `±1` saturates at black/white. `0` is the identity (exactly:
/// the input is returned unmodified, which is the defining contract of the
/// `"500"` weight).
pub fn shift_color(color: Color, amount: f64) -> Color {
    if amount == 0.0 {
        return color;
    }
    if amount > 0.0 {
        color.darken(amount)
    } else {
        color.lighten(-amount)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
