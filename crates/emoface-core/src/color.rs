//! Colors for the face widget.

use crate::error::{FaceError, FaceResult};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA8 color, serialized as a `#RRGGBB` or `#AARRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FaceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl FaceColor {
    pub const BLACK: FaceColor = FaceColor::rgb(0, 0, 0);
    pub const WHITE: FaceColor = FaceColor::rgb(255, 255, 255);
    pub const YELLOW: FaceColor = FaceColor::rgb(255, 255, 0);
    pub const TRANSPARENT: FaceColor = FaceColor::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a hex color.
    ///
    /// Accepts `#RRGGBB` and the Android-style `#AARRGGBB`; the leading `#`
    /// is optional.
    pub fn from_hex(hex: &str) -> FaceResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(FaceError::InvalidColor(hex.to_string()));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| FaceError::InvalidColor(hex.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => Err(FaceError::InvalidColor(hex.to_string())),
        }
    }

    /// Hex form: `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }

    /// Opacity in `0.0..=1.0`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl fmt::Display for FaceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for FaceColor {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for FaceColor {
    type Error = FaceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<FaceColor> for String {
    fn from(color: FaceColor) -> Self {
        color.to_hex()
    }
}

impl From<Color> for FaceColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<FaceColor> for Color {
    fn from(color: FaceColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}
