//! Cell: The atomic unit of terminal display.
//!
//! Dots are drawn as solid background fills, so a cell only needs a symbol
//! and two colors. Opacity is resolved at render time by blending the fill
//! against whatever background the cell already holds.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// True-color RGB representation.
///
/// Serializes as a `#rrggbb` string so it can live in configuration files.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Light gray (170, 170, 170), the default dot fill.
    pub const LIGHT_GRAY: Self = Self::new(170, 170, 170);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a `#rrggbb` (or `rrggbb`) string.
    pub fn parse_hex(s: &str) -> Result<Self, ConfigError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    }

    /// Composite `self` over `background` with the given opacity.
    ///
    /// Opacity is clamped to `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn blend_over(self, background: Self, opacity: f32) -> Self {
        let a = opacity.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = f32::from(fg).mul_add(a, f32::from(bg) * (1.0 - a));
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// A single terminal cell: a symbol with foreground and background colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: char,
    fg: Rgb,
    bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        symbol: ' ',
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
    };

    /// Get the symbol.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Set the background color.
    #[inline]
    pub const fn set_bg(&mut self, bg: Rgb) -> &mut Self {
        self.bg = bg;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({:?} fg={:?} bg={:?})", self.symbol, self.fg, self.bg)
    }
}
