//! Font styling records for cell ranges
//!
//! Styles are kept as `(range, style)` entries rather than per cell, matching
//! how they are applied: the user picks a range and a font. Rendering is up
//! to the caller.

use std::fmt;
use std::str::FromStr;

use crate::cell::{CellAddress, CellRange};
use crate::error::{Error, Result};

/// Smallest accepted font size in pixels
pub const MIN_FONT_SIZE: u32 = 8;

/// Largest accepted font size in pixels
pub const MAX_FONT_SIZE: u32 = 36;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Convert to `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidStyle(format!("invalid color '{}'", s)))
    }
}

/// Font weight/slant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Italic,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::Italic => "italic",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontWeight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            "italic" => Ok(FontWeight::Italic),
            other => Err(Error::InvalidStyle(format!("unknown font style '{}'", other))),
        }
    }
}

/// Font settings applied to a range
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    /// Font size in pixels
    size_px: u32,
    /// Font color
    color: Color,
    /// Weight/slant
    weight: FontWeight,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            size_px: 12,
            color: Color::rgb(0, 0, 0),
            weight: FontWeight::Normal,
        }
    }
}

impl FontStyle {
    /// Create a new default font (12px, black, normal)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font size, rejecting sizes outside 8..=36 px
    pub fn with_size(mut self, size_px: u32) -> Result<Self> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size_px) {
            return Err(Error::InvalidStyle(format!(
                "font size {}px outside {}..={}",
                size_px, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        self.size_px = size_px;
        Ok(self)
    }

    /// Set font color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set weight/slant
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }
}

/// Ordered collection of range styles
///
/// Later entries win where ranges overlap. Styling the exact same range
/// again replaces its entry in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(CellRange, FontStyle)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a style to a range
    pub fn apply(&mut self, range: CellRange, style: FontStyle) {
        match self.entries.iter_mut().find(|(r, _)| *r == range) {
            Some(entry) => entry.1 = style,
            None => self.entries.push((range, style)),
        }
    }

    /// The effective style of a cell, if any range covers it
    pub fn style_at(&self, row: usize, col: usize) -> Option<&FontStyle> {
        let addr = CellAddress::new(row, col);
        self.entries
            .iter()
            .rev()
            .find(|(range, _)| range.contains(&addr))
            .map(|(_, style)| style)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
