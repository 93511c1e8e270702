//! Value types passed across the typesetting seam.
//!
//! These describe *what* to measure or draw, not *how*. The layout engine and
//! the render stage only ever talk to a backend in these terms, which lets
//! tests swap in a mock backend without touching layout logic.
//!
//! ## Types
//!
//! - [`CanvasSize`]: target image dimensions in pixels.
//! - [`TextExtent`]: measured bounding box of a string at a font size.
//! - [`FontFace`]: which role a piece of text plays (lyric or chord label).
//! - [`Color`] / [`Palette`]: `#rrggbb` colors for background and text.
//! - [`OutputFormat`]: encoded image format of exported slides.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Bounding box of a measured string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

impl TextExtent {
    pub const ZERO: TextExtent = TextExtent {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Lyric,
    Chord,
}

/// An opaque RGB color, written `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const WHITE: Color = Color([0xff, 0xff, 0xff]);
    pub const BLACK: Color = Color([0x00, 0x00, 0x00]);
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| format!("expected #rrggbb, got {s:?}"))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("bad hex color {s:?}"))
        };
        Ok(Color([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Colors for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub lyric: Color,
    pub chord: Color,
}

impl Palette {
    pub fn text(&self, face: FontFace) -> Color {
        match face {
            FontFace::Lyric => self.lyric,
            FontFace::Chord => self.chord,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            lyric: Color::BLACK,
            chord: Color::BLACK,
        }
    }
}

/// Encoded format of exported slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Webp => "webp",
        }
    }
}
