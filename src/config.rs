//! Render configuration.
//!
//! Handles loading, validating, and merging `chordslide.toml`. Stock defaults
//! are the base layer; a user file only needs the keys it wants to change.
//! CLI flags (`--width`, `--height`, `--font`) are applied last.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [canvas]
//! width = 3840              # Slide width in pixels
//! height = 1770             # Slide height in pixels
//! background = "#ffffff"
//! format = "png"            # png | jpeg | webp
//!
//! [font]
//! path = "fonts/Ubuntu-M.ttf"
//! lyric_color = "#000000"
//! chord_color = "#000000"
//!
//! [layout]
//! min_size = 8.0            # Smallest font size tried
//! max_size = 600.0          # Largest font size tried
//! epsilon = 0.5             # Font-size search precision
//!
//! [song]
//! end_marker = "CCLI"       # A line starting with this ends the song
//! selector_tag = "comment"  # Stanzas whose first tag has this name are rendered
//! ```
//!
//! Unknown keys are rejected to catch typos early. Relative font paths are
//! resolved against the working directory.

use crate::layout::FitPolicy;
use crate::parser::{DEFAULT_END_MARKER, ParseOptions};
use crate::song::DEFAULT_SELECTOR_TAG;
use crate::typeset::{CanvasSize, Color, OutputFormat, Palette};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chordslide.toml";

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16384;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything a render run needs besides the song itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Slide dimensions, background, and encoding.
    pub canvas: CanvasConfig,
    /// Font file and text colors.
    pub font: FontConfig,
    /// Font-size search bounds.
    pub layout: FitPolicy,
    /// Markup scan settings.
    pub song: SongConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub format: OutputFormat,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 3840,
            height: 1770,
            background: Color::WHITE,
            format: OutputFormat::Png,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub path: PathBuf,
    pub lyric_color: Color,
    pub chord_color: Color,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("fonts/Ubuntu-M.ttf"),
            lyric_color: Color::BLACK,
            chord_color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SongConfig {
    /// A line starting with this token ends the song.
    pub end_marker: String,
    /// Stanzas whose first tag has this name are rendered.
    pub selector_tag: String,
}

impl Default for SongConfig {
    fn default() -> Self {
        Self {
            end_marker: DEFAULT_END_MARKER.to_string(),
            selector_tag: DEFAULT_SELECTOR_TAG.to_string(),
        }
    }
}

/// Values given on the command line, applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub font: Option<PathBuf>,
}

impl RenderConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas.width and canvas.height must be non-zero".into(),
            ));
        }
        if self.canvas.width > MAX_CANVAS_SIDE || self.canvas.height > MAX_CANVAS_SIDE {
            return Err(ConfigError::Validation(format!(
                "canvas.width and canvas.height must be at most {MAX_CANVAS_SIDE}"
            )));
        }
        let layout = &self.layout;
        if !(layout.min_size.is_finite() && layout.min_size > 0.0) {
            return Err(ConfigError::Validation(
                "layout.min_size must be a positive number".into(),
            ));
        }
        if !(layout.max_size.is_finite() && layout.max_size > layout.min_size) {
            return Err(ConfigError::Validation(
                "layout.max_size must be greater than layout.min_size".into(),
            ));
        }
        if !(layout.epsilon.is_finite() && layout.epsilon > 0.0) {
            return Err(ConfigError::Validation(
                "layout.epsilon must be a positive number".into(),
            ));
        }
        if self.font.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("font.path must not be empty".into()));
        }
        if self.song.end_marker.is_empty() {
            return Err(ConfigError::Validation(
                "song.end_marker must not be empty".into(),
            ));
        }
        if self.song.selector_tag.is_empty() {
            return Err(ConfigError::Validation(
                "song.selector_tag must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(width) = overrides.width {
            self.canvas.width = width;
        }
        if let Some(height) = overrides.height {
            self.canvas.height = height;
        }
        if let Some(font) = &overrides.font {
            self.font.path = font.clone();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas.width, self.canvas.height)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            background: self.canvas.background,
            lyric: self.font.lyric_color,
            chord: self.font.chord_color,
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            end_marker: self.song.end_marker.clone(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(RenderConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<RenderConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: RenderConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is absent.
pub fn load_config(path: &Path) -> Result<RenderConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `chordslide.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# chordslide configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Canvas
# ---------------------------------------------------------------------------
[canvas]
# Slide size in pixels, at most 16384 per side. One image is exported per
# rendered stanza.
width = 3840
height = 1770

background = "#ffffff"

# Encoded format of exported slides: "png", "jpeg" or "webp".
format = "png"

# ---------------------------------------------------------------------------
# Font
# ---------------------------------------------------------------------------
[font]
# TrueType/OpenType font used for lyrics and chord labels.
# Relative paths are resolved against the working directory.
path = "fonts/Ubuntu-M.ttf"

lyric_color = "#000000"
chord_color = "#000000"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Lyrics are sized to the largest font size in [min_size, max_size] at which
# the longest line fits the slide width and every chord + lyric row fits the
# slide height. Stanzas without lyrics (chords only) size their chord rows
# the same way, one row per line.
min_size = 8.0
max_size = 600.0

# The search stops once it has narrowed the size down to this precision.
epsilon = 0.5

# ---------------------------------------------------------------------------
# Song markup
# ---------------------------------------------------------------------------
[song]
# A line starting with this token ends the song (licensing footers follow).
end_marker = "CCLI"

# Only stanzas whose first {name: value} tag has this name are rendered.
# The tag's value becomes the slide title and file name.
selector_tag = "comment"
"##
}
