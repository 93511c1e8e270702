//! Typesetting backend traits and shared error type.
//!
//! The layout engine needs exactly one capability, [`TextMeasure`]. The render
//! stage additionally needs to allocate a drawing [`Surface`] per section,
//! which is what [`RenderBackend`] adds.
//!
//! The production implementation is
//! [`FontBackend`](super::font_backend::FontBackend): `ab_glyph` for font
//! loading, metrics and glyph outlines, `imageproc` for coverage blending,
//! `image` for encoding.

use super::params::{CanvasSize, FontFace, OutputFormat, TextExtent};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },
    #[error("Cannot measure {text:?} at size {size}: {reason}")]
    Measurement {
        size: f32,
        text: String,
        reason: String,
    },
    #[error("Failed to encode {path}: {reason}")]
    Encoding { path: PathBuf, reason: String },
}

/// Pixel measurement of text at a font size.
///
/// Implementations must be pure: the same `(size, text)` always measures the
/// same, and width must not shrink as size grows.
pub trait TextMeasure {
    fn measure_text(&self, size: f32, text: &str) -> Result<TextExtent, BackendError>;
}

/// A single-use drawing target for one section.
pub trait Surface {
    /// Draw `text` with its line box's top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, size: f32, text: &str, face: FontFace);

    /// Encode the drawing to `path`. Consumes the surface.
    fn export(self, path: &Path, format: OutputFormat) -> Result<(), BackendError>;
}

/// Measurement plus surface allocation.
pub trait RenderBackend: TextMeasure {
    type Surface: Surface;

    /// A fresh surface filled with the background color.
    fn new_surface(&self, canvas: CanvasSize) -> Self::Surface;
}

/// Reject sizes no backend can measure at.
pub(crate) fn check_size(size: f32, text: &str) -> Result<(), BackendError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(BackendError::Measurement {
            size,
            text: text.to_string(),
            reason: "font size must be a positive finite number".into(),
        })
    }
}
