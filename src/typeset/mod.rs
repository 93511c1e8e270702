//! Text measurement and slide drawing.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Measure** | `ab_glyph` scaled advances |
//! | **Draw** | `ab_glyph` outlines at the measured positions, `imageproc` pixel blending |
//! | **Export** | `image` encoders (PNG, JPEG, WebP) |
//!
//! The module is split into:
//! - **Params**: value types crossing the seam (extents, colors, formats)
//! - **Geometry**: pure slot placement math (unit testable)
//! - **Backend**: [`TextMeasure`] / [`RenderBackend`] / [`Surface`] traits
//! - **Font backend**: [`FontBackend`], the production implementation

pub mod backend;
pub mod font_backend;
pub mod geometry;
mod params;

pub use backend::{BackendError, RenderBackend, Surface, TextMeasure};
pub use font_backend::FontBackend;
pub use geometry::SlotGrid;
pub use params::{CanvasSize, Color, FontFace, OutputFormat, Palette, TextExtent};
