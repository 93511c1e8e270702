//! Pure Rust typesetting backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Load TTF/OTF | `ab_glyph::FontArc::try_from_vec` |
//! | Lay out | [`layout_run`]: glyphs on a pen advanced by scaled `h_advance` |
//! | Measure | the run's pen position, `ascent - descent` height |
//! | Draw | `ab_glyph` outlines of the same run, blended with `imageproc::pixelops::interpolate` |
//! | Encode | `image::RgbImage::save_with_format` (PNG, JPEG, WebP) |
//!
//! Measuring and drawing share [`layout_run`], so the measured width of any
//! prefix is exactly the x at which the next glyph is drawn. Chord offsets
//! are prefix widths, so this is what keeps a chord over its character.
//! Pair kerning is not applied: a kern between the last prefix glyph and
//! the next one would move that glyph away from the measured offset.
//!
//! The font is loaded once and shared read-only by every surface; a
//! `FontArc` clone is a reference-count bump.

use super::backend::{BackendError, RenderBackend, Surface, TextMeasure, check_size};
use super::params::{CanvasSize, Color, FontFace, OutputFormat, Palette, TextExtent};
use ab_glyph::{Font, FontArc, Glyph, PxScale, ScaleFont, point};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::pixelops::interpolate;
use std::fs;
use std::path::Path;

/// Font + palette context, constructed once at startup.
pub struct FontBackend {
    font: FontArc,
    palette: Palette,
}

impl FontBackend {
    /// Load a TrueType/OpenType font file.
    pub fn load(path: &Path, palette: Palette) -> Result<Self, BackendError> {
        let font_load = |reason: String| BackendError::FontLoad {
            path: path.to_path_buf(),
            reason,
        };
        let bytes = fs::read(path).map_err(|e| font_load(e.to_string()))?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| font_load(e.to_string()))?;
        Ok(Self { font, palette })
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }
}

/// One line of text laid out from a pen at x = 0, baseline at the ascent.
struct GlyphRun {
    glyphs: Vec<Glyph>,
    /// Pen position after the last glyph.
    width: f32,
    height: f32,
}

/// The single glyph placement rule used for both measuring and drawing.
fn layout_run(font: &FontArc, size: f32, text: &str) -> GlyphRun {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let baseline = scaled.ascent();

    let mut glyphs = Vec::with_capacity(text.len());
    let mut pen = 0.0;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        glyphs.push(id.with_scale_and_position(scale, point(pen, baseline)));
        pen += scaled.h_advance(id);
    }

    GlyphRun {
        glyphs,
        width: pen,
        height: scaled.height(),
    }
}

impl TextMeasure for FontBackend {
    fn measure_text(&self, size: f32, text: &str) -> Result<TextExtent, BackendError> {
        check_size(size, text)?;
        let run = layout_run(&self.font, size, text);
        Ok(TextExtent {
            width: run.width,
            height: run.height,
        })
    }
}

impl RenderBackend for FontBackend {
    type Surface = FontSurface;

    fn new_surface(&self, canvas: CanvasSize) -> FontSurface {
        let Color(background) = self.palette.background;
        FontSurface {
            image: RgbImage::from_pixel(canvas.width, canvas.height, Rgb(background)),
            font: self.font.clone(),
            palette: self.palette,
        }
    }
}

/// One slide being drawn.
pub struct FontSurface {
    image: RgbImage,
    font: FontArc,
    palette: Palette,
}

fn image_format(format: OutputFormat) -> ImageFormat {
    match format {
        OutputFormat::Png => ImageFormat::Png,
        OutputFormat::Jpeg => ImageFormat::Jpeg,
        OutputFormat::Webp => ImageFormat::WebP,
    }
}

impl Surface for FontSurface {
    fn draw_text(&mut self, x: f32, y: f32, size: f32, text: &str, face: FontFace) {
        if check_size(size, text).is_err() {
            return;
        }
        let Color(rgb) = self.palette.text(face);
        let color = Rgb(rgb);
        let (width, height) = self.image.dimensions();
        let image = &mut self.image;

        for mut glyph in layout_run(&self.font, size, text).glyphs {
            glyph.position.x += x;
            glyph.position.y += y;
            let Some(outline) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outline.px_bounds();
            outline.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }
                let pixel = image.get_pixel_mut(px as u32, py as u32);
                *pixel = interpolate(color, *pixel, coverage.clamp(0.0, 1.0));
            });
        }
    }

    fn export(self, path: &Path, format: OutputFormat) -> Result<(), BackendError> {
        self.image
            .save_with_format(path, image_format(format))
            .map_err(|e| BackendError::Encoding {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Real-font tests read the font path from this variable.
    const FONT_ENV: &str = "CHORDSLIDE_TEST_FONT";

    fn test_font() -> FontBackend {
        let path = std::env::var(FONT_ENV)
            .unwrap_or_else(|_| panic!("set {FONT_ENV} to a .ttf file to run this test"));
        FontBackend::load(Path::new(&path), Palette::default()).unwrap()
    }

    #[test]
    fn load_missing_font_is_font_load_error() {
        let tmp = TempDir::new().unwrap();
        let result = FontBackend::load(&tmp.path().join("missing.ttf"), Palette::default());
        assert!(matches!(result, Err(BackendError::FontLoad { .. })));
    }

    #[test]
    fn load_garbage_font_is_font_load_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("garbage.ttf");
        fs::write(&path, b"definitely not a font").unwrap();
        let err = FontBackend::load(&path, Palette::default())
            .err()
            .expect("garbage must not load");
        assert!(err.to_string().contains("garbage.ttf"));
    }

    #[test]
    fn image_formats_map_to_encoders() {
        assert_eq!(image_format(OutputFormat::Png), ImageFormat::Png);
        assert_eq!(image_format(OutputFormat::Jpeg), ImageFormat::Jpeg);
        assert_eq!(image_format(OutputFormat::Webp), ImageFormat::WebP);
    }

    #[test]
    #[ignore = "needs CHORDSLIDE_TEST_FONT"]
    fn measurement_grows_with_size() {
        let backend = test_font();
        let small = backend.measure_text(20.0, "Amazing grace").unwrap();
        let large = backend.measure_text(40.0, "Amazing grace").unwrap();
        assert!(large.width > small.width);
        assert!(large.height > small.height);
        assert_eq!(backend.measure_text(20.0, "").unwrap().width, 0.0);
    }

    #[test]
    #[ignore = "needs CHORDSLIDE_TEST_FONT"]
    fn prefix_width_is_where_the_next_glyph_is_drawn() {
        let backend = test_font();
        for (size, line) in [
            (150.0, "Yes, Lord Your way We follow"),
            (200.0, "To Wa Ty LT"),
            (37.5, "A-ma-zing grace, how sweet"),
        ] {
            let run = layout_run(&backend.font, size, line);
            let line = crate::song::Line {
                lyrics: line.to_string(),
                chords: vec![],
            };
            for (i, glyph) in run.glyphs.iter().enumerate() {
                let prefix = line.prefix(i);
                let measured = backend.measure_text(size, prefix).unwrap().width;
                assert_eq!(
                    glyph.position.x, measured,
                    "glyph {i} of {:?} at {size}px drawn off its measured offset",
                    line.lyrics
                );
            }
            let whole = backend.measure_text(size, &line.lyrics).unwrap();
            assert_eq!(whole.width, run.width);
        }
    }

    #[test]
    #[ignore = "needs CHORDSLIDE_TEST_FONT"]
    fn ink_starts_at_the_drawn_x() {
        let backend = test_font();
        let mut surface = backend.new_surface(CanvasSize::new(400, 120));
        surface.draw_text(100.0, 10.0, 80.0, "H", FontFace::Chord);
        let leftmost = surface
            .image
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != Rgb([255, 255, 255]))
            .map(|(x, _, _)| x)
            .min()
            .unwrap();
        // "H" has a small left side bearing; ink may not begin left of the pen.
        assert!((100..120).contains(&leftmost), "ink starts at {leftmost}");
    }

    #[test]
    #[ignore = "needs CHORDSLIDE_TEST_FONT"]
    fn surface_exports_canvas_sized_image() {
        let backend = test_font();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("slide.png");

        let mut surface = backend.new_surface(CanvasSize::new(320, 200));
        surface.draw_text(10.0, 10.0, 32.0, "Amen", FontFace::Lyric);
        surface.export(&path, OutputFormat::Png).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (320, 200));
        assert_eq!(img.get_pixel(319, 199), &Rgb([255, 255, 255]));
        assert!(img.pixels().any(|p| p != &Rgb([255, 255, 255])));
    }
}
