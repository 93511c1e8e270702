//! Slide rendering.
//!
//! Stage 2 of the chordslide pipeline. Takes the parsed [`Song`], lays out
//! every renderable section, draws it, and exports one image per section.
//!
//! ## Output Structure
//!
//! ```text
//! slides/
//! ├── 001-Verse-1.png
//! ├── 002-Chorus.png
//! ├── 003-Instrumental.png      # chord rows only
//! └── 004-Verse-2.png
//! ```
//!
//! ## Slide Layout
//!
//! Each line takes two rows of the committed line height: chord labels on
//! top, lyrics below. The block is centered on the canvas and every row
//! starts at the same x, so a chord drawn at `x + pixel_offset` lands on
//! the lyric character it belongs to. Chord-only sections draw one chord row
//! per line, sized to the canvas on their own, with the labels spread so
//! they never overlap.
//!
//! ## Failure Handling
//!
//! Sections are rendered one at a time, in song order, each on its own
//! surface. A measurement or encoding failure is recorded against its
//! section in the [`RenderReport`] and the remaining sections still render.
//! Only failing to create the output directory aborts the run.

use crate::config::RenderConfig;
use crate::layout::{ChordSheet, FitPolicy, SectionLayout, layout_section};
use crate::naming::slide_file_name;
use crate::song::{Section, Song};
use crate::typeset::{
    BackendError, CanvasSize, FontFace, OutputFormat, RenderBackend, SlotGrid, Surface,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings for one render run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub canvas: CanvasSize,
    pub policy: FitPolicy,
    pub format: OutputFormat,
    pub selector_tag: String,
}

impl RenderOptions {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            canvas: config.canvas_size(),
            policy: config.layout,
            format: config.canvas.format,
            selector_tag: config.song.selector_tag.clone(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

/// A slide written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    pub path: PathBuf,
    pub font_size: f32,
    pub lines: usize,
    pub chords: usize,
}

/// What happened to one renderable section.
#[derive(Debug)]
pub struct SlideOutcome {
    /// 1-based position among rendered sections (the `NNN` file prefix).
    pub position: usize,
    /// 0-based index of the section in the song.
    pub section_index: usize,
    pub title: String,
    pub result: Result<RenderedSlide, BackendError>,
}

#[derive(Debug, Default)]
pub struct RenderReport {
    pub slides: Vec<SlideOutcome>,
}

impl RenderReport {
    pub fn rendered(&self) -> impl Iterator<Item = &RenderedSlide> {
        self.slides.iter().filter_map(|s| s.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&SlideOutcome, &BackendError)> {
        self.slides
            .iter()
            .filter_map(|s| s.result.as_ref().err().map(|e| (s, e)))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Render every selected section of `song` into `output_dir`.
pub fn render_song<B: RenderBackend>(
    song: &Song,
    output_dir: &Path,
    options: &RenderOptions,
    backend: &B,
) -> Result<RenderReport, RenderError> {
    fs::create_dir_all(output_dir).map_err(|source| RenderError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = RenderReport::default();
    for (position, (section_index, section)) in song
        .renderable_sections(&options.selector_tag)
        .enumerate()
        .map(|(i, entry)| (i + 1, entry))
    {
        let title = section.title().unwrap_or_default().to_string();
        let result = render_section(section, position, output_dir, options, backend);
        report.slides.push(SlideOutcome {
            position,
            section_index,
            title,
            result,
        });
    }
    Ok(report)
}

/// Lay out, draw, and export a single section.
pub fn render_section<B: RenderBackend>(
    section: &Section,
    position: usize,
    output_dir: &Path,
    options: &RenderOptions,
    backend: &B,
) -> Result<RenderedSlide, BackendError> {
    let layout = layout_section(section, options.canvas, &options.policy, backend)?;
    let surface = draw_section(&layout, options.canvas, backend);

    let path = output_dir.join(slide_file_name(position, &layout.title, options.format));
    surface.export(&path, options.format)?;

    Ok(RenderedSlide {
        path,
        font_size: layout.drawn_size(),
        lines: layout.lines.len(),
        chords: section.chord_count(),
    })
}

/// Draw a laid-out section onto a fresh surface.
pub fn draw_section<B: RenderBackend>(
    layout: &SectionLayout,
    canvas: CanvasSize,
    backend: &B,
) -> B::Surface {
    let mut surface = backend.new_surface(canvas);
    match &layout.chord_sheet {
        Some(sheet) => draw_chord_rows(&mut surface, layout, sheet, canvas),
        None => draw_lyric_rows(&mut surface, layout, canvas),
    }
    surface
}

fn draw_lyric_rows(surface: &mut impl Surface, layout: &SectionLayout, canvas: CanvasSize) {
    let size = layout.fit.size;
    let rows = layout.lines.len() * 2;
    let grid = SlotGrid::centered(canvas, layout.fit.width, layout.fit.height, rows);
    for (i, line) in layout.lines.iter().enumerate() {
        for chord in &line.chords {
            let (x, y) = grid.chord_position(i, chord.pixel_offset.unwrap_or_default());
            surface.draw_text(x, y, size, &chord.name, FontFace::Chord);
        }
        if !line.lyrics.is_empty() {
            let (x, y) = grid.lyric_position(i);
            surface.draw_text(x, y, size, &line.lyrics, FontFace::Lyric);
        }
    }
}

/// One row per line, no lyric rows.
fn draw_chord_rows(
    surface: &mut impl Surface,
    layout: &SectionLayout,
    sheet: &ChordSheet,
    canvas: CanvasSize,
) {
    let grid = SlotGrid::centered(canvas, sheet.width(), sheet.row_height(), sheet.rows.len());
    for (i, (line, row)) in layout.lines.iter().zip(&sheet.rows).enumerate() {
        let y = grid.row_y(i);
        for (chord, x) in line.chords.iter().zip(&row.xs) {
            surface.draw_text(grid.origin_x + x, y, sheet.size, &chord.name, FontFace::Chord);
        }
    }
}
