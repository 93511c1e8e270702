//! Pure slot geometry for slide layout.
//!
//! All functions here are pure and testable without fonts or images.
//!
//! A section with `n` lines occupies `2n` rows of equal height, chord labels
//! on even rows and lyrics on odd rows:
//!
//! ```text
//! row 0   G        G7        C
//! row 1   Amazing  grace how sweet the sound
//! row 2                          D
//! row 3   That saved a wretch like me
//! ```
//!
//! The block is centered on the canvas both ways; every row shares the same
//! left edge so chord offsets measured from the lyric start line up.

use super::params::CanvasSize;

/// Placement of a block of equal-height rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGrid {
    /// Left edge shared by every row.
    pub origin_x: f32,
    /// Top of row 0.
    pub top: f32,
    pub row_height: f32,
}

impl SlotGrid {
    /// Center a `block_width` × (`rows` × `row_height`) block on the canvas.
    ///
    /// Blocks larger than the canvas are pinned to the top-left corner.
    pub fn centered(canvas: CanvasSize, block_width: f32, row_height: f32, rows: usize) -> Self {
        let block_height = row_height * rows as f32;
        Self {
            origin_x: centered_start(canvas.width as f32, block_width),
            top: centered_start(canvas.height as f32, block_height),
            row_height,
        }
    }

    pub fn row_y(&self, row: usize) -> f32 {
        self.top + self.row_height * row as f32
    }

    /// `(x, y)` for a chord over line `line`, `pixel_offset` from the lyric start.
    pub fn chord_position(&self, line: usize, pixel_offset: f32) -> (f32, f32) {
        (self.origin_x + pixel_offset, self.row_y(chord_row(line)))
    }

    pub fn lyric_position(&self, line: usize) -> (f32, f32) {
        (self.origin_x, self.row_y(lyric_row(line)))
    }
}

pub fn chord_row(line: usize) -> usize {
    line * 2
}

pub fn lyric_row(line: usize) -> usize {
    line * 2 + 1
}

fn centered_start(available: f32, used: f32) -> f32 {
    ((available - used) / 2.0).max(0.0)
}
