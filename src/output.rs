//! CLI output formatting for the check and render commands.
//!
//! Every slide is shown by its positional index and section title, the same
//! `NNN` the exported file carries, with details on indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Slides
//! 001 Verse 1 (4 lines, 12 chords)
//! 002 Chorus (2 lines, 8 chords)
//! 003 Instrumental (1 line, 4 chords)
//!     chords only
//!
//! Skipped
//!     section 1 {title: Amazing Grace}
//! ```
//!
//! ## Render
//!
//! ```text
//! 001 Verse 1 → 001-Verse-1.png
//!     size: 142.5px
//! 002 Chorus FAILED
//!     Failed to encode slides/002-Chorus.png: ...
//!
//! Rendered 1 of 2 slides, 1 failed
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::layout::is_chord_only;
use crate::render::RenderReport;
use crate::song::{Section, Song};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

/// How a skipped section is identified: its first tag, or its size.
fn skipped_label(section: &Section) -> String {
    match section.tags.first() {
        Some(tag) => format!("{{{}: {}}}", tag.name, tag.value),
        None => format!("(untagged, {})", count(section.lines.len(), "line", "lines")),
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the section inventory of a parsed song.
///
/// Empty sections left by runs of blank lines are not listed as skipped.
pub fn format_check_output(song: &Song, selector: &str) -> Vec<String> {
    let mut lines = vec!["Slides".to_string()];

    let mut rendered = 0;
    for (position, (_, section)) in song.renderable_sections(selector).enumerate() {
        rendered += 1;
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(position + 1),
            section.title().unwrap_or_default(),
            count(section.lines.len(), "line", "lines"),
            count(section.chord_count(), "chord", "chords"),
        ));
        if is_chord_only(section) {
            lines.push("    chords only".to_string());
        }
    }
    if rendered == 0 {
        lines.push(format!("    (no sections tagged {{{}: ...}})", selector));
    }

    let skipped: Vec<String> = song
        .sections
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_empty() && !s.is_renderable(selector))
        .map(|(i, s)| format!("    section {} {}", i + 1, skipped_label(s)))
        .collect();
    if !skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        lines.extend(skipped);
    }

    lines
}

pub fn print_check_output(song: &Song, selector: &str) {
    for line in format_check_output(song, selector) {
        println!("{}", line);
    }
}

// ============================================================================
// Render
// ============================================================================

/// Format the outcome of every rendered section plus a summary line.
pub fn format_render_output(report: &RenderReport) -> Vec<String> {
    let mut lines = Vec::new();

    for slide in &report.slides {
        let header = format!("{} {}", format_index(slide.position), slide.title);
        match &slide.result {
            Ok(rendered) => {
                let file = rendered
                    .path
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_else(|| rendered.path.display().to_string());
                lines.push(format!("{} \u{2192} {}", header, file));
                lines.push(format!("    size: {:.1}px", rendered.font_size));
            }
            Err(e) => {
                lines.push(format!("{} FAILED", header));
                lines.push(format!("    {}", e));
            }
        }
    }

    let total = report.slides.len();
    let failed = report.failures().count();
    lines.push(String::new());
    if failed == 0 {
        lines.push(format!("Rendered {}", count(total, "slide", "slides")));
    } else {
        lines.push(format!(
            "Rendered {} of {}, {} failed",
            total - failed,
            count(total, "slide", "slides"),
            failed
        ));
    }

    lines
}

pub fn print_render_output(report: &RenderReport) {
    for line in format_render_output(report) {
        println!("{}", line);
    }
}
