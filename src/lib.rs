//! # Chordslide
//!
//! Turns a chord-annotated song file into one slide image per stanza, with
//! every chord label drawn directly above the lyric character it belongs to.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Parse   song.cho  →  Song             (text → sections, lines, chords, tags)
//! 2. Render  Song      →  slides/NNN-*.png (fit font size, place chords, draw, encode)
//! ```
//!
//! Parsing is pure and never touches a font. Rendering talks to fonts and
//! images only through the traits in [`typeset`], so layout and rendering are
//! unit-tested against a deterministic mock measurer.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`parser`] | Stage 1: tag, line and whole-song parsing |
//! | [`song`] | Document model: `Song`, `Section`, `Line`, `Chord`, `Tag` |
//! | [`layout`] | Font-size fitting and chord pixel offsets |
//! | [`render`] | Stage 2: per-section draw and export, failures isolated per section |
//! | [`typeset`] | Measuring/drawing traits, slot geometry, the `ab_glyph` backend |
//! | [`naming`] | `NNN-Title.ext` slide file names |
//! | [`config`] | `chordslide.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting for `check` and `render` |
//!
//! # Song Format
//!
//! ```text
//! {title: Amazing Grace}          ← header section, not rendered
//!
//! {comment: Verse 1}              ← first tag selects and titles the slide
//! A[G]mazing [G7]grace how [C]sweet the [G]sound
//! That saved a wretch like [D]me
//!
//! {comment: Instrumental}
//! [G] [C] [G] [D]                 ← chord-only: chord rows sized on their own
//!
//! CCLI Song # 22025               ← end marker, nothing after it is read
//! ```
//!
//! # Design Decisions
//!
//! ## Fit Once Per Section
//!
//! The longest lyric line of a section decides one font size for the whole
//! slide. Chord labels share that size, so a chord offset is just the width
//! of the lyric text in front of it. See [`layout`].
//!
//! ## One Bad Slide Does Not Stop the Song
//!
//! A section that fails to measure or encode is reported and skipped; the
//! others are still written. Only setup failures (config, song file, font,
//! output directory) abort a run.

pub mod config;
pub mod layout;
pub mod naming;
pub mod output;
pub mod parser;
pub mod render;
pub mod song;
pub mod typeset;

#[cfg(test)]
pub(crate) mod test_helpers;
