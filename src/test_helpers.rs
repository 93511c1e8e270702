//! Shared test utilities for the chordslide test suite.
//!
//! Provides the fixture song and lookup helpers over parsed [`Song`]s.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let song = parse_song(SAMPLE_SONG, &ParseOptions::default()).unwrap();
//! let chorus = find_section(&song, "Chorus");
//! assert_eq!(chorus.lines.len(), 2);
//! ```

use crate::song::{DEFAULT_SELECTOR_TAG, Section, Song};

/// `fixtures/amazing-grace.cho`: a title block, four renderable stanzas
/// (one of them chord-only), and a licensing footer after the end marker.
pub const SAMPLE_SONG: &str = include_str!("../fixtures/amazing-grace.cho");

// =========================================================================
// Song lookups (panic with a clear message on miss)
// =========================================================================

/// Find a section by title. Panics if not found.
pub fn find_section<'a>(song: &'a Song, title: &str) -> &'a Section {
    song.sections
        .iter()
        .find(|s| s.title() == Some(title))
        .unwrap_or_else(|| {
            let titles = section_titles(song);
            panic!("section '{title}' not found. Available: {titles:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Titles of every section in song order, `None` for untagged ones.
pub fn section_titles(song: &Song) -> Vec<Option<&str>> {
    song.sections.iter().map(|s| s.title()).collect()
}

/// Titles of the sections selected by the default `comment` tag.
pub fn renderable_titles(song: &Song) -> Vec<&str> {
    song.renderable_sections(DEFAULT_SELECTOR_TAG)
        .filter_map(|(_, s)| s.title())
        .collect()
}
