//! Chord markup parsing.
//!
//! Stage 1 of the chordslide pipeline. Turns the raw text of a song file into
//! a [`Song`] that the layout and render stages consume.
//!
//! ## Markup
//!
//! ```text
//! {title: Amazing Grace}          # tag line: {name: value}
//!
//! {comment: Verse 1}              # a stanza tagged for rendering
//! A[G]mazing [G7]grace how [C]sweet
//! the [G]sound
//!
//! {comment: Verse 2}
//! [G]'Twas grace that [C]taught
//! CCLI Song # 12345               # end marker: everything below is dropped
//! ```
//!
//! - `[Chord]` sits immediately before the lyric character it is played on.
//!   Brackets carry no lyric width, so consecutive chords share an offset.
//! - Empty lines separate stanzas. Every empty line closes the current
//!   section, so runs of them yield empty sections. A line holding only
//!   spaces is a lyric line like any other.
//! - Carriage returns are dropped wherever they appear.

use crate::song::{Chord, Line, Section, Song, Tag};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Separator between a tag's name and value.
const TAG_SEPARATOR: &str = ": ";

/// Default end-of-song marker (licensing footers follow it).
pub const DEFAULT_END_MARKER: &str = "CCLI";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed tag on line {line}: {text:?} (expected {{name: value}})")]
    MalformedTag { line: usize, text: String },
}

/// Knobs for the song-level scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// A line starting with this token ends the song.
    pub end_marker: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Parse a `{name: value}` tag line.
///
/// The closing brace is optional. Only the first `": "` splits, so values
/// may contain further separators.
pub fn parse_tag(line: &str) -> Result<Tag, ParseError> {
    let trimmed = line.trim_end_matches(['\r', '\n']).trim_end();
    let inner = trimmed.strip_prefix('{').unwrap_or(trimmed);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    match inner.split_once(TAG_SEPARATOR) {
        Some((name, value)) => Ok(Tag {
            name: name.to_string(),
            value: value.to_string(),
        }),
        None => Err(ParseError::MalformedTag {
            line: 0,
            text: line.to_string(),
        }),
    }
}

/// Parse a lyric line with inline `[Chord]` markers.
///
/// Never fails: an unclosed `[` takes the rest of the line as the chord name.
pub fn parse_line(line: &str) -> Line {
    let mut lyrics = String::with_capacity(line.len());
    let mut chords = Vec::new();
    let mut visible = 0;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '[' => {
                let name: String = chars.by_ref().take_while(|&c| c != ']').collect();
                chords.push(Chord::new(name.replace('\r', ""), visible));
            }
            '\r' => {}
            _ => {
                lyrics.push(c);
                visible += 1;
            }
        }
    }

    Line { lyrics, chords }
}

/// Only a truly empty line (carriage returns aside) separates stanzas.
fn is_blank(line: &str) -> bool {
    line.trim_end_matches('\r').is_empty()
}

/// Scan a whole song.
///
/// The section in progress when the scan stops is always kept, whether or
/// not a blank line closed it.
pub fn parse_song(text: &str, options: &ParseOptions) -> Result<Song, ParseError> {
    let mut song = Song::default();
    let mut current = Section::default();

    for (index, raw) in text.lines().enumerate() {
        if raw.starts_with(options.end_marker.as_str()) {
            break;
        }
        if is_blank(raw) {
            song.sections.push(std::mem::take(&mut current));
        } else if raw.starts_with('{') {
            let tag = parse_tag(raw).map_err(|e| match e {
                ParseError::MalformedTag { text, .. } => ParseError::MalformedTag {
                    line: index + 1,
                    text,
                },
                other => other,
            })?;
            current.tags.push(tag);
        } else {
            current.lines.push(parse_line(raw));
        }
    }
    song.sections.push(current);

    Ok(song)
}

/// Read and parse a song file.
pub fn read_song(path: &Path, options: &ParseOptions) -> Result<Song, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_song(&text, options)
}
