//! Document model shared by the parse, layout, and render stages.
//!
//! A [`Song`] is an ordered list of [`Section`]s (blank-line-separated
//! stanzas). Each section holds its lyric [`Line`]s and its metadata
//! [`Tag`]s in file order. Chords live inside the line they annotate.
//!
//! All types serialize to JSON so `chordslide parse` can dump the model.

use serde::Serialize;

/// Tag name that marks a section for rendering unless configured otherwise.
pub const DEFAULT_SELECTOR_TAG: &str = "comment";

/// A parsed song: every stanza in document order, renderable or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Song {
    pub sections: Vec<Section>,
}

impl Song {
    /// Sections selected for rendering, with their 0-based index in the song.
    ///
    /// A section is selected when its first tag is named `selector`.
    pub fn renderable_sections<'a>(
        &'a self,
        selector: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Section)> + 'a {
        self.sections
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.is_renderable(selector))
    }
}

/// A blank-line-delimited stanza.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Section {
    pub lines: Vec<Line>,
    pub tags: Vec<Tag>,
}

impl Section {
    pub fn is_renderable(&self, selector: &str) -> bool {
        self.tags.first().is_some_and(|t| t.name == selector)
    }

    /// Display identity: the value of the first tag.
    pub fn title(&self) -> Option<&str> {
        self.tags.first().map(|t| t.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.tags.is_empty()
    }

    pub fn chord_count(&self) -> usize {
        self.lines.iter().map(|l| l.chords.len()).sum()
    }
}

/// One lyric line with markup stripped and its chords extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Line {
    pub lyrics: String,
    pub chords: Vec<Chord>,
}

impl Line {
    /// Length of the lyrics in characters, the unit of [`Chord::char_offset`].
    pub fn char_len(&self) -> usize {
        self.lyrics.chars().count()
    }

    /// The lyric text before `char_offset`.
    ///
    /// Offsets past the end clamp to the full lyric string.
    pub fn prefix(&self, char_offset: usize) -> &str {
        match self.lyrics.char_indices().nth(char_offset) {
            Some((byte, _)) => &self.lyrics[..byte],
            None => &self.lyrics,
        }
    }
}

/// A chord played on a lyric character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chord {
    pub name: String,
    /// Index into the stripped lyrics of the character the chord is played on.
    pub char_offset: usize,
    /// Horizontal position in pixels at the committed font size.
    ///
    /// `None` until the layout engine resolves it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_offset: Option<f32>,
}

impl Chord {
    pub fn new(name: impl Into<String>, char_offset: usize) -> Self {
        Self {
            name: name.into(),
            char_offset,
            pixel_offset: None,
        }
    }
}

/// A `{name: value}` metadata line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}
