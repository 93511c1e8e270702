//! File naming for exported slides.
//!
//! Every slide is written as `NNN-Title.ext`: a 1-based, zero-padded position
//! among the rendered sections followed by the section title with spaces
//! turned into dashes. The prefix keeps slides in song order in a file
//! browser and keeps repeated titles (a second "Chorus") from overwriting
//! each other.
//!
//! - `(1, "Verse 1")` → `001-Verse-1`
//! - `(4, "Chorus (x2)")` → `004-Chorus-x2`
//! - `(2, "  ")` → `002-section`

use crate::typeset::OutputFormat;

/// Stem used when a title has no usable characters.
const FALLBACK_STEM: &str = "section";

/// Reduce a title to filename-safe characters, spaces becoming dashes.
///
/// Letters and digits (any script), `-` and `_` are kept; everything else is
/// dropped. Runs of dashes collapse and leading/trailing dashes are trimmed.
pub fn title_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if !(c.is_alphanumeric() || c == '-' || c == '_') {
            continue;
        }
        if c == '-' && (slug.is_empty() || slug.ends_with('-')) {
            continue;
        }
        slug.push(c);
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// `NNN-Title` for the slide at 1-based `position`.
pub fn slide_stem(position: usize, title: &str) -> String {
    let slug = title_slug(title);
    let slug = if slug.is_empty() {
        FALLBACK_STEM
    } else {
        &slug
    };
    format!("{:0>3}-{}", position, slug)
}

pub fn slide_file_name(position: usize, title: &str, format: OutputFormat) -> String {
    format!("{}.{}", slide_stem(position, title), format.extension())
}
