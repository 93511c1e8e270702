//! Font fitting and chord placement.
//!
//! Layout runs in two passes per section, strictly in this order:
//!
//! 1. **Fit**: find the largest font size at which the section's longest
//!    lyric line fits the canvas width and all `2 × lines` rows (one chord
//!    row and one lyric row per line) fit the canvas height.
//! 2. **Resolve**: measure, at the committed size, the lyric text in front of
//!    every chord; that width is the chord's `pixel_offset`.
//!
//! [`layout_section`] is the only way to get a [`SectionLayout`], so offsets
//! can never be read before a size is committed.
//!
//! ## Fitting search
//!
//! The search bisects `[min_size, max_size]` until the bracket is narrower
//! than `epsilon`. The lower bound only ever moves to a size that was measured
//! and fits, and the lower bound is what gets committed, so the result is
//! always the last size known to fit and never the size that overflowed.
//!
//! A reference line with no alphabetic character (chord-only stanza, empty
//! stanza) skips the search: it commits `min_size` with a zero extent, which
//! tells the renderer there is no lyric row to draw.
//!
//! ## Chord-only sections
//!
//! Such a section is drawn as chord rows alone, one per line, sized by a
//! second search ([`fit_chord_rows`]) over the widest row. Within a row each
//! label starts at its character's offset, pushed right when needed so it
//! keeps a gap after the previous label: the spaces between chords in
//! `[G] [C]` are far narrower than the labels themselves.

use crate::song::{Chord, Line, Section};
use crate::typeset::{BackendError, CanvasSize, TextExtent, TextMeasure};
use serde::{Deserialize, Serialize};

/// Upper bound on bisection steps, reached only with a degenerate epsilon.
const MAX_BISECTIONS: usize = 64;

/// Minimum space between adjacent labels on a chord-only row.
const CHORD_GAP: &str = "  ";

/// Bounds and precision of the font-size search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FitPolicy {
    /// Smallest size ever committed.
    pub min_size: f32,
    pub max_size: f32,
    /// Search stops once the fitting/overflowing bracket is this narrow.
    pub epsilon: f32,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            min_size: 8.0,
            max_size: 600.0,
            epsilon: 0.5,
        }
    }
}

/// A committed font size and the reference line's extent at that size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontFit {
    pub size: f32,
    pub width: f32,
    pub height: f32,
}

impl FontFit {
    fn measured(size: f32, extent: TextExtent) -> Self {
        Self {
            size,
            width: extent.width,
            height: extent.height,
        }
    }

    fn without_lyrics(size: f32) -> Self {
        Self::measured(size, TextExtent::ZERO)
    }

    /// Whether the section has a lyric row to draw.
    pub fn has_lyrics(&self) -> bool {
        self.height > 0.0
    }
}

/// Chord labels of one line, left to right, at one font size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordRow {
    /// Left edge of each label, in chord order.
    pub xs: Vec<f32>,
    /// Right edge of the last label.
    pub width: f32,
    /// Tallest label.
    pub height: f32,
}

/// A chord-only section sized to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSheet {
    pub size: f32,
    /// One row per line of the section.
    pub rows: Vec<ChordRow>,
}

impl ChordSheet {
    pub fn width(&self) -> f32 {
        self.rows.iter().map(|r| r.width).fold(0.0, f32::max)
    }

    pub fn row_height(&self) -> f32 {
        self.rows.iter().map(|r| r.height).fold(0.0, f32::max)
    }
}

/// A section ready to draw: committed size plus resolved chord offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub title: String,
    pub fit: FontFit,
    pub lines: Vec<Line>,
    /// Present when the section has chords but no lyric rows.
    pub chord_sheet: Option<ChordSheet>,
}

impl SectionLayout {
    /// The size text is actually drawn at.
    pub fn drawn_size(&self) -> f32 {
        self.chord_sheet.as_ref().map_or(self.fit.size, |sheet| sheet.size)
    }
}

/// The longest lyric line by character count; the first one wins ties.
pub fn reference_lyrics(section: &Section) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for line in &section.lines {
        let len = line.char_len();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((&line.lyrics, len));
        }
    }
    best.map(|(lyrics, _)| lyrics)
}

/// The reference line, when it has letters worth fitting.
fn fitting_reference(section: &Section) -> Option<&str> {
    reference_lyrics(section).filter(|lyrics| lyrics.chars().any(char::is_alphabetic))
}

/// True when the section gets no lyric rows (instrumental or empty).
pub fn is_chord_only(section: &Section) -> bool {
    fitting_reference(section).is_none()
}

/// Search for the largest font size at which `section` fits `canvas`.
pub fn fit_font_size(
    section: &Section,
    canvas: CanvasSize,
    policy: &FitPolicy,
    measure: &impl TextMeasure,
) -> Result<FontFit, BackendError> {
    let Some(reference) = fitting_reference(section) else {
        return Ok(FontFit::without_lyrics(policy.min_size));
    };

    let rows = (section.lines.len() * 2) as f32;
    let (size, extent) = largest_fitting(policy, |size| {
        let extent = measure.measure_text(size, reference)?;
        let fits =
            extent.width < canvas.width as f32 && extent.height * rows < canvas.height as f32;
        Ok((fits, extent))
    })?;
    Ok(FontFit::measured(size, extent))
}

/// Bisect `[min_size, max_size]` for the largest size `try_size` accepts.
///
/// `try_size` reports whether a size fits along with what it measured there.
/// The result is always a size that was tried: `max_size` when it fits,
/// `min_size` when even that overflows, otherwise the last fitting lower
/// bound.
fn largest_fitting<T>(
    policy: &FitPolicy,
    mut try_size: impl FnMut(f32) -> Result<(bool, T), BackendError>,
) -> Result<(f32, T), BackendError> {
    let (fits, largest) = try_size(policy.max_size)?;
    if fits {
        return Ok((policy.max_size, largest));
    }

    let mut low = policy.min_size;
    let (fits, mut low_value) = try_size(low)?;
    if !fits {
        // Nothing smaller is allowed; commit the floor and let it overflow.
        return Ok((low, low_value));
    }

    let mut high = policy.max_size;
    for _ in 0..MAX_BISECTIONS {
        if high - low <= policy.epsilon {
            break;
        }
        let mid = low + (high - low) / 2.0;
        let (fits, value) = try_size(mid)?;
        if fits {
            low = mid;
            low_value = value;
        } else {
            high = mid;
        }
    }

    Ok((low, low_value))
}

/// Place the chord labels of `line` at `size`.
///
/// A label starts at its character's offset, or one gap past the end of the
/// previous label when that is further right, so labels never overlap.
pub fn place_chord_row(
    line: &Line,
    size: f32,
    measure: &impl TextMeasure,
) -> Result<ChordRow, BackendError> {
    let gap = measure.measure_text(size, CHORD_GAP)?.width;
    let mut xs = Vec::with_capacity(line.chords.len());
    let mut end: Option<f32> = None;
    let mut height: f32 = 0.0;

    for chord in &line.chords {
        let offset = measure.measure_text(size, line.prefix(chord.char_offset))?.width;
        let x = match end {
            Some(end) => offset.max(end + gap),
            None => offset,
        };
        let label = measure.measure_text(size, &chord.name)?;
        end = Some(x + label.width);
        height = height.max(label.height);
        xs.push(x);
    }

    Ok(ChordRow {
        xs,
        width: end.unwrap_or(0.0),
        height,
    })
}

/// Largest size at which every chord row of `lines` fits `canvas`, one row
/// per line.
pub fn fit_chord_rows(
    lines: &[Line],
    canvas: CanvasSize,
    policy: &FitPolicy,
    measure: &impl TextMeasure,
) -> Result<ChordSheet, BackendError> {
    let row_count = lines.len() as f32;
    let (size, rows) = largest_fitting(policy, |size| {
        let rows = lines
            .iter()
            .map(|line| place_chord_row(line, size, measure))
            .collect::<Result<Vec<_>, BackendError>>()?;
        let sheet = ChordSheet { size, rows };
        let fits = sheet.width() < canvas.width as f32
            && sheet.row_height() * row_count < canvas.height as f32;
        Ok((fits, sheet.rows))
    })?;
    Ok(ChordSheet { size, rows })
}

/// A copy of `line` with every chord's `pixel_offset` measured at `size`.
///
/// Earlier offsets on `line` are ignored and replaced.
pub fn resolve_offsets(
    line: &Line,
    size: f32,
    measure: &impl TextMeasure,
) -> Result<Line, BackendError> {
    let chords = line
        .chords
        .iter()
        .map(|chord| {
            let prefix = line.prefix(chord.char_offset);
            let width = measure.measure_text(size, prefix)?.width;
            Ok(Chord {
                name: chord.name.clone(),
                char_offset: chord.char_offset,
                pixel_offset: Some(width),
            })
        })
        .collect::<Result<Vec<_>, BackendError>>()?;

    Ok(Line {
        lyrics: line.lyrics.clone(),
        chords,
    })
}

/// Resolve every line of `section` against a committed fit.
pub fn resolve_section(
    section: &Section,
    fit: &FontFit,
    measure: &impl TextMeasure,
) -> Result<Vec<Line>, BackendError> {
    section
        .lines
        .iter()
        .map(|line| resolve_offsets(line, fit.size, measure))
        .collect()
}

/// Fit, then resolve. Chord-only sections also get their chord rows fitted.
pub fn layout_section(
    section: &Section,
    canvas: CanvasSize,
    policy: &FitPolicy,
    measure: &impl TextMeasure,
) -> Result<SectionLayout, BackendError> {
    let fit = fit_font_size(section, canvas, policy, measure)?;
    let lines = resolve_section(section, &fit, measure)?;
    let chord_sheet = if is_chord_only(section) && section.chord_count() > 0 {
        Some(fit_chord_rows(&lines, canvas, policy, measure)?)
    } else {
        None
    };
    Ok(SectionLayout {
        title: section.title().unwrap_or_default().to_string(),
        fit,
        lines,
        chord_sheet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;
    use crate::song::Tag;
    use crate::typeset::backend::tests::{MOCK_ADVANCE, MockBackend};

    fn section(lines: &[&str]) -> Section {
        Section {
            lines: lines.iter().map(|l| parse_line(l)).collect(),
            tags: vec![Tag {
                name: "comment".into(),
                value: "Verse 1".into(),
            }],
        }
    }

    fn offsets(line: &Line) -> Vec<Option<f32>> {
        line.chords.iter().map(|c| c.pixel_offset).collect()
    }

    /// Last size on a `step` grid from `min_size` that fits, by brute force.
    fn linear_fit(section: &Section, canvas: CanvasSize, policy: &FitPolicy, step: f32) -> f32 {
        let backend = MockBackend::new();
        let reference = reference_lyrics(section).unwrap();
        let rows = (section.lines.len() * 2) as f32;
        let mut committed = policy.min_size;
        let mut size = policy.min_size;
        while size <= policy.max_size {
            let e = backend.measure_text(size, reference).unwrap();
            if !(e.width < canvas.width as f32 && e.height * rows < canvas.height as f32) {
                break;
            }
            committed = size;
            size += step;
        }
        committed
    }

    // =========================================================================
    // reference_lyrics
    // =========================================================================

    #[test]
    fn reference_is_longest_line() {
        let s = section(&["short", "[G]the longest [C]line here", "mid one"]);
        assert_eq!(reference_lyrics(&s), Some("the longest line here"));
    }

    #[test]
    fn reference_ties_go_to_first_line() {
        let s = section(&["abc", "xyz"]);
        assert_eq!(reference_lyrics(&s), Some("abc"));
    }

    #[test]
    fn reference_counts_characters() {
        let s = section(&["ééé", "abcd"]);
        assert_eq!(reference_lyrics(&s), Some("abcd"));
    }

    #[test]
    fn reference_of_empty_section() {
        assert_eq!(reference_lyrics(&Section::default()), None);
    }

    #[test]
    fn chord_only_sections() {
        assert!(is_chord_only(&section(&["[G] [C]", "[D]"])));
        assert!(is_chord_only(&Section::default()));
        assert!(!is_chord_only(&section(&["[G]la"])));
    }

    // =========================================================================
    // fit_font_size
    // =========================================================================

    #[test]
    fn fit_commits_last_size_that_fits() {
        // 20 chars × 0.5 × size < 1000 caps the size below 100;
        // height 4 rows × size < 1000 would allow 250.
        let s = section(&["aaaaaaaaaaaaaaaaaaaa", "b"]);
        let canvas = CanvasSize::new(1000, 1000);
        let policy = FitPolicy::default();
        let fit = fit_font_size(&s, canvas, &policy, &MockBackend::new()).unwrap();

        assert!(fit.size < 100.0, "committed an overflowing size {}", fit.size);
        assert!(fit.size >= 100.0 - policy.epsilon);
        assert_eq!(fit.width, 20.0 * MOCK_ADVANCE * fit.size);
        assert_eq!(fit.height, fit.size);
        assert!(fit.width < 1000.0);
    }

    #[test]
    fn fit_height_bound_counts_two_rows_per_line() {
        // 3 lines → 6 rows; 6 × size < 600 caps at 100 while width allows 400.
        let s = section(&["abcde", "f", "g"]);
        let canvas = CanvasSize::new(1000, 600);
        let fit = fit_font_size(&s, canvas, &FitPolicy::default(), &MockBackend::new()).unwrap();
        assert!(fit.size < 100.0);
        assert!(fit.size >= 99.5);
        assert!(fit.height * 6.0 < 600.0);
    }

    #[test]
    fn fit_agrees_with_linear_scan() {
        let policy = FitPolicy::default();
        for (w, h) in [(3840, 1770), (1920, 1080), (800, 2000), (500, 300)] {
            let s = section(&[
                "A[G]mazing [G7]grace how [C]sweet the [G]sound",
                "That saved a wretch like [D]me",
            ]);
            let canvas = CanvasSize::new(w, h);
            let fit = fit_font_size(&s, canvas, &policy, &MockBackend::new()).unwrap();
            let linear = linear_fit(&s, canvas, &policy, 0.05);
            assert!(
                (fit.size - linear).abs() <= policy.epsilon,
                "{w}x{h}: bisection {} vs linear {linear}",
                fit.size
            );
        }
    }

    #[test]
    fn fit_uses_max_size_when_everything_fits() {
        let s = section(&["hi"]);
        let policy = FitPolicy {
            max_size: 50.0,
            ..FitPolicy::default()
        };
        let canvas = CanvasSize::new(4000, 4000);
        let fit = fit_font_size(&s, canvas, &policy, &MockBackend::new()).unwrap();
        assert_eq!(fit.size, 50.0);
    }

    #[test]
    fn fit_falls_back_to_min_size_when_nothing_fits() {
        let s = section(&["a very long line that can never fit a tiny canvas"]);
        let policy = FitPolicy::default();
        let fit = fit_font_size(&s, CanvasSize::new(10, 10), &policy, &MockBackend::new()).unwrap();
        assert_eq!(fit.size, policy.min_size);
        assert!(fit.has_lyrics());
    }

    #[test]
    fn fit_without_letters_skips_measurement() {
        let backend = MockBackend::new();
        let policy = FitPolicy::default();
        let s = section(&["[G] [C] [D] [G]", "[Em] 1 2 3"]);
        let fit = fit_font_size(&s, CanvasSize::new(1000, 1000), &policy, &backend).unwrap();

        assert_eq!(fit.size, policy.min_size);
        assert_eq!(fit.width, 0.0);
        assert_eq!(fit.height, 0.0);
        assert!(!fit.has_lyrics());
        assert_eq!(backend.measurement_count(), 0);
    }

    #[test]
    fn fit_of_empty_section_uses_min_size() {
        let backend = MockBackend::new();
        let canvas = CanvasSize::new(100, 100);
        let policy = FitPolicy::default();
        let fit = fit_font_size(&Section::default(), canvas, &policy, &backend).unwrap();
        assert_eq!(fit, FontFit::without_lyrics(FitPolicy::default().min_size));
        assert_eq!(backend.measurement_count(), 0);
    }

    #[test]
    fn fit_never_shrinks_on_a_larger_canvas() {
        let s = section(&["[G]Praise God from [C]whom all [G]blessings [D]flow", "[G]Praise Him"]);
        let policy = FitPolicy::default();
        let backend = MockBackend::new();
        let mut previous = 0.0;
        for step in 1..=60u32 {
            let canvas = CanvasSize::new(100 + step * 37, 60 + step * 23);
            let fit = fit_font_size(&s, canvas, &policy, &backend).unwrap();
            assert!(fit.size >= previous, "shrank at {canvas:?}: {} < {previous}", fit.size);
            previous = fit.size;
        }
    }

    #[test]
    fn fit_terminates_with_zero_epsilon() {
        let s = section(&["abcdefghij"]);
        let policy = FitPolicy {
            epsilon: 0.0,
            ..FitPolicy::default()
        };
        let canvas = CanvasSize::new(500, 5000);
        let fit = fit_font_size(&s, canvas, &policy, &MockBackend::new()).unwrap();
        assert!(fit.size < 100.0);
    }

    #[test]
    fn fit_propagates_measurement_errors() {
        let s = section(&["words"]);
        let policy = FitPolicy {
            min_size: 0.0,
            ..FitPolicy::default()
        };
        let result = fit_font_size(&s, CanvasSize::new(10, 10), &policy, &MockBackend::new());
        assert!(matches!(result, Err(BackendError::Measurement { .. })));
    }

    // =========================================================================
    // resolve_offsets
    // =========================================================================

    #[test]
    fn offsets_are_prefix_widths() {
        let line = parse_line("[G]Hello [C]world");
        let resolved = resolve_offsets(&line, 10.0, &MockBackend::new()).unwrap();
        assert_eq!(offsets(&resolved), vec![Some(0.0), Some(30.0)]);
        assert_eq!(resolved.lyrics, "Hello world");
        assert!(line.chords.iter().all(|c| c.pixel_offset.is_none()));
    }

    #[test]
    fn offsets_are_non_decreasing() {
        let line = parse_line("A[G]ma[D][D7]zing gr[C]ace[G]");
        let resolved = resolve_offsets(&line, 17.0, &MockBackend::new()).unwrap();
        let xs: Vec<f32> = resolved.chords.iter().map(|c| c.pixel_offset.unwrap()).collect();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]), "{xs:?}");
        assert_eq!(xs[1], xs[2]);
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let backend = MockBackend::new();
        let line = parse_line("How [G]sweet the [D]sound");
        let once = resolve_offsets(&line, 42.0, &backend).unwrap();
        let twice = resolve_offsets(&once, 42.0, &backend).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn resolving_at_a_new_size_recomputes() {
        let backend = MockBackend::new();
        let line = parse_line("How [G]sweet");
        let small = resolve_offsets(&line, 10.0, &backend).unwrap();
        let large = resolve_offsets(&small, 20.0, &backend).unwrap();
        assert_eq!(offsets(&small), vec![Some(20.0)]);
        assert_eq!(offsets(&large), vec![Some(40.0)]);
    }

    // =========================================================================
    // layout_section
    // =========================================================================

    #[test]
    fn layout_section_resolves_every_chord_at_committed_size() {
        let backend = MockBackend::new();
        let s = section(&["[G]Hello [C]world", "[D]again"]);
        let canvas = CanvasSize::new(1000, 1000);
        let layout = layout_section(&s, canvas, &FitPolicy::default(), &backend).unwrap();

        assert_eq!(layout.title, "Verse 1");
        assert_eq!(layout.lines.len(), 2);
        let hello = &layout.lines[0];
        assert_eq!(hello.chords[1].pixel_offset, Some(6.0 * MOCK_ADVANCE * layout.fit.size));
        assert!(layout.lines.iter().flat_map(|l| &l.chords).all(|c| c.pixel_offset.is_some()));
    }

    #[test]
    fn layout_of_chord_only_section_resolves_at_min_size() {
        let backend = MockBackend::new();
        let s = section(&["[G] [C]"]);
        let canvas = CanvasSize::new(1000, 1000);
        let layout = layout_section(&s, canvas, &FitPolicy::default(), &backend).unwrap();

        assert_eq!(layout.fit, FontFit::without_lyrics(8.0));
        assert_eq!(
            layout.lines[0].chords[1].pixel_offset,
            Some(1.0 * MOCK_ADVANCE * 8.0)
        );
        let sheet = layout.chord_sheet.as_ref().unwrap();
        assert!(sheet.size > 8.0);
        assert_eq!(layout.drawn_size(), sheet.size);
    }

    #[test]
    fn lyric_sections_have_no_chord_sheet() {
        let s = section(&["[G]Hello"]);
        let canvas = CanvasSize::new(1000, 1000);
        let backend = MockBackend::new();
        let layout = layout_section(&s, canvas, &FitPolicy::default(), &backend).unwrap();
        assert!(layout.chord_sheet.is_none());
        assert_eq!(layout.drawn_size(), layout.fit.size);
    }

    // =========================================================================
    // chord-only rows
    // =========================================================================

    #[test]
    fn chord_labels_keep_a_gap_when_spaces_are_narrow() {
        // size 10: label 5 wide, gap ("  ") 10 wide, one space 5 wide.
        let line = parse_line("[G] [C] [G] [Am]");
        let row = place_chord_row(&line, 10.0, &MockBackend::new()).unwrap();
        assert_eq!(row.xs, vec![0.0, 15.0, 30.0, 45.0]);
        assert_eq!(row.width, 55.0);
        assert_eq!(row.height, 10.0);
    }

    #[test]
    fn chord_labels_never_overlap() {
        let backend = MockBackend::new();
        let line = parse_line("[Gmaj7][Dsus4] [C] [F#m7b5]");
        let row = place_chord_row(&line, 24.0, &backend).unwrap();
        for (i, pair) in row.xs.windows(2).enumerate() {
            let label = backend.measure_text(24.0, &line.chords[i].name).unwrap();
            assert!(
                pair[0] + label.width < pair[1],
                "{} ends at {} past the next label at {}",
                line.chords[i].name,
                pair[0] + label.width,
                pair[1]
            );
        }
    }

    #[test]
    fn chord_labels_stay_on_their_character_when_there_is_room() {
        let row = place_chord_row(&parse_line("[G]1234567890[C]"), 10.0, &MockBackend::new())
            .unwrap();
        assert_eq!(row.xs, vec![0.0, 50.0]);
    }

    #[test]
    fn empty_section_has_no_chord_sheet() {
        let s = section(&[]);
        let canvas = CanvasSize::new(1000, 1000);
        let backend = MockBackend::new();
        let layout = layout_section(&s, canvas, &FitPolicy::default(), &backend).unwrap();
        assert!(layout.chord_sheet.is_none());
        assert_eq!(layout.drawn_size(), FitPolicy::default().min_size);
    }

    #[test]
    fn chord_row_without_chords_is_empty() {
        let row = place_chord_row(&parse_line("   "), 10.0, &MockBackend::new()).unwrap();
        assert!(row.xs.is_empty());
        assert_eq!(row.width, 0.0);
    }

    #[test]
    fn chord_rows_are_sized_to_the_canvas() {
        // [G] [C] [G] [D] spans 5 × size with gaps; width bound is 1920.
        let lines = vec![parse_line("[G] [C] [G] [D]")];
        let policy = FitPolicy::default();
        let canvas = CanvasSize::new(1920, 1080);
        let sheet = fit_chord_rows(&lines, canvas, &policy, &MockBackend::new()).unwrap();
        assert!(sheet.size < 384.0);
        assert!(sheet.size >= 384.0 - policy.epsilon);
        assert!(sheet.width() < 1920.0);
        assert_eq!(sheet.rows.len(), 1);
    }

    #[test]
    fn chord_rows_height_counts_one_row_per_line() {
        let lines = vec![parse_line("[G]"), parse_line("[C]"), parse_line("[D]")];
        let sheet = fit_chord_rows(
            &lines,
            CanvasSize::new(10_000, 300),
            &FitPolicy::default(),
            &MockBackend::new(),
        )
        .unwrap();
        assert!(sheet.size < 100.0);
        assert!(sheet.row_height() * 3.0 < 300.0);
    }
}
