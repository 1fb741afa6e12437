//! # Chart Formatter
//!
//! Lays a parsed line out as two monospace rows: chord symbols on top, each
//! starting in the column of the lyric text it precedes.
//!
//! ## Layout
//! ```text
//! [C]Amazing [F]grace, how [C]sweet
//!
//! C       F          C
//! Amazing grace, how sweet
//! ```
//!
//! A chord's column is the number of lyric characters before it. Padding
//! before a chord is never negative: when its column falls inside the
//! previous chord symbol (e.g. `[Cmaj7]a[G]b`) it is written directly after
//! it. The row end used for the next chord's padding is always the current
//! chord's own column plus its length. Columns count `char`s, not bytes.

use crate::ast::{Document, FormattedRow, Line, Part};

/// Format one line record as a display row.
///
/// # Example
/// ```rust
/// use chordchart::{format_line, Line};
///
/// let row = format_line(&Line::Comment { content: "hello".to_string() });
/// assert_eq!(row.lyrics, "(hello)");
/// assert!(row.is_comment);
/// ```
pub fn format_line(line: &Line) -> FormattedRow {
    match line {
        Line::Comment { content } => FormattedRow {
            chord: String::new(),
            lyrics: format!("({})", content),
            is_comment: true,
        },
        Line::Text { content } => FormattedRow {
            chord: String::new(),
            lyrics: content.clone(),
            is_comment: false,
        },
        Line::Empty => FormattedRow::default(),
        Line::Chords { parts } => format_parts(parts),
    }
}

fn format_parts(parts: &[Part]) -> FormattedRow {
    let mut lyrics = String::new();
    let mut lyrics_len = 0usize;
    let mut placements: Vec<(&str, usize)> = Vec::new();

    for part in parts {
        match part {
            Part::Lyrics(text) => {
                lyrics.push_str(text);
                lyrics_len += text.chars().count();
            }
            Part::Chord(symbol) => placements.push((symbol.as_str(), lyrics_len)),
        }
    }

    let mut chord = String::new();
    let mut last_end = 0usize;
    for (symbol, offset) in placements {
        if offset < last_end {
            tracing::debug!(
                chord = symbol,
                column = offset,
                previous_end = last_end,
                "chord collides with previous chord"
            );
        }
        let padding = offset.saturating_sub(last_end);
        chord.extend(std::iter::repeat(' ').take(padding));
        chord.push_str(symbol);
        last_end = offset + symbol.chars().count();
    }

    FormattedRow {
        chord,
        lyrics,
        is_comment: false,
    }
}

/// Format every line of a document.
pub fn format_document(doc: &Document) -> Vec<FormattedRow> {
    doc.lines.iter().map(format_line).collect()
}

/// Render a document as plain monospace text.
///
/// Chord rows are printed only when a line has chords, so text, comment and
/// blank lines take a single row.
pub fn render_text(doc: &Document) -> String {
    let mut out = String::new();
    for row in format_document(doc) {
        if !row.chord.is_empty() {
            out.push_str(&row.chord);
            out.push('\n');
        }
        out.push_str(&row.lyrics);
        out.push('\n');
    }
    out
}
