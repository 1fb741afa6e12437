//! # Chart Document Types
//!
//! Types produced by the parser and consumed by the formatter, transposer and
//! writer.
//!
//! ## Type Hierarchy
//! ```text
//! Document
//!   ├── metadata: BTreeMap<key (lower-cased), value>
//!   └── Vec<Line>
//!         ├── Comment { content }   {comment: ...}
//!         ├── Text { content }      plain lyric/text line
//!         ├── Empty                 blank line
//!         └── Chords { parts }      line with [chord] markers
//!               └── Vec<Part> (Chord | Lyrics)
//!
//! FormattedRow { chord, lyrics, is_comment }
//! ```
//!
//! ## Key Concepts
//!
//! ### Parts carry no positions
//! A chord's column is derived by the formatter from the total length of the
//! lyrics parts before it. Concatenating the lyrics parts of a `Chords` line
//! gives back the source line with every `[chord]` marker removed.
//!
//! ### Metadata
//! Directive keys are lower-cased and unique; a repeated directive overwrites
//! the earlier value. `{comment: ...}` is positional content and never lands in
//! the metadata map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parsed ChordPro chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub metadata: BTreeMap<String, String>,
    pub lines: Vec<Line>,
}

impl Document {
    /// Look up a directive value by key (case-insensitive).
    pub fn directive(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.directive("title")
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.directive("subtitle")
    }

    pub fn artist(&self) -> Option<&str> {
        self.directive("artist")
    }

    /// The `{key: ...}` directive, e.g. "G" or "Bbm".
    pub fn key(&self) -> Option<&str> {
        self.directive("key")
    }

    /// Tempo in BPM. `None` when absent or not a plain number.
    pub fn tempo(&self) -> Option<u16> {
        self.directive("tempo")?.trim().parse().ok()
    }

    /// Time signature as written, e.g. "6/8".
    pub fn time(&self) -> Option<&str> {
        self.directive("time")
    }

    pub fn capo(&self) -> Option<u8> {
        self.directive("capo")?.trim().parse().ok()
    }

    /// Every chord symbol in document order.
    pub fn chords(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flat_map(|line| line.chords())
    }
}

/// One line of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Line {
    /// Content of a `{comment: ...}` directive.
    Comment { content: String },
    /// Non-blank line without chord markers, kept verbatim.
    Text { content: String },
    /// Blank or whitespace-only line.
    Empty,
    /// Lyric line with at least one chord marker.
    #[serde(rename = "line")]
    Chords { parts: Vec<Part> },
}

impl Line {
    /// Lyric text of the line with chord markers removed.
    ///
    /// Comments and empty lines have no lyrics and return an empty string.
    pub fn lyrics(&self) -> String {
        match self {
            Line::Text { content } => content.clone(),
            Line::Chords { parts } => parts
                .iter()
                .filter_map(|p| match p {
                    Part::Lyrics(text) => Some(text.as_str()),
                    Part::Chord(_) => None,
                })
                .collect(),
            Line::Comment { .. } | Line::Empty => String::new(),
        }
    }

    /// Chord symbols of a `Chords` line in order; empty for every other kind.
    pub fn chords(&self) -> impl Iterator<Item = &str> {
        let parts: &[Part] = match self {
            Line::Chords { parts } => parts,
            _ => &[],
        };
        parts.iter().filter_map(|p| match p {
            Part::Chord(symbol) => Some(symbol.as_str()),
            Part::Lyrics(_) => None,
        })
    }
}

/// A segment of a chord line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Part {
    /// Text between the brackets of a `[...]` marker.
    Chord(String),
    /// Literal lyric text between markers.
    Lyrics(String),
}

/// A display row: chord symbols positioned above their lyric text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRow {
    pub chord: String,
    pub lyrics: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_comment: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}
