pub mod ast;
pub mod catalog;
pub mod chord;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod transpose;
pub mod writer;

pub use ast::*;
pub use config::Config;
pub use duplicates::{
    find_duplicates, find_duplicates_with_config, DuplicateConfig, PotentialDuplicate,
    SongSummary,
};
pub use error::*;
pub use formatter::{format_document, format_line, render_text};
pub use parser::{parse, parse_optional};
pub use transpose::{transpose_chord, transpose_document, transpose_to_key};
pub use writer::to_chordpro;

/// Parse ChordPro source and lay out every line for display.
/// This is the main entry point for chart views.
///
/// ```
/// let rows = chordchart::render("{title: Amazing Grace}\n[C]Amazing [F]grace");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].chord, "C       F");
/// assert_eq!(rows[0].lyrics, "Amazing grace");
/// ```
pub fn render(source: &str) -> Vec<FormattedRow> {
    format_document(&parse(source))
}

/// Render with every chord shifted by `semitones`
pub fn render_transposed(source: &str, semitones: i32) -> Vec<FormattedRow> {
    format_document(&transpose_document(&parse(source), semitones))
}
