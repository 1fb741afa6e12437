//! Line-level scanning for ChordPro source.
//!
//! Two scanners, both single pass with no backtracking:
//! - [`match_directive`] recognizes a whole-line `{key: value}` directive.
//! - [`Lexer::scan`] splits a lyric line into chord and lyric parts.

use crate::ast::Part;
use std::iter::Peekable;
use std::str::CharIndices;

/// A `{key: value}` directive line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Directive<'a> {
    /// Key exactly as written. Never empty, never contains `:`.
    pub key: &'a str,
    /// Everything after the first `:` up to the closing `}`, leading
    /// whitespace removed.
    pub value: &'a str,
}

/// Match a directive line.
///
/// The line must open with `{` and close with `}` with nothing outside them,
/// not even whitespace. The key runs up to the first `:` and must not be
/// empty; the value is the remainder, which may itself contain `:` or `}`.
pub fn match_directive(line: &str) -> Option<Directive<'_>> {
    let inner = line.strip_prefix('{')?.strip_suffix('}')?;
    let (key, value) = inner.split_once(':')?;
    if key.is_empty() {
        return None;
    }
    Some(Directive {
        key,
        value: value.trim_start(),
    })
}

/// Scanner for `[chord]` markers within one line
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Byte offset of the `[` that opened the pending marker
    open: Option<usize>,
    /// Byte offset where the current lyric run started
    lyric_start: usize,
    parts: Vec<Part>,
    chord_count: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            open: None,
            lyric_start: 0,
            parts: Vec::new(),
            chord_count: 0,
        }
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn push_lyrics(&mut self, end: usize) {
        if end > self.lyric_start {
            self.parts
                .push(Part::Lyrics(self.input[self.lyric_start..end].to_string()));
        }
    }

    /// Scan the line into parts.
    ///
    /// A marker opens at `[` and closes at the first `]` after it; its interior
    /// may contain further `[` characters. An empty marker (`[]`) and a `[`
    /// that is never closed stay in the lyrics.
    ///
    /// Returns `None` when the line holds no complete marker.
    pub fn scan(mut self) -> Option<Vec<Part>> {
        while let Some((i, c)) = self.advance() {
            match c {
                '[' if self.open.is_none() => {
                    // "[]" is literal text
                    if self.peek_char() == Some(']') {
                        self.advance();
                    } else {
                        self.open = Some(i);
                    }
                }
                ']' => {
                    let Some(open) = self.open.take() else {
                        continue;
                    };
                    self.push_lyrics(open);
                    self.parts
                        .push(Part::Chord(self.input[open + 1..i].to_string()));
                    self.chord_count += 1;
                    self.lyric_start = i + 1;
                }
                _ => {}
            }
        }

        if self.chord_count == 0 {
            return None;
        }
        self.push_lyrics(self.input.len());
        Some(self.parts)
    }
}

/// Convenience wrapper around [`Lexer::scan`].
pub fn scan_chords(line: &str) -> Option<Vec<Part>> {
    Lexer::new(line).scan()
}
