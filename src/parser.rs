//! # ChordPro Parser
//!
//! Turns ChordPro text into a [`Document`]: a metadata map plus one [`Line`]
//! record per content line.
//!
//! ## Line Classification
//! Each line is classified on its own, in this order:
//! 1. `{comment: text}` (key matched case-insensitively) → `Line::Comment`
//! 2. any other `{key: value}` filling the whole line → metadata only, stored
//!    under the lowercased key as written
//! 3. blank or whitespace-only → `Line::Empty`
//! 4. at least one complete `[chord]` marker → `Line::Chords`
//! 5. anything else → `Line::Text`, verbatim
//!
//! Parsing never fails. Unbalanced brackets and unknown directives are kept
//! as text or metadata rather than rejected.
//!
//! ## Example
//! ```rust
//! use chordchart::{parse, Line};
//!
//! let doc = parse("{title: Amazing Grace}\n{comment: Verse 1}\n[G]Amazing grace");
//! assert_eq!(doc.title(), Some("Amazing Grace"));
//! assert_eq!(doc.lines.len(), 2);
//! assert_eq!(doc.lines[0], Line::Comment { content: "Verse 1".to_string() });
//! assert_eq!(doc.lines[1].lyrics(), "Amazing grace");
//! ```

use crate::ast::{Document, Line};
use crate::lexer::{match_directive, scan_chords};

/// Parse ChordPro source into a document.
pub fn parse(source: &str) -> Document {
    let mut doc = Document::default();
    if source.is_empty() {
        return doc;
    }

    for raw in source.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(directive) = match_directive(line) {
            let key = directive.key.to_lowercase();
            if key == "comment" {
                doc.lines.push(Line::Comment {
                    content: directive.value.to_string(),
                });
            } else {
                doc.metadata.insert(key, directive.value.to_string());
            }
            continue;
        }

        if line.trim().is_empty() {
            doc.lines.push(Line::Empty);
            continue;
        }

        let record = match scan_chords(line) {
            Some(parts) => Line::Chords { parts },
            None => Line::Text {
                content: line.to_string(),
            },
        };
        doc.lines.push(record);
    }

    doc
}

/// Parse content that may be absent. `None` yields an empty document.
pub fn parse_optional(source: Option<&str>) -> Document {
    source.map(parse).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Part;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Document::default());
        assert_eq!(parse_optional(None), Document::default());
        assert_eq!(parse_optional(Some("")), Document::default());
    }

    #[test]
    fn test_directive_goes_to_metadata() {
        let doc = parse("{Title: Amazing Grace}\n{KEY: G}");
        assert!(doc.lines.is_empty());
        assert_eq!(doc.metadata.get("title").map(String::as_str), Some("Amazing Grace"));
        assert_eq!(doc.metadata.get("key").map(String::as_str), Some("G"));
    }

    #[test]
    fn test_indented_directive_is_text() {
        let doc = parse("  {title: X}");
        assert!(doc.metadata.is_empty());
        assert_eq!(
            doc.lines,
            vec![Line::Text {
                content: "  {title: X}".to_string()
            }]
        );
    }

    #[test]
    fn test_directive_key_whitespace_preserved() {
        let doc = parse("{ Title : x}");
        assert_eq!(doc.metadata.get(" title ").map(String::as_str), Some("x"));
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_repeated_directive_last_wins() {
        let doc = parse("{tempo: 90}\n{tempo: 120}");
        assert_eq!(doc.tempo(), Some(120));
        assert_eq!(doc.metadata.len(), 1);
    }

    #[test]
    fn test_comment_is_a_line() {
        let doc = parse("{comment: hello}");
        assert!(doc.metadata.is_empty());
        assert_eq!(
            doc.lines,
            vec![Line::Comment {
                content: "hello".to_string()
            }]
        );
    }

    #[test]
    fn test_comment_key_case_insensitive() {
        let doc = parse("{COMMENT: Chorus}");
        assert_eq!(
            doc.lines,
            vec![Line::Comment {
                content: "Chorus".to_string()
            }]
        );
    }

    #[test]
    fn test_directive_takes_priority_over_chords() {
        let doc = parse("{title: [C] Song}");
        assert!(doc.lines.is_empty());
        assert_eq!(doc.title(), Some("[C] Song"));
    }

    #[test]
    fn test_text_and_empty_lines() {
        let doc = parse("Verse one\n   \n\nplain");
        assert_eq!(
            doc.lines,
            vec![
                Line::Text {
                    content: "Verse one".to_string()
                },
                Line::Empty,
                Line::Empty,
                Line::Text {
                    content: "plain".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_text_kept_verbatim() {
        let doc = parse("  indented text  ");
        assert_eq!(
            doc.lines,
            vec![Line::Text {
                content: "  indented text  ".to_string()
            }]
        );
    }

    #[test]
    fn test_chord_line() {
        let doc = parse("[C]Amazing [F]grace");
        assert_eq!(
            doc.lines,
            vec![Line::Chords {
                parts: vec![
                    Part::Chord("C".to_string()),
                    Part::Lyrics("Amazing ".to_string()),
                    Part::Chord("F".to_string()),
                    Part::Lyrics("grace".to_string()),
                ]
            }]
        );
    }

    #[test]
    fn test_unterminated_bracket_is_text() {
        let doc = parse("broken [C line");
        assert_eq!(
            doc.lines,
            vec![Line::Text {
                content: "broken [C line".to_string()
            }]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = parse("{title: Song}\r\n[G]la\r\n");
        assert_eq!(doc.title(), Some("Song"));
        assert_eq!(doc.lines.len(), 2);
        assert_eq!(doc.lines[0].lyrics(), "la");
        assert_eq!(doc.lines[1], Line::Empty);
    }

    #[test]
    fn test_trailing_newline_keeps_blank_line() {
        let doc = parse("text\n");
        assert_eq!(doc.lines.len(), 2);
        assert_eq!(doc.lines[1], Line::Empty);
    }

    #[test]
    fn test_order_preserved() {
        let doc = parse("one\n{comment: two}\n[C]three\n\nfour");
        let kinds: Vec<&str> = doc
            .lines
            .iter()
            .map(|l| match l {
                Line::Comment { .. } => "comment",
                Line::Text { .. } => "text",
                Line::Empty => "empty",
                Line::Chords { .. } => "line",
            })
            .collect();
        assert_eq!(kinds, vec!["text", "comment", "line", "empty", "text"]);
    }
}
