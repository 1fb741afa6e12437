use crate::ast::{Document, Line, Part};

/// Directives written first, in this order. Other keys follow alphabetically.
const LEADING_DIRECTIVES: [&str; 7] = ["title", "subtitle", "artist", "key", "tempo", "time", "capo"];

/// Serialize a document back to ChordPro text.
///
/// Directives are written at the top, followed by the lines in order with
/// chord markers re-inlined. Rows are joined with `\n` and no trailing
/// newline, so parsing the output of a parsed document yields the same
/// document (a document holding nothing but one blank line comes back empty).
///
/// # Example
/// ```
/// use chordchart::{parse, to_chordpro};
///
/// let doc = parse("[G]Amazing grace\n{title: Amazing Grace}");
/// assert_eq!(to_chordpro(&doc), "{title: Amazing Grace}\n[G]Amazing grace");
/// ```
pub fn to_chordpro(doc: &Document) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(doc.metadata.len() + doc.lines.len());

    for key in LEADING_DIRECTIVES {
        if let Some(value) = doc.metadata.get(key) {
            rows.push(directive(key, value));
        }
    }
    for (key, value) in &doc.metadata {
        if !LEADING_DIRECTIVES.contains(&key.as_str()) {
            rows.push(directive(key, value));
        }
    }

    for line in &doc.lines {
        let row = match line {
            Line::Comment { content } => directive("comment", content),
            Line::Text { content } => content.clone(),
            Line::Empty => String::new(),
            Line::Chords { parts } => {
                let mut row = String::new();
                for part in parts {
                    match part {
                        Part::Chord(symbol) => {
                            row.push('[');
                            row.push_str(symbol);
                            row.push(']');
                        }
                        Part::Lyrics(text) => row.push_str(text),
                    }
                }
                row
            }
        };
        rows.push(row);
    }

    rows.join("\n")
}

fn directive(key: &str, value: &str) -> String {
    format!("{{{}: {}}}", key, value)
}
