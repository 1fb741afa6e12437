//! Chord transposition for arrangements in a different key.
//!
//! Only chord parts and the `{key: ...}` directive change. Lyrics, comments
//! and every other directive are carried over untouched, and chord text that
//! is not a recognizable chord symbol (`N.C.`, `x`) is left as written.

use crate::ast::{Document, Line, Part};
use crate::chord::{Accidental, ChordSymbol, Pitch};

/// Major-key roots conventionally spelled with flats: Db, Eb, F, Gb, Ab, Bb
const FLAT_MAJOR_ROOTS: [i8; 6] = [1, 3, 5, 6, 8, 10];

/// Whether a key is conventionally written with flats.
/// Minor keys follow their relative major (Dm → F, Gm → Bb, ...).
fn is_flat_key(root_semitone: i8, minor: bool) -> bool {
    let major_root = if minor {
        (root_semitone + 3).rem_euclid(12)
    } else {
        root_semitone.rem_euclid(12)
    };
    FLAT_MAJOR_ROOTS.contains(&major_root)
}

fn shift(pitch: Pitch, semitones: i8, prefer_flat: bool) -> Pitch {
    Pitch::from_semitone(pitch.semitone() + semitones, prefer_flat)
}

/// Transpose a single chord symbol.
///
/// Root and slash bass move by `semitones`; the quality is kept verbatim.
/// Text that does not parse as a chord is returned unchanged.
///
/// # Example
/// ```
/// use chordchart::transpose_chord;
///
/// assert_eq!(transpose_chord("G/B", 2, false), "A/C#");
/// assert_eq!(transpose_chord("Dm7", 1, true), "Ebm7");
/// assert_eq!(transpose_chord("N.C.", 3, false), "N.C.");
/// ```
pub fn transpose_chord(symbol: &str, semitones: i32, prefer_flat: bool) -> String {
    let Some(chord) = ChordSymbol::parse(symbol) else {
        return symbol.to_string();
    };
    let semitones = semitones.rem_euclid(12) as i8;
    ChordSymbol {
        root: shift(chord.root, semitones, prefer_flat),
        quality: chord.quality,
        bass: chord.bass.map(|b| shift(b, semitones, prefer_flat)),
    }
    .to_string()
}

fn transpose_lines(lines: &[Line], semitones: i32, key_prefers_flat: Option<bool>) -> Vec<Line> {
    lines
        .iter()
        .map(|line| match line {
            Line::Chords { parts } => Line::Chords {
                parts: parts
                    .iter()
                    .map(|part| match part {
                        Part::Chord(symbol) => {
                            let prefer_flat = key_prefers_flat.unwrap_or_else(|| {
                                ChordSymbol::parse(symbol).is_some_and(|c| c.uses_flats())
                            });
                            Part::Chord(transpose_chord(symbol, semitones, prefer_flat))
                        }
                        Part::Lyrics(text) => Part::Lyrics(text.clone()),
                    })
                    .collect(),
            },
            other => other.clone(),
        })
        .collect()
}

/// Transpose every chord of a document by `semitones` (positive = up).
///
/// When the document has a `{key: ...}` directive it is transposed as well,
/// and all chords are spelled with the accidentals of the new key. Without a
/// key each chord keeps the accidental family it was written in.
///
/// # Example
/// ```
/// use chordchart::{parse, transpose_document, format_line};
///
/// let doc = parse("{key: G}\n[G]Amazing [C]grace");
/// let up = transpose_document(&doc, 3);
/// assert_eq!(up.key(), Some("Bb"));
/// assert_eq!(format_line(&up.lines[0]).chord, "Bb      Eb");
/// ```
pub fn transpose_document(doc: &Document, semitones: i32) -> Document {
    let steps = semitones.rem_euclid(12) as i8;
    if steps == 0 {
        return doc.clone();
    }

    let mut metadata = doc.metadata.clone();
    let mut key_prefers_flat = None;

    if let Some(key) = doc.key().and_then(ChordSymbol::parse) {
        let new_root = key.root.semitone() + steps;
        let prefer_flat = is_flat_key(new_root, key.is_minor());
        let new_key = ChordSymbol {
            root: Pitch::from_semitone(new_root, prefer_flat),
            quality: key.quality,
            bass: None,
        };
        metadata.insert("key".to_string(), new_key.to_string());
        key_prefers_flat = Some(prefer_flat);
    }

    Document {
        metadata,
        lines: transpose_lines(&doc.lines, semitones, key_prefers_flat),
    }
}

/// Transpose a document from its `{key: ...}` to `target`.
///
/// The key directive is set to `target` as written, and chords take the
/// accidentals `target` is spelled with. Returns `None` when the document has
/// no key or either key is not a recognizable pitch.
pub fn transpose_to_key(doc: &Document, target: &str) -> Option<Document> {
    let from = ChordSymbol::parse(doc.key()?)?;
    let to = ChordSymbol::parse(target)?;

    let semitones = i32::from((to.root.semitone() - from.root.semitone()).rem_euclid(12));
    let prefer_flat = match to.root.accidental {
        Accidental::Flat => true,
        Accidental::Sharp => false,
        Accidental::Natural => is_flat_key(to.root.semitone(), to.is_minor()),
    };

    let mut metadata = doc.metadata.clone();
    metadata.insert("key".to_string(), target.trim().to_string());

    Some(Document {
        metadata,
        lines: transpose_lines(&doc.lines, semitones, Some(prefer_flat)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_transpose_chord_up_and_down() {
        assert_eq!(transpose_chord("C", 2, false), "D");
        assert_eq!(transpose_chord("C", -1, false), "B");
        assert_eq!(transpose_chord("Am7", 12, false), "Am7");
        assert_eq!(transpose_chord("E", 1, false), "F");
        assert_eq!(transpose_chord("E", 1, true), "F");
        assert_eq!(transpose_chord("C", 1, false), "C#");
        assert_eq!(transpose_chord("C", 1, true), "Db");
    }

    #[test]
    fn test_transpose_keeps_unknown_symbols() {
        assert_eq!(transpose_chord("N.C.", 5, false), "N.C.");
        assert_eq!(transpose_chord("riff", 5, false), "riff");
    }

    #[test]
    fn test_flat_keys() {
        assert!(is_flat_key(5, false)); // F
        assert!(is_flat_key(10, false)); // Bb
        assert!(!is_flat_key(7, false)); // G
        assert!(is_flat_key(2, true)); // Dm
        assert!(is_flat_key(7, true)); // Gm
        assert!(!is_flat_key(9, true)); // Am
        assert!(!is_flat_key(4, true)); // Em
    }

    #[test]
    fn test_transpose_document_updates_key() {
        let doc = parse("{title: Song}\n{key: D}\n[D]la [A/C#]la [Bm]la");
        let up = transpose_document(&doc, 2);
        assert_eq!(up.key(), Some("E"));
        assert_eq!(up.title(), Some("Song"));
        assert_eq!(up.chords().collect::<Vec<_>>(), vec!["E", "B/D#", "C#m"]);
        assert_eq!(up.lines[0].lyrics(), doc.lines[0].lyrics());
    }

    #[test]
    fn test_transpose_document_minor_key() {
        let doc = parse("{key: Am}\n[Am]la [E7]la");
        let down = transpose_document(&doc, -2);
        assert_eq!(down.key(), Some("Gm"));
        assert_eq!(down.chords().collect::<Vec<_>>(), vec!["Gm", "D7"]);
    }

    #[test]
    fn test_transpose_without_key_keeps_accidental_family() {
        let doc = parse("[Bb]la [F#]la [C]la");
        let up = transpose_document(&doc, 1);
        assert_eq!(up.key(), None);
        assert_eq!(up.chords().collect::<Vec<_>>(), vec!["B", "G", "C#"]);
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let doc = parse("{key: G}\n[G]la");
        assert_eq!(transpose_document(&doc, 0), doc);
        assert_eq!(transpose_document(&doc, -12), doc);
    }

    #[test]
    fn test_non_chord_lines_untouched() {
        let doc = parse("{key: C}\n{comment: [C] intro}\ntext\n\n[C]la");
        let up = transpose_document(&doc, 5);
        assert_eq!(up.lines[0], doc.lines[0]);
        assert_eq!(up.lines[1], doc.lines[1]);
        assert_eq!(up.lines[2], doc.lines[2]);
        assert_eq!(up.chords().collect::<Vec<_>>(), vec!["F"]);
    }

    #[test]
    fn test_transpose_to_key() {
        let doc = parse("{key: G}\n[G]la [D/F#]la [Em]la");
        let eb = transpose_to_key(&doc, "Eb").unwrap();
        assert_eq!(eb.key(), Some("Eb"));
        assert_eq!(eb.chords().collect::<Vec<_>>(), vec!["Eb", "Bb/D", "Cm"]);

        let fsharp = transpose_to_key(&doc, "F#").unwrap();
        assert_eq!(fsharp.key(), Some("F#"));
        assert_eq!(fsharp.chords().collect::<Vec<_>>(), vec!["F#", "C#/F", "D#m"]);
    }

    #[test]
    fn test_transpose_to_key_requires_keys() {
        let doc = parse("[G]la");
        assert!(transpose_to_key(&doc, "A").is_none());

        let doc = parse("{key: G}\n[G]la");
        assert!(transpose_to_key(&doc, "H").is_none());
    }
}
