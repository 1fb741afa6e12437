//! Chord symbol parsing
//!
//! Splits chord symbols (C, Am, G7, F#m7/C#, Bbsus4, ...) into root, quality
//! and optional slash bass so they can be transposed and respelled.

use std::fmt;

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Letter and semitone offset from C, in `NoteName` order
const NOTE_TABLE: [(NoteName, char, i8); 7] = [
    (NoteName::C, 'C', 0),
    (NoteName::D, 'D', 2),
    (NoteName::E, 'E', 4),
    (NoteName::F, 'F', 5),
    (NoteName::G, 'G', 7),
    (NoteName::A, 'A', 9),
    (NoteName::B, 'B', 11),
];

impl NoteName {
    fn from_char(c: char) -> Option<Self> {
        NOTE_TABLE.iter().find(|&&(_, letter, _)| letter == c).map(|&(name, _, _)| name)
    }

    fn as_char(self) -> char {
        NOTE_TABLE[self as usize].1
    }

    fn semitone(self) -> i8 {
        NOTE_TABLE[self as usize].2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accidental {
    Sharp,
    Flat,
    #[default]
    Natural,
}

/// A spelled pitch class, e.g. `Bb` or `F#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pitch {
    pub name: NoteName,
    pub accidental: Accidental,
}

impl Pitch {
    /// Parse a pitch at the start of `s`.
    ///
    /// Returns the pitch and the number of bytes consumed.
    fn parse_prefix(s: &str) -> Option<(Self, usize)> {
        let mut chars = s.char_indices();
        let (_, first) = chars.next()?;
        let name = NoteName::from_char(first)?;
        let (accidental, len) = match chars.next() {
            Some((i, c @ ('#' | '♯'))) => (Accidental::Sharp, i + c.len_utf8()),
            Some((i, c @ ('b' | '♭'))) => (Accidental::Flat, i + c.len_utf8()),
            _ => (Accidental::Natural, 1),
        };
        Some((Pitch { name, accidental }, len))
    }

    /// Parse a whole string as a pitch (`"Eb"`, `"F#"`, `"A"`).
    pub fn parse(s: &str) -> Option<Self> {
        let (pitch, len) = Self::parse_prefix(s)?;
        (len == s.len()).then_some(pitch)
    }

    /// Semitone offset from C (0-11)
    pub fn semitone(self) -> i8 {
        let acc: i8 = match self.accidental {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
        };
        (self.name.semitone() + acc).rem_euclid(12)
    }

    /// Spell a semitone (any integer, wrapped to 0-11) as a pitch
    pub fn from_semitone(semitone: i8, prefer_flat: bool) -> Self {
        // 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
        let (name, accidental) = match semitone.rem_euclid(12) {
            0 => (NoteName::C, Accidental::Natural),
            1 => if prefer_flat { (NoteName::D, Accidental::Flat) } else { (NoteName::C, Accidental::Sharp) },
            2 => (NoteName::D, Accidental::Natural),
            3 => if prefer_flat { (NoteName::E, Accidental::Flat) } else { (NoteName::D, Accidental::Sharp) },
            4 => (NoteName::E, Accidental::Natural),
            5 => (NoteName::F, Accidental::Natural),
            6 => if prefer_flat { (NoteName::G, Accidental::Flat) } else { (NoteName::F, Accidental::Sharp) },
            7 => (NoteName::G, Accidental::Natural),
            8 => if prefer_flat { (NoteName::A, Accidental::Flat) } else { (NoteName::G, Accidental::Sharp) },
            9 => (NoteName::A, Accidental::Natural),
            10 => if prefer_flat { (NoteName::B, Accidental::Flat) } else { (NoteName::A, Accidental::Sharp) },
            _ => (NoteName::B, Accidental::Natural),
        };
        Pitch { name, accidental }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_char())?;
        match self.accidental {
            Accidental::Sharp => write!(f, "#"),
            Accidental::Flat => write!(f, "b"),
            Accidental::Natural => Ok(()),
        }
    }
}

/// A parsed chord symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    pub root: Pitch,
    /// Everything after the root, e.g. `m7`, `sus4`, `6/9`
    pub quality: String,
    /// Slash bass note (`G/B` → `B`)
    pub bass: Option<Pitch>,
}

impl ChordSymbol {
    /// Parse a chord symbol
    ///
    /// Returns `None` for text that does not start with a note letter, such as
    /// `N.C.` or a lower-case `x`.
    ///
    /// # Examples
    /// ```
    /// use chordchart::chord::{ChordSymbol, NoteName, Accidental};
    ///
    /// let chord = ChordSymbol::parse("F#m7/C#").unwrap();
    /// assert_eq!(chord.root.name, NoteName::F);
    /// assert_eq!(chord.root.accidental, Accidental::Sharp);
    /// assert_eq!(chord.quality, "m7");
    /// assert_eq!(chord.bass.unwrap().to_string(), "C#");
    ///
    /// // "6/9" is a quality, not a slash chord
    /// assert_eq!(ChordSymbol::parse("C6/9").unwrap().quality, "6/9");
    /// assert!(ChordSymbol::parse("N.C.").is_none());
    /// ```
    pub fn parse(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        let (root, idx) = Pitch::parse_prefix(symbol)?;
        let rest = &symbol[idx..];

        let (quality, bass) = match rest.rsplit_once('/') {
            Some((quality, bass_str)) => match Pitch::parse(bass_str) {
                Some(bass) => (quality, Some(bass)),
                None => (rest, None),
            },
            None => (rest, None),
        };

        Some(ChordSymbol {
            root,
            quality: quality.to_string(),
            bass,
        })
    }

    /// Minor chord (`m`, `min`, `m7`, ...), but not `maj7`
    pub fn is_minor(&self) -> bool {
        let q = self.quality.as_str();
        (q.starts_with('m') && !q.starts_with("maj")) || q.starts_with('-')
    }

    /// Whether any pitch in the symbol is written with a flat
    pub fn uses_flats(&self) -> bool {
        self.root.accidental == Accidental::Flat
            || self.bass.is_some_and(|b| b.accidental == Accidental::Flat)
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}
