// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled notes: a letter name plus an accidental.
//!
//! Unlike a pitch class, a spelled note keeps its letter, so `C#` and `Db`
//! are different notes even though they sound the same. Interval arithmetic
//! works on letters first and then corrects the accidental, which is what
//! keeps scale spellings letter-consistent.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::accidental::{Accidental, Semitones, MAX_OFFSET};
use super::interval::Interval;
use super::TheoryError;

/// The seven letter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// All letters in alphabet order
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Position of this letter in the alphabet (A = 0)
    pub fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 6,
        }
    }

    /// Step forward through the cyclic alphabet (G wraps to A)
    pub fn step(self, steps: usize) -> Self {
        Letter::ALL[(self.index() + steps) % Letter::ALL.len()]
    }

    /// Parse a letter name, ignoring case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    /// Upper-case name of the letter
    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A spelled note (e.g. `Bb`, `F#`, `Cx`), serialized as its spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
}

impl Note {
    /// Create a note from a letter and accidental
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Create the natural note for a letter
    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Get the letter name
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// Get the accidental
    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Semitone offset of this note from its natural letter
    pub fn offset(self) -> Semitones {
        self.accidental.semitones()
    }

    /// Whether this note may start a generated scale (at most one sharp or flat)
    pub fn is_root_eligible(self) -> bool {
        self.accidental.magnitude() <= 1
    }

    /// Lower-case spelling used as a lookup key (e.g. `"bb"`, `"f#"`)
    pub fn spelling(self) -> String {
        format!("{}{}", self.letter.as_char().to_ascii_lowercase(), self.accidental)
    }

    /// Raise or lower the note by semitones while keeping its letter.
    ///
    /// Returns `None` if the result needs more than three sharps or flats.
    pub fn shift(self, semitones: Semitones) -> Option<Note> {
        let new_offset = self.offset() + semitones;
        if new_offset.abs() > MAX_OFFSET {
            return None;
        }
        Accidental::from_semitones(new_offset).map(|a| Note::new(self.letter, a))
    }

    /// Apply an interval above this note.
    ///
    /// The target letter comes from the interval number alone; the distance
    /// to that natural letter is then measured and the remaining semitones
    /// are written as an accidental. Returns `None` when that accidental
    /// would exceed three sharps or flats.
    pub fn add_interval(self, interval: Interval) -> Option<Note> {
        let required = interval.semitones();

        let letter = self.letter.step(interval.simple_number() as usize - 1);
        let target = Note::natural(letter);

        let measured = Interval::count_semitones(self, target);
        target.shift(required - measured)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse a spelling such as `C`, `bb`, `F#` or `Abbb` (letter case ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;
        let symbol = chars.as_str().to_lowercase();
        let accidental = Accidental::from_symbol(&symbol)
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;
        Ok(Note::new(letter, accidental))
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}

/// Every spelled note between three flats and three sharps
#[derive(Debug, Clone)]
pub struct NoteCatalogue {
    notes: HashMap<String, Note>,
    roots: Vec<Note>,
}

impl NoteCatalogue {
    /// Build the 49-note catalogue and its 21 root-eligible notes
    pub fn build() -> Self {
        let mut notes = HashMap::with_capacity(Letter::ALL.len() * Accidental::ALL.len());
        let mut roots = Vec::new();

        for letter in Letter::ALL {
            for accidental in Accidental::ALL {
                let note = Note::new(letter, accidental);
                notes.insert(note.spelling(), note);

                if note.is_root_eligible() {
                    roots.push(note);
                }
            }
        }

        Self { notes, roots }
    }

    /// Look up a note by spelling, ignoring case
    pub fn lookup(&self, spelling: &str) -> Option<Note> {
        self.notes.get(&spelling.to_lowercase()).copied()
    }

    /// Notes used as roots when generating scale collections
    pub fn root_notes(&self) -> &[Note] {
        &self.roots
    }

    /// Iterate over every catalogued note (unordered)
    pub fn iter(&self) -> impl Iterator<Item = Note> + '_ {
        self.notes.values().copied()
    }

    /// Number of catalogued notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the catalogue is empty (never true once built)
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for NoteCatalogue {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    fn interval(s: &str) -> Interval {
        s.parse().unwrap()
    }

    #[test]
    fn test_letter_step_wraps() {
        assert_eq!(Letter::C.step(4), Letter::G);
        assert_eq!(Letter::G.step(1), Letter::A);
        assert_eq!(Letter::B.step(6), Letter::A);
        assert_eq!(Letter::E.step(0), Letter::E);
    }

    #[test]
    fn test_catalogue_contents() {
        let catalogue = NoteCatalogue::build();
        assert_eq!(catalogue.len(), 49);
        assert_eq!(catalogue.root_notes().len(), 21);

        for spelling in ["A", "a", "Bb", "F#", "Ebb", "Fx", "Abbb", "G#x"] {
            assert!(catalogue.lookup(spelling).is_some(), "{} should exist", spelling);
        }
        for spelling in ["Fxx", "Abbbb", "z", "", "H", "C##"] {
            assert!(catalogue.lookup(spelling).is_none(), "{} should not exist", spelling);
        }
    }

    #[test]
    fn test_root_notes_order() {
        let catalogue = NoteCatalogue::build();
        let first: Vec<String> = catalogue.root_notes()[..4].iter().map(|n| n.to_string()).collect();
        assert_eq!(first, vec!["Ab", "A", "A#", "Bb"]);
        assert!(catalogue.root_notes().iter().all(|n| n.is_root_eligible()));
    }

    #[test]
    fn test_lookup_round_trip() {
        let catalogue = NoteCatalogue::build();
        for n in catalogue.iter() {
            assert_eq!(catalogue.lookup(&n.spelling()), Some(n));
            assert_eq!(catalogue.lookup(&n.to_string()), Some(n));
        }
    }

    #[test]
    fn test_from_str_matches_catalogue() {
        let catalogue = NoteCatalogue::build();
        assert_eq!("Bb".parse::<Note>().ok(), catalogue.lookup("bb"));
        assert_eq!("cX".parse::<Note>().ok(), catalogue.lookup("Cx"));
        assert!("Axx".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
        assert!("Z".parse::<Note>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(note("a").to_string(), "A");
        assert_eq!(note("bb").to_string(), "Bb");
        assert_eq!(note("F#").to_string(), "F#");
        assert_eq!(note("Abb").to_string(), "Abb");
        assert_eq!(note("Cx").to_string(), "Cx");
        assert_eq!(note("Cx").spelling(), "cx");
    }

    #[test]
    fn test_enharmonic_notes_differ() {
        assert_ne!(note("C#"), note("Db"));
        assert_ne!(note("B"), note("Bb"));
        assert_eq!(note("F#"), note("f#"));
    }

    #[test]
    fn test_shift() {
        assert_eq!(note("C").shift(1), Some(note("C#")));
        assert_eq!(note("Eb").shift(-1), Some(note("Ebb")));
        assert_eq!(note("Fx").shift(1), Some(note("F#x")));
        assert_eq!(note("F#x").shift(1), None);
        assert_eq!(note("Dbb").shift(-2), None);
    }

    #[test]
    fn test_add_simple_intervals() {
        let c = note("C");
        assert_eq!(c.add_interval(interval("5")), Some(note("G")));
        assert_eq!(c.add_interval(interval("#4")), Some(note("F#")));
        assert_eq!(c.add_interval(interval("bb7")), Some(note("Bbb")));
    }

    #[test]
    fn test_add_enharmonic_intervals() {
        let c = note("C");
        assert_eq!(c.add_interval(interval("bb2")), Some(note("Dbb")));
        assert_eq!(c.add_interval(interval("#7")), Some(note("B#")));
    }

    #[test]
    fn test_add_compound_intervals() {
        let c = note("C");
        assert_eq!(c.add_interval(interval("10")), Some(note("E")));
        assert_eq!(c.add_interval(interval("8")), Some(note("C")));
        assert_eq!(c.add_interval(interval("#11")), Some(note("F#")));
    }

    #[test]
    fn test_add_interval_from_altered_root() {
        assert_eq!(note("Bb").add_interval(interval("3")), Some(note("D")));
        assert_eq!(note("F#").add_interval(interval("7")), Some(note("E#")));
        assert_eq!(note("Ab").add_interval(interval("b3")), Some(note("Cb")));
    }

    #[test]
    fn test_add_interval_beyond_three_flats() {
        assert_eq!(note("Cbb").add_interval(interval("bb7")), None);
    }

    #[test]
    fn test_serde_uses_spelling() {
        assert_eq!(serde_yaml::to_string(&note("Bb")).unwrap().trim(), "Bb");
        assert_eq!(serde_yaml::from_str::<Note>("F#").unwrap(), note("F#"));
        assert!(serde_yaml::from_str::<Note>("H").is_err());
        assert!(serde_yaml::from_str::<Note>("{letter: C, accidental: Sharp}").is_err());
    }
}
