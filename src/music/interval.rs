// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals: a diatonic number plus a quality.
//!
//! Interval numbers run from a unison (1) to two octaves (15). The quality
//! reuses [`Accidental`] as the deviation from the major or perfect interval
//! of that number, so `b3` is a minor third and `#4` an augmented fourth.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::accidental::{Accidental, Semitones};
use super::note::{Letter, Note};
use super::TheoryError;

/// Largest interval number (two octaves)
pub const MAX_NUMBER: u8 = 15;

/// Number of letters in an octave
const LETTERS_PER_OCTAVE: u8 = 7;

/// Steps of the major scale starting from the second degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Tone,
    Semitone,
}

const MAJOR_STEPS: [Step; 7] = [
    Step::Tone,
    Step::Tone,
    Step::Semitone,
    Step::Tone,
    Step::Tone,
    Step::Tone,
    Step::Semitone,
];

/// Reference spelling of the twelve chromatic pitches, used only to measure
/// letter-to-letter distances
const CHROMATIC: [Note; 12] = [
    Note::natural(Letter::C),
    Note::new(Letter::C, Accidental::Sharp),
    Note::natural(Letter::D),
    Note::new(Letter::E, Accidental::Flat),
    Note::natural(Letter::E),
    Note::natural(Letter::F),
    Note::new(Letter::F, Accidental::Sharp),
    Note::natural(Letter::G),
    Note::new(Letter::A, Accidental::Flat),
    Note::natural(Letter::A),
    Note::new(Letter::B, Accidental::Flat),
    Note::natural(Letter::B),
];

/// Augmented seventh: the same pitch spelled on the letter below
pub const AUGMENTED_SEVENTH: Interval = Interval {
    number: 7,
    quality: Accidental::Sharp,
};

/// Diminished second: the same pitch spelled on the letter above
pub const DIMINISHED_SECOND: Interval = Interval {
    number: 2,
    quality: Accidental::DoubleFlat,
};

/// A musical interval such as `3`, `b7` or `#11`.
///
/// Serialized as its spelling, so deserializing goes through the same range
/// check as parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    number: u8,
    quality: Accidental,
}

impl Interval {
    /// Create an interval.
    ///
    /// Returns `None` if the number is outside `1..=15`.
    pub fn new(number: u8, quality: Accidental) -> Option<Self> {
        if (1..=MAX_NUMBER).contains(&number) {
            Some(Self { number, quality })
        } else {
            None
        }
    }

    /// Get the interval number
    pub fn number(self) -> u8 {
        self.number
    }

    /// Get the quality
    pub fn quality(self) -> Accidental {
        self.quality
    }

    /// Reduce a compound interval to within one octave.
    ///
    /// Octaves are removed while the number is above 7, so an octave (8) and
    /// a fifteenth both reduce to a unison (1).
    pub fn simple_number(self) -> u8 {
        let mut number = self.number;
        while number > LETTERS_PER_OCTAVE {
            number -= LETTERS_PER_OCTAVE;
        }
        number
    }

    /// Semitone size of the simple interval, including its quality
    pub fn semitones(self) -> Semitones {
        let mut semitones = 0;
        for position in 2..=self.simple_number() as usize {
            semitones += match MAJOR_STEPS[(position - 2) % MAJOR_STEPS.len()] {
                Step::Semitone => 1,
                Step::Tone => 2,
            };
        }

        semitones + self.quality.semitones()
    }

    /// Count the semitones from `lower` up to `upper`.
    ///
    /// Letters are located in the chromatic reference table and counted
    /// forwards with wrap-around; the two accidentals then adjust the count.
    pub fn count_semitones(lower: Note, upper: Note) -> Semitones {
        let start_letter = Note::natural(lower.letter());
        let end_letter = Note::natural(upper.letter());

        let mut i = CHROMATIC
            .iter()
            .position(|&n| n == start_letter)
            .unwrap_or_default();
        let start = i as Semitones + lower.offset();

        while CHROMATIC[i % CHROMATIC.len()] != end_letter {
            i += 1;
        }
        let end = i as Semitones + upper.offset();

        end - start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality, self.number)
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    /// Parse a spelling such as `4`, `b3`, `#11` or `bbb7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidInterval(s.to_string());

        let digits_at = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (symbol, digits) = s.split_at(digits_at);

        if digits.starts_with('0') || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let quality = Accidental::from_symbol(symbol).ok_or_else(invalid)?;
        let number: u8 = digits.parse().map_err(|_| invalid())?;
        Interval::new(number, quality).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Interval {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}

/// Every interval from a unison to a fifteenth in all seven qualities
#[derive(Debug, Clone)]
pub struct IntervalCatalogue {
    intervals: HashMap<String, Interval>,
}

impl IntervalCatalogue {
    /// Build the 105-interval catalogue
    pub fn build() -> Self {
        let mut intervals = HashMap::with_capacity(MAX_NUMBER as usize * Accidental::ALL.len());

        for number in 1..=MAX_NUMBER {
            for quality in Accidental::ALL {
                let interval = Interval { number, quality };
                intervals.insert(interval.to_string(), interval);
            }
        }

        Self { intervals }
    }

    /// Look up an interval by its exact spelling
    pub fn lookup(&self, spelling: &str) -> Option<Interval> {
        self.intervals.get(spelling).copied()
    }

    /// Check that every spelling names a catalogued interval
    pub fn contains_all<S: AsRef<str>>(&self, spellings: &[S]) -> bool {
        spellings.iter().all(|s| self.intervals.contains_key(s.as_ref()))
    }

    /// Number of catalogued intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Check if the catalogue is empty (never true once built)
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl Default for IntervalCatalogue {
    fn default() -> Self {
        Self::build()
    }
}
