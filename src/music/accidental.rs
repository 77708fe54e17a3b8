// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Accidentals applied to note letters and interval numbers.
//!
//! The same seven alterations serve two roles: the accidental on a spelled
//! note (`F#`, `Bbb`) and the quality of an interval relative to its
//! major/perfect size (`b3`, `#11`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semitone offset type
pub type Semitones = i32;

/// Largest alteration catalogued in either direction
pub const MAX_OFFSET: Semitones = 3;

/// Pitch alterations from three flats to three sharps
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Accidental {
    TripleFlat,
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
    TripleSharp,
}

impl Accidental {
    /// The full catalogue, ordered from flattest to sharpest
    pub const ALL: [Accidental; 7] = [
        Accidental::TripleFlat,
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
        Accidental::TripleSharp,
    ];

    /// Get the written symbol for this accidental
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::TripleFlat => "bbb",
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
            Accidental::TripleSharp => "#x",
        }
    }

    /// Get the semitone change applied by this accidental
    pub fn semitones(self) -> Semitones {
        match self {
            Accidental::TripleFlat => -3,
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::TripleSharp => 3,
        }
    }

    /// Find the accidental producing the given semitone change.
    ///
    /// Returns `None` beyond three flats or three sharps.
    pub fn from_semitones(semitones: Semitones) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.semitones() == semitones)
    }

    /// Find the accidental written with exactly this symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.symbol() == symbol)
    }

    /// Number of semitones of alteration regardless of direction
    pub fn magnitude(self) -> Semitones {
        self.semitones().abs()
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
