// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled note sequences built from a root and an interval pattern.
//!
//! A [`Scale`] covers scales, modes and arpeggios alike: any ordered list of
//! intervals applied to one root. Respelling never mutates a scale in place;
//! [`Scale::respell_at`] and [`Scale::respell_all`] consume it and return the
//! respelled copy.

use std::cmp::Ordering;
use std::fmt;

use super::accidental::Semitones;
use super::catalogue::Catalogue;
use super::interval::{AUGMENTED_SEVENTH, DIMINISHED_SECOND};
use super::note::Note;

/// Largest accidental magnitude kept in a valid scale
pub const MAX_VALID_OFFSET: Semitones = 2;

/// Width of one column when printing notes or intervals on a line
pub const COLUMN_WIDTH: usize = 5;

/// Choose the simplest enharmonic spelling of `note` within a scale on `root`.
///
/// The spellings one letter below (`#7`) and one letter above (`bb2`) are
/// tried in that order. Each is measured against the original note and is
/// adopted if it needs fewer accidentals, or the same number but sits closer
/// to the root's accidental, or is exactly as close and sharper.
pub fn respell(note: Note, root: Note) -> Note {
    let current = note.offset();
    let root_offset = root.offset();

    let mut chosen = note;
    for interval in [AUGMENTED_SEVENTH, DIMINISHED_SECOND] {
        let Some(candidate) = note.add_interval(interval) else {
            continue;
        };
        let offset = candidate.offset();

        let adopt = match offset.abs().cmp(&current.abs()) {
            Ordering::Less => true,
            Ordering::Equal => {
                match (root_offset - offset).abs().cmp(&(root_offset - current).abs()) {
                    Ordering::Less => true,
                    Ordering::Equal => offset > current,
                    Ordering::Greater => false,
                }
            }
            Ordering::Greater => false,
        };

        if adopt {
            chosen = candidate;
        }
    }

    chosen
}

/// A root note with an interval pattern resolved into spelled notes
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    root: Note,
    format: String,
    scale_type: String,
    intervals: Vec<String>,
    notes: Vec<Option<Note>>,
}

impl Scale {
    /// Resolve every interval of the pattern against the root.
    ///
    /// Entries whose interval is unknown, or whose spelling would need more
    /// than three sharps or flats, are left as `None`.
    pub fn new<S: AsRef<str>>(
        root: Note,
        format: impl Into<String>,
        scale_type: impl Into<String>,
        intervals: &[S],
        catalogue: &Catalogue,
    ) -> Self {
        let intervals: Vec<String> = intervals.iter().map(|s| s.as_ref().to_string()).collect();
        let notes = intervals
            .iter()
            .map(|spelling| catalogue.interval(spelling).and_then(|i| root.add_interval(i)))
            .collect();

        Self {
            root,
            format: format.into(),
            scale_type: scale_type.into(),
            intervals,
            notes,
        }
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the format (e.g. "scale", "arpeggio")
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Get the scale type (e.g. "major", "blues")
    pub fn scale_type(&self) -> &str {
        &self.scale_type
    }

    /// Get the interval pattern
    pub fn intervals(&self) -> &[String] {
        &self.intervals
    }

    /// Get the resolved notes, one per interval
    pub fn notes(&self) -> &[Option<Note>] {
        &self.notes
    }

    /// Get the note at an index, if present and resolved
    pub fn note_at(&self, index: usize) -> Option<Note> {
        self.notes.get(index).copied().flatten()
    }

    /// Get the number of entries in this scale
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if this scale has no entries
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Respell the note at `index` with its simplest enharmonic.
    ///
    /// Missing indices, unresolved notes and notes equal to the root are
    /// left untouched.
    pub fn respell_at(mut self, index: usize) -> Self {
        let root = self.root;
        if let Some(Some(note)) = self.notes.get_mut(index) {
            if *note != root {
                *note = respell(*note, root);
            }
        }
        self
    }

    /// Respell every resolved non-root note in pattern order
    pub fn respell_all(self) -> Self {
        (0..self.notes.len()).fold(self, |scale, index| scale.respell_at(index))
    }

    /// Check that every note resolved and none exceeds a double sharp or flat
    pub fn is_valid(&self) -> bool {
        self.notes.iter().all(|note| match note {
            Some(note) => note.accidental().magnitude() <= MAX_VALID_OFFSET,
            None => false,
        })
    }

    /// Render the notes on one line in fixed-width columns
    pub fn notes_line(&self) -> String {
        let names: Vec<String> = self
            .notes
            .iter()
            .map(|n| n.map_or_else(|| "-".to_string(), |n| n.to_string()))
            .collect();
        columns(&names)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.root, self.scale_type, self.format)
    }
}

/// Left-align items in fixed-width columns, leaving the last one unpadded
pub fn columns<S: AsRef<str>>(items: &[S]) -> String {
    let mut line = String::new();
    if let Some((last, rest)) = items.split_last() {
        for item in rest {
            line.push_str(&format!("{:<width$}", item.as_ref(), width = COLUMN_WIDTH));
        }
        line.push_str(last.as_ref());
    }
    line
}
