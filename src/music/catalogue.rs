// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Lookup tables shared by scale construction.

use super::accidental::Accidental;
use super::interval::{Interval, IntervalCatalogue};
use super::note::{Note, NoteCatalogue};

/// Read-only note and interval catalogues.
///
/// Built once by the caller and passed by reference into every scale and
/// collection constructor.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    notes: NoteCatalogue,
    intervals: IntervalCatalogue,
}

impl Catalogue {
    /// Build every catalogue
    pub fn new() -> Self {
        Self {
            notes: NoteCatalogue::build(),
            intervals: IntervalCatalogue::build(),
        }
    }

    /// The accidental catalogue
    pub fn accidentals(&self) -> &'static [Accidental] {
        &Accidental::ALL
    }

    /// Get the note catalogue
    pub fn notes(&self) -> &NoteCatalogue {
        &self.notes
    }

    /// Get the interval catalogue
    pub fn intervals(&self) -> &IntervalCatalogue {
        &self.intervals
    }

    /// Look up a note by spelling (case-insensitive)
    pub fn note(&self, spelling: &str) -> Option<Note> {
        self.notes.lookup(spelling)
    }

    /// Look up an interval by spelling
    pub fn interval(&self, spelling: &str) -> Option<Interval> {
        self.intervals.lookup(spelling)
    }

    /// Notes used as scale roots
    pub fn root_notes(&self) -> &[Note] {
        self.notes.root_notes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_sizes() {
        let catalogue = Catalogue::new();
        assert_eq!(catalogue.accidentals().len(), 7);
        assert_eq!(catalogue.notes().len(), 49);
        assert_eq!(catalogue.intervals().len(), 105);
        assert_eq!(catalogue.root_notes().len(), 21);
    }

    #[test]
    fn test_independent_catalogues_agree() {
        let a = Catalogue::new();
        let b = Catalogue::default();
        assert_eq!(a.note("Bb"), b.note("bb"));
        assert_eq!(a.interval("#11"), b.interval("#11"));
        assert_eq!(a.root_notes(), b.root_notes());
    }

    #[test]
    fn test_catalogue_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalogue>();
    }
}
