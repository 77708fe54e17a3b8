// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note and interval arithmetic with enharmonic spelling.
//!
//! This module provides spelled notes, intervals, and the scale engine that
//! applies interval patterns to every eligible root note.

pub mod accidental;
pub mod catalogue;
pub mod collection;
pub mod interval;
pub mod note;
pub mod scale;

pub use accidental::{Accidental, Semitones};
pub use catalogue::Catalogue;
pub use collection::{ScaleCollection, ScaleSpec};
pub use interval::{Interval, IntervalCatalogue};
pub use note::{Letter, Note, NoteCatalogue};
pub use scale::{respell, Scale};

/// Errors from parsing note and interval spellings
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("invalid note spelling {0:?}")]
    InvalidNote(String),
    #[error("invalid interval spelling {0:?}")]
    InvalidInterval(String),
}
