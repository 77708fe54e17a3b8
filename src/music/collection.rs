// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale collections: one specification fanned out over every root.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalogue::Catalogue;
use super::scale::{columns, Scale};

/// Index of the diminished fifth in a blues scale pattern
const BLUES_FIFTH_INDEX: usize = 3;

/// Everything needed to build a family of scales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSpec {
    /// Format of the sequence (e.g. "scale", "mode", "arpeggio")
    pub format: String,
    /// Type or name of the sequence (e.g. "major", "dorian")
    pub scale_type: String,
    /// Interval spellings applied to each root, in order
    pub intervals: Vec<String>,
    /// Whether notes are respelled with fewer accidentals
    #[serde(default)]
    pub simplify: bool,
}

impl ScaleSpec {
    /// Create a new specification
    pub fn new<S: AsRef<str>>(
        format: impl Into<String>,
        scale_type: impl Into<String>,
        intervals: &[S],
        simplify: bool,
    ) -> Self {
        Self {
            format: format.into(),
            scale_type: scale_type.into(),
            intervals: intervals.iter().map(|s| s.as_ref().to_string()).collect(),
            simplify,
        }
    }

    /// Whether this is a blues scale, whose flat fifth is always respelled
    pub fn is_blues_scale(&self) -> bool {
        self.scale_type == "blues" && self.format == "scale"
    }
}

impl fmt::Display for ScaleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scale_type, self.format)
    }
}

/// All valid scales of one specification, keyed by lower-case root spelling
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleCollection {
    spec: ScaleSpec,
    scales: BTreeMap<String, Scale>,
}

impl ScaleCollection {
    /// Build the specification on every root-eligible note.
    ///
    /// Scales that fail to resolve, or that need more than a double sharp or
    /// flat, are left out of the collection.
    pub fn generate(spec: ScaleSpec, catalogue: &Catalogue) -> Self {
        let mut scales = BTreeMap::new();

        for &root in catalogue.root_notes() {
            let mut scale = Scale::new(
                root,
                spec.format.as_str(),
                spec.scale_type.as_str(),
                &spec.intervals,
                catalogue,
            );

            if spec.is_blues_scale() {
                scale = scale.respell_at(BLUES_FIFTH_INDEX);
            }

            if spec.simplify {
                scale = scale.respell_all();
            }

            if scale.is_valid() {
                scales.insert(root.spelling(), scale);
            } else {
                debug!("Dropping {}: {}", scale, scale.notes_line());
            }
        }

        debug!("Generated {} {} scales", scales.len(), spec);
        Self { spec, scales }
    }

    /// Get the scale for a root spelling (e.g. "bb", "f#")
    pub fn get(&self, root: &str) -> Option<&Scale> {
        self.scales.get(root)
    }

    /// Iterate over (root spelling, scale) pairs
    pub fn scales(&self) -> impl Iterator<Item = (&str, &Scale)> {
        self.scales.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of valid scales
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Check if no root produced a valid scale
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Get the specification this collection was built from
    pub fn spec(&self) -> &ScaleSpec {
        &self.spec
    }

    /// Get the format
    pub fn format(&self) -> &str {
        &self.spec.format
    }

    /// Get the scale type
    pub fn scale_type(&self) -> &str {
        &self.spec.scale_type
    }

    /// Get the interval pattern
    pub fn intervals(&self) -> &[String] {
        &self.spec.intervals
    }

    /// Get the simplify flag
    pub fn simplify(&self) -> bool {
        self.spec.simplify
    }

    /// Render the interval pattern in fixed-width columns
    pub fn intervals_line(&self) -> String {
        columns(&self.spec.intervals)
    }
}

impl fmt::Display for ScaleCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec)
    }
}
