// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The scale library: generated collections grouped into sections.
//!
//! Built-in sections are loaded from spec files at startup. The custom
//! section can be edited at runtime and is written back to its file after
//! every change.

pub mod file;

pub use file::{load_specs, normalize_name, parse_specs, save_specs, SpecLineError};

use std::collections::HashMap;
use std::fmt;

use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::config::LibraryConfig;
use crate::music::{Catalogue, ScaleCollection, ScaleSpec};

/// Groups of collections shown in the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Scales,
    Modes,
    Arpeggios,
    Custom,
}

impl Section {
    /// All sections in menu order
    pub const ALL: [Section; 4] = [
        Section::Scales,
        Section::Modes,
        Section::Arpeggios,
        Section::Custom,
    ];

    /// Get a human-readable name for this section
    pub fn name(self) -> &'static str {
        match self {
            Section::Scales => "scales",
            Section::Modes => "modes",
            Section::Arpeggios => "arpeggios",
            Section::Custom => "custom scales",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Every collection available to the user
#[derive(Debug, Clone)]
pub struct ScaleLibrary {
    catalogue: Catalogue,
    config: LibraryConfig,
    sections: HashMap<Section, Vec<ScaleCollection>>,
}

impl ScaleLibrary {
    /// Create a library with every section empty
    pub fn empty(config: LibraryConfig) -> Self {
        let sections = Section::ALL.iter().map(|&s| (s, Vec::new())).collect();
        Self {
            catalogue: Catalogue::new(),
            config,
            sections,
        }
    }

    /// Load and generate every section from the configured spec files.
    ///
    /// A missing file leaves its section empty; a malformed file is an error.
    pub fn load(config: LibraryConfig) -> Result<Self> {
        let mut library = Self::empty(config);

        for section in Section::ALL {
            let path = library.config.path_for(section);
            if !path.exists() {
                warn!("No {} file at {:?}", section, path);
                continue;
            }

            let specs = load_specs(&path)?;
            let collections: Vec<ScaleCollection> = specs
                .into_iter()
                .map(|spec| ScaleCollection::generate(spec, &library.catalogue))
                .collect();

            info!("Loaded {} {} from {:?}", collections.len(), section, path);
            library.sections.insert(section, collections);
        }

        Ok(library)
    }

    /// Get the collections in a section
    pub fn section(&self, section: Section) -> &[ScaleCollection] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that every interval spelling is known
    pub fn validate_intervals<S: AsRef<str>>(&self, intervals: &[S]) -> bool {
        !intervals.is_empty() && self.catalogue.intervals().contains_all(intervals)
    }

    /// Generate a custom collection, save the custom file, then add it.
    ///
    /// Format and type are normalised the way the spec file reads them
    /// back. Nothing changes in memory if the file cannot be written.
    pub fn add_custom(&mut self, spec: ScaleSpec) -> Result<&ScaleCollection> {
        if !self.validate_intervals(&spec.intervals) {
            bail!("Invalid interval sequence: {}", spec.intervals.join(", "));
        }
        let spec = ScaleSpec {
            format: normalize_name(&spec.format)?,
            scale_type: normalize_name(&spec.scale_type)?,
            ..spec
        };

        let collection = ScaleCollection::generate(spec, &self.catalogue);
        info!("Adding custom {} ({} roots)", collection, collection.len());

        let existing = self.section(Section::Custom).iter().map(|c| c.spec());
        self.write_custom(existing.chain(std::iter::once(collection.spec())))?;

        let custom = self.sections.entry(Section::Custom).or_default();
        custom.push(collection);
        Ok(&custom[custom.len() - 1])
    }

    /// Save the custom file without one collection, then remove it.
    ///
    /// Nothing changes in memory if the file cannot be written.
    pub fn remove_custom(&mut self, index: usize) -> Result<ScaleCollection> {
        let count = self.section(Section::Custom).len();
        if index >= count {
            bail!("No custom scale at position {} ({} available)", index + 1, count);
        }

        let remaining = self
            .section(Section::Custom)
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, c)| c.spec());
        self.write_custom(remaining)?;

        let removed = self.sections.entry(Section::Custom).or_default().remove(index);
        info!("Removed custom {}", removed);
        Ok(removed)
    }

    /// Write the custom section to its spec file
    pub fn save_custom(&self) -> Result<()> {
        self.write_custom(self.section(Section::Custom).iter().map(|c| c.spec()))
    }

    fn write_custom<'a, I>(&self, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a ScaleSpec>,
    {
        save_specs(self.config.path_for(Section::Custom), specs)
    }
}
