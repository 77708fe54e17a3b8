// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the scale library.
//!
//! Settings are stored as YAML and name the data directory and the spec
//! files for each library section. Every field has a default, so an empty
//! document is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::library::Section;

/// Library file locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryConfig {
    /// Directory holding the spec files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Built-in scales file
    #[serde(default = "default_scales_file")]
    pub scales_file: String,
    /// Built-in modes file
    #[serde(default = "default_modes_file")]
    pub modes_file: String,
    /// Built-in arpeggios file
    #[serde(default = "default_arpeggios_file")]
    pub arpeggios_file: String,
    /// User-defined scales file, rewritten on every change
    #[serde(default = "default_custom_file")]
    pub custom_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_scales_file() -> String {
    "scales.txt".to_string()
}
fn default_modes_file() -> String {
    "modes.txt".to_string()
}
fn default_arpeggios_file() -> String {
    "arpeggios.txt".to_string()
}
fn default_custom_file() -> String {
    "custom.txt".to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            scales_file: default_scales_file(),
            modes_file: default_modes_file(),
            arpeggios_file: default_arpeggios_file(),
            custom_file: default_custom_file(),
        }
    }
}

impl LibraryConfig {
    /// Create a default configuration rooted at a data directory
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Full path of the spec file for a library section
    pub fn path_for(&self, section: Section) -> PathBuf {
        let file = match section {
            Section::Scales => &self.scales_file,
            Section::Modes => &self.modes_file,
            Section::Arpeggios => &self.arpeggios_file,
            Section::Custom => &self.custom_file,
        };
        self.data_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
data_dir: "/opt/scales"
scales_file: "all_scales.txt"
"#;

        let config = LibraryConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/opt/scales"));
        assert_eq!(config.scales_file, "all_scales.txt");
        assert_eq!(config.modes_file, "modes.txt");
        assert_eq!(config.custom_file, "custom.txt");
    }

    #[test]
    fn test_default_values() {
        let config = LibraryConfig::from_yaml("").unwrap();
        assert_eq!(config, LibraryConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.arpeggios_file, "arpeggios.txt");
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(LibraryConfig::from_yaml("data_dir: [").is_err());
    }

    #[test]
    fn test_path_for() {
        let config = LibraryConfig::with_data_dir("/tmp/lib");
        assert_eq!(config.path_for(Section::Scales), PathBuf::from("/tmp/lib/scales.txt"));
        assert_eq!(config.path_for(Section::Modes), PathBuf::from("/tmp/lib/modes.txt"));
        assert_eq!(config.path_for(Section::Custom), PathBuf::from("/tmp/lib/custom.txt"));
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.yaml");

        let mut config = LibraryConfig::with_data_dir(dir.path());
        config.custom_file = "mine.txt".to_string();
        config.save(&path).unwrap();

        let loaded = LibraryConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(LibraryConfig::load(dir.path().join("missing.yaml")).is_err());
    }
}
