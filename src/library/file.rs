// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spec files: one scale specification per line.
//!
//! A line has four `;`-separated fields:
//!
//! ```text
//! scale; major; 1, 2, 3, 4, 5, 6, 7, 8; false
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

use crate::music::{Interval, ScaleSpec};

const FIELD_SEPARATOR: char = ';';
const INTERVAL_SEPARATOR: char = ',';
const COMMENT_PREFIX: char = '#';

/// Errors from parsing a single spec line
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecLineError {
    #[error("expected 4 fields separated by ';', found {0}")]
    FieldCount(usize),
    #[error("interval pattern is empty")]
    EmptyPattern,
    #[error("unknown interval {0:?}")]
    UnknownInterval(String),
    #[error("expected true or false, found {0:?}")]
    InvalidBoolean(String),
    #[error("invalid name {0:?}: names must be non-empty, contain no ';' and not start with '#'")]
    InvalidName(String),
}

/// Normalise a format or type name for storage in a spec file.
///
/// Names are trimmed and lower-cased. A name that is empty, contains the
/// field separator, or would read back as a comment is rejected.
pub fn normalize_name(name: &str) -> Result<String, SpecLineError> {
    let name = name.trim();
    if name.is_empty() || name.contains(FIELD_SEPARATOR) || name.starts_with(COMMENT_PREFIX) {
        return Err(SpecLineError::InvalidName(name.to_string()));
    }
    Ok(name.to_lowercase())
}

impl FromStr for ScaleSpec {
    type Err = SpecLineError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() != 4 {
            return Err(SpecLineError::FieldCount(fields.len()));
        }

        let format = fields[0].to_lowercase();
        let scale_type = fields[1].to_lowercase();

        if fields[2].is_empty() {
            return Err(SpecLineError::EmptyPattern);
        }
        let intervals: Vec<String> = fields[2]
            .split(INTERVAL_SEPARATOR)
            .map(|s| s.trim().to_string())
            .collect();
        if let Some(bad) = intervals.iter().find(|s| s.parse::<Interval>().is_err()) {
            return Err(SpecLineError::UnknownInterval(bad.clone()));
        }

        let simplify = parse_bool(fields[3])?;

        Ok(ScaleSpec {
            format,
            scale_type,
            intervals,
            simplify,
        })
    }
}

fn parse_bool(field: &str) -> Result<bool, SpecLineError> {
    match field.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SpecLineError::InvalidBoolean(field.to_string())),
    }
}

impl ScaleSpec {
    /// Format this specification as one line of a spec file
    pub fn to_line(&self) -> String {
        format!(
            "{}; {}; {}; {}",
            self.format,
            self.scale_type,
            self.intervals.join(", "),
            self.simplify
        )
    }
}

/// Parse every spec in a file's contents
pub fn parse_specs(contents: &str) -> Result<Vec<ScaleSpec>> {
    let mut specs = Vec::new();

    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let spec = line
            .parse::<ScaleSpec>()
            .with_context(|| format!("Invalid spec on line {}: {:?}", number + 1, line))?;
        specs.push(spec);
    }

    Ok(specs)
}

/// Load every spec from a file
pub fn load_specs<P: AsRef<Path>>(path: P) -> Result<Vec<ScaleSpec>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {:?}", path))?;
    let specs = parse_specs(&contents).with_context(|| format!("Failed to parse {:?}", path))?;

    debug!("Loaded {} specs from {:?}", specs.len(), path);
    Ok(specs)
}

/// Write specs to a file, one per line, replacing its contents
pub fn save_specs<'a, P, I>(path: P, specs: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a ScaleSpec>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let contents: String = specs
        .into_iter()
        .map(|spec| spec.to_line() + "\n")
        .collect();
    fs::write(path, contents).with_context(|| format!("Failed to write spec file: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_line() {
        let spec: ScaleSpec = "Scale; Major; 1, 2, 3, 4, 5, 6, 7, 8; false".parse().unwrap();
        assert_eq!(spec.format, "scale");
        assert_eq!(spec.scale_type, "major");
        assert_eq!(spec.intervals, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(!spec.simplify);
    }

    #[test]
    fn test_parse_line_without_spaces() {
        let spec: ScaleSpec = "scale;test;1,#2,b4,#5,6,8;TRUE".parse().unwrap();
        assert_eq!(spec.intervals, vec!["1", "#2", "b4", "#5", "6", "8"]);
        assert!(spec.simplify);
    }

    #[test]
    fn test_to_line() {
        let spec = ScaleSpec::new("scale", "major", &["1", "2", "3", "4", "5", "6", "7", "8"], false);
        assert_eq!(spec.to_line(), "scale; major; 1, 2, 3, 4, 5, 6, 7, 8; false");

        let spec = ScaleSpec::new("scale", "test", &["1", "#2", "b4", "#5", "6", "8"], true);
        assert_eq!(spec.to_line(), "scale; test; 1, #2, b4, #5, 6, 8; true");
        assert_eq!(spec.to_line().parse::<ScaleSpec>().unwrap(), spec);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "scale; major; 1, 2, 3".parse::<ScaleSpec>(),
            Err(SpecLineError::FieldCount(3))
        );
        assert_eq!(
            "scale; major; ; false".parse::<ScaleSpec>(),
            Err(SpecLineError::EmptyPattern)
        );
        assert_eq!(
            "scale; major; 1, 2, y3; false".parse::<ScaleSpec>(),
            Err(SpecLineError::UnknownInterval("y3".to_string()))
        );
        assert_eq!(
            "scale; major; 1, 16; false".parse::<ScaleSpec>(),
            Err(SpecLineError::UnknownInterval("16".to_string()))
        );
        assert_eq!(
            "scale; major; 1, 2; maybe".parse::<ScaleSpec>(),
            Err(SpecLineError::InvalidBoolean("maybe".to_string()))
        );
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Bebop Dominant "), Ok("bebop dominant".to_string()));
        assert_eq!(normalize_name("7#9 chord"), Ok("7#9 chord".to_string()));
        for bad in ["", "   ", "#9 chord", "a;b"] {
            assert!(
                matches!(normalize_name(bad), Err(SpecLineError::InvalidName(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_specs_skips_blank_and_comment_lines() {
        let contents = "\n# built-in arpeggios\narpeggio; major; 1, 3, 5, 8; false\n\n   \narpeggio; minor; 1, b3, 5, 8; false\n";
        let specs = parse_specs(contents).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].scale_type, "minor");
    }

    #[test]
    fn test_parse_specs_reports_line() {
        let contents = "scale; major; 1, 2, 3; false\nscale; broken; 1, 2\n";
        let err = parse_specs(contents).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("custom.txt");

        let specs = vec![
            ScaleSpec::new("scale", "hirajoshi", &["1", "2", "b3", "5", "b6", "8"], false),
            ScaleSpec::new("arpeggio", "sus4", &["1", "4", "5", "8"], true),
        ];
        save_specs(&path, &specs).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "scale; hirajoshi; 1, 2, b3, 5, b6, 8; false\narpeggio; sus4; 1, 4, 5, 8; true\n"
        );
        assert_eq!(load_specs(&path).unwrap(), specs);
    }

    #[test]
    fn test_save_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.txt");
        save_specs(&path, &Vec::<ScaleSpec>::new()).unwrap();
        assert!(load_specs(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(load_specs(dir.path().join("missing.txt")).is_err());
    }
}
