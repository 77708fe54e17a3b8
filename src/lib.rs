// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale library: spelled notes, intervals, and scales generated on every
//! root with enharmonic respelling.

pub mod config;
pub mod library;
pub mod menu;
pub mod music;

pub use config::LibraryConfig;
pub use library::{ScaleLibrary, Section};
pub use music::{Catalogue, Note, Scale, ScaleCollection, ScaleSpec};
