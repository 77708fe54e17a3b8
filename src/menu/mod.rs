// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interactive console menu over a [`ScaleLibrary`].
//!
//! The menu reads lines from any `BufRead` and writes to any `Write`, so the
//! binary drives it with stdin/stdout and tests drive it with byte buffers.
//! End of input behaves like entering `0` at every prompt.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::library::{normalize_name, ScaleLibrary, Section};
use crate::music::{ScaleCollection, ScaleSpec};

const OPTION_PROMPT: &str = "Enter an option number, or 0 to quit: ";
const ROOT_PROMPT: &str = "Enter an option, or 0 to quit: ";
const FORMAT_PROMPT: &str = "Enter the format (e.g. scale, arpeggio), or 0 to cancel: ";
const TYPE_PROMPT: &str = "Enter the type (e.g. hirajoshi), or 0 to cancel: ";
const INTERVALS_PROMPT: &str =
    "Enter the intervals separated by commas (e.g. 1, 2, b3, 5, 8), or 0 to cancel: ";
const SIMPLIFY_PROMPT: &str = "Should the scale be simplified using enharmonics (y/n)? ";

const QUIT: &str = "0";
const PATTERN: &str = "pattern";

/// Main menu entries after the four search sections
const ADD_CUSTOM: usize = Section::ALL.len() + 1;
const REMOVE_CUSTOM: usize = Section::ALL.len() + 2;

/// Console menu session
pub struct Menu<'a, R, W> {
    library: &'a mut ScaleLibrary,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu session reading from `input` and writing to `output`
    pub fn new(library: &'a mut ScaleLibrary, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Run the main menu until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the scale library!")?;
        writeln!(self.output)?;

        loop {
            self.heading("Main menu")?;
            for (number, section) in Section::ALL.iter().enumerate() {
                writeln!(self.output, "{}. Search {}", number + 1, section)?;
            }
            writeln!(self.output, "{}. Add custom scale", ADD_CUSTOM)?;
            writeln!(self.output, "{}. Remove custom scales", REMOVE_CUSTOM)?;
            writeln!(self.output)?;

            match self.choose(REMOVE_CUSTOM)? {
                0 => break,
                ADD_CUSTOM => self.add_custom()?,
                REMOVE_CUSTOM => self.remove_custom()?,
                n => self.search(Section::ALL[n - 1])?,
            }
        }

        writeln!(self.output, "System closed.")?;
        self.output.flush()?;
        Ok(())
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        let bar = "-".repeat(title.len() + 2);
        writeln!(self.output, "{}", bar)?;
        writeln!(self.output, " {}", title)?;
        writeln!(self.output, "{}", bar)?;
        Ok(())
    }

    /// Read one trimmed line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            match self.read_line()? {
                None => {
                    writeln!(self.output)?;
                    return Ok(None);
                }
                Some(line) if line.is_empty() => continue,
                Some(line) => return Ok(Some(line)),
            }
        }
    }

    /// Ask for an option number in `0..=max`
    fn choose(&mut self, max: usize) -> Result<usize> {
        loop {
            let Some(line) = self.prompt(OPTION_PROMPT)? else {
                return Ok(0);
            };

            match line.parse::<usize>() {
                Ok(n) if n <= max => {
                    writeln!(self.output)?;
                    return Ok(n);
                }
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn search(&mut self, section: Section) -> Result<()> {
        loop {
            let names: Vec<String> = self
                .library
                .section(section)
                .iter()
                .map(|c| c.to_string())
                .collect();

            if names.is_empty() {
                writeln!(self.output, "No {} found.", section)?;
                writeln!(self.output)?;
                return Ok(());
            }

            self.heading(&format!("Search {}", section))?;
            for (number, name) in names.iter().enumerate() {
                writeln!(self.output, "{}. {}", number + 1, name)?;
            }
            writeln!(self.output)?;

            match self.choose(names.len())? {
                0 => return Ok(()),
                n => {
                    let collection = self.library.section(section)[n - 1].clone();
                    self.browse(&collection)?;
                }
            }
        }
    }

    /// Look up scales in one collection by root until the user quits
    fn browse(&mut self, collection: &ScaleCollection) -> Result<()> {
        debug!("Browsing {}", collection);
        self.heading(&format!("Search {}s", collection))?;
        writeln!(
            self.output,
            "Enter a root note (e.g. Bb) to view the scale, or type '{}'",
            PATTERN
        )?;
        writeln!(self.output, "to view the interval pattern for this scale type.")?;
        writeln!(self.output)?;

        loop {
            let Some(line) = self.prompt(ROOT_PROMPT)? else {
                return Ok(());
            };
            let choice = line.to_lowercase();

            if choice == QUIT {
                writeln!(self.output)?;
                return Ok(());
            }

            if choice == PATTERN {
                writeln!(self.output, "Interval pattern: {}", collection)?;
                writeln!(self.output, "{}", collection.intervals_line())?;
            } else {
                match collection.get(&choice) {
                    Some(scale) => {
                        writeln!(self.output, "{}", scale)?;
                        writeln!(self.output, "{}", scale.notes_line())?;
                    }
                    None => writeln!(self.output, "Scale not found.")?,
                }
            }
            writeln!(self.output)?;
        }
    }

    /// Prompt for a name field; `None` cancels
    fn prompt_name(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.prompt(prompt)? {
                None => return Ok(None),
                Some(line) if line == QUIT => return Ok(None),
                Some(line) => match normalize_name(&line) {
                    Ok(name) => return Ok(Some(name)),
                    Err(e) => {
                        writeln!(self.output, "Invalid name: {}", e)?;
                        writeln!(self.output)?;
                    }
                },
            }
        }
    }

    fn prompt_intervals(&mut self) -> Result<Option<Vec<String>>> {
        loop {
            let Some(line) = self.prompt(INTERVALS_PROMPT)? else {
                return Ok(None);
            };
            if line == QUIT {
                return Ok(None);
            }

            let intervals: Vec<String> = line.split(',').map(|s| s.trim().to_string()).collect();
            if self.library.validate_intervals(&intervals) {
                return Ok(Some(intervals));
            }
            writeln!(self.output, "Invalid interval sequence.")?;
        }
    }

    fn prompt_simplify(&mut self) -> Result<Option<bool>> {
        loop {
            let Some(line) = self.prompt(SIMPLIFY_PROMPT)? else {
                return Ok(None);
            };

            match line.to_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                QUIT => return Ok(None),
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn add_custom(&mut self) -> Result<()> {
        self.heading("Add custom scale")?;

        let Some(format) = self.prompt_name(FORMAT_PROMPT)? else {
            return self.cancelled();
        };
        let Some(scale_type) = self.prompt_name(TYPE_PROMPT)? else {
            return self.cancelled();
        };
        let Some(intervals) = self.prompt_intervals()? else {
            return self.cancelled();
        };
        let Some(simplify) = self.prompt_simplify()? else {
            return self.cancelled();
        };

        let spec = ScaleSpec::new(format.as_str(), scale_type, &intervals, simplify);
        match self.library.add_custom(spec) {
            Ok(_) => writeln!(self.output, "New {} successfully added.", format)?,
            Err(e) => {
                warn!("Failed to add custom {}: {:#}", format, e);
                writeln!(self.output, "Could not add the {}: {:#}", format, e)?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn cancelled(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    fn remove_custom(&mut self) -> Result<()> {
        let mut removed_any = false;

        loop {
            let names: Vec<String> = self
                .library
                .section(Section::Custom)
                .iter()
                .map(|c| c.to_string())
                .collect();

            if names.is_empty() {
                if removed_any {
                    writeln!(self.output, "All custom scales have now been removed.")?;
                } else {
                    writeln!(self.output, "No custom scales found.")?;
                }
                writeln!(self.output)?;
                return Ok(());
            }

            self.heading("Remove custom scales")?;
            for (number, name) in names.iter().enumerate() {
                writeln!(self.output, "{}. {}", number + 1, name)?;
            }
            writeln!(self.output)?;

            let n = self.choose(names.len())?;
            if n == 0 {
                return Ok(());
            }

            match self.library.remove_custom(n - 1) {
                Ok(_) => {
                    removed_any = true;
                    writeln!(self.output, "Scale successfully removed.")?;
                }
                Err(e) => {
                    warn!("Failed to remove custom scale {}: {:#}", n, e);
                    writeln!(self.output, "Could not remove the scale: {:#}", e)?;
                }
            }
            writeln!(self.output)?;
        }
    }
}
