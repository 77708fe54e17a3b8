// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{bail, Result};
use scale_library::menu::Menu;
use scale_library::{LibraryConfig, ScaleLibrary};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::{info, Level};

fn print_usage() {
    println!("Scale Library - spelled scales, modes and arpeggios on every root");
    println!();
    println!("Usage: scale-library [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <PATH>     Load settings from a YAML file");
    println!("  --data-dir <DIR>    Read and write spec files in DIR (overrides config)");
    println!("  --verbose           Log debug output to stderr");
    println!("  --help              Show this help message");
}

struct Args {
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut parsed = Args {
        config: None,
        data_dir: None,
        verbose: false,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => parsed.config = Some(PathBuf::from(path)),
                None => bail!("--config requires a file path"),
            },
            "--data-dir" => match iter.next() {
                Some(dir) => parsed.data_dir = Some(PathBuf::from(dir)),
                None => bail!("--data-dir requires a directory"),
            },
            "--verbose" | "-v" => parsed.verbose = true,
            "--help" | "-h" => return Ok(None),
            other => bail!("Unknown option: {}", other),
        }
    }

    Ok(Some(parsed))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let args = match parse_args(&args) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => LibraryConfig::load(path)?,
        None => LibraryConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    info!("Using data directory {:?}", config.data_dir);

    let mut library = ScaleLibrary::load(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut library, stdin.lock(), stdout.lock()).run()
}
