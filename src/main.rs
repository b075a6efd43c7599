//! Stripslice - cut an image into ten equal vertical strips.

mod cli;
mod config;
mod error;
mod geometry;
mod output;
mod slicer;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::geometry::{dropped_columns, strip_width, STRIP_COUNT};
use crate::slicer::SliceEvent;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), error::SliceError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(error::SliceError::Config)?;

    let input = config.input(cli.input.as_deref());
    let output_dir = config.output_dir(cli.output_dir.as_deref());

    if cli.verbose {
        eprintln!("Input: {}", input.display());
        eprintln!("Output directory: {}", output_dir.display());
    }

    slicer::slice(&input, &output_dir, |event| match event {
        SliceEvent::Loaded { width, height } => {
            if cli.verbose {
                report_geometry(width, height);
            }
        }
        SliceEvent::Saved(path) => eprintln!("Saved: {}", path.display()),
    })?;

    Ok(())
}

fn report_geometry(width: u32, height: u32) {
    let sub_width = strip_width(width);
    eprintln!("Source: {width}x{height}");
    eprintln!("Strip width: {sub_width} ({STRIP_COUNT} strips)");
    if sub_width == 0 {
        eprintln!("Warning: source is narrower than {STRIP_COUNT} pixels, strips are empty");
    }
    let dropped = dropped_columns(width);
    if dropped > 0 {
        eprintln!("Dropping {dropped} rightmost column(s)");
    }
}
