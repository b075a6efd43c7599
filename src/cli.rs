//! CLI argument parsing with clap.

use clap::Parser;

/// Split an image into ten equal vertical strips, one PNG per strip.
///
/// With no arguments, reads `0.png` from the working directory and writes
/// `0_1.png` through `0_10.png` next to it.
#[derive(Parser, Debug)]
#[command(name = "stripslice", version, about)]
pub struct Cli {
    /// Input image path [default: 0.png].
    pub input: Option<String>,

    /// Existing directory to write the strips into [default: .].
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
