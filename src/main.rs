//! emblem-resize CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the batch, and exit
//! with a non-zero status when a fatal error propagates.
//! For programmatic use, prefer the library API (`emblem_resize::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args, &mut std::io::stdout().lock())
}
