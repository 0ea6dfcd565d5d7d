//! xcgen - Flutter iOS build-settings resolution
//!
//! A thin CLI over the `Generated.xcconfig` discovery and extraction
//! routine used by iOS packaging tooling.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    xcgen_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
