//! rutctl - CLI for RUT identifiers
//!
//! Normalizes, validates, and formats identifiers from arguments or stdin,
//! for checking roster imports and guardian records by hand.

use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod input;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
