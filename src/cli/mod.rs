//! Command-line interface.

pub mod build;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants;

/// flycfg - generate a fly.io deployment descriptor for SignTools.
#[derive(Parser, Debug)]
#[command(
    name = "flycfg",
    about = "Interactively generate a fly.toml for a SignTools deployment",
    version
)]
pub struct Cli {
    /// Where to write the descriptor
    #[arg(short, long, default_value = constants::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the command described by the parsed flags.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    build::execute(&cli.output)
}
