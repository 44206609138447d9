//! flycfg - generate a fly.io deployment descriptor for SignTools.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use flycfg::cli::output;
use flycfg::cli::{execute, Cli};
use flycfg::core::constants::LOG_ENV;
use flycfg::error::{Error, FileError, InputError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("flycfg=debug")
        } else {
            EnvFilter::new("flycfg=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::File(FileError::Certificate { .. }) => {
                Some("drag the .p12 file into the terminal or enter its full path")
            }
            Error::Input(InputError::Unavailable { .. }) => {
                Some("every field needs one line of input")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
