//! Error types for flycfg.
//!
//! Every error is fatal: `main` prints it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    File(#[from] FileError),
}

/// Failures while collecting field values.
#[derive(Error, Debug)]
pub enum InputError {
    /// Input ended before every field was read.
    #[error("input closed before {field} was entered")]
    Unavailable { field: &'static str },

    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failures touching the filesystem.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("cannot read certificate {}: {source}", .path.display())]
    Certificate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
