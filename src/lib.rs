//! flycfg - interactive generator for SignTools fly.io deployments.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── build         # Prompt, render and write fly.toml
//! │   └── output        # Styled terminal output
//! └── core/             # Core library components
//!     ├── constants     # File names and defaults
//!     ├── prompt        # Prompter trait: terminal and line sources
//!     ├── record        # Configuration record and field order
//!     ├── cert          # Certificate path unquoting and base64
//!     └── descriptor    # fly.toml rendering and writing
//! ```
//!
//! A run is strictly linear: collect every field, render the descriptor,
//! write it, confirm. Any error aborts the run.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::descriptor::{persist, render};
pub use crate::core::prompt::{Field, LinePrompter, Prompter, TerminalPrompter};
pub use crate::core::record::ConfigRecord;
pub use crate::error::{Error, Result};
