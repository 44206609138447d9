//! Constants used throughout flycfg.
//!
//! Centralizes magic strings and configuration values.

/// Descriptor file name, relative to the working directory.
pub const OUTPUT_FILE: &str = "fly.toml";

/// Workflow file used when the builder workflow field is left blank.
pub const DEFAULT_WORKFLOW_FILE: &str = "sign.yml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "FLYCFG_LOG";
