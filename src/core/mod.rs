//! Core library components.
//!
//! Collecting the configuration record, encoding the signing certificate,
//! and rendering the deployment descriptor.

pub mod cert;
pub mod constants;
pub mod descriptor;
pub mod prompt;
pub mod record;
