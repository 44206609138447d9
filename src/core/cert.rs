//! Signing certificate loading.
//!
//! The certificate path usually comes from a terminal drag and drop, which
//! wraps it in double quotes on some platforms.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::error::{FileError, Result};

/// Strip one leading and one trailing `"` from a path, independently.
pub fn unquote(raw: &str) -> &str {
    let s = raw.strip_prefix('"').unwrap_or(raw);
    s.strip_suffix('"').unwrap_or(s)
}

/// Read a file and encode its bytes as standard, unwrapped base64.
///
/// # Errors
///
/// Returns `FileError::Certificate` if the file cannot be opened or read,
/// including when the path names a directory.
pub fn encode_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FileError::Certificate {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "certificate read");

    Ok(STANDARD.encode(bytes))
}
