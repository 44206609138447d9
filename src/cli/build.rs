//! Build command - prompt for values and write the descriptor.

use std::io::{self, IsTerminal};
use std::path::Path;

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::descriptor;
use crate::core::prompt::{LinePrompter, TerminalPrompter};
use crate::core::record::ConfigRecord;
use crate::error::Result;

/// Collect every field, render the descriptor and write it to `path`.
///
/// Uses terminal prompts when stdin is a TTY, otherwise reads one line
/// per field from stdin.
pub fn execute(path: &Path) -> Result<()> {
    let record = if io::stdin().is_terminal() {
        ConfigRecord::collect(&mut TerminalPrompter)?
    } else {
        let stdin = io::stdin();
        ConfigRecord::collect(&mut LinePrompter::new(stdin.lock(), io::stderr()))?
    };

    let text = Zeroizing::new(descriptor::render(&record));
    drop(record);

    descriptor::persist(path, &text)?;
    info!(path = %path.display(), "descriptor created");

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    output::success(&format!("Your {} file has been created!", name));

    Ok(())
}
