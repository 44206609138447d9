//! Interactive input sources.
//!
//! `collect` only sees the [`Prompter`] trait, so the same field sequence
//! runs against a terminal, a pipe, or an in-memory buffer in tests.

use std::io::{BufRead, Write};

use dialoguer::{Input, Password};
use tracing::trace;

use crate::error::{InputError, Result};

/// A single value requested from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Record field name, used in errors and logs.
    pub name: &'static str,
    /// Question shown to the user.
    pub prompt: &'static str,
    /// Hide the typed value on a terminal.
    pub secret: bool,
}

/// Source of field values, asked one field at a time.
pub trait Prompter {
    /// Ask for one field and return the entered text verbatim.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Unavailable` if the source is exhausted.
    fn ask(&mut self, field: &Field) -> Result<String>;
}

/// Prompts on an attached terminal using dialoguer.
///
/// Secret fields use a hidden password prompt.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, field: &Field) -> Result<String> {
        let value = if field.secret {
            Password::new()
                .with_prompt(field.prompt)
                .allow_empty_password(true)
                .interact()
        } else {
            Input::<String>::new()
                .with_prompt(field.prompt)
                .allow_empty(true)
                .interact_text()
        }
        .map_err(InputError::from)?;

        trace!(field = field.name, "field entered");
        Ok(value)
    }
}

/// Reads one line per field from any buffered reader.
///
/// Prompts are echoed to `out` so a piped run still shows what is asked.
pub struct LinePrompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, field: &Field) -> Result<String> {
        // Prompt echo is best effort; a closed stderr must not abort the run.
        let _ = write!(self.out, "{}: ", field.prompt);
        let _ = self.out.flush();

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(InputError::Read)?;
        if read == 0 {
            return Err(InputError::Unavailable { field: field.name }.into());
        }

        let _ = writeln!(self.out);

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        trace!(field = field.name, "field read");
        Ok(line)
    }
}
