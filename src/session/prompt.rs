//! Console input and output for the interactive session
//!
//! `Console` pairs a line-based input with an output stream. End of input is
//! reported as `None` so every flow can treat it like the operator pressing
//! enter on an empty line.

use crate::types::TillError;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-oriented console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output stream, for reports that write directly
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give the output stream back, e.g. to inspect it in tests
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> Result<(), TillError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print a prompt and read the answer
    ///
    /// The prompt is printed verbatim and flushed. The answer has its line
    /// ending removed; bytes that are not valid UTF-8 become U+FFFD, so a
    /// garbled line is handed to the caller to reject like any other typo.
    ///
    /// # Arguments
    ///
    /// * `text` - Prompt to print, including any trailing newline
    ///
    /// # Returns
    ///
    /// The answer, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns `TillError::IoError` if the output cannot be written or the
    /// input cannot be read.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, TillError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&line);
        let answer = line.trim_end_matches(['\n', '\r']);
        Ok(Some(answer.to_string()))
    }

    /// Prompt for a value where an empty line means "cancel"
    ///
    /// Returns `None` for an empty (or blank) line and at end of input,
    /// otherwise the answer with surrounding whitespace removed.
    pub fn prompt_or_cancel(&mut self, text: &str) -> Result<Option<String>, TillError> {
        Ok(self
            .prompt(text)?
            .map(|answer| answer.trim().to_string())
            .filter(|answer| !answer.is_empty()))
    }
}
