//! Error types for the food till
//!
//! This module defines all error types that can occur while loading, saving,
//! and operating on the menu and the till.
//! Errors are designed to be descriptive and user-friendly for console output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File cannot be opened, read, or written
//! - **Parse Errors**: Malformed menu or coin lines (recoverable, line skipped)
//! - **Domain Errors**: Unknown denomination, duplicate item, insufficient change

use thiserror::Error;

/// Main error type for the food till
///
/// Every variant carries enough context to be reported to the operator or to
/// the diagnostic log without further lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TillError {
    /// A data file could not be opened for reading or writing
    ///
    /// The operation is abandoned and the in-memory collection is unchanged.
    #[error("Error opening file '{path}': {message}")]
    FileOpen {
        /// The path that could not be opened
        path: String,
        /// Description of the underlying I/O failure
        message: String,
    },

    /// I/O error occurred while reading or writing an already opened file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A line of a data file could not be parsed
    ///
    /// This is a recoverable error - the line is skipped and loading
    /// continues with the next one.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A price string was not of the form `dollars.cents`
    #[error("Invalid price '{value}'")]
    InvalidPrice {
        /// The rejected price text
        value: String,
    },

    /// A value offered as a coin or note is not a known denomination
    #[error("Invalid denomination: {value}")]
    UnknownDenomination {
        /// The rejected value in cents
        value: u32,
    },

    /// An item with the same id is already on the menu
    #[error("Food item with ID {id} already exists")]
    DuplicateItem {
        /// The duplicated id
        id: String,
    },

    /// The till cannot pay out the requested change with the coins it holds
    #[error("Unable to make change of {amount} cents")]
    InsufficientChange {
        /// Change requested, in cents
        amount: u64,
    },

    /// A main menu selection that is not a whole number
    #[error("Invalid input. Please enter a number from 1 to {max}.")]
    InvalidSelection {
        /// What the operator typed
        input: String,
        /// Highest option number
        max: u8,
    },

    /// A main menu selection outside the offered options
    #[error("Invalid input. Please try again.")]
    SelectionOutOfRange {
        /// The number the operator typed
        choice: u64,
    },
}

impl From<std::io::Error> for TillError {
    fn from(error: std::io::Error) -> Self {
        TillError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TillError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        // Broken reads and writes are I/O problems, everything else is a bad line
        match error.kind() {
            csv::ErrorKind::Io(e) => TillError::IoError {
                message: e.to_string(),
            },
            _ => TillError::ParseError {
                line,
                message: error.to_string(),
            },
        }
    }
}

impl TillError {
    /// Create a FileOpen error
    pub fn file_open(path: &std::path::Path, error: &std::io::Error) -> Self {
        TillError::FileOpen {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a ParseError with a line number
    pub fn parse_error(line: u64, message: impl Into<String>) -> Self {
        TillError::ParseError {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create an InvalidPrice error
    pub fn invalid_price(value: &str) -> Self {
        TillError::InvalidPrice {
            value: value.to_string(),
        }
    }

    /// Create an UnknownDenomination error
    pub fn unknown_denomination(value: u32) -> Self {
        TillError::UnknownDenomination { value }
    }

    /// Create a DuplicateItem error
    pub fn duplicate_item(id: &str) -> Self {
        TillError::DuplicateItem { id: id.to_string() }
    }

    /// Create an InsufficientChange error
    pub fn insufficient_change(amount: u64) -> Self {
        TillError::InsufficientChange { amount }
    }
}
