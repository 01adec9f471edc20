//! Session configuration

use crate::types::NAME_LEN;
use std::path::PathBuf;
use tracing::warn;

/// Tunables for the interactive session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Width of the name column in the menu table
    pub name_width: usize,
    /// Failed lookups allowed before "remove food" gives up
    pub max_remove_attempts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name_width: NAME_LEN,
            max_remove_attempts: 5,
        }
    }
}

impl SessionConfig {
    /// Create a SessionConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(name_width: usize, max_remove_attempts: u32) -> Self {
        let default = Self::default();

        let name_width = if name_width == 0 {
            warn!(
                name_width,
                default = default.name_width,
                "Invalid name_width, using default"
            );
            default.name_width
        } else {
            name_width
        };

        let max_remove_attempts = if max_remove_attempts == 0 {
            warn!(
                max_remove_attempts,
                default = default.max_remove_attempts,
                "Invalid max_remove_attempts, using default"
            );
            default.max_remove_attempts
        } else {
            max_remove_attempts
        };

        Self {
            name_width,
            max_remove_attempts,
        }
    }
}

/// Files the session loads from and saves back to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataFiles {
    pub menu_file: PathBuf,
    pub coin_file: PathBuf,
}
