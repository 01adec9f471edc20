use crate::session::{DataFiles, SessionConfig};
use clap::Parser;
use std::path::PathBuf;

/// Run the food till against a menu file and a coin file
#[derive(Parser, Debug)]
#[command(name = "food-till")]
#[command(about = "Text-menu point-of-sale simulator for a food till", long_about = None)]
pub struct CliArgs {
    /// Menu file, one `id|name|description|dollars.cents` item per line
    #[arg(value_name = "MENU_FILE", help = "Path to the food menu file")]
    pub menu_file: PathBuf,

    /// Coin file, one `denomination,count` entry per line
    #[arg(value_name = "COIN_FILE", help = "Path to the coin file")]
    pub coin_file: PathBuf,

    /// Width of the name column when displaying the menu
    #[arg(
        long = "name-width",
        value_name = "WIDTH",
        help = "Width of the name column in the menu display (default: 40)"
    )]
    pub name_width: Option<usize>,

    /// Failed lookups allowed when removing a food item
    #[arg(
        long = "max-remove-attempts",
        value_name = "COUNT",
        help = "Failed ID lookups allowed when removing food (default: 5)"
    )]
    pub max_remove_attempts: Option<u32>,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    ///
    /// Missing values take their defaults; zero values fall back to the
    /// defaults with a warning.
    pub fn to_session_config(&self) -> SessionConfig {
        if self.name_width.is_some() || self.max_remove_attempts.is_some() {
            let default = SessionConfig::default();
            SessionConfig::new(
                self.name_width.unwrap_or(default.name_width),
                self.max_remove_attempts
                    .unwrap_or(default.max_remove_attempts),
            )
        } else {
            SessionConfig::default()
        }
    }

    /// The two data files named on the command line
    pub fn data_files(&self) -> DataFiles {
        DataFiles {
            menu_file: self.menu_file.clone(),
            coin_file: self.coin_file.clone(),
        }
    }
}
