//! Interactive session
//!
//! Drives the numbered main menu over any line-based input and output. The
//! session borrows the menu and till, so the caller decides what happens to
//! them afterwards; only "Save and Exit" writes them back to disk.
//!
//! # Error Handling
//!
//! Operator mistakes are reported on the console and re-prompted. Save
//! failures are reported and logged but do not stop the session from ending.
//! Only console I/O failures are returned as errors.

pub mod admin;
pub mod config;
pub mod options;
pub mod prompt;
pub mod purchase;

pub use admin::{add_food_item, remove_food_item};
pub use config::{DataFiles, SessionConfig};
pub use options::MenuOption;
pub use prompt::Console;
pub use purchase::{describe_change, purchase_meal, PurchaseOutcome};

use crate::core::{Menu, Till};
use crate::types::TillError;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// "Save and Exit" was chosen
    Saved,
    /// "Abort Program" was chosen; nothing was written
    Aborted,
    /// Input ran out at the main prompt; nothing was written
    EndOfInput,
}

/// The main menu loop
pub struct Session<'a, R, W> {
    console: Console<R, W>,
    menu: &'a mut Menu,
    till: &'a mut Till,
    files: DataFiles,
    config: SessionConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session over a console
    ///
    /// # Arguments
    ///
    /// * `console` - Operator input and output
    /// * `menu` - Menu loaded at start-up; edits are made in place
    /// * `till` - Till loaded at start-up; sales are settled in place
    /// * `files` - Where "Save and Exit" writes the menu and the till
    /// * `config` - Display width and retry limits
    ///
    /// # Example
    ///
    /// ```
    /// use food_till::session::{Console, DataFiles, Session, SessionConfig, SessionOutcome};
    /// use food_till::{Menu, Till};
    ///
    /// let (mut menu, mut till) = (Menu::new(), Till::new());
    /// let files = DataFiles {
    ///     menu_file: "foods.dat".into(),
    ///     coin_file: "coins.dat".into(),
    /// };
    /// let console = Console::new(&b"7\n"[..], Vec::new());
    ///
    /// let mut session = Session::new(console, &mut menu, &mut till, files, SessionConfig::default());
    /// assert_eq!(session.run().unwrap(), SessionOutcome::Aborted);
    /// ```
    pub fn new(
        console: Console<R, W>,
        menu: &'a mut Menu,
        till: &'a mut Till,
        files: DataFiles,
        config: SessionConfig,
    ) -> Self {
        Self {
            console,
            menu,
            till,
            files,
            config,
        }
    }

    /// Run until the operator saves, aborts, or input ends
    ///
    /// # Errors
    ///
    /// Returns an error only if the console cannot be read or written.
    pub fn run(&mut self) -> Result<SessionOutcome, TillError> {
        loop {
            self.show_main_menu()?;

            let Some(input) = self.console.prompt("Select your option (1-7) :\n")? else {
                debug!("Input ended at main prompt");
                return Ok(SessionOutcome::EndOfInput);
            };

            let option = match MenuOption::parse(&input) {
                Ok(option) => option,
                Err(e) => {
                    self.console.say(e)?;
                    continue;
                }
            };

            debug!(?option, "Menu option selected");
            match option {
                MenuOption::DisplayMenu => {
                    self.menu
                        .display_menu(self.console.output(), self.config.name_width)?;
                }
                MenuOption::Purchase => {
                    purchase_meal(&mut self.console, self.menu, self.till)?;
                }
                MenuOption::SaveAndExit => {
                    self.save()?;
                    self.console.say("Good bye!")?;
                    return Ok(SessionOutcome::Saved);
                }
                MenuOption::AddFood => {
                    add_food_item(&mut self.console, self.menu)?;
                }
                MenuOption::RemoveFood => {
                    remove_food_item(
                        &mut self.console,
                        self.menu,
                        self.config.max_remove_attempts,
                    )?;
                }
                MenuOption::DisplayBalance => {
                    self.till.display_balance(self.console.output())?;
                }
                MenuOption::Abort => {
                    self.console
                        .say("Program is terminating. All program data will be lost.")?;
                    return Ok(SessionOutcome::Aborted);
                }
            }
        }
    }

    /// Give the console output back
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn show_main_menu(&mut self) -> Result<(), TillError> {
        self.console.say("Main Menu:")?;
        let mut admin_heading_shown = false;
        for (number, option) in (1..).zip(MenuOption::ALL) {
            if option.is_admin() && !admin_heading_shown {
                self.console.say("Administrator-Only Menu:")?;
                admin_heading_shown = true;
            }
            self.console.say(format!("  {}. {}", number, option.label()))?;
        }
        Ok(())
    }

    /// Write both data files, reporting rather than propagating failures
    fn save(&mut self) -> Result<(), TillError> {
        if let Err(e) = self.menu.save_menu_to_file(&self.files.menu_file) {
            warn!(error = %e, "Failed to save menu");
            self.console.say(&e)?;
        }
        if let Err(e) = self.till.save_denominations(&self.files.coin_file) {
            warn!(error = %e, "Failed to save coins");
            self.console.say(&e)?;
        }
        info!(
            menu_file = %self.files.menu_file.display(),
            coin_file = %self.files.coin_file.display(),
            "Session saved"
        );
        Ok(())
    }
}
