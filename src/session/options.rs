//! Main menu options

use crate::types::TillError;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    DisplayMenu,
    Purchase,
    SaveAndExit,
    AddFood,
    RemoveFood,
    DisplayBalance,
    Abort,
}

impl MenuOption {
    /// Options in the order they are numbered on screen
    pub const ALL: [MenuOption; 7] = [
        MenuOption::DisplayMenu,
        MenuOption::Purchase,
        MenuOption::SaveAndExit,
        MenuOption::AddFood,
        MenuOption::RemoveFood,
        MenuOption::DisplayBalance,
        MenuOption::Abort,
    ];

    /// Parse what the operator typed at the main prompt
    ///
    /// Only plain digits are accepted; surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// - `TillError::InvalidSelection` for empty or non-numeric input
    /// - `TillError::SelectionOutOfRange` for numbers outside 1-7
    pub fn parse(input: &str) -> Result<Self, TillError> {
        let trimmed = input.trim();
        let max = Self::ALL.len() as u8;

        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TillError::InvalidSelection {
                input: trimmed.to_string(),
                max,
            });
        }

        // All digits, so the only possible failure is overflow
        let choice = trimmed.parse::<u64>().unwrap_or(u64::MAX);
        match choice {
            1..=7 => Ok(Self::ALL[(choice - 1) as usize]),
            _ => Err(TillError::SelectionOutOfRange { choice }),
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::DisplayMenu => "Display Meal Options",
            MenuOption::Purchase => "Purchase Meal",
            MenuOption::SaveAndExit => "Save and Exit",
            MenuOption::AddFood => "Add Food",
            MenuOption::RemoveFood => "Remove Food",
            MenuOption::DisplayBalance => "Display Balance",
            MenuOption::Abort => "Abort Program",
        }
    }

    /// Administrator-only options are listed in their own section
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            MenuOption::AddFood
                | MenuOption::RemoveFood
                | MenuOption::DisplayBalance
                | MenuOption::Abort
        )
    }
}
