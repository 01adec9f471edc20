//! Food item types for the food till
//!
//! This module defines the menu item identifier and the item record itself.

use super::money::Price;
use std::fmt;

/// Length of a well-formed food id, e.g. `F0001`
pub const ID_LEN: usize = 5;

/// Maximum length of a food item name
pub const NAME_LEN: usize = 40;

/// Maximum length of a food item description
pub const DESC_LEN: usize = 255;

/// Stock level every new or loaded item starts with
pub const DEFAULT_FOOD_STOCK_LEVEL: u32 = 20;

/// Prefix shared by all generated food ids
const ID_PREFIX: char = 'F';

/// Food item identifier
///
/// Ids are compared as plain strings, which orders zero-padded ids such as
/// `F0002 < F0010` numerically. Ids read from a file are accepted as-is even
/// when they do not follow the `F` + four digits convention.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoodId(String);

impl FoodId {
    /// Wrap an id string without validation
    pub fn new(id: impl Into<String>) -> Self {
        FoodId(id.into())
    }

    /// Build the conventional id for a numeric suffix, `F` + four digits
    pub fn from_number(number: u32) -> Self {
        FoodId(format!("{}{:04}", ID_PREFIX, number))
    }

    /// Numeric part of a conventional id
    ///
    /// Returns `None` for ids that do not start with `F` followed only by
    /// digits. Those ids take no part in id generation.
    pub fn numeric_suffix(&self) -> Option<u32> {
        let digits = self.0.strip_prefix(ID_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchasable menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    /// Unique item id
    pub id: FoodId,

    /// Display name, never empty
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Unit price
    pub price: Price,

    /// Units on hand
    pub on_hand: u32,
}

impl FoodItem {
    /// Create an item with the default stock level
    pub fn new(
        id: FoodId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
    ) -> Self {
        FoodItem {
            id,
            name: name.into(),
            description: description.into(),
            price,
            on_hand: DEFAULT_FOOD_STOCK_LEVEL,
        }
    }
}
