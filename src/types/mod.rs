//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `coin`: Denominations and change breakdowns
//! - `food`: Food ids and menu items
//! - `money`: Prices and currency formatting
//! - `error`: Error types for the food till

pub mod coin;
pub mod error;
pub mod food;
pub mod money;

pub use coin::{coin_label, ChangeBreakdown, Denomination, LoadSummary};
pub use error::TillError;
pub use food::{FoodId, FoodItem, DEFAULT_FOOD_STOCK_LEVEL, DESC_LEN, ID_LEN, NAME_LEN};
pub use money::{format_cents, Price};
