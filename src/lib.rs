//! Food Till Library
//! # Overview
//!
//! This library implements a small text-menu point-of-sale simulator: a food
//! menu kept in id order and a till of coin denominations that can make change.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (FoodItem, Price, denominations, TillError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::menu`] - Ordered food catalog with load, save and display
//!   - [`core::till`] - Coin ledger with greedy change-making
//! - [`io`] - Delimited record formats, reader and writer for the data files
//! - [`session`] - Interactive main menu, purchase and admin flows
//!
//! # Data Files
//!
//! - **Menu file**: `id|name|description|dollars.cents`, one item per line
//! - **Coin file**: `denomination,count`, one denomination per line
//!
//! Malformed lines in either file are reported and skipped.
//!
//! # Making Change
//!
//! Change is made greedily from the largest denomination down. A sale either
//! settles completely (coins tendered are banked and change is handed back)
//! or leaves the till untouched.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::{Menu, Till};
pub use session::{Console, DataFiles, Session, SessionConfig, SessionOutcome};
pub use types::{ChangeBreakdown, Denomination, FoodId, FoodItem, LoadSummary, Price, TillError};
