//! Core business logic module
//!
//! This module contains the two data-owning components:
//! - `till` - Coin ledger and greedy change-making
//! - `menu` - Ordered food catalog
//!
//! Neither component knows about the other; the session drives both.

pub mod menu;
pub mod till;

pub use menu::Menu;
pub use till::Till;
