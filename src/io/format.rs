//! Line formats for the menu and coin files
//!
//! This module centralizes all file format concerns, providing:
//! - The `RecordFormat` trait that the generic reader and writer are built on
//! - `CoinFormat` for `denomination,count` lines
//! - `MenuFormat` for `id|name|description|dollars.cents` lines
//!
//! Neither format has a header or any escaping; a `|` inside a menu field
//! cannot be represented. Till and Menu only ever see decoded records, so a
//! new format can be added here as another `FormatVersion` without touching
//! them. All functions are pure (no I/O) for easy testing.

use crate::types::{Denomination, FoodId, FoodItem, Price};
use csv::StringRecord;
use serde::Serialize;

/// Known on-disk layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    /// Headerless delimited text, one record per line, no quoting
    DelimitedV1,
}

/// A line-oriented file format
///
/// Implementors describe how one line maps to a domain record and back.
pub trait RecordFormat {
    /// Domain value produced by one line
    type Record;

    /// Serializable row written for one record
    type Row: Serialize;

    /// Layout version implemented by this format
    const VERSION: FormatVersion;

    /// Field separator
    const DELIMITER: u8;

    /// Short name used in diagnostics
    const NAME: &'static str;

    /// Convert the fields of one line into a record
    fn decode(fields: &StringRecord) -> Result<Self::Record, String>;

    /// Convert a record into the row that gets written
    fn encode(record: &Self::Record) -> Self::Row;
}

/// Coin file format: `denomination,count`
#[derive(Debug, Clone, Copy)]
pub struct CoinFormat;

/// One written line of the coin file
#[derive(Debug, Serialize, PartialEq)]
pub struct CoinRow {
    pub denomination: Denomination,
    pub count: u32,
}

impl RecordFormat for CoinFormat {
    type Record = (Denomination, u32);
    type Row = CoinRow;

    const VERSION: FormatVersion = FormatVersion::DelimitedV1;
    const DELIMITER: u8 = b',';
    const NAME: &'static str = "coin";

    fn decode(fields: &StringRecord) -> Result<Self::Record, String> {
        if fields.len() != 2 {
            return Err(format!(
                "expected 'denomination,count' but found {} field(s)",
                fields.len()
            ));
        }

        let denomination = fields[0].trim();
        let count = fields[1].trim();

        let denomination: Denomination = denomination
            .parse()
            .map_err(|_| format!("invalid denomination '{}'", denomination))?;
        if denomination == 0 {
            return Err("denomination must be positive".to_string());
        }

        let count: u32 = count
            .parse()
            .map_err(|_| format!("invalid count '{}'", count))?;

        Ok((denomination, count))
    }

    fn encode(record: &Self::Record) -> Self::Row {
        CoinRow {
            denomination: record.0,
            count: record.1,
        }
    }
}

/// Menu file format: `id|name|description|dollars.cents`
#[derive(Debug, Clone, Copy)]
pub struct MenuFormat;

/// One written line of the menu file
#[derive(Debug, Serialize, PartialEq)]
pub struct MenuRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl RecordFormat for MenuFormat {
    type Record = FoodItem;
    type Row = MenuRow;

    const VERSION: FormatVersion = FormatVersion::DelimitedV1;
    const DELIMITER: u8 = b'|';
    const NAME: &'static str = "menu";

    fn decode(fields: &StringRecord) -> Result<Self::Record, String> {
        // A stray delimiter at the end of the line leaves an empty fifth field
        let trailing_delimiter = fields.len() == 5 && fields[4].trim().is_empty();
        if fields.len() != 4 && !trailing_delimiter {
            return Err(format!(
                "expected 'id|name|description|price' but found {} field(s)",
                fields.len()
            ));
        }

        let id = &fields[0];
        let name = &fields[1];
        let description = &fields[2];

        if id.is_empty() {
            return Err("missing item id".to_string());
        }
        if name.is_empty() {
            return Err(format!("missing name for item {}", id));
        }

        let price = Price::parse_file_field(fields[3].trim())
            .map_err(|e| format!("{} for item {}", e, id))?;

        Ok(FoodItem::new(FoodId::new(id), name, description, price))
    }

    fn encode(record: &Self::Record) -> Self::Row {
        MenuRow {
            id: record.id.to_string(),
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price.to_file_field(),
        }
    }
}
