//! Menu module
//!
//! This module provides the `Menu` struct, the ordered catalog of food items.
//!
//! The Menu is responsible for:
//! - Keeping items sorted ascending by id at all times
//! - Looking up and removing items by id
//! - Generating the next free `F` + four digit id
//! - Loading and saving the pipe-delimited menu file
//! - Rendering the menu table
//!
//! Items live in a `Vec` kept sorted on insert. A new item is placed after
//! every item whose id is less than or equal to its own, so insertion is
//! stable.

use crate::io::{write_file, DelimitedReader, MenuFormat, RecordFormat};
use crate::types::{FoodId, FoodItem, LoadSummary, TillError, ID_LEN};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Ordered food catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    items: Vec<FoodItem>,
}

impl Menu {
    /// Create an empty menu
    pub fn new() -> Self {
        Menu { items: Vec::new() }
    }

    /// Number of items on the menu
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the menu holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.iter()
    }

    /// Insert an item, keeping the menu sorted by id
    ///
    /// The item lands after all items with an equal or lesser id, so items
    /// sharing an id keep their insertion order. Uniqueness is left to the
    /// callers: the loader skips duplicate ids and the add flow only uses
    /// ids from `generate_next_id`.
    ///
    /// # Example
    ///
    /// ```
    /// use food_till::{FoodId, FoodItem, Menu, Price};
    ///
    /// let mut menu = Menu::new();
    /// menu.insert(FoodItem::new(FoodId::new("F0003"), "Pie", "Apple pie", Price::new(4, 25)));
    /// menu.insert(FoodItem::new(FoodId::new("F0001"), "Tea", "Green tea", Price::new(2, 0)));
    ///
    /// let ids: Vec<_> = menu.iter().map(|item| item.id.as_str()).collect();
    /// assert_eq!(ids, ["F0001", "F0003"]);
    /// ```
    pub fn insert(&mut self, item: FoodItem) {
        let index = self.items.partition_point(|existing| existing.id <= item.id);
        self.items.insert(index, item);
    }

    /// Find an item by id
    pub fn find_item(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Remove an item by id
    ///
    /// Returns the removed item, or `None` (with the menu unchanged) when no
    /// item has that id.
    pub fn remove_item(&mut self, id: &str) -> Option<FoodItem> {
        let index = self.items.iter().position(|item| item.id.as_str() == id)?;
        Some(self.items.remove(index))
    }

    /// Next free id: highest `F` + digits suffix plus one, zero padded
    ///
    /// Ids that are not `F` followed by digits are ignored here. An empty
    /// menu starts at `F0001`.
    ///
    /// # Returns
    ///
    /// The new id, or `None` when the highest suffix is already `u32::MAX`
    /// and no larger id can be generated.
    pub fn generate_next_id(&self) -> Option<FoodId> {
        let highest = self
            .items
            .iter()
            .filter_map(|item| item.id.numeric_suffix())
            .max()
            .unwrap_or(0);

        highest.checked_add(1).map(FoodId::from_number)
    }

    /// Load items from a menu file
    ///
    /// Each line is `id|name|description|dollars.cents`. Malformed lines and
    /// lines repeating an id already on the menu are logged and skipped.
    /// Accepted items get the default stock level.
    ///
    /// # Errors
    ///
    /// Returns `TillError::FileOpen` if the file cannot be opened, in which
    /// case the menu is left untouched.
    pub fn load_menu_from_file(&mut self, path: &Path) -> Result<LoadSummary, TillError> {
        let reader = DelimitedReader::<MenuFormat>::open(path)?;
        let summary = self.load_records(reader);

        info!(
            path = %path.display(),
            loaded = summary.loaded,
            skipped = summary.skipped,
            "Loaded menu file"
        );
        Ok(summary)
    }

    /// Insert already decoded menu lines
    pub fn load_records<I>(&mut self, records: I) -> LoadSummary
    where
        I: IntoIterator<Item = Result<FoodItem, TillError>>,
    {
        let mut summary = LoadSummary::default();

        for record in records {
            let result = record.and_then(|item| {
                if self.find_item(item.id.as_str()).is_some() {
                    Err(TillError::duplicate_item(item.id.as_str()))
                } else {
                    Ok(item)
                }
            });

            match result {
                Ok(item) => {
                    self.insert(item);
                    summary.loaded += 1;
                }
                Err(e) => {
                    warn!(format = MenuFormat::NAME, error = %e, "Skipping bad line");
                    summary.skipped += 1;
                }
            }
        }

        summary
    }

    /// Save the menu in id order, one `id|name|description|dollars.cents` line per item
    ///
    /// # Errors
    ///
    /// Returns `TillError::FileOpen` if the file cannot be created, or
    /// `TillError::IoError` if writing fails.
    pub fn save_menu_to_file(&self, path: &Path) -> Result<(), TillError> {
        write_file::<MenuFormat, _>(path, &self.items)?;

        info!(path = %path.display(), items = self.items.len(), "Saved menu file");
        Ok(())
    }

    /// Print the menu table
    ///
    /// Names are truncated or padded to `name_width` characters.
    pub fn display_menu(&self, out: &mut dyn Write, name_width: usize) -> std::io::Result<()> {
        let rule = "-".repeat(ID_LEN + name_width + 21);

        writeln!(out, "Food Menu")?;
        writeln!(out, "---------")?;
        writeln!(
            out,
            "{:<id_w$} | {:<name_w$} | Price",
            "ID",
            "Name",
            id_w = ID_LEN,
            name_w = name_width
        )?;
        writeln!(out, "{}", rule)?;

        for item in &self.items {
            let name: String = item.name.chars().take(name_width).collect();
            writeln!(
                out,
                "{:<id_w$} | {:<name_w$} | {}",
                item.id.as_str(),
                name,
                item.price,
                id_w = ID_LEN,
                name_w = name_width
            )?;
        }

        writeln!(out)?;
        Ok(())
    }
}
