//! Administrator flows: adding and removing menu items

use crate::core::Menu;
use crate::session::prompt::Console;
use crate::types::{FoodId, FoodItem, Price, TillError, DESC_LEN, NAME_LEN};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Add a new item under the next free id
///
/// Prompts for the name, description and price. Text fields containing `|`
/// or longer than the file allows are rejected and asked for again, as are
/// prices that are negative or have more than two decimal places.
///
/// # Arguments
///
/// * `console` - Operator input and output
/// * `menu` - Menu the item is inserted into
///
/// # Returns
///
/// The id of the added item, or `None` if the operator cancelled with an
/// empty line or end of input, or if no id was left to allocate.
///
/// # Errors
///
/// Only console I/O failures are returned.
pub fn add_food_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &mut Menu,
) -> Result<Option<FoodId>, TillError> {
    let Some(id) = menu.generate_next_id() else {
        warn!("No food item id left to allocate");
        console.say("Error: no more food item IDs are available.")?;
        console.say("No item was added to the menu.")?;
        return Ok(None);
    };

    console.say(format!(
        "This new meal item will have the Item ID of {}.",
        id
    ))?;

    let Some(name) = read_text(console, "Enter the item name: ", NAME_LEN)? else {
        return cancel_add(console);
    };
    let Some(description) = read_text(console, "Enter the item description: ", DESC_LEN)? else {
        return cancel_add(console);
    };

    let price = loop {
        let Some(input) =
            console.prompt_or_cancel("Enter the price for this item (in dollars and cents): ")?
        else {
            return cancel_add(console);
        };

        match Price::parse_input(&input) {
            Ok(price) => break price,
            Err(_) => console.say(
                "Invalid input. Please enter a valid price in dollars and cents (non-negative value).",
            )?,
        }
    };

    console.say(format!(
        "This item \"{} - {}\" has now been added to the food menu.",
        name, description
    ))?;
    info!(id = %id, name = %name, price = %price, "Food item added");
    menu.insert(FoodItem::new(id.clone(), name, description, price));

    Ok(Some(id))
}

/// Read a menu text field, re-prompting until it fits the file format
fn read_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    max_len: usize,
) -> Result<Option<String>, TillError> {
    loop {
        let Some(text) = console.prompt_or_cancel(prompt)? else {
            return Ok(None);
        };

        if text.contains('|') {
            console.say("Error: the '|' character cannot be used.")?;
        } else if text.chars().count() > max_len {
            console.say(format!("Error: please use at most {} characters.", max_len))?;
        } else {
            return Ok(Some(text));
        }
    }
}

fn cancel_add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<FoodId>, TillError> {
    console.say("Returning to main menu.")?;
    console.say("No item was added to the menu.")?;
    Ok(None)
}

/// Remove an item chosen by id
///
/// Unknown ids are reported and re-prompted, up to `max_attempts` failures.
///
/// # Arguments
///
/// * `console` - Operator input and output
/// * `menu` - Menu the item is removed from
/// * `max_attempts` - Failed lookups allowed before giving up
///
/// # Returns
///
/// The removed item, or `None` if the operator cancelled or ran out of
/// attempts.
pub fn remove_food_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &mut Menu,
    max_attempts: u32,
) -> Result<Option<FoodItem>, TillError> {
    let mut attempts = 0;

    loop {
        let Some(id) =
            console.prompt_or_cancel("Enter the food ID of the item to remove from the menu: ")?
        else {
            console.say("Returning to main menu.")?;
            return Ok(None);
        };

        match menu.remove_item(&id) {
            Some(item) => {
                console.say(format!(
                    "\"{} - {} - {}\" has been removed from the system.",
                    item.id, item.name, item.description
                ))?;
                info!(id = %item.id, "Food item removed");
                return Ok(Some(item));
            }
            None => {
                console.say(format!(
                    "Failed to remove item with ID {}. Item may not exist.",
                    id
                ))?;
                attempts += 1;
                if attempts >= max_attempts {
                    console.say("Too many failed attempts. Returning to main menu.")?;
                    return Ok(None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        let mut menu = Menu::new();
        menu.insert(FoodItem::new(FoodId::new("F0001"), "Tea", "Green tea", Price::new(2, 0)));
        menu.insert(FoodItem::new(FoodId::new("F0003"), "Pie", "Apple pie", Price::new(4, 25)));
        menu
    }

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_add_food_item() {
        let mut menu = menu();
        let mut console = console("Soup\nHot soup\n3.5\n");

        let id = add_food_item(&mut console, &mut menu).unwrap();

        assert_eq!(id, Some(FoodId::new("F0004")));
        let soup = menu.find_item("F0004").unwrap();
        assert_eq!(soup.name, "Soup");
        assert_eq!(soup.description, "Hot soup");
        assert_eq!(soup.price, Price::new(3, 50));
        assert_eq!(soup.on_hand, 20);

        let text = output(console);
        assert!(text.contains("This new meal item will have the Item ID of F0004."));
        assert!(text.contains("This item \"Soup - Hot soup\" has now been added to the food menu."));
    }

    #[test]
    fn test_add_food_item_refuses_when_ids_run_out() {
        let mut menu = menu();
        let last = FoodId::new(format!("F{}", u32::MAX));
        menu.insert(FoodItem::new(last, "Last", "Highest id", Price::new(1, 0)));
        let mut console = console("Soup\nHot soup\n3.50\n");

        let id = add_food_item(&mut console, &mut menu).unwrap();

        assert_eq!(id, None);
        assert_eq!(menu.len(), 3);
        let text = output(console);
        assert!(text.contains("Error: no more food item IDs are available."));
        assert!(!text.contains("Enter the item name"));
    }

    #[test]
    fn test_add_food_item_reprompts_bad_price() {
        let mut menu = menu();
        let mut console = console("Soup\nHot soup\n-2\nfree\n1.999\n2.25\n");

        add_food_item(&mut console, &mut menu).unwrap();

        assert_eq!(menu.find_item("F0004").unwrap().price, Price::new(2, 25));
        let text = output(console);
        assert_eq!(text.matches("Invalid input. Please enter a valid price").count(), 3);
    }

    #[test]
    fn test_add_food_item_rejects_pipe_and_long_name() {
        let mut menu = menu();
        let long_name = "x".repeat(NAME_LEN + 1);
        let input = format!("Fish|Chips\n{}\nFish\nBattered\n5\n", long_name);
        let mut console = console(&input);

        add_food_item(&mut console, &mut menu).unwrap();

        assert_eq!(menu.find_item("F0004").unwrap().name, "Fish");
        let text = output(console);
        assert!(text.contains("Error: the '|' character cannot be used."));
        assert!(text.contains("Error: please use at most 40 characters."));
    }

    #[test]
    fn test_add_food_item_cancel_adds_nothing() {
        for input in ["\n", "Soup\n\n", "Soup\nHot soup\n\n", "Soup\nHot soup"] {
            let mut menu = menu();
            let mut console = console(input);

            let id = add_food_item(&mut console, &mut menu).unwrap();

            assert_eq!(id, None);
            assert_eq!(menu.len(), 2);
            assert!(output(console).contains("No item was added to the menu."));
        }
    }

    #[test]
    fn test_remove_food_item() {
        let mut menu = menu();
        let mut console = console("F0003\n");

        let removed = remove_food_item(&mut console, &mut menu, 5).unwrap();

        assert_eq!(removed.map(|item| item.name), Some("Pie".to_string()));
        assert!(menu.find_item("F0003").is_none());
        assert!(output(console).contains("\"F0003 - Pie - Apple pie\" has been removed from the system."));
    }

    #[test]
    fn test_remove_food_item_retries_then_succeeds() {
        let mut menu = menu();
        let mut console = console("F0009\nF0001\n");

        let removed = remove_food_item(&mut console, &mut menu, 5).unwrap();

        assert!(removed.is_some());
        assert_eq!(menu.len(), 1);
        assert!(output(console).contains("Failed to remove item with ID F0009. Item may not exist."));
    }

    #[test]
    fn test_remove_food_item_gives_up_after_max_attempts() {
        let mut menu = menu();
        let mut console = console("X1\nX2\nX3\nF0001\n");

        let removed = remove_food_item(&mut console, &mut menu, 3).unwrap();

        assert!(removed.is_none());
        assert_eq!(menu.len(), 2);
        assert!(output(console).contains("Too many failed attempts. Returning to main menu."));
    }

    #[test]
    fn test_remove_food_item_cancel() {
        let mut menu = menu();
        let mut console = console("\n");

        assert!(remove_food_item(&mut console, &mut menu, 5).unwrap().is_none());
        assert_eq!(menu.len(), 2);
    }
}
