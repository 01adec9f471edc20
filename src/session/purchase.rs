//! Purchase flow
//!
//! Walks the operator through picking an item and handing over coins one at
//! a time. Nothing touches the till until the money handed over covers the
//! price; the sale then settles in one step or not at all.

use crate::core::{Menu, Till};
use crate::session::prompt::Console;
use crate::types::{coin_label, format_cents, ChangeBreakdown, Denomination, FoodId, TillError};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// How a purchase ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// The sale settled; `change` lists the coins handed back
    Completed {
        id: FoodId,
        change: ChangeBreakdown,
    },
    /// The operator backed out or change could not be made
    Cancelled,
}

/// Run one purchase
///
/// # Errors
///
/// Only console I/O failures are returned; every operator mistake is
/// reported on the console and handled in place.
pub fn purchase_meal<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &Menu,
    till: &mut Till,
) -> Result<PurchaseOutcome, TillError> {
    let item = loop {
        console.say("Purchase Meal")?;
        console.say("-------------")?;
        let id = match console
            .prompt_or_cancel("Please enter the ID of the food you wish to purchase:\n")?
        {
            Some(id) => id,
            None => return cancel(console, 0),
        };

        match menu.find_item(&id) {
            Some(item) => break item,
            None => console.say("Error: Item not found in menu.")?,
        }
    };

    console.say(format!(
        "You have selected \"{} - {}\". This will cost you {}",
        item.name, item.description, item.price
    ))?;
    console.say("Please hand over the money - type in the value of each note/coin in cents.")?;
    console.say("Please enter ctrl-D or enter on a new line to cancel this purchase.")?;

    let price = item.price.as_cents();
    let mut tendered: Vec<Denomination> = Vec::new();
    let mut paid: u64 = 0;

    while paid < price {
        let prompt = format!(
            "You still need to give us ${}: ",
            format_cents(price - paid)
        );
        let input = match console.prompt_or_cancel(&prompt)? {
            Some(input) => input,
            None => return cancel(console, paid),
        };

        match input.parse::<Denomination>() {
            Ok(coin) if till.is_valid_denomination(coin) => {
                tendered.push(coin);
                paid += u64::from(coin);
            }
            _ => console.say("Error: invalid denomination encountered.")?,
        }
    }

    match till.settle(&tendered, paid - price) {
        Ok(change) => {
            if change.is_empty() {
                console.say("Thank you for your payment!")?;
            } else {
                console.say(format!("Your change is {}", describe_change(&change)))?;
            }
            info!(id = %item.id, price, paid, "Sale completed");
            Ok(PurchaseOutcome::Completed {
                id: item.id.clone(),
                change,
            })
        }
        Err(e) => {
            warn!(id = %item.id, error = %e, "Sale could not be settled");
            console.say("Unable to provide correct change. Transaction cannot be completed.")?;
            cancel(console, paid)
        }
    }
}

/// Report a cancelled purchase and the refund of anything handed over
fn cancel<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    paid: u64,
) -> Result<PurchaseOutcome, TillError> {
    if paid > 0 {
        console.say("Transaction cancelled. Refunding all payments.")?;
        console.say(format!("Refunded: ${}", format_cents(paid)))?;
    }
    console.say("Returning to main menu.")?;
    console.say("Purchase process was cancelled.")?;
    Ok(PurchaseOutcome::Cancelled)
}

/// List every coin of a breakdown, e.g. `$5 $1 50c`
pub fn describe_change(change: &[(Denomination, u32)]) -> String {
    change
        .iter()
        .flat_map(|&(denomination, count)| {
            std::iter::repeat(coin_label(denomination)).take(count as usize)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
