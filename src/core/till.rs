//! Till module
//!
//! This module provides the `Till` struct which holds the coin and note ledger
//! and computes change.
//!
//! The Till is responsible for:
//! - Loading and saving the `denomination,count` ledger file
//! - Validating tendered denominations
//! - Greedy change-making, both as a dry run and committed
//! - Settling a sale atomically (coins in, change out)
//! - Reporting the balance held per denomination
//!
//! # Greedy Change
//!
//! Change is always selected largest denomination first. This is exact for
//! standard currency sets but can fail (or miss a solution) for arbitrary
//! ones, e.g. paying 60 from `{50:1, 20:3}`. That behavior is kept as-is.

use crate::io::{write_file, CoinFormat, DelimitedReader, RecordFormat};
use crate::types::{format_cents, ChangeBreakdown, Denomination, LoadSummary, TillError};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Coin and note ledger
///
/// Maps each known denomination (in cents) to the number held. Every
/// denomination is positive. The set of denominations is fixed by what was
/// loaded; sales only change the counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Till {
    denominations: BTreeMap<Denomination, u32>,
}

impl Till {
    /// Create an empty till
    pub fn new() -> Self {
        Till {
            denominations: BTreeMap::new(),
        }
    }

    /// Load the ledger from a coin file
    ///
    /// Each line is `denomination,count`. Lines that do not parse are logged
    /// and skipped; accepted lines overwrite any existing count for the same
    /// denomination.
    ///
    /// # Errors
    ///
    /// Returns `TillError::FileOpen` if the file cannot be opened, in which
    /// case the ledger is left untouched.
    pub fn load_denominations(&mut self, path: &Path) -> Result<LoadSummary, TillError> {
        let reader = DelimitedReader::<CoinFormat>::open(path)?;
        let summary = self.load_records(reader);

        info!(
            path = %path.display(),
            loaded = summary.loaded,
            skipped = summary.skipped,
            "Loaded coin file"
        );
        Ok(summary)
    }

    /// Apply already decoded ledger lines
    ///
    /// Errors and zero denominations are logged and counted as skipped.
    ///
    /// # Arguments
    ///
    /// * `records` - Decoded lines, e.g. from a `DelimitedReader<CoinFormat>`
    ///
    /// # Returns
    ///
    /// How many lines were applied and how many were skipped.
    pub fn load_records<I>(&mut self, records: I) -> LoadSummary
    where
        I: IntoIterator<Item = Result<(Denomination, u32), TillError>>,
    {
        let mut summary = LoadSummary::default();

        for record in records {
            let result = record.and_then(|(denomination, count)| {
                if denomination == 0 {
                    Err(TillError::unknown_denomination(denomination))
                } else {
                    Ok((denomination, count))
                }
            });

            match result {
                Ok((denomination, count)) => {
                    self.denominations.insert(denomination, count);
                    summary.loaded += 1;
                }
                Err(e) => {
                    warn!(format = CoinFormat::NAME, error = %e, "Skipping bad line");
                    summary.skipped += 1;
                }
            }
        }

        summary
    }

    /// Check whether a value is one of the loaded denominations
    pub fn is_valid_denomination(&self, value: Denomination) -> bool {
        self.denominations.contains_key(&value)
    }

    /// Number of coins held for a denomination, if it is known
    pub fn count(&self, denomination: Denomination) -> Option<u32> {
        self.denominations.get(&denomination).copied()
    }

    /// Iterate `(denomination, count)` pairs in ascending denomination order
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.denominations.iter().map(|(&d, &c)| (d, c))
    }

    /// Total value held, in cents
    pub fn total_value(&self) -> u64 {
        self.iter()
            .map(|(denomination, count)| u64::from(denomination) * u64::from(count))
            .sum()
    }

    /// Dry run: can `amount` cents be paid out with the coins held?
    ///
    /// Never changes the ledger.
    pub fn can_make_change(&self, amount: u64) -> bool {
        greedy_change(&self.denominations, amount).is_some()
    }

    /// Pay out `amount` cents in change
    ///
    /// # Arguments
    ///
    /// * `amount` - Change to pay out, in cents
    ///
    /// # Returns
    ///
    /// The coins used, largest first. If exact change cannot be made the
    /// result is empty and the ledger is unchanged.
    pub fn make_change(&mut self, amount: u64) -> ChangeBreakdown {
        match greedy_change(&self.denominations, amount) {
            Some(change) => {
                deduct(&mut self.denominations, &change);
                debug!(amount, ?change, "Change paid out");
                change
            }
            None => {
                debug!(amount, "Change cannot be made");
                Vec::new()
            }
        }
    }

    /// Complete a sale
    ///
    /// Adds the tendered coins to a copy of the ledger, takes `change_due`
    /// out of it greedily and only then replaces the live ledger. On any
    /// failure the live ledger is untouched, so a cancelled or failed sale
    /// needs no rollback. Tendered coins may be handed straight back as
    /// change.
    ///
    /// # Arguments
    ///
    /// * `tendered` - Every coin or note the customer handed over
    /// * `change_due` - Amount to give back, in cents
    ///
    /// # Returns
    ///
    /// The change paid out, largest denomination first; empty for an exact
    /// payment.
    ///
    /// # Example
    ///
    /// ```
    /// use food_till::Till;
    ///
    /// let mut till: Till = [(50, 1), (100, 2), (500, 0)].into_iter().collect();
    ///
    /// // $3.50 paid with a $5 note
    /// let change = till.settle(&[500], 150).unwrap();
    ///
    /// assert_eq!(change, vec![(100, 1), (50, 1)]);
    /// assert_eq!(till.count(500), Some(1));
    /// ```
    ///
    /// # Errors
    ///
    /// - `TillError::UnknownDenomination` if a tendered value is not loaded
    /// - `TillError::InsufficientChange` if the change cannot be made
    pub fn settle(
        &mut self,
        tendered: &[Denomination],
        change_due: u64,
    ) -> Result<ChangeBreakdown, TillError> {
        let mut working = self.denominations.clone();

        for &coin in tendered {
            let count = working
                .get_mut(&coin)
                .ok_or_else(|| TillError::unknown_denomination(coin))?;
            *count = count.saturating_add(1);
        }

        let change = greedy_change(&working, change_due)
            .ok_or_else(|| TillError::insufficient_change(change_due))?;
        deduct(&mut working, &change);

        self.denominations = working;
        Ok(change)
    }

    /// Print the balance report
    ///
    /// Lists every denomination with its count and value, then the total.
    pub fn display_balance(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Balance Summary")?;
        writeln!(out, "-------------")?;
        writeln!(out, "Denom | Quantity | Value")?;
        writeln!(out, "--------------------------")?;

        for (denomination, count) in self.iter() {
            let value = u64::from(denomination) * u64::from(count);
            writeln!(
                out,
                "{:<5} | {:<8} |$ {:>6}",
                denomination,
                count,
                format_cents(value)
            )?;
        }

        writeln!(out, "---------------------------")?;
        writeln!(out, "                  $ {}", format_cents(self.total_value()))?;
        Ok(())
    }

    /// Save the ledger as `denomination,count` lines in ascending order
    ///
    /// # Errors
    ///
    /// Returns `TillError::FileOpen` if the file cannot be created, or
    /// `TillError::IoError` if writing fails.
    pub fn save_denominations(&self, path: &Path) -> Result<(), TillError> {
        let records: Vec<(Denomination, u32)> = self.iter().collect();
        write_file::<CoinFormat, _>(path, &records)?;

        info!(path = %path.display(), denominations = records.len(), "Saved coin file");
        Ok(())
    }
}

/// Build a till from `(denomination, count)` pairs
///
/// Zero denominations are dropped; later pairs overwrite earlier ones.
impl FromIterator<(Denomination, u32)> for Till {
    fn from_iter<I: IntoIterator<Item = (Denomination, u32)>>(iter: I) -> Self {
        Till {
            denominations: iter
                .into_iter()
                .filter(|&(denomination, _)| denomination > 0)
                .collect(),
        }
    }
}

/// Greedy selection over a ledger, largest denomination first
///
/// Returns the coins to use, or `None` if the remainder cannot reach zero.
fn greedy_change(ledger: &BTreeMap<Denomination, u32>, amount: u64) -> Option<ChangeBreakdown> {
    let mut remaining = amount;
    let mut change = Vec::new();

    for (&denomination, &available) in ledger.iter().rev() {
        if remaining == 0 {
            break;
        }

        let value = u64::from(denomination);
        let used = (remaining / value).min(u64::from(available));
        if used > 0 {
            remaining -= used * value;
            // used <= available, which is a u32
            change.push((denomination, used as u32));
        }
    }

    (remaining == 0).then_some(change)
}

/// Take a breakdown computed from `ledger` out of it
fn deduct(ledger: &mut BTreeMap<Denomination, u32>, change: &[(Denomination, u32)]) {
    for &(denomination, used) in change {
        if let Some(count) = ledger.get_mut(&denomination) {
            *count -= used;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    fn till(entries: &[(Denomination, u32)]) -> Till {
        entries.iter().copied().collect()
    }

    fn standard_till() -> Till {
        till(&[
            (5, 10),
            (10, 10),
            (20, 10),
            (50, 10),
            (100, 10),
            (200, 10),
            (500, 10),
            (1000, 10),
        ])
    }

    #[test]
    fn test_new_creates_empty_till() {
        let till = Till::new();
        assert_eq!(till.iter().count(), 0);
        assert_eq!(till.total_value(), 0);
    }

    #[test]
    fn test_make_change_uses_largest_first() {
        let mut till = till(&[(500, 2), (100, 3)]);

        let change = till.make_change(600);

        assert_eq!(change, vec![(500, 1), (100, 1)]);
        assert_eq!(till.count(500), Some(1));
        assert_eq!(till.count(100), Some(2));
    }

    #[test]
    fn test_infeasible_change_leaves_ledger_unchanged() {
        let mut till = till(&[(100, 0), (25, 1)]);
        let before = till.clone();

        assert!(!till.can_make_change(100));
        assert!(till.make_change(100).is_empty());
        assert_eq!(till, before);
        assert_eq!(till.count(25), Some(1));
    }

    #[test]
    fn test_can_make_change_does_not_mutate() {
        let till = standard_till();
        let before = till.clone();

        assert!(till.can_make_change(1885));
        assert_eq!(till, before);
    }

    #[test]
    fn test_zero_change_is_feasible_and_empty() {
        let mut till = standard_till();
        assert!(till.can_make_change(0));
        assert!(till.make_change(0).is_empty());
        assert_eq!(till, standard_till());
    }

    #[test]
    fn test_greedy_can_miss_a_solution() {
        // 60 = 20 + 20 + 20, but greedy takes the 50 first and gets stuck
        let mut till = till(&[(50, 1), (20, 3)]);

        assert!(!till.can_make_change(60));
        assert!(till.make_change(60).is_empty());
        assert_eq!(till.count(20), Some(3));
    }

    #[test]
    fn test_make_change_skips_exhausted_denominations() {
        let mut till = till(&[(200, 0), (100, 2), (50, 4)]);

        let change = till.make_change(350);

        assert_eq!(change, vec![(100, 2), (50, 3)]);
        assert_eq!(till.count(50), Some(1));
    }

    #[rstest]
    #[case::known(50, true)]
    #[case::unknown(3, false)]
    #[case::zero(0, false)]
    fn test_is_valid_denomination(#[case] value: Denomination, #[case] expected: bool) {
        assert_eq!(standard_till().is_valid_denomination(value), expected);
    }

    #[test]
    fn test_settle_adds_tendered_and_removes_change() {
        let mut till = till(&[(500, 0), (100, 0), (50, 1)]);

        // Price 4.50 paid with a 5 dollar note
        let change = till.settle(&[500], 50).unwrap();

        assert_eq!(change, vec![(50, 1)]);
        assert_eq!(till.count(500), Some(1));
        assert_eq!(till.count(50), Some(0));
    }

    #[test]
    fn test_settle_can_use_tendered_coins_for_change() {
        let mut till = till(&[(100, 0), (50, 0)]);

        // Price 1.00 paid with 50 + 100: the 50 comes straight back
        let change = till.settle(&[50, 100], 50).unwrap();

        assert_eq!(change, vec![(50, 1)]);
        assert_eq!(till.count(100), Some(1));
        assert_eq!(till.count(50), Some(0));
    }

    #[test]
    fn test_settle_without_change_leaves_ledger_on_failure() {
        let mut till = till(&[(1000, 0), (100, 0)]);
        let before = till.clone();

        let result = till.settle(&[1000], 550);

        assert_eq!(result, Err(TillError::InsufficientChange { amount: 550 }));
        assert_eq!(till, before);
    }

    #[test]
    fn test_settle_rejects_unknown_denomination() {
        let mut till = standard_till();

        let result = till.settle(&[300], 0);

        assert_eq!(result, Err(TillError::UnknownDenomination { value: 300 }));
        assert_eq!(till, standard_till());
    }

    #[test]
    fn test_settle_exact_payment() {
        let mut till = till(&[(200, 1)]);

        let change = till.settle(&[200, 200], 0).unwrap();

        assert!(change.is_empty());
        assert_eq!(till.count(200), Some(3));
    }

    #[test]
    fn test_load_records_skips_errors_and_overwrites() {
        let mut till = till(&[(100, 7)]);

        let summary = till.load_records(vec![
            Ok((100, 3)),
            Err(TillError::parse_error(2, "bad line")),
            Ok((50, 4)),
        ]);

        assert_eq!(summary, LoadSummary { loaded: 2, skipped: 1 });
        assert_eq!(till.count(100), Some(3));
        assert_eq!(till.count(50), Some(4));
    }

    #[test]
    fn test_zero_denomination_is_never_held() {
        let collected = till(&[(0, 5), (5, 1)]);
        assert_eq!(collected.count(0), None);
        assert!(!collected.can_make_change(3));
        assert!(collected.can_make_change(5));

        let mut loaded = Till::new();
        let summary = loaded.load_records(vec![Ok((0, 4)), Ok((10, 1))]);
        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 1 });
        assert!(!loaded.is_valid_denomination(0));
        assert!(!loaded.can_make_change(7));
    }

    #[test]
    fn test_load_denominations_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"500,2\nnot a line\n100,3\n").unwrap();
        file.flush().unwrap();

        let mut loaded = Till::new();
        let summary = loaded.load_denominations(file.path()).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 2, skipped: 1 });
        assert_eq!(loaded, till(&[(100, 3), (500, 2)]));
    }

    #[test]
    fn test_load_denominations_missing_file_leaves_till() {
        let mut till = standard_till();

        let result = till.load_denominations(Path::new("nonexistent_coins.dat"));

        assert!(matches!(result, Err(TillError::FileOpen { .. })));
        assert_eq!(till, standard_till());
    }

    #[test]
    fn test_save_then_load_reproduces_ledger() {
        let file = NamedTempFile::new().unwrap();
        let original = standard_till();

        original.save_denominations(file.path()).unwrap();
        let mut reloaded = Till::new();
        reloaded.load_denominations(file.path()).unwrap();

        assert_eq!(reloaded, original);
        assert!(std::fs::read_to_string(file.path())
            .unwrap()
            .starts_with("5,10\n10,10\n"));
    }

    #[test]
    fn test_display_balance() {
        let till = till(&[(5, 10), (1000, 2)]);
        let mut output = Vec::new();

        till.display_balance(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Balance Summary\n"));
        assert!(text.contains("5     | 10       |$   0.50\n"));
        assert!(text.contains("1000  | 2        |$  20.00\n"));
        assert!(text.ends_with("                  $ 20.50\n"));
    }

    proptest! {
        #[test]
        fn prop_feasible_change_sums_to_amount(
            counts in proptest::collection::vec(0u32..6, 8),
            amount in 0u64..5000,
        ) {
            let denominations = [5, 10, 20, 50, 100, 200, 500, 1000];
            let mut till: Till = denominations.iter().copied().zip(counts).collect();
            let before = till.clone();

            if till.can_make_change(amount) {
                let change = till.make_change(amount);
                let paid: u64 = change.iter().map(|&(d, c)| u64::from(d) * u64::from(c)).sum();
                prop_assert_eq!(paid, amount);
                for (denomination, used) in change {
                    prop_assert!(used <= before.count(denomination).unwrap());
                }
                prop_assert_eq!(till.total_value() + amount, before.total_value());
            } else {
                prop_assert!(till.make_change(amount).is_empty());
                prop_assert_eq!(till, before);
            }
        }
    }
}
