//! Coin-related types for the food till

/// Face value of a coin or note, in cents
pub type Denomination = u32;

/// Coins paid out for one request, as `(denomination, count)` pairs
///
/// Only denominations actually used appear, largest first.
pub type ChangeBreakdown = Vec<(Denomination, u32)>;

/// Outcome of a bulk file load
///
/// Counts the lines that became entries and the lines that were reported and
/// skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines accepted
    pub loaded: usize,
    /// Lines rejected
    pub skipped: usize,
}

/// Render a single coin or note for a receipt
///
/// Whole-dollar values print as `$N`, anything smaller as `Nc`.
pub fn coin_label(denomination: Denomination) -> String {
    if denomination >= 100 && denomination % 100 == 0 {
        format!("${}", denomination / 100)
    } else if denomination >= 100 {
        format!("${}.{:02}", denomination / 100, denomination % 100)
    } else {
        format!("{}c", denomination)
    }
}
