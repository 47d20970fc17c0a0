//! Advisory sanity check over percentage shares.

use crate::core::PercentageCheck;

/// Tolerance for rounding drift in upstream percentage shares.
pub const PERCENTAGE_TOLERANCE: f64 = 0.5;

/// Check that a set of percentage shares sums to ~100%.
///
/// Advisory only: a failed check is rendered as a warning and never blocks
/// report assembly or display.
pub fn validate_percentages<I>(shares: I) -> PercentageCheck
where
    I: IntoIterator<Item = f64>,
{
    let sum: f64 = shares.into_iter().sum();
    let diff = (100.0 - sum).abs();
    PercentageCheck {
        ok: diff <= PERCENTAGE_TOLERANCE,
        diff,
    }
}
