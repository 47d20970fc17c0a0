//! Conversion-rate fallback for reports without an upstream value.

/// Percentage of total leads that converted; 0 when there are no leads.
pub fn conversion_rate(converted: u64, total: u64) -> f64 {
    if total > 0 {
        converted as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}
