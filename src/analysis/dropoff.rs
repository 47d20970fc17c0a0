//! Per-transition attrition across the canonical pipeline.

use im::Vector;

use crate::core::{DropOff, Stage};

/// Compute the attrition record for each consecutive stage pair.
///
/// `drop_count` is the raw difference and may go negative when the input
/// counts are inconsistent. `drop_rate` is relative to the earlier stage's
/// count and is defined as 0 for a zero-count stage; it never yields NaN.
pub fn compute_drop_offs(stages: &[Stage]) -> Vector<DropOff> {
    stages
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let drop_count = from.count as i64 - to.count as i64;
            let drop_rate = if from.count > 0 {
                drop_count as f64 / from.count as f64 * 100.0
            } else {
                0.0
            };
            DropOff {
                from: from.name.clone(),
                to: to.name.clone(),
                drop_count,
                drop_rate,
            }
        })
        .collect()
}

/// The transition losing the most leads by absolute count.
///
/// Selection is by count, not rate: a large stage with a modest
/// percentage loss outranks a small stage with total loss. Ties keep the
/// earliest pipeline position. Empty input yields `None`.
pub fn largest_drop_off(drop_offs: &Vector<DropOff>) -> Option<DropOff> {
    let mut largest: Option<&DropOff> = None;
    for candidate in drop_offs {
        match largest {
            Some(current) if candidate.drop_count <= current.drop_count => {}
            _ => largest = Some(candidate),
        }
    }
    largest.cloned()
}
