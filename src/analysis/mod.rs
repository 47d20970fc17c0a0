//! The funnel analytics pipeline: normalization, drop-off analysis,
//! percentage validation, blocker detection, and action-item generation.

pub mod actions;
pub mod blockers;
pub mod conversion;
pub mod dropoff;
pub mod stages;
pub mod validate;

pub use actions::{generate_action_items, DWELL_THRESHOLD_DAYS, MAX_ACTION_ITEMS};
pub use blockers::{identify_blockers, latest_notes};
pub use conversion::conversion_rate;
pub use dropoff::{compute_drop_offs, largest_drop_off};
pub use stages::{normalize_report, normalize_stages};
pub use validate::{validate_percentages, PERCENTAGE_TOLERANCE};

use crate::core::{FunnelInsights, FunnelResult, Note, PercentageCheck, RawReport};

/// Run the full analysis pipeline over a raw report.
///
/// Pure except for log output: the same raw report always produces the
/// same insight bundle. The only failure mode is a missing or invalid
/// period date; every other anomaly is absorbed into defaults or advisory
/// flags.
pub fn analyze(raw: RawReport) -> FunnelResult<FunnelInsights> {
    let report = normalize_report(raw)?;

    let drop_offs = compute_drop_offs(&report.stages);
    let largest = largest_drop_off(&drop_offs);

    // Nothing to validate on a report without decline reasons.
    let reason_share_check = if report.declined_reasons.is_empty() {
        PercentageCheck {
            ok: true,
            diff: 0.0,
        }
    } else {
        validate_percentages(report.declined_reasons.iter().map(|r| r.percentage))
    };
    if !reason_share_check.ok {
        log::warn!(
            "decline reason shares sum {:.1} away from 100%",
            reason_share_check.diff
        );
    }

    let notes: Vec<Note> = report
        .stages
        .iter()
        .flat_map(|stage| stage.notes.iter().cloned())
        .collect();
    let blockers = identify_blockers(&notes);

    // A largest drop-off that lost nothing is not actionable; the rules
    // only see transitions with a real loss.
    let actionable = largest.as_ref().filter(|d| d.drop_count > 0);
    let action_items = generate_action_items(actionable, &report.average_time_in_stages);

    Ok(FunnelInsights {
        report,
        drop_offs,
        largest_drop_off: largest,
        reason_share_check,
        blockers,
        action_items,
    })
}
