//! Rule-based action-item generation.
//!
//! Recommendations come from an ordered rule table evaluated in sequence:
//! three drop-off location rules, a dwell-time rule over every stage, and
//! a stable-pipeline default when nothing else fired. The combined list is
//! truncated to [`MAX_ACTION_ITEMS`].

use im::Vector;

use crate::core::{CanonicalStage, DropOff, StageDwell};

/// Hard cap on the recommendation list.
pub const MAX_ACTION_ITEMS: usize = 5;

/// A stage dwelling longer than this many days draws a recommendation.
pub const DWELL_THRESHOLD_DAYS: f64 = 7.0;

struct DropOffRule {
    origin: CanonicalStage,
    produce: fn() -> Vec<String>,
}

// Ordered rule table; evaluation order is the declaration order.
const DROP_OFF_RULES: &[DropOffRule] = &[
    DropOffRule {
        origin: CanonicalStage::NewLead,
        produce: new_lead_recommendations,
    },
    DropOffRule {
        origin: CanonicalStage::ApprovedByManager,
        produce: manager_approval_recommendations,
    },
    DropOffRule {
        origin: CanonicalStage::HandedToTechnician,
        produce: technician_recommendations,
    },
];

fn new_lead_recommendations() -> Vec<String> {
    vec![
        "Tighten intake qualification so fewer unviable leads enter the pipeline".to_string(),
        "Review the most frequent decline reasons recorded for new leads".to_string(),
        "Contact new leads sooner; early responses cut drop-off at intake".to_string(),
    ]
}

fn manager_approval_recommendations() -> Vec<String> {
    vec![
        "Speed up the handoff from account manager to technician".to_string(),
        "Set an SLA for document transfer after manager approval".to_string(),
        "Review declines raised on the technician side after approval".to_string(),
    ]
}

fn technician_recommendations() -> Vec<String> {
    vec![
        "Shorten the technical review cycle".to_string(),
        "Train technical reviewers on the most frequent rejection causes".to_string(),
        "Send automated reminders when a technical review sits idle for 3 days".to_string(),
    ]
}

/// Generate up to [`MAX_ACTION_ITEMS`] recommendations from the largest
/// drop-off and the per-stage dwell times.
///
/// Dwell entries are evaluated in the order supplied. When no rule fires,
/// the result is exactly one stable-pipeline message.
pub fn generate_action_items(
    largest: Option<&DropOff>,
    dwell_times: &[StageDwell],
) -> Vector<String> {
    let mut items: Vec<String> = Vec::new();

    if let Some(drop) = largest {
        for rule in DROP_OFF_RULES {
            if drop.from == rule.origin.name() {
                items.extend((rule.produce)());
            }
        }
    }

    for dwell in dwell_times {
        if dwell.days > DWELL_THRESHOLD_DAYS {
            items.push(format!(
                "Shorten dwell time in \"{}\": leads spend {:.1} days there on average",
                dwell.stage, dwell.days
            ));
        }
    }

    if items.is_empty() {
        items.push(
            "The pipeline is stable: no critical drop-off or slow stages detected".to_string(),
        );
    }

    items.truncate(MAX_ACTION_ITEMS);
    items.into_iter().collect()
}
