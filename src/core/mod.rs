pub mod raw;
pub mod types;

use chrono::{DateTime, NaiveDate, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

pub use raw::{RawDate, RawReport, RawStage};
pub use types::{Blocker, CanonicalStage, FunnelError, FunnelResult};

/// One step of the lead pipeline in a normalized report.
///
/// `percentage` is this stage's share of the report's `total_leads`, not a
/// share of the previous stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub name: String,
    pub count: u64,
    pub percentage: f64,
    pub declined_reasons: Vec<ReasonCount>,
    pub notes: Vec<Note>,
}

impl Stage {
    /// A zero-filled stage for a canonical slot absent from the input.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            percentage: 0.0,
            declined_reasons: Vec::new(),
            notes: Vec::new(),
        }
    }
}

/// A decline reason with its occurrence count and share.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonCount {
    pub reason: String,
    pub count: u64,
    pub percentage: f64,
}

/// A free-text note recorded against a lead. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub text: String,
    pub date: DateTime<Utc>,
    pub author: String,
}

/// Average dwell time for one stage, in days.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDwell {
    pub stage: String,
    pub days: f64,
}

/// Attrition between two consecutive pipeline stages.
///
/// Derived, never persisted. `drop_count` may be negative when the raw
/// counts are inconsistent (a later stage larger than an earlier one).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropOff {
    pub from: String,
    pub to: String,
    pub drop_count: i64,
    pub drop_rate: f64,
}

/// A fully normalized funnel report: canonical stages in fixed order,
/// defaults applied, conversion rate resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelReport {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub total_leads: u64,
    pub converted_leads: u64,
    pub declined_leads: u64,
    pub conversion_rate: f64,
    pub stages: Vec<Stage>,
    pub declined_reasons: Vec<ReasonCount>,
    pub average_time_in_stages: Vec<StageDwell>,
}

/// Result of the advisory percentage-sum check.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PercentageCheck {
    pub ok: bool,
    pub diff: f64,
}

/// The full derived bundle handed to presentation: the normalized report
/// plus every insight layer. Read-only downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelInsights {
    pub report: FunnelReport,
    pub drop_offs: Vector<DropOff>,
    pub largest_drop_off: Option<DropOff>,
    pub reason_share_check: PercentageCheck,
    pub blockers: Vector<Blocker>,
    pub action_items: Vector<String>,
}
