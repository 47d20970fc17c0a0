//! Input boundary types for raw reports from the reporting backend.
//!
//! Every field is optional or defaultable: a partial upstream payload must
//! still deserialize. Missing numerics read as 0 and missing lists as
//! empty; only dates are load-bearing enough to fail on.

use serde::{Deserialize, Serialize};

use super::{Note, ReasonCount, StageDwell};

/// A date value as the reporting backend sends it: either epoch
/// milliseconds or a textual date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Millis(i64),
    Text(String),
}

impl std::fmt::Display for RawDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawDate::Millis(ms) => write!(f, "{ms}"),
            RawDate::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One stage entry as received, before canonicalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStage {
    pub name: String,
    pub count: Option<u64>,
    pub percentage: Option<f64>,
    pub declined_reasons: Vec<ReasonCount>,
    pub notes: Vec<Note>,
}

/// The raw report record as returned by the reporting backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawReport {
    pub date_from: Option<RawDate>,
    pub date_to: Option<RawDate>,
    pub total_leads: Option<u64>,
    pub converted_leads: Option<u64>,
    pub declined_leads: Option<u64>,
    /// Precomputed upstream conversion rate; trusted when present.
    pub conversion_rate: Option<f64>,
    pub stages: Vec<RawStage>,
    pub declined_reasons: Vec<ReasonCount>,
    pub average_time_in_stages: Vec<StageDwell>,
}
