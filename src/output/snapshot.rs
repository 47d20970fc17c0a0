//! Structured snapshot export: a versioned envelope around the normalized
//! report, suitable for durable storage or transmission.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{FunnelReport, FunnelResult};

/// Envelope format version.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// The report's date range, echoed at the top of the envelope.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Portable snapshot of a funnel report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub period: Period,
    pub data: FunnelReport,
}

impl Snapshot {
    /// Wrap a report in the export envelope, stamped with the current time.
    pub fn new(report: &FunnelReport) -> Self {
        Self::at(report, Utc::now())
    }

    /// Wrap a report with an explicit export timestamp.
    pub fn at(report: &FunnelReport, exported_at: DateTime<Utc>) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            exported_at,
            period: Period {
                from: report.date_from,
                to: report.date_to,
            },
            data: report.clone(),
        }
    }

    pub fn to_json_bytes(&self) -> FunnelResult<Vec<u8>> {
        let bytes = serde_json::to_vec_pretty(self)?;
        Ok(bytes)
    }

    /// Filename for this snapshot's JSON form.
    pub fn suggested_filename(&self) -> String {
        filename_for_period(self.period.from, self.period.to, "json")
    }
}

/// Export filename for a report: dates come from the report's own period,
/// never from the export time.
pub fn export_filename(report: &FunnelReport, extension: &str) -> String {
    filename_for_period(report.date_from, report.date_to, extension)
}

fn filename_for_period(from: NaiveDate, to: NaiveDate, extension: &str) -> String {
    format!(
        "funnel-report-{}-{}.{}",
        from.format("%Y%m%d"),
        to.format("%Y%m%d"),
        extension
    )
}
