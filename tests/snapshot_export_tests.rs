use chrono::{NaiveDate, TimeZone, Utc};
use leadfunnel::*;
use pretty_assertions::assert_eq;

fn report_for(from: (i32, u32, u32), to: (i32, u32, u32)) -> FunnelReport {
    FunnelReport {
        date_from: NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
        date_to: NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
        total_leads: 100,
        converted_leads: 30,
        declined_leads: 40,
        conversion_rate: 30.0,
        stages: normalize_stages(&[], 100),
        declined_reasons: Vec::new(),
        average_time_in_stages: Vec::new(),
    }
}

#[test]
fn test_filename_is_bit_exact_for_the_report_period() {
    let report = report_for((2024, 1, 1), (2024, 1, 31));
    assert_eq!(
        export_filename(&report, "json"),
        "funnel-report-20240101-20240131.json"
    );
    assert_eq!(
        export_filename(&report, "pdf"),
        "funnel-report-20240101-20240131.pdf"
    );
}

#[test]
fn test_filename_zero_pads_months_and_days() {
    let report = report_for((2024, 3, 5), (2024, 3, 9));
    assert_eq!(
        export_filename(&report, "json"),
        "funnel-report-20240305-20240309.json"
    );
}

#[test]
fn test_snapshot_envelope_carries_version_period_and_data() {
    let report = report_for((2024, 1, 1), (2024, 1, 31));
    let exported_at = Utc.with_ymd_and_hms(2024, 2, 15, 10, 0, 0).unwrap();
    let snapshot = Snapshot::at(&report, exported_at);

    assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    assert_eq!(snapshot.version, "1.0");
    assert_eq!(snapshot.period.from, report.date_from);
    assert_eq!(snapshot.period.to, report.date_to);
    assert_eq!(snapshot.data, report);
    // The filename comes from the report period, not the export time.
    assert_eq!(
        snapshot.suggested_filename(),
        "funnel-report-20240101-20240131.json"
    );
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let report = report_for((2024, 1, 1), (2024, 1, 31));
    let snapshot = Snapshot::new(&report);

    let bytes = snapshot.to_json_bytes().unwrap();
    let parsed: Snapshot = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_snapshot_json_uses_wire_field_names() {
    let report = report_for((2024, 1, 1), (2024, 1, 31));
    let bytes = Snapshot::new(&report).to_json_bytes().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert!(value.get("exportedAt").is_some());
    assert!(value["data"].get("totalLeads").is_some());
    assert!(value["data"].get("dateFrom").is_some());
}
