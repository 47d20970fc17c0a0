use leadfunnel::*;
use pretty_assertions::assert_eq;

fn raw_stage(name: &str, count: u64) -> RawStage {
    RawStage {
        name: name.to_string(),
        count: Some(count),
        ..Default::default()
    }
}

#[test]
fn test_missing_stages_are_zero_filled_in_canonical_order() {
    let stages = normalize_stages(
        &[raw_stage("New lead", 100), raw_stage("Converted", 30)],
        100,
    );

    let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "New lead",
            "Approved by account manager",
            "Handed to technician",
            "Converted",
        ]
    );

    let counts: Vec<u64> = stages.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![100, 0, 0, 30]);

    assert_eq!(stages[1].percentage, 0.0);
    assert!(stages[1].declined_reasons.is_empty());
    assert!(stages[1].notes.is_empty());
}

#[test]
fn test_awaiting_documents_label_folds_into_technician_stage() {
    let stages = normalize_stages(
        &[
            raw_stage("New lead", 100),
            raw_stage("Handed to technician (awaiting documents)", 42),
        ],
        100,
    );

    assert_eq!(stages.len(), 4);
    assert_eq!(stages[2].name, "Handed to technician");
    assert_eq!(stages[2].count, 42);
}

#[test]
fn test_input_order_does_not_matter() {
    let stages = normalize_stages(
        &[
            raw_stage("Converted", 30),
            raw_stage("Handed to technician", 50),
            raw_stage("Approved by account manager", 80),
            raw_stage("New lead", 100),
        ],
        100,
    );

    let counts: Vec<u64> = stages.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![100, 80, 50, 30]);
}

#[test]
fn test_unrecognized_labels_are_silently_dropped() {
    let stages = normalize_stages(
        &[raw_stage("New lead", 100), raw_stage("Archived", 7)],
        100,
    );

    assert_eq!(stages.len(), 4);
    assert!(stages.iter().all(|s| s.name != "Archived"));
}

#[test]
fn test_last_write_wins_on_duplicate_canonical_keys() {
    // A canonical entry followed by a legacy variant of the same stage:
    // the later entry overwrites, it is not a conflict.
    let stages = normalize_stages(
        &[
            raw_stage("Handed to technician", 50),
            raw_stage("Handed to technician (awaiting documents)", 12),
        ],
        100,
    );

    assert_eq!(stages[2].count, 12);
}

#[test]
fn test_normalize_report_defaults_missing_fields() {
    let raw = RawReport {
        date_from: Some(RawDate::Text("2024-01-01".into())),
        date_to: Some(RawDate::Text("2024-01-31".into())),
        ..Default::default()
    };

    let report = normalize_report(raw).unwrap();
    assert_eq!(report.total_leads, 0);
    assert_eq!(report.converted_leads, 0);
    assert_eq!(report.declined_leads, 0);
    assert_eq!(report.conversion_rate, 0.0);
    assert_eq!(report.stages.len(), 4);
    assert!(report.declined_reasons.is_empty());
}

#[test]
fn test_upstream_conversion_rate_is_trusted() {
    let raw = RawReport {
        date_from: Some(RawDate::Text("2024-01-01".into())),
        date_to: Some(RawDate::Text("2024-01-31".into())),
        total_leads: Some(100),
        converted_leads: Some(30),
        conversion_rate: Some(29.4),
        ..Default::default()
    };

    let report = normalize_report(raw).unwrap();
    assert_eq!(report.conversion_rate, 29.4);
}

#[test]
fn test_conversion_rate_falls_back_to_derived_value() {
    let raw = RawReport {
        date_from: Some(RawDate::Text("2024-01-01".into())),
        date_to: Some(RawDate::Text("2024-01-31".into())),
        total_leads: Some(100),
        converted_leads: Some(30),
        ..Default::default()
    };

    let report = normalize_report(raw).unwrap();
    assert_eq!(report.conversion_rate, 30.0);
}

#[test]
fn test_missing_period_date_is_a_hard_failure() {
    let raw = RawReport {
        date_to: Some(RawDate::Text("2024-01-31".into())),
        ..Default::default()
    };

    let err = normalize_report(raw).unwrap_err();
    assert!(matches!(err, FunnelError::MissingDate { field: "from" }));
}

#[test]
fn test_unparseable_period_date_is_a_hard_failure() {
    let raw = RawReport {
        date_from: Some(RawDate::Text("January 1st".into())),
        date_to: Some(RawDate::Text("2024-01-31".into())),
        ..Default::default()
    };

    let err = normalize_report(raw).unwrap_err();
    assert!(matches!(err, FunnelError::InvalidDate { .. }));
}
