use im::Vector;
use leadfunnel::*;
use pretty_assertions::assert_eq;

fn raw_payload() -> &'static str {
    r#"{
        "dateFrom": "2024-01-01",
        "dateTo": "2024-01-31",
        "totalLeads": 100,
        "convertedLeads": 30,
        "declinedLeads": 40,
        "stages": [
            { "name": "New lead", "count": 100, "percentage": 100.0 },
            { "name": "Approved by account manager", "count": 80, "percentage": 80.0 },
            {
                "name": "Handed to technician (awaiting documents)",
                "count": 50,
                "percentage": 50.0,
                "notes": [
                    {
                        "text": "Waiting for documents from the dealer",
                        "date": "2024-01-10T09:00:00Z",
                        "author": "manager"
                    },
                    {
                        "text": "Client unreachable 3 times",
                        "date": "2024-01-12T09:00:00Z",
                        "author": "manager"
                    }
                ]
            },
            { "name": "Converted", "count": 30, "percentage": 30.0 }
        ],
        "declinedReasons": [
            { "reason": "Income too low", "count": 24, "percentage": 60.0 },
            { "reason": "Vehicle too old", "count": 16, "percentage": 40.0 }
        ],
        "averageTimeInStages": [
            { "stage": "New lead", "days": 2.5 },
            { "stage": "Handed to technician", "days": 10.5 }
        ]
    }"#
}

#[test]
fn test_full_pipeline_over_a_wire_payload() {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw: RawReport = serde_json::from_str(raw_payload()).unwrap();
    let insights = analyze(raw).unwrap();

    // Normalization
    assert_eq!(insights.report.stages.len(), 4);
    assert_eq!(insights.report.stages[2].name, "Handed to technician");
    assert_eq!(insights.report.conversion_rate, 30.0);

    // Drop-off analysis
    let counts: Vec<i64> = insights.drop_offs.iter().map(|d| d.drop_count).collect();
    assert_eq!(counts, vec![20, 30, 20]);
    let largest = insights.largest_drop_off.as_ref().unwrap();
    assert_eq!(largest.from, "Approved by account manager");
    assert_eq!(largest.drop_count, 30);

    // Decline-reason shares sum to 100
    assert!(insights.reason_share_check.ok);

    // Blockers from stage notes, in fixed category order
    assert_eq!(
        insights.blockers,
        Vector::from(vec![Blocker::MissingDocuments, Blocker::ContactFailure])
    );

    // Action items: manager-stage rules plus the slow technician stage
    assert_eq!(insights.action_items.len(), 4);
    assert!(insights.action_items[0].contains("handoff"));
    assert!(insights.action_items[3].contains("Handed to technician"));
    assert!(insights.action_items[3].contains("10.5"));
}

#[test]
fn test_inconsistent_reason_shares_are_advisory_not_fatal() {
    let mut raw: RawReport = serde_json::from_str(raw_payload()).unwrap();
    raw.declined_reasons[0].percentage = 70.0;

    let insights = analyze(raw).unwrap();
    assert!(!insights.reason_share_check.ok);
    assert!((insights.reason_share_check.diff - 10.0).abs() < 1e-9);
    // The report is still fully assembled.
    assert_eq!(insights.report.stages.len(), 4);
}

#[test]
fn test_empty_raw_stage_list_still_yields_full_pipeline() {
    let raw = RawReport {
        date_from: Some(RawDate::Text("2024-01-01".into())),
        date_to: Some(RawDate::Text("2024-01-31".into())),
        ..Default::default()
    };

    let insights = analyze(raw).unwrap();
    assert_eq!(insights.report.stages.len(), 4);
    assert!(insights.report.stages.iter().all(|s| s.count == 0));
    assert_eq!(insights.drop_offs.len(), 3);
    // All-zero stages drop nothing; the stable default is the only item.
    assert_eq!(insights.action_items.len(), 1);
    assert!(insights.action_items[0].contains("pipeline is stable"));
    assert!(insights.blockers.is_empty());
    assert!(insights.reason_share_check.ok);
}

#[test]
fn test_insights_serialize_for_the_display_surface() {
    let raw: RawReport = serde_json::from_str(raw_payload()).unwrap();
    let insights = analyze(raw).unwrap();

    let json = serde_json::to_string(&insights).unwrap();
    let parsed: FunnelInsights = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, insights);
}
