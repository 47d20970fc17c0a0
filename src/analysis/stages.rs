//! Canonicalization of raw stage entries and full-report normalization.

use crate::analysis::conversion::conversion_rate;
use crate::core::{CanonicalStage, FunnelError, FunnelReport, FunnelResult, RawReport, RawStage, Stage};
use crate::formatting::parse_flexible;

/// Map raw stage entries onto the fixed canonical pipeline.
///
/// Known label variants fold into their canonical stage before insertion.
/// When two raw entries resolve to the same canonical slot, the later one
/// in the input wins; this last-write-wins merge is an intentional policy,
/// not an accident of implementation. Canonical slots with no matching
/// entry are zero-filled. Labels that resolve to nothing are dropped.
///
/// The output always contains exactly the four canonical stages in
/// canonical order, regardless of input order or content.
pub fn normalize_stages(raw: &[RawStage], total_leads: u64) -> Vec<Stage> {
    let mut slots: [Option<Stage>; 4] = [None, None, None, None];

    for entry in raw {
        match CanonicalStage::from_label(&entry.name) {
            Some(canonical) => {
                // Last write wins: a later duplicate overwrites the slot.
                slots[canonical.position()] = Some(materialize(entry, canonical, total_leads));
            }
            None => {
                log::debug!("dropping unrecognized stage label: {:?}", entry.name);
            }
        }
    }

    CanonicalStage::ALL
        .iter()
        .zip(slots)
        .map(|(canonical, slot)| slot.unwrap_or_else(|| Stage::empty(canonical.name())))
        .collect()
}

fn materialize(entry: &RawStage, canonical: CanonicalStage, total_leads: u64) -> Stage {
    let count = entry.count.unwrap_or(0);
    let percentage = entry.percentage.unwrap_or_else(|| {
        if total_leads > 0 {
            count as f64 / total_leads as f64 * 100.0
        } else {
            0.0
        }
    });

    Stage {
        name: canonical.name().to_string(),
        count,
        percentage,
        declined_reasons: entry.declined_reasons.clone(),
        notes: entry.notes.clone(),
    }
}

/// Normalize a raw report into a [`FunnelReport`].
///
/// Missing numerics default to 0 and missing lists to empty; a missing or
/// unparseable period date is the one hard failure. The conversion rate is
/// taken from upstream when present and derived otherwise.
pub fn normalize_report(raw: RawReport) -> FunnelResult<FunnelReport> {
    let date_from = raw
        .date_from
        .as_ref()
        .ok_or(FunnelError::MissingDate { field: "from" })
        .and_then(parse_flexible)?
        .date_naive();
    let date_to = raw
        .date_to
        .as_ref()
        .ok_or(FunnelError::MissingDate { field: "to" })
        .and_then(parse_flexible)?
        .date_naive();

    let total_leads = raw.total_leads.unwrap_or(0);
    let converted_leads = raw.converted_leads.unwrap_or(0);
    let conversion = raw
        .conversion_rate
        .unwrap_or_else(|| conversion_rate(converted_leads, total_leads));

    Ok(FunnelReport {
        date_from,
        date_to,
        total_leads,
        converted_leads,
        declined_leads: raw.declined_leads.unwrap_or(0),
        conversion_rate: conversion,
        stages: normalize_stages(&raw.stages, total_leads),
        declined_reasons: raw.declined_reasons,
        average_time_in_stages: raw.average_time_in_stages,
    })
}
