//! Keyword scan over free-text notes for known friction categories.

use im::Vector;

use crate::core::{Blocker, Note};

// Fixed per-category vocabulary. Matching is plain case-insensitive
// substring containment over the concatenated note text; no language
// understanding is attempted.
const WAITING_KEYWORDS: &[&str] = &[
    "waiting for next step",
    "awaiting next step",
    "waiting for response",
    "on hold",
];

const DOCUMENT_KEYWORDS: &[&str] = &[
    "waiting for documents",
    "awaiting documents",
    "missing document",
    "documents not provided",
    "no documents",
];

const CONTACT_KEYWORDS: &[&str] = &[
    "unreachable",
    "no answer",
    "did not pick up",
    "cannot reach",
    "not responding",
];

const ASSESSMENT_KEYWORDS: &[&str] = &[
    "pending assessment",
    "awaiting assessment",
    "awaiting inspection",
    "assessment scheduled",
];

fn keywords_for(blocker: Blocker) -> &'static [&'static str] {
    match blocker {
        Blocker::WaitingOnNextStep => WAITING_KEYWORDS,
        Blocker::MissingDocuments => DOCUMENT_KEYWORDS,
        Blocker::ContactFailure => CONTACT_KEYWORDS,
        Blocker::PendingAssessment => ASSESSMENT_KEYWORDS,
    }
}

/// Scan notes for friction categories.
///
/// All note text is concatenated case-insensitively and each category is
/// tested independently, in the fixed [`Blocker::ALL`] order. Categories
/// are not mutually exclusive; each appears at most once.
pub fn identify_blockers(notes: &[Note]) -> Vector<Blocker> {
    if notes.is_empty() {
        return Vector::new();
    }

    let haystack = notes
        .iter()
        .map(|n| n.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    Blocker::ALL
        .iter()
        .filter(|blocker| {
            keywords_for(**blocker)
                .iter()
                .any(|keyword| haystack.contains(keyword))
        })
        .copied()
        .collect()
}

/// The most recent notes, newest first, capped at `limit`.
pub fn latest_notes(notes: &[Note], limit: usize) -> Vec<Note> {
    let mut sorted = notes.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
