//! Common type definitions used across the engine

use serde::{Deserialize, Serialize};

/// The fixed four-step lead pipeline.
///
/// Every normalized report contains exactly these stages, in this order.
/// Raw labels that match a known legacy variant fold into the canonical
/// stage; anything else is dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalStage {
    NewLead,
    ApprovedByManager,
    HandedToTechnician,
    Converted,
}

impl CanonicalStage {
    /// Canonical pipeline order.
    pub const ALL: [CanonicalStage; 4] = [
        CanonicalStage::NewLead,
        CanonicalStage::ApprovedByManager,
        CanonicalStage::HandedToTechnician,
        CanonicalStage::Converted,
    ];

    /// Get the display name for this stage
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalStage::NewLead => "New lead",
            CanonicalStage::ApprovedByManager => "Approved by account manager",
            CanonicalStage::HandedToTechnician => "Handed to technician",
            CanonicalStage::Converted => "Converted",
        }
    }

    /// Position of this stage in the canonical order.
    pub fn position(&self) -> usize {
        match self {
            CanonicalStage::NewLead => 0,
            CanonicalStage::ApprovedByManager => 1,
            CanonicalStage::HandedToTechnician => 2,
            CanonicalStage::Converted => 3,
        }
    }

    /// Resolve a raw stage label to its canonical stage.
    ///
    /// Exact canonical names match directly; known legacy variants fold
    /// into their canonical stage. Returns `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        match label {
            "New lead" => Some(CanonicalStage::NewLead),
            "Approved by account manager" => Some(CanonicalStage::ApprovedByManager),
            "Handed to technician" => Some(CanonicalStage::HandedToTechnician),
            // Legacy label still emitted by older reporting backends.
            "Handed to technician (awaiting documents)" => {
                Some(CanonicalStage::HandedToTechnician)
            }
            "Converted" => Some(CanonicalStage::Converted),
            _ => None,
        }
    }
}

impl std::fmt::Display for CanonicalStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Friction categories inferred from free-text notes.
///
/// The declaration order is the fixed evaluation order of the keyword
/// scan; results always appear in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Blocker {
    WaitingOnNextStep,
    MissingDocuments,
    ContactFailure,
    PendingAssessment,
}

impl Blocker {
    /// Fixed evaluation order for the keyword scan.
    pub const ALL: [Blocker; 4] = [
        Blocker::WaitingOnNextStep,
        Blocker::MissingDocuments,
        Blocker::ContactFailure,
        Blocker::PendingAssessment,
    ];

    /// Get the display label for this blocker category
    pub fn label(&self) -> &'static str {
        match self {
            Blocker::WaitingOnNextStep => "Waiting on next step",
            Blocker::MissingDocuments => "Missing documents",
            Blocker::ContactFailure => "Contact failure",
            Blocker::PendingAssessment => "Pending assessment",
        }
    }
}

impl std::fmt::Display for Blocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error types for the engine
#[derive(Debug, thiserror::Error)]
pub enum FunnelError {
    #[error("not a valid date: {value}")]
    InvalidDate { value: String },

    #[error("report has no {field} date")]
    MissingDate { field: &'static str },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("a print export is already in progress")]
    ExportInProgress,

    #[error("print surface failure: {0}")]
    Print(String),
}

/// Result type alias
pub type FunnelResult<T> = Result<T, FunnelError>;
