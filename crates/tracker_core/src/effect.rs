use std::time::Duration;

use crate::CoreError;

/// How long the presentation layer keeps a notification on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the named document through to the store.
    Persist(Document),
    /// Show a transient, user-visible message.
    Notify { message: String },
    /// The message broke a caller contract and was not applied.
    ContractViolation(CoreError),
}

/// The independently persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    StatusLedger,
    AuditLog,
    Checklist,
    Proofs,
}

impl Document {
    pub const ALL: [Document; 4] = [
        Document::StatusLedger,
        Document::AuditLog,
        Document::Checklist,
        Document::Proofs,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            Document::StatusLedger => "jobTrackerStatus",
            Document::AuditLog => "jobStatusUpdates",
            Document::Checklist => "jobTrackerTestChecklist",
            Document::Proofs => "jobTrackerProofLinks",
        }
    }
}
