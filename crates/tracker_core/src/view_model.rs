use crate::{
    ApplicationStatus, FilterCriteria, JobId, ProofSlot, ShipQualification, StatusChangeRecord,
    TestItem,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Jobs passing the current filter, in catalog order.
    pub jobs: Vec<JobRowView>,
    pub total_jobs: usize,
    pub filter: FilterCriteria,
    pub filters_active: bool,
    /// Catalog-wide count per status, independent of the filter.
    pub status_counts: Vec<StatusCount>,
    /// Audit trail, newest first.
    pub updates: Vec<StatusChangeRecord>,
    pub checklist: Vec<ChecklistItemView>,
    pub pass_count: usize,
    pub checklist_total: usize,
    pub unlocked: bool,
    pub proofs: Vec<ProofSlotView>,
    pub qualification: ShipQualification,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub match_score: u8,
    pub remote: bool,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: ApplicationStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItemView {
    pub item: TestItem,
    pub label: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofSlotView {
    pub slot: ProofSlot,
    pub label: &'static str,
    pub text: String,
    /// False only for non-empty text that fails URL validation.
    pub valid: bool,
}
