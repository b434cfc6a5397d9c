use crate::view_model::{AppViewModel, ChecklistItemView, JobRowView, ProofSlotView, StatusCount};
use crate::{
    filter_jobs, qualification, ApplicationStatus, AuditLog, Catalog, ChecklistState,
    FilterCriteria, ProofRecord, ProofSlot, ShipQualification, StatusLedger, TestItem,
};

/// Everything the store holds, restored in one step at session start.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedSnapshot {
    pub ledger: StatusLedger,
    pub audit: AuditLog,
    pub checklist: ChecklistState,
    pub proofs: ProofRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: Catalog,
    ledger: StatusLedger,
    audit: AuditLog,
    checklist: ChecklistState,
    proofs: ProofRecord,
    filter: FilterCriteria,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &StatusLedger {
        &self.ledger
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn checklist(&self) -> &ChecklistState {
        &self.checklist
    }

    pub fn proofs(&self) -> &ProofRecord {
        &self.proofs
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn status_of(&self, job_id: &str) -> ApplicationStatus {
        self.ledger.get_status(job_id)
    }

    /// Recomputed from both gates on every call.
    pub fn qualification(&self) -> ShipQualification {
        qualification(&self.proofs, &self.checklist)
    }

    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            ledger: self.ledger.clone(),
            audit: self.audit.clone(),
            checklist: self.checklist.clone(),
            proofs: self.proofs.clone(),
        }
    }

    pub fn view(&self) -> AppViewModel {
        let jobs = filter_jobs(&self.catalog, &self.ledger, &self.filter)
            .into_iter()
            .map(|row| JobRowView {
                job_id: row.job.id,
                title: row.job.title,
                company: row.job.company,
                location: row.job.location,
                match_score: row.job.match_score,
                remote: row.job.remote,
                status: row.status,
            })
            .collect();

        let status_counts = ApplicationStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: self
                    .catalog
                    .jobs()
                    .iter()
                    .filter(|job| self.ledger.get_status(&job.id) == status)
                    .count(),
            })
            .collect();

        let checklist = TestItem::ALL
            .into_iter()
            .map(|item| ChecklistItemView {
                item,
                label: item.label(),
                passed: self.checklist.is_passed(item),
            })
            .collect();

        let proofs = ProofSlot::ALL
            .into_iter()
            .map(|slot| {
                let text = self.proofs.get(slot).to_string();
                ProofSlotView {
                    slot,
                    label: slot.label(),
                    // Empty slots are not flagged as invalid.
                    valid: text.trim().is_empty() || self.proofs.is_slot_valid(slot),
                    text,
                }
            })
            .collect();

        AppViewModel {
            jobs,
            total_jobs: self.catalog.len(),
            filter: self.filter.clone(),
            filters_active: !self.filter.is_default(),
            status_counts,
            updates: self.audit.records().to_vec(),
            checklist,
            pass_count: self.checklist.pass_count(),
            checklist_total: self.checklist.total(),
            unlocked: self.checklist.is_unlocked(),
            proofs,
            qualification: self.qualification(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn restore(&mut self, snapshot: PersistedSnapshot) {
        self.ledger = snapshot.ledger;
        self.audit = snapshot.audit;
        self.checklist = snapshot.checklist;
        self.proofs = snapshot.proofs;
        self.mark_dirty();
    }

    pub(crate) fn parts_mut(&mut self) -> (&Catalog, &mut StatusLedger, &mut AuditLog) {
        (&self.catalog, &mut self.ledger, &mut self.audit)
    }

    pub(crate) fn checklist_mut(&mut self) -> &mut ChecklistState {
        &mut self.checklist
    }

    pub(crate) fn proofs_mut(&mut self) -> &mut ProofRecord {
        &mut self.proofs
    }

    pub(crate) fn filter_mut(&mut self) -> &mut FilterCriteria {
        &mut self.filter
    }
}
