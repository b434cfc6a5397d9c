use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Catalog, CoreError, JobId};

/// Application status of a job. Persisted with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    #[serde(rename = "Not Applied")]
    NotApplied,
    Applied,
    Rejected,
    Selected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::NotApplied,
        ApplicationStatus::Applied,
        ApplicationStatus::Rejected,
        ApplicationStatus::Selected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::NotApplied => "Not Applied",
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Selected => "Selected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current status per job. Jobs without an entry are `NotApplied`.
///
/// Entries for ids missing from the catalog are tolerated on load but never
/// surface in any view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusLedger {
    entries: BTreeMap<JobId, ApplicationStatus>,
}

/// Result of a [`StatusLedger::set_status`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    /// Requested status equals the current one; nothing was touched.
    Unchanged,
    /// The ledger was updated; the record is a frozen snapshot of the job.
    Changed(StatusChangeRecord),
}

impl StatusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_status(&self, job_id: &str) -> ApplicationStatus {
        self.entries.get(job_id).copied().unwrap_or_default()
    }

    /// Sets the status of a catalog job.
    ///
    /// Clearing overwrites the entry with `NotApplied` rather than removing it,
    /// so a change never shrinks the ledger.
    pub fn set_status(
        &mut self,
        catalog: &Catalog,
        job_id: &str,
        status: ApplicationStatus,
        at: &str,
    ) -> Result<StatusChange, CoreError> {
        let job = catalog
            .find(job_id)
            .ok_or_else(|| CoreError::UnknownJob(job_id.to_string()))?;

        if self.get_status(job_id) == status {
            return Ok(StatusChange::Unchanged);
        }

        self.entries.insert(job.id.clone(), status);
        Ok(StatusChange::Changed(StatusChangeRecord {
            job_title: job.title.clone(),
            company: job.company.clone(),
            status,
            date: at.to_string(),
        }))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JobId, ApplicationStatus)> {
        self.entries.iter().map(|(id, status)| (id, *status))
    }
}

/// One entry of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRecord {
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub date: String,
}

/// Append-only audit trail, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLog {
    records: Vec<StatusChangeRecord>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: StatusChangeRecord) {
        self.records.insert(0, record);
    }

    pub fn records(&self) -> &[StatusChangeRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&StatusChangeRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
