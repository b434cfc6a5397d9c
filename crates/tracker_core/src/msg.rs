use crate::{ApplicationStatus, JobId, PersistedSnapshot, ProofSlot, StatusFilter, TestItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Replace every persisted document; all four are written back.
    Restore(PersistedSnapshot),
    /// User picked a status for a job. "Clear" sends `NotApplied`.
    StatusChosen {
        job_id: JobId,
        status: ApplicationStatus,
        /// Timestamp recorded in the audit trail.
        at: String,
    },
    /// User changed the status dropdown.
    StatusFilterChanged(StatusFilter),
    /// User edited the location search box.
    LocationFilterChanged(String),
    /// User flipped the "remote only" switch.
    RemoteOnlyChanged(bool),
    /// User moved the minimum match score slider. Values above 100 clamp.
    MinScoreChanged(u8),
    /// User clicked "Clear filters".
    FiltersCleared,
    /// User ticked or unticked a checklist item.
    ChecklistItemToggled(TestItem),
    /// User clicked "Reset checklist".
    ChecklistReset,
    /// User edited one of the proof link inputs.
    ProofChanged { slot: ProofSlot, text: String },
}
