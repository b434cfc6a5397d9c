//! Tracker core: pure state machine, filtering and gate derivations.
mod catalog;
mod checklist;
mod effect;
mod error;
mod filter;
mod ledger;
mod msg;
mod proof;
mod state;
mod update;
mod view_model;

pub use catalog::{seed_jobs, Catalog, JobId, JobPosting};
pub use checklist::{ChecklistState, TestItem};
pub use effect::{Document, Effect, NOTIFICATION_TTL};
pub use error::CoreError;
pub use filter::{filter_jobs, FilterCriteria, JobRow, StatusFilter};
pub use ledger::{ApplicationStatus, AuditLog, StatusChange, StatusChangeRecord, StatusLedger};
pub use msg::Msg;
pub use proof::{is_valid_url, qualification, ProofRecord, ProofSlot, ShipQualification};
pub use state::{AppState, PersistedSnapshot};
pub use update::update;
pub use view_model::{AppViewModel, ChecklistItemView, JobRowView, ProofSlotView, StatusCount};
