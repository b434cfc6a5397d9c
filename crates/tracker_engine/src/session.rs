use tracker_core::{
    update, AppState, AppViewModel, ApplicationStatus, AuditLog, ChecklistState, Document, Effect,
    Msg, PersistedSnapshot, ProofRecord, StatusLedger,
};
use tracker_logging::{tracker_debug, tracker_error, tracker_info, tracker_warn};

use crate::{
    Clock, FileStore, JsonStore, KeyValueStore, SessionError, StoreError, TrackerConfig,
    WriteFailure,
};

/// What the presentation layer needs after a message was applied.
#[derive(Debug, Default)]
pub struct ApplyOutcome {
    /// Fresh view when anything visible changed, `None` otherwise.
    pub view: Option<AppViewModel>,
    /// Transient messages to show to the user.
    pub notifications: Vec<String>,
    /// Writes that did not reach the store. Non-fatal.
    pub write_failures: Vec<WriteFailure>,
}

/// Owns the tracker state and its store, and runs effects write-through.
pub struct Session<S: KeyValueStore> {
    state: AppState,
    store: JsonStore<S>,
    clock: Clock,
}

impl Session<FileStore> {
    /// Opens the file-backed store at `config.storage_dir` and loads from it.
    pub fn open(config: TrackerConfig) -> Result<Self, StoreError> {
        let store = FileStore::open(&config.storage_dir)?;
        tracker_info!("Opened tracker store at {:?}", store.dir());
        Ok(Self::with_store(store, config))
    }
}

impl<S: KeyValueStore> Session<S> {
    /// Loads every document from `store`; missing or corrupt ones start empty.
    pub fn with_store(store: S, config: TrackerConfig) -> Self {
        let store = JsonStore::new(store);
        let snapshot = load_snapshot(&store);
        tracker_info!(
            "Loaded tracker state: {} statuses, {} updates, {}/{} checks passed",
            snapshot.ledger.len(),
            snapshot.audit.len(),
            snapshot.checklist.pass_count(),
            snapshot.checklist.total()
        );

        // Loaded documents are already in the store; skip writing them back.
        let (mut state, _effects) = update(
            AppState::with_catalog(config.catalog),
            Msg::Restore(snapshot),
        );
        state.consume_dirty();

        Self {
            state,
            store,
            clock: config.clock,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn store(&self) -> &S {
        self.store.inner()
    }

    /// Current timestamp from the configured clock.
    pub fn now(&self) -> String {
        (self.clock)()
    }

    /// Sets a job's status, stamping the audit record with the session clock.
    pub fn set_status(
        &mut self,
        job_id: impl Into<String>,
        status: ApplicationStatus,
    ) -> Result<ApplyOutcome, SessionError> {
        let at = self.now();
        self.apply(Msg::StatusChosen {
            job_id: job_id.into(),
            status,
            at,
        })
    }

    /// Applies one message, persists what it touched and reports the result.
    ///
    /// A contract violation leaves state and store untouched and is returned
    /// as an error. Write failures are reported in the outcome only.
    pub fn apply(&mut self, msg: Msg) -> Result<ApplyOutcome, SessionError> {
        tracker_debug!("Applying {}", msg_kind(&msg));
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut outcome = ApplyOutcome::default();
        for effect in effects {
            match effect {
                Effect::Persist(document) => {
                    if let Err(error) = self.persist(document) {
                        tracker_warn!(
                            "Failed to persist {}: {}; keeping in-memory state",
                            document.storage_key(),
                            error
                        );
                        outcome.write_failures.push(WriteFailure { document, error });
                    }
                }
                Effect::Notify { message } => {
                    tracker_info!("{message}");
                    outcome.notifications.push(message);
                }
                Effect::ContractViolation(err) => {
                    tracker_error!("Rejected message: {err}");
                    return Err(SessionError::Core(err));
                }
            }
        }

        let view = self.state.view();
        if self.state.consume_dirty() {
            outcome.view = Some(view);
        }
        Ok(outcome)
    }

    fn persist(&mut self, document: Document) -> Result<(), StoreError> {
        let key = document.storage_key();
        match document {
            Document::StatusLedger => self.store.save(key, self.state.ledger()),
            Document::AuditLog => self.store.save(key, self.state.audit()),
            Document::Checklist => self.store.save(key, self.state.checklist()),
            Document::Proofs => self.store.save(key, self.state.proofs()),
        }
    }
}

fn load_snapshot<S: KeyValueStore>(store: &JsonStore<S>) -> PersistedSnapshot {
    PersistedSnapshot {
        ledger: store.load(Document::StatusLedger.storage_key(), StatusLedger::new()),
        audit: store.load(Document::AuditLog.storage_key(), AuditLog::new()),
        checklist: store.load(Document::Checklist.storage_key(), ChecklistState::new()),
        proofs: store.load(Document::Proofs.storage_key(), ProofRecord::new()),
    }
}

fn msg_kind(msg: &Msg) -> &'static str {
    match msg {
        Msg::Restore(_) => "Restore",
        Msg::StatusChosen { .. } => "StatusChosen",
        Msg::StatusFilterChanged(_) => "StatusFilterChanged",
        Msg::LocationFilterChanged(_) => "LocationFilterChanged",
        Msg::RemoteOnlyChanged(_) => "RemoteOnlyChanged",
        Msg::MinScoreChanged(_) => "MinScoreChanged",
        Msg::FiltersCleared => "FiltersCleared",
        Msg::ChecklistItemToggled(_) => "ChecklistItemToggled",
        Msg::ChecklistReset => "ChecklistReset",
        Msg::ProofChanged { .. } => "ProofChanged",
    }
}
