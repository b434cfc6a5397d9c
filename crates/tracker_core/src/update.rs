use crate::{AppState, Document, Effect, FilterCriteria, Msg, StatusChange};

/// Pure update function: applies a message to state and returns any effects.
///
/// Persistence is requested through `Effect::Persist`; a message that leaves
/// persisted state untouched yields no persist effect.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Restore(snapshot) => {
            state.restore(snapshot);
            Document::ALL.into_iter().map(Effect::Persist).collect()
        }
        Msg::StatusChosen { job_id, status, at } => {
            let (catalog, ledger, audit) = state.parts_mut();
            match ledger.set_status(catalog, &job_id, status, &at) {
                Ok(StatusChange::Unchanged) => Vec::new(),
                Ok(StatusChange::Changed(record)) => {
                    audit.record(record);
                    state.mark_dirty();
                    vec![
                        Effect::Persist(Document::StatusLedger),
                        Effect::Persist(Document::AuditLog),
                        Effect::Notify {
                            message: format!("Status updated: {status}"),
                        },
                    ]
                }
                Err(err) => vec![Effect::ContractViolation(err)],
            }
        }
        Msg::StatusFilterChanged(status) => {
            set_filter(&mut state, |filter| filter.status = status);
            Vec::new()
        }
        Msg::LocationFilterChanged(location) => {
            set_filter(&mut state, |filter| filter.location = location);
            Vec::new()
        }
        Msg::RemoteOnlyChanged(remote_only) => {
            set_filter(&mut state, |filter| filter.remote_only = remote_only);
            Vec::new()
        }
        Msg::MinScoreChanged(min_score) => {
            set_filter(&mut state, |filter| filter.min_score = min_score.min(100));
            Vec::new()
        }
        Msg::FiltersCleared => {
            set_filter(&mut state, |filter| *filter = FilterCriteria::default());
            Vec::new()
        }
        Msg::ChecklistItemToggled(item) => {
            state.checklist_mut().toggle(item);
            state.mark_dirty();
            vec![Effect::Persist(Document::Checklist)]
        }
        Msg::ChecklistReset => {
            state.checklist_mut().reset();
            state.mark_dirty();
            vec![Effect::Persist(Document::Checklist)]
        }
        Msg::ProofChanged { slot, text } => {
            if state.proofs_mut().set(slot, text) {
                state.mark_dirty();
            }
            vec![Effect::Persist(Document::Proofs)]
        }
    };

    (state, effects)
}

fn set_filter(state: &mut AppState, apply: impl FnOnce(&mut FilterCriteria)) {
    let before = state.filter().clone();
    apply(state.filter_mut());
    if *state.filter() != before {
        state.mark_dirty();
    }
}
