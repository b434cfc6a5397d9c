use pretty_assertions::assert_eq;
use serde_json::json;
use tracker_core::{
    update, AppState, ApplicationStatus, AuditLog, ChecklistState, Document, Effect, Msg,
    PersistedSnapshot, ProofRecord, ProofSlot, StatusLedger, TestItem,
};

fn populated() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::StatusChosen {
            job_id: "2".to_string(),
            status: ApplicationStatus::NotApplied,
            at: "t0".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::StatusChosen {
            job_id: "2".to_string(),
            status: ApplicationStatus::Selected,
            at: "t1".to_string(),
        },
    );
    let (state, _) = update(state, Msg::ChecklistItemToggled(TestItem::ApplyOpensNewTab));
    let (state, _) = update(
        state,
        Msg::ProofChanged {
            slot: ProofSlot::Deploy,
            text: "https://tracker.example.com".to_string(),
        },
    );
    state
}

#[test]
fn documents_serialize_to_storage_shapes() {
    let state = populated();

    assert_eq!(
        serde_json::to_value(state.ledger()).unwrap(),
        json!({ "2": "Selected" })
    );
    assert_eq!(
        serde_json::to_value(state.audit()).unwrap(),
        json!([{
            "jobTitle": "UI Researcher",
            "company": "Linear",
            "status": "Selected",
            "date": "t1",
        }])
    );
    assert_eq!(
        serde_json::to_value(state.checklist()).unwrap(),
        json!({ "apply-new-tab": true })
    );
    assert_eq!(
        serde_json::to_value(state.proofs()).unwrap(),
        json!({
            "lovableSlot": "",
            "githubSlot": "",
            "deploySlot": "https://tracker.example.com",
        })
    );
}

#[test]
fn restore_replaces_persisted_documents() {
    let snapshot = populated().snapshot();

    let (mut restored, effects) = update(AppState::new(), Msg::Restore(snapshot.clone()));

    assert_eq!(
        effects,
        Document::ALL.into_iter().map(Effect::Persist).collect::<Vec<_>>()
    );
    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.status_of("2"), ApplicationStatus::Selected);
    assert!(restored.consume_dirty());
}

#[test]
fn not_applied_label_parses_back() {
    let ledger: StatusLedger =
        serde_json::from_value(json!({ "1": "Not Applied", "2": "Applied" })).unwrap();
    assert_eq!(ledger.get_status("1"), ApplicationStatus::NotApplied);
    assert_eq!(ledger.get_status("2"), ApplicationStatus::Applied);
}

#[test]
fn partial_proof_document_fills_missing_slots() {
    let proofs: ProofRecord =
        serde_json::from_value(json!({ "githubSlot": "https://github.com/a/b" })).unwrap();
    assert_eq!(proofs.get(ProofSlot::Github), "https://github.com/a/b");
    assert_eq!(proofs.get(ProofSlot::Lovable), "");
}

#[test]
fn empty_snapshot_is_default() {
    let snapshot = PersistedSnapshot::default();
    assert_eq!(snapshot.ledger, StatusLedger::new());
    assert_eq!(snapshot.audit, AuditLog::new());
    assert_eq!(snapshot.checklist, ChecklistState::new());
    assert_eq!(snapshot.proofs, ProofRecord::new());
}
