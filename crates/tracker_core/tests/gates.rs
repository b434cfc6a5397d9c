use pretty_assertions::assert_eq;
use tracker_core::{
    update, AppState, Document, Effect, Msg, ProofSlot, ShipQualification, TestItem,
};

const VALID: [(ProofSlot, &str); 3] = [
    (ProofSlot::Lovable, "https://lovable.app/projects/job-tracker"),
    (ProofSlot::Github, "https://github.com/acme/job-tracker"),
    (ProofSlot::Deploy, "https://job-tracker.vercel.app"),
];

fn toggle(state: AppState, item: TestItem) -> AppState {
    update(state, Msg::ChecklistItemToggled(item)).0
}

fn set_proof(state: AppState, slot: ProofSlot, text: &str) -> AppState {
    update(
        state,
        Msg::ProofChanged {
            slot,
            text: text.to_string(),
        },
    )
    .0
}

fn with_all_proofs(mut state: AppState) -> AppState {
    for (slot, url) in VALID {
        state = set_proof(state, slot, url);
    }
    state
}

#[test]
fn toggle_moves_pass_count_by_one() {
    let state = toggle(AppState::new(), TestItem::StatusPersists);
    assert_eq!(state.checklist().pass_count(), 1);

    let state = toggle(state, TestItem::DigestTopTen);
    assert_eq!(state.checklist().pass_count(), 2);

    let state = toggle(state, TestItem::StatusPersists);
    assert_eq!(state.checklist().pass_count(), 1);
    assert!(!state.checklist().is_passed(TestItem::StatusPersists));
}

#[test]
fn checklist_mutations_request_persistence() {
    let (state, effects) = update(
        AppState::new(),
        Msg::ChecklistItemToggled(TestItem::NoConsoleErrors),
    );
    assert_eq!(effects, vec![Effect::Persist(Document::Checklist)]);

    let (state, effects) = update(state, Msg::ChecklistReset);
    assert_eq!(effects, vec![Effect::Persist(Document::Checklist)]);
    assert_eq!(state.checklist().pass_count(), 0);
}

#[test]
fn reset_zeroes_pass_count() {
    let mut state = AppState::new();
    for item in TestItem::ALL.into_iter().take(6) {
        state = toggle(state, item);
    }
    assert_eq!(state.checklist().pass_count(), 6);

    let (state, _) = update(state, Msg::ChecklistReset);
    assert_eq!(state.checklist().pass_count(), 0);
    assert!(!state.view().unlocked);
}

#[test]
fn tenth_item_unlocks_and_ships_with_valid_proofs() {
    let mut state = with_all_proofs(AppState::new());
    for item in TestItem::ALL.into_iter().take(9) {
        state = toggle(state, item);
    }
    assert!(!state.checklist().is_unlocked());
    assert_eq!(state.qualification(), ShipQualification::InProgress);

    let state = toggle(state, TestItem::ALL[9]);

    assert!(state.checklist().is_unlocked());
    assert_eq!(state.qualification(), ShipQualification::Shipped);
    let view = state.view();
    assert_eq!(view.pass_count, 10);
    assert_eq!(view.checklist_total, 10);
    assert!(view.unlocked);
}

#[test]
fn unlocked_checklist_without_proofs_is_not_started() {
    let mut state = AppState::new();
    for item in TestItem::ALL {
        state = toggle(state, item);
    }
    assert!(state.checklist().is_unlocked());
    assert_eq!(state.qualification(), ShipQualification::NotStarted);
}

#[test]
fn any_proof_text_means_in_progress() {
    let state = set_proof(AppState::new(), ProofSlot::Github, "not-a-url");
    assert_eq!(state.qualification(), ShipQualification::InProgress);

    let view = state.view();
    let github = view
        .proofs
        .iter()
        .find(|proof| proof.slot == ProofSlot::Github)
        .unwrap();
    assert_eq!(github.text, "not-a-url");
    assert!(!github.valid);
    let deploy = view
        .proofs
        .iter()
        .find(|proof| proof.slot == ProofSlot::Deploy)
        .unwrap();
    assert!(deploy.valid, "empty slots are not flagged");
}

#[test]
fn clearing_one_proof_downgrades_from_shipped() {
    let mut state = with_all_proofs(AppState::new());
    for item in TestItem::ALL {
        state = toggle(state, item);
    }
    assert_eq!(state.qualification(), ShipQualification::Shipped);

    let state = set_proof(state, ProofSlot::Deploy, "");
    assert_eq!(state.qualification(), ShipQualification::InProgress);
}

#[test]
fn unchecking_an_item_downgrades_from_shipped() {
    let mut state = with_all_proofs(AppState::new());
    for item in TestItem::ALL {
        state = toggle(state, item);
    }

    let state = toggle(state, TestItem::MatchScoreCorrect);

    assert_eq!(state.qualification(), ShipQualification::InProgress);
}

#[test]
fn invalid_proof_is_stored_and_persisted() {
    let (state, effects) = update(
        AppState::new(),
        Msg::ProofChanged {
            slot: ProofSlot::Lovable,
            text: "ftp://files.example.com".to_string(),
        },
    );

    assert_eq!(effects, vec![Effect::Persist(Document::Proofs)]);
    assert_eq!(state.proofs().get(ProofSlot::Lovable), "ftp://files.example.com");
    assert!(!state.proofs().is_slot_valid(ProofSlot::Lovable));
}

#[test]
fn invalid_proof_keeps_full_checklist_in_progress() {
    let state = with_all_proofs(AppState::new());
    let mut state = set_proof(state, ProofSlot::Github, "github.com/acme/job-tracker");
    for item in TestItem::ALL.into_iter().take(9) {
        state = toggle(state, item);
    }
    assert_eq!(state.qualification(), ShipQualification::InProgress);

    let state = toggle(state, TestItem::ALL[9]);

    assert!(state.checklist().is_unlocked());
    assert_eq!(state.qualification(), ShipQualification::InProgress);
}
