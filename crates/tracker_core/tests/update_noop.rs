use tracker_core::{update, AppState, ApplicationStatus, Msg};

#[test]
fn default_remote_filter_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::RemoteOnlyChanged(false));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn choosing_current_status_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::StatusChosen {
            job_id: "5".to_string(),
            status: ApplicationStatus::NotApplied,
            at: "2026-10-16T12:00:00Z".to_string(),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
