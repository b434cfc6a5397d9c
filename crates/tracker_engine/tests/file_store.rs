use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tracker_core::{ApplicationStatus, Document, Msg, TestItem};
use tracker_engine::{FileStore, KeyValueStore, Session, StoreError, TrackerConfig};

#[test]
fn missing_key_reads_as_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    assert_eq!(store.get("jobTrackerStatus").unwrap(), None);
}

#[test]
fn set_then_get_returns_raw_text() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::open(temp.path()).unwrap();

    store.set("jobTrackerStatus", r#"{"5":"Rejected"}"#).unwrap();

    assert_eq!(
        store.get("jobTrackerStatus").unwrap().as_deref(),
        Some(r#"{"5":"Rejected"}"#)
    );
    assert!(temp.path().join("jobTrackerStatus.json").is_file());
}

#[test]
fn keys_with_separators_are_rejected() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::open(temp.path()).unwrap();

    let err = store.set("../outside", "{}").unwrap_err();

    assert!(matches!(err, StoreError::InvalidKey(_)));
}

#[test]
fn session_reopens_from_disk() {
    let temp = TempDir::new().unwrap();
    let config = TrackerConfig::with_storage_dir(temp.path().join("state"))
        .with_fixed_clock("2026-10-16T08:00:00Z");

    let mut session = Session::open(config.clone()).unwrap();
    session.set_status("4", ApplicationStatus::Rejected).unwrap();
    session
        .apply(Msg::ChecklistItemToggled(TestItem::StatusFilterWorks))
        .unwrap();
    drop(session);

    let reopened = Session::open(config).unwrap();

    assert_eq!(reopened.state().status_of("4"), ApplicationStatus::Rejected);
    let record = reopened.state().audit().latest().unwrap();
    assert_eq!(record.job_title, "Frontend Architect");
    assert_eq!(record.date, "2026-10-16T08:00:00Z");
    assert_eq!(reopened.state().checklist().pass_count(), 1);
}

#[test]
fn corrupt_file_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(format!("{}.json", Document::AuditLog.storage_key()));
    fs::write(&path, "[{\"jobTitle\": truncated").unwrap();

    let session = Session::open(TrackerConfig::with_storage_dir(temp.path())).unwrap();

    assert!(session.state().audit().is_empty());
}
