//! Tests for item storage

use std::fs;

use chrono::Utc;
use tempfile::TempDir;

use campusq::models::{Item, Kind, Priority, Status};
use campusq::storage::{ItemStore, StoreError, STORE_FILE};

use crate::common::{pending_item, t0, t0_plus_hours};

fn new_store() -> (TempDir, ItemStore) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = ItemStore::init(dir.path(), false).unwrap();
    (dir, store)
}

// =============================================================================
// INIT / OPEN TESTS
// =============================================================================

#[test]
fn test_init_creates_queue_file() {
    let (dir, _store) = new_store();
    assert!(dir.path().join(STORE_FILE).exists());
}

#[test]
fn test_init_refuses_existing_without_force() {
    let (dir, _store) = new_store();
    let result = ItemStore::init(dir.path(), false);
    assert!(matches!(result, Err(StoreError::AlreadyInitialized(_))));
}

#[test]
fn test_init_force_resets_queue() {
    let (dir, store) = new_store();
    store.add(&pending_item("APP-1", Priority::Normal)).unwrap();

    let store = ItemStore::init(dir.path(), true).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_open_missing_queue() {
    let dir = TempDir::new().unwrap();
    let result = ItemStore::open(dir.path());
    assert!(matches!(result, Err(StoreError::NotInitialized(_))));
}

// =============================================================================
// ROUND-TRIP TESTS
// =============================================================================

#[test]
fn test_add_and_load() {
    let (_dir, store) = new_store();
    let item = Item::with_options(
        "CMP-1".to_string(),
        Kind::Complaint,
        "Leaking roof".to_string(),
        Priority::High,
        Some(t0()),
        Some("Dorm 4".to_string()),
    );
    store.add(&item).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "CMP-1");
    assert_eq!(loaded[0].kind, Kind::Complaint);
    assert_eq!(loaded[0].declared_priority, Priority::High);
    assert_eq!(loaded[0].status, Status::Pending);
    assert_eq!(loaded[0].submitted_at, Some(t0()));
    assert_eq!(loaded[0].notes.as_deref(), Some("Dorm 4"));
}

#[test]
fn test_get_is_case_insensitive() {
    let (_dir, store) = new_store();
    store.add(&pending_item("APP-1", Priority::Normal)).unwrap();

    assert!(store.get("app-1").unwrap().is_some());
    assert!(store.get("APP-1").unwrap().is_some());
    assert!(store.get("APP-9").unwrap().is_none());
}

#[test]
fn test_next_id_per_kind() {
    let (_dir, store) = new_store();
    assert_eq!(store.next_id(Kind::Application).unwrap(), "APP-1");
    store.add(&pending_item("APP-1", Priority::Normal)).unwrap();
    store.add(&pending_item("APP-7", Priority::Normal)).unwrap();

    // Counter follows the max existing suffix, per kind
    assert_eq!(store.next_id(Kind::Application).unwrap(), "APP-8");
    assert_eq!(store.next_id(Kind::Complaint).unwrap(), "CMP-1");
}

// =============================================================================
// STATUS TRANSITION TESTS
// =============================================================================

#[test]
fn test_set_status_decides_pending_item() {
    let (_dir, store) = new_store();
    store.add(&pending_item("APP-1", Priority::Normal)).unwrap();

    let decided = store.set_status("APP-1", Status::Approved, t0_plus_hours(5)).unwrap();
    assert_eq!(decided.status, Status::Approved);
    assert_eq!(decided.decided_at, Some(t0_plus_hours(5)));
    // submitted_at untouched by the transition
    assert_eq!(decided.submitted_at, Some(t0()));
}

#[test]
fn test_set_status_rejects_double_decision() {
    let (_dir, store) = new_store();
    store.add(&pending_item("APP-3", Priority::Low)).unwrap();
    store.set_status("APP-3", Status::Resolved, Utc::now()).unwrap();

    let result = store.set_status("APP-3", Status::Rejected, Utc::now());
    assert!(matches!(result, Err(StoreError::AlreadyDecided { .. })));
}

#[test]
fn test_set_status_unknown_item() {
    let (_dir, store) = new_store();
    let result = store.set_status("APP-99", Status::Approved, Utc::now());
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_set_status_refuses_pending_target() {
    let (_dir, store) = new_store();
    store.add(&pending_item("APP-1", Priority::Normal)).unwrap();

    let result = store.set_status("APP-1", Status::Pending, Utc::now());
    assert!(matches!(result, Err(StoreError::InvalidTransition { .. })));
}

// =============================================================================
// REMOVE TESTS
// =============================================================================

#[test]
fn test_remove() {
    let (_dir, store) = new_store();
    store.add(&pending_item("APP-1", Priority::Normal)).unwrap();

    assert!(store.remove("APP-1").unwrap());
    assert!(!store.remove("APP-1").unwrap());
    assert!(store.load().unwrap().is_empty());
}

// =============================================================================
// DEFENSIVE DEFAULT TESTS
// =============================================================================

#[test]
fn test_unknown_priority_reads_as_normal() {
    let (dir, store) = new_store();
    fs::write(
        dir.path().join(STORE_FILE),
        r#"[queue]
created_at = "2026-03-10T12:00:00Z"

[[item]]
id = "APP-1"
title = "hand-edited"
priority = "whenever"
status = "pending"
submitted_at = "2026-03-10T12:00:00Z"
"#,
    )
    .unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].declared_priority, Priority::Normal);
}

#[test]
fn test_medium_in_file_reads_as_normal() {
    let (dir, store) = new_store();
    fs::write(
        dir.path().join(STORE_FILE),
        r#"[queue]
created_at = "2026-03-10T12:00:00Z"

[[item]]
id = "APP-1"
title = "migrated record"
priority = "medium"
"#,
    )
    .unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].declared_priority, Priority::Normal);
}

#[test]
fn test_unknown_status_reads_as_pending() {
    let (dir, store) = new_store();
    fs::write(
        dir.path().join(STORE_FILE),
        r#"[queue]
created_at = "2026-03-10T12:00:00Z"

[[item]]
id = "APP-1"
title = "hand-edited"
status = "limbo"
"#,
    )
    .unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].status, Status::Pending);
}

#[test]
fn test_bad_timestamp_reads_as_absent() {
    let (dir, store) = new_store();
    fs::write(
        dir.path().join(STORE_FILE),
        r#"[queue]
created_at = "2026-03-10T12:00:00Z"

[[item]]
id = "APP-1"
title = "hand-edited"
submitted_at = "last tuesday"
"#,
    )
    .unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded[0].submitted_at.is_none());
}

#[test]
fn test_minimal_entry_uses_defaults() {
    let (dir, store) = new_store();
    fs::write(
        dir.path().join(STORE_FILE),
        r#"[queue]

[[item]]
id = "APP-1"
title = "bare minimum"
"#,
    )
    .unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].kind, Kind::Application);
    assert_eq!(loaded[0].declared_priority, Priority::Normal);
    assert_eq!(loaded[0].status, Status::Pending);
    assert!(loaded[0].submitted_at.is_none());
}
