//! Tests for hunt lifecycle
//!
//! These tests verify:
//! - Hunt creation (directory, empty log, log link)
//! - Idempotent re-initialization
//! - Hunt removal and its tolerance of missing artifacts
//! - Audit log formatting

use std::fs;
use std::path::PathBuf;

use treasure_hunt::hunt::{AuditLog, HuntLayout};
use treasure_hunt::{Config, HuntError, HuntStore, TreasureDraft};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, HuntStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = HuntStore::new(Config::rooted_at(temp_dir.path()));
    (temp_dir, store)
}

fn draft(username: &str, value: i32) -> TreasureDraft {
    TreasureDraft {
        username: username.to_string(),
        latitude: 1.0,
        longitude: 2.0,
        clue: "somewhere".to_string(),
        value,
    }
}

fn link_path(temp: &TempDir, hunt_id: &str) -> PathBuf {
    temp.path().join(format!("logged_hunt-{}", hunt_id))
}

// =============================================================================
// Creation Tests
// =============================================================================

#[test]
fn test_hunt_does_not_exist_initially() {
    let (_temp, store) = setup_temp_store();
    assert!(!store.hunt_exists("pirate"));
}

#[test]
fn test_ensure_creates_dir_and_empty_log() {
    let (temp, store) = setup_temp_store();

    let created = store.ensure_hunt_dir("pirate").unwrap();

    assert!(created);
    assert!(store.hunt_exists("pirate"));
    let log = temp.path().join("pirate").join("logged_hunt");
    assert_eq!(fs::read(&log).unwrap().len(), 0);
    assert!(!temp.path().join("pirate").join("treasures.dat").exists());
}

#[cfg(unix)]
#[test]
fn test_ensure_creates_log_link() {
    let (temp, store) = setup_temp_store();
    store.ensure_hunt_dir("pirate").unwrap();

    let link = link_path(&temp, "pirate");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), PathBuf::from("pirate/logged_hunt"));
    // Resolves to the real log
    assert!(fs::metadata(&link).unwrap().is_file());
}

#[test]
fn test_ensure_is_idempotent() {
    let (_temp, store) = setup_temp_store();

    assert!(store.ensure_hunt_dir("pirate").unwrap());
    store.log_operation("pirate", "Listed all treasures");
    assert!(!store.ensure_hunt_dir("pirate").unwrap());

    // Existing log left alone
    let entries = store.audit_log("pirate").unwrap().entries().unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_existing_dir_without_log_is_accepted() {
    let (temp, store) = setup_temp_store();
    fs::create_dir(temp.path().join("bare")).unwrap();

    assert!(store.hunt_exists("bare"));
    assert!(!store.ensure_hunt_dir("bare").unwrap());
    assert!(!temp.path().join("bare").join("logged_hunt").exists());
}

#[test]
fn test_ensure_fails_when_parent_missing() {
    let temp = TempDir::new().unwrap();
    let store = HuntStore::new(Config::rooted_at(temp.path().join("missing")));

    let err = store.ensure_hunt_dir("pirate").unwrap_err();
    assert!(matches!(err, HuntError::HuntDirCreate { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_invalid_hunt_id_rejected() {
    let (_temp, store) = setup_temp_store();
    let err = store.ensure_hunt_dir("../outside").unwrap_err();
    assert!(matches!(err, HuntError::InvalidHuntId(_)));
}

#[cfg(unix)]
#[test]
fn test_links_in_separate_directory() {
    let temp = TempDir::new().unwrap();
    let hunts = temp.path().join("hunts");
    let links = temp.path().join("links");
    fs::create_dir(&hunts).unwrap();
    fs::create_dir(&links).unwrap();
    let store = HuntStore::new(Config::builder().base_dir(&hunts).link_dir(&links).build());

    store.ensure_hunt_dir("pirate").unwrap();

    let link = links.join("logged_hunt-pirate");
    assert_eq!(fs::read_link(&link).unwrap(), hunts.join("pirate").join("logged_hunt"));
    assert!(fs::metadata(&link).unwrap().is_file());
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_hunt_clears_everything() {
    let (temp, store) = setup_temp_store();
    store.add_treasure("pirate", draft("alice", 100)).unwrap();

    store.remove_hunt("pirate").unwrap();

    assert!(!temp.path().join("pirate").exists());
    assert!(fs::symlink_metadata(link_path(&temp, "pirate")).is_err());
    assert!(!store.hunt_exists("pirate"));
    assert!(matches!(
        store.list_treasures("pirate"),
        Err(HuntError::HuntNotFound(_))
    ));
}

#[test]
fn test_remove_hunt_tolerates_missing_artifacts() {
    let (temp, store) = setup_temp_store();
    fs::create_dir(temp.path().join("bare")).unwrap();

    store.remove_hunt("bare").unwrap();
    assert!(!temp.path().join("bare").exists());
}

#[test]
fn test_remove_hunt_keeps_dir_with_extra_files() {
    let (temp, store) = setup_temp_store();
    store.add_treasure("pirate", draft("alice", 100)).unwrap();
    fs::write(temp.path().join("pirate").join("notes.txt"), b"map").unwrap();

    let err = store.remove_hunt("pirate").unwrap_err();

    assert!(matches!(err, HuntError::HuntDirRemove { .. }));
    assert!(temp.path().join("pirate").join("notes.txt").exists());
    // Known artifacts are already gone
    assert!(!temp.path().join("pirate").join("treasures.dat").exists());
    assert!(!temp.path().join("pirate").join("logged_hunt").exists());
}

#[test]
fn test_remove_missing_hunt() {
    let (_temp, store) = setup_temp_store();
    let err = store.remove_hunt("ghost").unwrap_err();
    assert_eq!(err.to_string(), "Hunt does not exist: ghost");
}

// =============================================================================
// Audit Log Tests
// =============================================================================

#[test]
fn test_operations_are_audited_in_order() {
    let (_temp, store) = setup_temp_store();
    store.add_treasure("pirate", draft("alice", 100)).unwrap();
    store.add_treasure("pirate", draft("bob", 50)).unwrap();
    store.list_treasures("pirate").unwrap();
    store.view_treasure("pirate", 2).unwrap();
    store.remove_treasure("pirate", 1).unwrap();

    let texts: Vec<String> = store
        .audit_log("pirate")
        .unwrap()
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.text)
        .collect();

    assert_eq!(
        texts,
        vec![
            "Added treasure 1 by alice",
            "Added treasure 2 by bob",
            "Listed all treasures",
            "Viewed treasure 2",
            "Removed treasure 1",
        ]
    );
}

#[test]
fn test_failed_lookups_are_not_audited() {
    let (_temp, store) = setup_temp_store();
    store.add_treasure("pirate", draft("alice", 100)).unwrap();

    assert!(store.view_treasure("pirate", 9).is_err());
    assert!(store.remove_treasure("pirate", 9).is_err());

    assert_eq!(store.audit_log("pirate").unwrap().entries().unwrap().len(), 1);
}

#[test]
fn test_audit_line_format() {
    let (temp, store) = setup_temp_store();
    store.ensure_hunt_dir("pirate").unwrap();
    store.log_operation("pirate", "Listed all treasures");

    let raw = fs::read_to_string(temp.path().join("pirate").join("logged_hunt")).unwrap();
    // [YYYY-MM-DD HH:MM:SS] text
    assert_eq!(raw.len(), "[2024-01-01 00:00:00] Listed all treasures\n".len());
    assert!(raw.starts_with('['));
    assert_eq!(&raw[20..22], "] ");
    assert!(raw.ends_with("Listed all treasures\n"));
}

#[test]
fn test_log_operation_recreates_missing_log() {
    let (temp, store) = setup_temp_store();
    fs::create_dir(temp.path().join("bare")).unwrap();

    store.log_operation("bare", "Listed all treasures");

    let log = AuditLog::new(HuntLayout::new(store.config(), "bare").log_path());
    assert_eq!(log.entries().unwrap().len(), 1);
}
