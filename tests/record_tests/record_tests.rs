//! Tests for record files
//!
//! These tests verify:
//! - Appending records to a real file
//! - Reading records back in append order
//! - Tolerance of a truncated trailing record
//! - The fixed byte layout on disk

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use treasure_hunt::record::{append_record, encode, RecordReader, Treasure, RECORD_SIZE};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("treasures.dat");
    (temp_dir, path)
}

fn treasure(id: i32, username: &str, value: i32) -> Treasure {
    Treasure {
        id,
        username: username.to_string(),
        latitude: 10.5 + id as f64,
        longitude: 20.25 - id as f64,
        clue: format!("clue number {}", id),
        value,
    }
}

fn append_all(path: &PathBuf, treasures: &[Treasure]) {
    let mut file = OpenOptions::new().append(true).create(true).open(path).unwrap();
    for t in treasures {
        append_record(&mut file, t).unwrap();
    }
}

// =============================================================================
// Append / Read Tests
// =============================================================================

#[test]
fn test_append_grows_file_by_record_size() {
    let (_temp, path) = setup_temp_file();

    append_all(&path, &[treasure(1, "alice", 100)]);
    assert_eq!(fs::metadata(&path).unwrap().len(), RECORD_SIZE as u64);

    append_all(&path, &[treasure(2, "bob", 50)]);
    assert_eq!(fs::metadata(&path).unwrap().len(), 2 * RECORD_SIZE as u64);
}

#[test]
fn test_read_back_all_fields() {
    let (_temp, path) = setup_temp_file();
    let written = vec![treasure(1, "alice", 100), treasure(2, "bob", 50), treasure(3, "carol", -7)];
    append_all(&path, &written);

    let read: Vec<Treasure> = RecordReader::open(&path)
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(read, written);
}

#[test]
fn test_open_missing_file_fails() {
    let (_temp, path) = setup_temp_file();
    assert!(RecordReader::open(&path).is_err());
}

#[test]
fn test_trailing_partial_record_is_skipped() {
    let (_temp, path) = setup_temp_file();
    append_all(&path, &[treasure(1, "alice", 100), treasure(2, "bob", 50)]);

    let mut bytes = fs::read(&path).unwrap();
    bytes.truncate(2 * RECORD_SIZE - 1);
    fs::write(&path, &bytes).unwrap();

    let read: Vec<Treasure> = RecordReader::open(&path)
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].username, "alice");
    assert_eq!(RecordReader::open(&path).unwrap().count_complete(), 1);
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_file_is_plain_concatenation() {
    let (_temp, path) = setup_temp_file();
    let first = treasure(1, "alice", 100);
    let second = treasure(2, "bob", 50);
    append_all(&path, &[first.clone(), second.clone()]);

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..RECORD_SIZE], &encode(&first)[..]);
    assert_eq!(&bytes[RECORD_SIZE..], &encode(&second)[..]);
}

#[test]
fn test_coordinates_keep_full_precision() {
    let (_temp, path) = setup_temp_file();
    let mut t = treasure(1, "alice", 100);
    t.latitude = 0.1 + 0.2;
    t.longitude = -179.99999999999997;
    append_all(&path, &[t.clone()]);

    let read = RecordReader::open(&path).unwrap().next().unwrap().unwrap();
    assert_eq!(read.latitude.to_bits(), t.latitude.to_bits());
    assert_eq!(read.longitude.to_bits(), t.longitude.to_bits());
}

#[test]
fn test_long_text_truncated_on_disk() {
    let (_temp, path) = setup_temp_file();
    let mut t = treasure(1, &"n".repeat(70), 1);
    t.clue = "c".repeat(400);
    append_all(&path, &[t]);

    let read = RecordReader::open(&path).unwrap().next().unwrap().unwrap();
    assert_eq!(read.username.len(), 49);
    assert_eq!(read.clue.len(), 255);
}
