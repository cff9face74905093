#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use pocketbook::{
    core::{FixedClock, Tracker},
    storage::json_backend::JsonFileStore,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date")
}

/// Creates a unique directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Opens a file-backed tracker whose clock is pinned to 2024-03-15.
pub fn open_tracker(data_dir: &Path) -> Tracker {
    let store = JsonFileStore::new(data_dir.to_path_buf()).expect("create json store");
    Tracker::open(Box::new(store), Arc::new(FixedClock::new(march(15)))).expect("open tracker")
}

/// Fresh tracker over an isolated data directory.
pub fn setup_tracker() -> (Tracker, PathBuf) {
    let dir = temp_dir().join("data");
    (open_tracker(&dir), dir)
}
