#![allow(dead_code)]

//! Test infrastructure for lb-store integration tests

use lb_store::AccountStore;

use std::path::PathBuf;

use tempfile::TempDir;

/// Store file location inside a fresh temp directory
pub fn store_path(temp: &TempDir) -> PathBuf {
    temp.path().join("data").join("database.json")
}

/// Initialize a store in a fresh temp directory
pub async fn create_test_store() -> (TempDir, AccountStore) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = AccountStore::initialize(store_path(&temp))
        .await
        .expect("Failed to initialize store");
    (temp, store)
}
