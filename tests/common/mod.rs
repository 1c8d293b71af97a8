//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod mocks;

use acme_support::store::{SharedStore, SupportStore};
use std::path::PathBuf;

/// Directory holding the shipped JSON fixtures
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// A fresh store loaded from the shipped fixtures
pub fn fixture_store() -> SupportStore {
    let dir = data_dir();
    SupportStore::from_files(dir.join("customers.json"), dir.join("orders.json"))
        .expect("shipped fixtures load")
}

pub fn shared_fixture_store() -> SharedStore {
    fixture_store().into_shared()
}
