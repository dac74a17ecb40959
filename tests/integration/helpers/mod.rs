//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use pbp_ledger::event::GameInput;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Parse a game input fixture
pub fn load_game_fixture(name: &str) -> GameInput {
    serde_json::from_str(&load_fixture(name))
        .unwrap_or_else(|e| panic!("Invalid game fixture {}: {}", name, e))
}

/// Create a temporary directory with a copy of a fixture
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path().join(name);
    fs::write(&temp_path, load_fixture(name)).expect("Failed to write temp fixture");
    (temp_dir, temp_path)
}
