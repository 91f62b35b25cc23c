//! Value-table store: file round trips, merge-on-save, and corrupt files

use std::fs;

use qttt::{
    StateKey,
    adapters::{InMemoryRepository, JsonFileRepository},
    ports::QTableRepository,
    q_learning::{QTable, SavedQTable},
};
use tempfile::TempDir;

fn sample_table() -> QTable {
    let states = [".........", "X........", "X...O....", "XOXOXO..."];
    let mut table = QTable::new();
    for (i, state) in states.iter().enumerate() {
        let key = StateKey::parse(state).unwrap();
        for action in 0..9 {
            table.set(key.clone(), action, (i * 9 + action) as f64 / 10.0 - 1.5);
        }
    }
    table
}

#[test]
fn test_file_round_trip_keeps_every_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = JsonFileRepository::new(temp_dir.path().join("qtable.json"));
    let table = sample_table();

    repo.save(&table).unwrap();
    let loaded = repo.load();

    assert_eq!(loaded, table);
    assert_eq!(loaded.size(), 36);
    assert_eq!(loaded.get(&StateKey::empty(), 0), -1.5);
}

#[test]
fn test_saved_file_is_versioned_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("qtable.json");
    let repo = JsonFileRepository::new(&path);
    let mut table = QTable::new();
    table.set(StateKey::parse("X...O....").unwrap(), 8, 0.25);

    repo.save(&table).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let document = SavedQTable::from_json(&text).unwrap();
    assert_eq!(document.version, SavedQTable::VERSION);
    assert_eq!(document.entries.len(), 1);
    assert_eq!(document.entries[0].state.as_str(), "X...O....");
    assert_eq!(document.entries[0].action, 8);
}

#[test]
fn test_save_merges_with_stored_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = JsonFileRepository::new(temp_dir.path().join("qtable.json"));
    let shared = StateKey::empty();
    let only_stored = StateKey::parse("X........").unwrap();
    let only_memory = StateKey::parse("X...O....").unwrap();

    let mut stored = QTable::new();
    stored.set(shared.clone(), 4, 0.1);
    stored.set(only_stored.clone(), 4, 0.2);
    repo.save(&stored).unwrap();

    let mut memory = QTable::new();
    memory.set(shared.clone(), 4, 0.9);
    memory.set(only_memory.clone(), 2, 0.3);
    repo.save(&memory).unwrap();

    let merged = repo.load();
    assert_eq!(merged.size(), 3);
    assert_eq!(merged.get(&shared, 4), 0.9);
    assert_eq!(merged.get(&only_stored, 4), 0.2);
    assert_eq!(merged.get(&only_memory, 2), 0.3);
}

#[test]
fn test_corrupt_file_loads_as_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("qtable.json");
    fs::write(&path, "{ not json").unwrap();
    let repo = JsonFileRepository::new(&path);

    assert!(repo.try_load().is_err());
    assert!(repo.load().is_empty());
}

#[test]
fn test_save_over_corrupt_file_replaces_it() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("qtable.json");
    fs::write(&path, "garbage").unwrap();
    let repo = JsonFileRepository::new(&path);
    let table = sample_table();

    repo.save(&table).unwrap();

    assert_eq!(repo.try_load().unwrap(), table);
}

#[test]
fn test_invalid_entries_count_as_corruption() {
    let bad_action = r#"{"version":1,"entries":[{"state":".........","action":9,"value":1.0}]}"#;
    let bad_state = r#"{"version":1,"entries":[{"state":"XXXX","action":0,"value":1.0}]}"#;
    let future = r#"{"version":99,"entries":[]}"#;

    for contents in [bad_action, bad_state, future] {
        let repo = InMemoryRepository::with_contents(contents);
        assert!(repo.try_load().is_err(), "{contents}");
        assert!(repo.load().is_empty());
    }
}

#[test]
fn test_every_episode_save_is_a_full_write() {
    let repo = InMemoryRepository::new();
    let mut table = QTable::new();
    table.set(StateKey::empty(), 0, 0.5);

    repo.save(&table).unwrap();
    repo.save(&table).unwrap();

    assert_eq!(repo.write_count(), 2);
    let text = repo.contents().expect("written");
    assert_eq!(SavedQTable::from_json(&text).unwrap().to_table().unwrap(), table);
}
