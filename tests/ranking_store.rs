//! Ranking file behaviour against a real filesystem

use hangman::core::Difficulty;
use hangman::ranking::{RankingEntry, RankingStore};
use std::fs;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> RankingStore {
    RankingStore::new(dir.path().join("ranking.json"))
}

#[test]
fn append_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .append(RankingEntry::new("Ana", 180, 0, Difficulty::Easy))
        .unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("\"errors\": 0"));
    assert!(text.contains("\"difficulty\": \"Easy\""));
    assert_eq!(store.load().unwrap().len(), 1);
    assert!(!store.backup_path().exists());
}

#[test]
fn append_to_blank_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "  \n").unwrap();

    store
        .append(RankingEntry::new("Bia", 90, 3, Difficulty::Hard))
        .unwrap();
    assert_eq!(
        store.load().unwrap(),
        [RankingEntry::new("Bia", 90, 3, Difficulty::Hard)]
    );
}

#[test]
fn append_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = RankingStore::new(dir.path().join("scores/nested/ranking.json"));

    store
        .append(RankingEntry::new("Ana", 1, 0, Difficulty::Medium))
        .unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn backup_holds_previous_contents() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .append(RankingEntry::new("First", 10, 0, Difficulty::Easy))
        .unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    store
        .append(RankingEntry::new("Second", 20, 0, Difficulty::Easy))
        .unwrap();
    assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), before);
    assert_eq!(store.load().unwrap().len(), 2);
}

#[test]
fn backup_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).with_backup(false);

    for score in [1, 2] {
        store
            .append(RankingEntry::new("Ana", score, 0, Difficulty::Easy))
            .unwrap();
    }
    assert!(!store.backup_path().exists());
}

#[test]
fn corrupt_file_is_never_overwritten() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "Ana;0;Easy\nBia;2;Hard\n").unwrap();

    let err = store.load().unwrap_err();
    assert!(err.is_corrupt());

    let err = store
        .append(RankingEntry::new("Caio", 100, 1, Difficulty::Easy))
        .unwrap_err();
    assert!(err.is_corrupt());
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "Ana;0;Easy\nBia;2;Hard\n"
    );
    assert!(store.top_entries(Difficulty::Easy, 5).is_err());
}

#[test]
fn quarantine_moves_aside_then_fresh_start() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "garbage").unwrap();

    let moved = store.quarantine().unwrap().unwrap();
    assert_eq!(moved, dir.path().join("ranking.json.corrupt"));
    assert_eq!(fs::read_to_string(&moved).unwrap(), "garbage");
    assert!(store.load().unwrap().is_empty());

    // A second corrupt file does not clobber the first
    fs::write(store.path(), "more garbage").unwrap();
    let moved_again = store.quarantine().unwrap().unwrap();
    assert_eq!(moved_again, dir.path().join("ranking.json.corrupt.1"));
    assert_eq!(fs::read_to_string(&moved).unwrap(), "garbage");

    assert_eq!(store.quarantine().unwrap(), None);
}

#[test]
fn legacy_field_name_is_accepted() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"[{"name": "Ana", "score": 50, "wrongAttempts": 2, "difficulty": "Medium"}]"#,
    )
    .unwrap();

    assert_eq!(
        store.load().unwrap(),
        [RankingEntry::new("Ana", 50, 2, Difficulty::Medium)]
    );
}

#[test]
fn top_five_easy_out_of_mixed_entries() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let easy = [("E1", 40), ("E2", 90), ("E3", 10), ("E4", 90), ("E5", 70), ("E6", 20), ("E7", 60)];
    let medium = [("M1", 500), ("M2", 300), ("M3", 100)];
    for (name, score) in easy {
        store
            .append(RankingEntry::new(name, score, 0, Difficulty::Easy))
            .unwrap();
    }
    for (name, score) in medium {
        store
            .append(RankingEntry::new(name, score, 1, Difficulty::Medium))
            .unwrap();
    }

    let top: Vec<(String, i64)> = store
        .top_entries(Difficulty::Easy, 5)
        .unwrap()
        .into_iter()
        .map(|e| (e.name, e.score))
        .collect();
    let expected = [("E2", 90), ("E4", 90), ("E5", 70), ("E7", 60), ("E1", 40)]
        .map(|(name, score)| (name.to_string(), score));
    assert_eq!(top, expected);

    assert_eq!(store.top_entries(Difficulty::Medium, 5).unwrap().len(), 3);
    assert!(store.top_entries(Difficulty::Hard, 5).unwrap().is_empty());
}
