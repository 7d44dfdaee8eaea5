//! ファイルストアのテスト
//!
//! JSONファイルへの永続化とフォールバック動作を検証

use hanzi_cards::store::FileStore;
use hanzi_cards_common::storage::{load_cards, load_settings, CARDS_KEY, SETTINGS_KEY};
use hanzi_cards_common::{dispatch, AppState, CardDraft, Command, Direction, KeyValueStore};
use tempfile::tempdir;

/// 存在しないファイルは空のストア
#[test]
fn test_open_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(&dir.path().join("store.json"));

    assert!(store.get(CARDS_KEY).is_none());
}

/// 書込みと再読み込み
#[test]
fn test_set_and_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("store.json");

    let mut store = FileStore::open(&path);
    store.set("k", "v").expect("書込み失敗");

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("k").as_deref(), Some("v"));
}

/// 削除
#[test]
fn test_remove_key() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");

    let mut store = FileStore::open(&path);
    store.set("k", "v").unwrap();
    store.remove("k");

    assert!(FileStore::open(&path).get("k").is_none());
}

/// 壊れたファイルは空として扱う
#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let store = FileStore::open(&path);
    assert!(store.get(CARDS_KEY).is_none());
}

/// 書込みに失敗したらエラーを返す（/dev/full は常に ENOSPC）
#[cfg(target_os = "linux")]
#[test]
fn test_set_reports_write_failure() {
    let mut store = FileStore::open(std::path::Path::new("/dev/full"));
    let result = store.set(CARDS_KEY, "[]");

    assert!(result.is_err());
}

/// 初回起動で初期デッキが保存される
#[test]
fn test_hydrate_seeds_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");

    let mut store = FileStore::open(&path);
    let state = AppState::hydrate(&mut store);
    assert_eq!(state.len(), 2);

    let reopened = FileStore::open(&path);
    assert_eq!(load_cards(&reopened, Vec::new()).len(), 2);
    assert!(reopened.get(SETTINGS_KEY).is_some());
}

/// 操作内容がプロセスをまたいで保持される
#[test]
fn test_commands_survive_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");

    {
        let mut store = FileStore::open(&path);
        let mut state = AppState::hydrate(&mut store);
        dispatch(&mut state, &mut store, Command::Add(CardDraft::new("书", "book", "shū", "")));
        dispatch(&mut state, &mut store, Command::SwapDirection);
        dispatch(&mut state, &mut store, Command::Next);
    }

    let mut store = FileStore::open(&path);
    let state = AppState::hydrate(&mut store);
    assert_eq!(state.len(), 3);
    assert_eq!(state.cards[0].cn, "书");
    assert_eq!(state.settings.direction, Direction::EnToCn);
    assert_eq!(state.settings.current_index, 1);
    assert_eq!(load_settings(&store), state.settings);
}

/// 全削除後の再起動では初期デッキに戻らない
#[test]
fn test_cleared_deck_stays_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");

    {
        let mut store = FileStore::open(&path);
        let mut state = AppState::hydrate(&mut store);
        dispatch(&mut state, &mut store, Command::ClearAll);
    }

    let mut store = FileStore::open(&path);
    assert!(AppState::hydrate(&mut store).is_empty());
}
