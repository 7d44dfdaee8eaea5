//! ブラウザ上での localStorage アダプタのテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行する。

#![cfg(target_arch = "wasm32")]

use hanzi_cards_common::{dispatch, AppState, Command, KeyValueStore, CARDS_KEY, SETTINGS_KEY};
use hanzi_cards_wasm::storage::LocalStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear(store: &mut LocalStore) {
    store.remove(CARDS_KEY);
    store.remove(SETTINGS_KEY);
}

#[wasm_bindgen_test]
fn local_store_set_get_remove() {
    let mut store = LocalStore;
    store.set("hanzi_cards_test", "值").unwrap();
    assert_eq!(store.get("hanzi_cards_test").as_deref(), Some("值"));

    store.remove("hanzi_cards_test");
    assert_eq!(store.get("hanzi_cards_test"), None);
}

#[wasm_bindgen_test]
fn hydrate_seeds_local_storage() {
    let mut store = LocalStore;
    clear(&mut store);

    let state = AppState::hydrate(&mut store);
    assert_eq!(state.len(), 2);
    assert!(store.get(CARDS_KEY).is_some());
    assert!(store.get(SETTINGS_KEY).is_some());
}

#[wasm_bindgen_test]
fn commands_survive_reload() {
    let mut store = LocalStore;
    clear(&mut store);

    let mut state = AppState::hydrate(&mut store);
    dispatch(&mut state, &mut store, Command::SwapDirection);
    dispatch(&mut state, &mut store, Command::Next);

    let reloaded = AppState::hydrate(&mut store);
    assert_eq!(reloaded.settings, state.settings);
    assert_eq!(reloaded.cards, state.cards);

    clear(&mut store);
}
