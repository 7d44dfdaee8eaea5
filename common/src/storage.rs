//! 永続化アダプタ
//!
//! 文字列キー・文字列値のストア（ブラウザのlocalStorage、CLIのJSONファイル）に
//! カード一覧と設定の2レコードをJSONで読み書きする。
//! 読込失敗・欠損・破損はすべてフォールバック値で回復し、呼び出し側には返さない。

use crate::error::Result;
use crate::types::{Card, Direction, Settings};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

pub const CARDS_KEY: &str = "flashcards_v1";
pub const SETTINGS_KEY: &str = "flashcards_settings_v1";

/// 文字列キー・文字列値のストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str);
}

/// メモリ上のストア（テスト・一時セッション用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `key` の値をパースして返す。欠損・パース失敗時は `fallback`
pub fn load<T, S>(store: &S, key: &str, fallback: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return fallback;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored record is corrupt, using fallback");
            fallback
        }
    }
}

/// `key` に値を上書き保存する（ベストエフォート）
pub fn save<T, S>(store: &mut S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to serialize record");
            return;
        }
    };
    if let Err(e) = store.set(key, &json) {
        tracing::warn!(key, error = %e, "failed to write record");
    }
}

/// カード一覧を読み込む
///
/// 要素ごとに検証し、`id`/`cn`/`en` が文字列でない要素とID重複要素を捨てる。
/// レコード自体が無い・配列でない場合は `fallback` を返す。
pub fn load_cards<S>(store: &S, fallback: Vec<Card>) -> Vec<Card>
where
    S: KeyValueStore + ?Sized,
{
    let Some(Value::Array(items)) = load::<Option<Value>, S>(store, CARDS_KEY, None) else {
        return fallback;
    };

    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(items.len());
    for item in &items {
        match card_from_value(item) {
            Some(card) if seen.insert(card.id.clone()) => cards.push(card),
            Some(card) => tracing::warn!(id = %card.id, "dropping card with duplicate id"),
            None => tracing::warn!("dropping malformed card record"),
        }
    }
    cards
}

fn card_from_value(value: &Value) -> Option<Card> {
    let obj = value.as_object()?;
    let text = |key: &str| obj.get(key).and_then(Value::as_str);
    let id = text("id").filter(|id| !id.is_empty())?;
    Some(Card::with_id(
        id.to_string(),
        text("cn")?,
        text("en")?,
        text("pinyin").unwrap_or(""),
        text("notes").unwrap_or(""),
    ))
}

/// 設定を読み込む
///
/// フィールドごとに既定値へ置き換える。オブジェクトでなければ全体が既定値。
pub fn load_settings<S>(store: &S) -> Settings
where
    S: KeyValueStore + ?Sized,
{
    let defaults = Settings::default();
    let Some(Value::Object(obj)) = load::<Option<Value>, S>(store, SETTINGS_KEY, None) else {
        return defaults;
    };

    let direction = obj
        .get("direction")
        .and_then(Value::as_str)
        .and_then(Direction::parse)
        .unwrap_or(defaults.direction);
    let show_pinyin = obj
        .get("showPinyin")
        .and_then(Value::as_bool)
        .unwrap_or(defaults.show_pinyin);
    let current_index = obj
        .get("currentIndex")
        .and_then(Value::as_u64)
        .and_then(|i| usize::try_from(i).ok())
        .unwrap_or(defaults.current_index);

    Settings {
        direction,
        show_pinyin,
        current_index,
    }
}

/// カード一覧と設定の両方を書き込む
pub fn persist<S>(store: &mut S, cards: &[Card], settings: &Settings)
where
    S: KeyValueStore + ?Sized,
{
    save(store, CARDS_KEY, cards);
    save(store, SETTINGS_KEY, settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// 書込みが常に失敗するストア
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) {}
    }

    fn store_with(key: &str, raw: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(key, raw).unwrap();
        store
    }

    #[test]
    fn test_load_missing_returns_fallback() {
        let store = MemoryStore::new();
        let value: Vec<u32> = load(&store, "missing", vec![1, 2]);
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_load_corrupt_returns_fallback() {
        let store = store_with("k", "{not json");
        let value: Vec<u32> = load(&store, "k", vec![9]);
        assert_eq!(value, vec![9]);
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStore::new();
        save(&mut store, "k", &vec![1]);
        save(&mut store, "k", &vec![2, 3]);
        assert_eq!(store.get("k").as_deref(), Some("[2,3]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_failure_is_ignored() {
        let mut store = FullStore;
        save(&mut store, CARDS_KEY, &Vec::<Card>::new());
        assert!(store.get(CARDS_KEY).is_none());
    }

    #[test]
    fn test_persist_roundtrip() {
        let cards = vec![
            Card::with_id("a".into(), "山", "mountain", "shān", ""),
            Card::with_id("b".into(), "水", "water", "", "also: river"),
        ];
        let settings = Settings {
            direction: Direction::EnToCn,
            show_pinyin: false,
            current_index: 1,
        };

        let mut store = MemoryStore::new();
        persist(&mut store, &cards, &settings);

        assert_eq!(load_cards(&store, Vec::new()), cards);
        assert_eq!(load_settings(&store), settings);
    }

    #[test]
    fn test_load_cards_missing_uses_fallback() {
        let store = MemoryStore::new();
        let fallback = vec![Card::with_id("x".into(), "一", "one", "yī", "")];
        assert_eq!(load_cards(&store, fallback.clone()), fallback);
    }

    #[test]
    fn test_load_cards_not_array_uses_fallback() {
        let store = store_with(CARDS_KEY, r#"{"id":"a"}"#);
        let cards = load_cards(&store, Vec::new());
        assert!(cards.is_empty());
    }

    #[test]
    fn test_load_cards_drops_malformed_entries() {
        let raw = r#"[
            {"id": "a", "cn": "好", "en": "good"},
            {"id": "b", "cn": 5, "en": "bad"},
            {"cn": "无", "en": "no id"},
            "garbage",
            {"id": "c", "cn": "大", "en": "big", "pinyin": "dà", "notes": null}
        ]"#;
        let store = store_with(CARDS_KEY, raw);
        let cards = load_cards(&store, Vec::new());

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "a");
        assert_eq!(cards[0].pinyin, "");
        assert_eq!(cards[1].id, "c");
        assert_eq!(cards[1].pinyin, "dà");
        assert_eq!(cards[1].notes, "");
    }

    #[test]
    fn test_load_cards_drops_duplicate_ids() {
        let raw = r#"[
            {"id": "a", "cn": "一", "en": "one"},
            {"id": "a", "cn": "二", "en": "two"}
        ]"#;
        let store = store_with(CARDS_KEY, raw);
        let cards = load_cards(&store, Vec::new());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].en, "one");
    }

    #[test]
    fn test_load_settings_field_defaults() {
        let raw = r#"{"direction": "SIDEWAYS", "showPinyin": false, "currentIndex": -4}"#;
        let store = store_with(SETTINGS_KEY, raw);
        let settings = load_settings(&store);

        assert_eq!(settings.direction, Direction::CnToEn);
        assert!(!settings.show_pinyin);
        assert_eq!(settings.current_index, 0);
    }

    #[test]
    fn test_load_settings_corrupt_uses_defaults() {
        let store = store_with(SETTINGS_KEY, "[1,2,3]");
        assert_eq!(load_settings(&store), Settings::default());
    }
}
