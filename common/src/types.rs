//! カード・設定の型定義
//!
//! 永続化されるレコード:
//! - Card: 単語カード1枚（中国語 / 英語 / ピンイン / メモ）
//! - Settings: 学習セッション設定（方向・ピンイン表示・現在位置）

use serde::{Deserialize, Serialize};

/// 単語カード
///
/// `id` は作成時に一度だけ採番され、以後変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub cn: String,
    pub en: String,
    #[serde(default)]
    pub pinyin: String,
    #[serde(default)]
    pub notes: String,
}

impl Card {
    /// 新しいIDでカードを作成
    pub fn new(cn: &str, en: &str, pinyin: &str, notes: &str) -> Self {
        Self::with_id(new_card_id(&mut rand::thread_rng()), cn, en, pinyin, notes)
    }

    pub fn with_id(id: String, cn: &str, en: &str, pinyin: &str, notes: &str) -> Self {
        Self {
            id,
            cn: cn.to_string(),
            en: en.to_string(),
            pinyin: pinyin.to_string(),
            notes: notes.to_string(),
        }
    }

    /// 入力フォームに戻すための値
    pub fn to_draft(&self) -> CardDraft {
        CardDraft {
            cn: self.cn.clone(),
            en: self.en.clone(),
            pinyin: self.pinyin.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// UUID v4 形式のカードID
///
/// 乱数源はrandから取る（WASMでもgetrandom経由で動作する）
pub fn new_card_id<R: rand::Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

/// 追加フォームの入力値（未検証）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub cn: String,
    pub en: String,
    pub pinyin: String,
    pub notes: String,
}

impl CardDraft {
    pub fn new(cn: &str, en: &str, pinyin: &str, notes: &str) -> Self {
        Self {
            cn: cn.to_string(),
            en: en.to_string(),
            pinyin: pinyin.to_string(),
            notes: notes.to_string(),
        }
    }

    /// 前後の空白を除去したコピー
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.cn.trim(),
            self.en.trim(),
            self.pinyin.trim(),
            self.notes.trim(),
        )
    }

    /// 中国語・英語の両方が空でなければ登録可能
    pub fn is_submittable(&self) -> bool {
        !self.cn.trim().is_empty() && !self.en.trim().is_empty()
    }
}

/// 学習方向（表面に出す言語）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "CN_TO_EN")]
    CnToEn,
    #[serde(rename = "EN_TO_CN")]
    EnToCn,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::CnToEn => Direction::EnToCn,
            Direction::EnToCn => Direction::CnToEn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::CnToEn => "CN_TO_EN",
            Direction::EnToCn => "EN_TO_CN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CN_TO_EN" => Some(Direction::CnToEn),
            "EN_TO_CN" => Some(Direction::EnToCn),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 学習セッション設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub direction: Direction,
    pub show_pinyin: bool,
    pub current_index: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            direction: Direction::CnToEn,
            show_pinyin: true,
            current_index: 0,
        }
    }
}

/// 初回起動時のデッキ
pub fn seed_cards() -> Vec<Card> {
    vec![
        Card::new("你好", "Hello", "nǐ hǎo", ""),
        Card::new("谢谢", "Thank you", "xiè xie", ""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_card_serialize_keys() {
        let card = Card::with_id("id-1".to_string(), "书", "book", "shū", "noun");
        let json = serde_json::to_string(&card).expect("シリアライズ失敗");
        assert_eq!(
            json,
            r#"{"id":"id-1","cn":"书","en":"book","pinyin":"shū","notes":"noun"}"#
        );
    }

    #[test]
    fn test_card_deserialize_missing_optional_fields() {
        let json = r#"{"id": "a", "cn": "水", "en": "water"}"#;
        let card: Card = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(card.pinyin, "");
        assert_eq!(card.notes, "");
    }

    #[test]
    fn test_settings_wire_format() {
        let settings = Settings {
            direction: Direction::EnToCn,
            show_pinyin: false,
            current_index: 3,
        };
        let json = serde_json::to_string(&settings).expect("シリアライズ失敗");
        assert_eq!(
            json,
            r#"{"direction":"EN_TO_CN","showPinyin":false,"currentIndex":3}"#
        );
    }

    #[test]
    fn test_direction_toggle_twice() {
        let d = Direction::CnToEn;
        assert_eq!(d.toggled(), Direction::EnToCn);
        assert_eq!(d.toggled().toggled(), d);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("CN_TO_EN"), Some(Direction::CnToEn));
        assert_eq!(Direction::parse("EN_TO_CN"), Some(Direction::EnToCn));
        assert_eq!(Direction::parse("cn_to_en"), None);
    }

    #[test]
    fn test_new_card_id_is_uuid_v4() {
        let mut rng = SmallRng::seed_from_u64(7);
        let id = new_card_id(&mut rng);
        let parsed = uuid::Uuid::parse_str(&id).expect("UUIDとして解釈できない");
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(id, new_card_id(&mut rng));
    }

    #[test]
    fn test_draft_submittable() {
        assert!(CardDraft::new("猫", "cat", "", "").is_submittable());
        assert!(!CardDraft::new("  ", "cat", "", "").is_submittable());
        assert!(!CardDraft::new("猫", "", "māo", "").is_submittable());
    }

    #[test]
    fn test_seed_cards() {
        let cards = seed_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].cn, "你好");
        assert_eq!(cards[1].pinyin, "xiè xie");
        assert_ne!(cards[0].id, cards[1].id);
    }
}
