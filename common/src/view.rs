//! ビュー投影
//!
//! `AppState` から表示内容を組み立てる純粋関数群。
//! DOM や端末への反映は各フロントエンドのアダプタが行う。

use crate::deck::AppState;
use crate::types::{Card, Direction};

const TAG_CHINESE: &str = "中文";
const TAG_ENGLISH: &str = "English";
const EMPTY_MAIN: &str = "—";
const SUB_SEPARATOR: &str = " - ";

pub const EMPTY_FRONT: &str = "Add cards to start";
pub const EMPTY_BACK: &str = "...";
pub const EMPTY_DECK_MESSAGE: &str = "No cards yet. Add some above.";

/// 学習カードの表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyView {
    pub front_text: String,
    pub back_text: String,
    pub front_sub: String,
    pub back_sub: String,
    pub front_tag: String,
    pub back_tag: String,
    pub count_label: String,
    pub flipped: bool,
    pub is_empty: bool,
}

impl StudyView {
    pub fn project(state: &AppState) -> Self {
        let total = state.len();
        let Some(card) = state.peek_current() else {
            return Self {
                front_text: EMPTY_FRONT.to_string(),
                back_text: EMPTY_BACK.to_string(),
                front_sub: String::new(),
                back_sub: String::new(),
                front_tag: EMPTY_MAIN.to_string(),
                back_tag: EMPTY_MAIN.to_string(),
                count_label: count_label(0, 0),
                flipped: state.flipped,
                is_empty: true,
            };
        };

        let position = state.clamp_index(state.settings.current_index) + 1;
        let pinyin_line = if state.settings.show_pinyin && !card.pinyin.is_empty() {
            format!("Pinyin: {}", card.pinyin)
        } else {
            String::new()
        };
        let notes_line = if card.notes.is_empty() {
            String::new()
        } else {
            format!("Notes: {}", card.notes)
        };

        let (front_main, back_main, front_tag, back_tag, front_sub, back_sub) =
            match state.settings.direction {
                Direction::CnToEn => {
                    let front_sub = [pinyin_line, notes_line]
                        .into_iter()
                        .filter(|line| !line.is_empty())
                        .collect::<Vec<_>>()
                        .join(SUB_SEPARATOR);
                    (&card.cn, &card.en, TAG_CHINESE, TAG_ENGLISH, front_sub, String::new())
                }
                Direction::EnToCn => {
                    (&card.en, &card.cn, TAG_ENGLISH, TAG_CHINESE, notes_line, pinyin_line)
                }
            };

        Self {
            front_text: or_dash(front_main),
            back_text: or_dash(back_main),
            front_sub,
            back_sub,
            front_tag: front_tag.to_string(),
            back_tag: back_tag.to_string(),
            count_label: count_label(position, total),
            flipped: state.flipped,
            is_empty: false,
        }
    }

    /// いま見えている面の本文
    pub fn visible_text(&self) -> &str {
        if self.flipped {
            &self.back_text
        } else {
            &self.front_text
        }
    }
}

fn or_dash(text: &str) -> String {
    if text.is_empty() {
        EMPTY_MAIN.to_string()
    } else {
        text.to_string()
    }
}

fn count_label(position: usize, total: usize) -> String {
    format!("{} / {}", position, total)
}

/// デッキ一覧の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRow {
    pub id: String,
    pub cn: String,
    pub en: String,
    pub pinyin: String,
    pub notes: String,
    pub is_current: bool,
}

impl DeckRow {
    fn from_card(card: &Card, is_current: bool) -> Self {
        Self {
            id: card.id.clone(),
            cn: card.cn.clone(),
            en: card.en.clone(),
            pinyin: card.pinyin.clone(),
            notes: card.notes.clone(),
            is_current,
        }
    }

    /// 中国語行のマークアップ（ユーザー入力はエスケープ済み）
    pub fn chinese_line_html(&self) -> String {
        let mut html = format!(
            r#"<span class="badge">{}</span> <strong>{}</strong>"#,
            TAG_CHINESE,
            escape_html(&self.cn)
        );
        if !self.pinyin.is_empty() {
            html.push_str(&format!(r#" <span class="muted">{}</span>"#, escape_html(&self.pinyin)));
        }
        html
    }

    /// 英語行のマークアップ（ユーザー入力はエスケープ済み）
    pub fn english_line_html(&self) -> String {
        let mut html = format!(
            r#"<span class="badge">EN</span> <span>{}</span>"#,
            escape_html(&self.en)
        );
        if !self.notes.is_empty() {
            html.push_str(&format!(r#" <span class="muted">• {}</span>"#, escape_html(&self.notes)));
        }
        html
    }
}

/// デッキ一覧の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckListView {
    pub rows: Vec<DeckRow>,
}

impl DeckListView {
    pub fn project(state: &AppState) -> Self {
        let current = state.clamp_index(state.settings.current_index);
        let rows = state
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| DeckRow::from_card(card, i == current))
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 空のときに出すメッセージ
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_DECK_MESSAGE)
    }
}

/// HTML特殊文字をエスケープ
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
