//! デッキモデル
//!
//! カード一覧とセッション設定を1つの `AppState` が所有する。
//! ここでの操作は純粋なメモリ上の変更のみで、永続化と再描画は
//! `commands` 側が行う。

use crate::storage::{self, KeyValueStore};
use crate::types::{seed_cards, Card, CardDraft, Settings};
use rand::seq::SliceRandom;
use rand::Rng;

/// 編集のために一時的に取り出したカード
///
/// 再登録されずに編集が中止された場合、元の位置へ戻す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub card: Card,
    pub position: usize,
    /// 取り出す前の `current_index`
    pub previous_index: usize,
    /// 取り出した直後の `current_index`
    pub index_after_extract: usize,
}

/// 学習カード上のキー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyKey {
    Flip,
    Next,
    Prev,
}

impl StudyKey {
    /// `KeyboardEvent.key` の値から操作を判定
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(StudyKey::Flip),
            "ArrowRight" => Some(StudyKey::Next),
            "ArrowLeft" => Some(StudyKey::Prev),
            _ => None,
        }
    }
}

/// アプリケーションの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub cards: Vec<Card>,
    pub settings: Settings,
    /// 裏面表示中か（永続化しない）
    pub flipped: bool,
    /// 編集中のカード（永続化しない）
    pub pending_edit: Option<PendingEdit>,
}

impl AppState {
    pub fn new(cards: Vec<Card>, settings: Settings) -> Self {
        Self {
            cards,
            settings,
            flipped: false,
            pending_edit: None,
        }
    }

    /// ストアから状態を復元する
    ///
    /// カードレコードが無ければ初期デッキを使い、読込後に一度書き戻す。
    pub fn hydrate<S: KeyValueStore + ?Sized>(store: &mut S) -> Self {
        let cards = storage::load_cards(store, seed_cards());
        let settings = storage::load_settings(store);
        let mut state = Self::new(cards, settings);
        state.settings.current_index = state.clamp_index(state.settings.current_index);
        state.persist(store);
        tracing::debug!(cards = state.cards.len(), "deck hydrated");
        state
    }

    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        storage::persist(store, &self.cards, &self.settings);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// `i` を `[0, len-1]` に収める。空なら0
    pub fn clamp_index(&self, i: usize) -> usize {
        match self.cards.len() {
            0 => 0,
            len => i.min(len - 1),
        }
    }

    /// 現在のカード（副作用: `current_index` を正規化する）
    pub fn current_card(&mut self) -> Option<&Card> {
        if self.cards.is_empty() {
            return None;
        }
        self.settings.current_index = self.clamp_index(self.settings.current_index);
        self.cards.get(self.settings.current_index)
    }

    /// 読み取り専用の現在カード
    pub fn peek_current(&self) -> Option<&Card> {
        self.cards.get(self.clamp_index(self.settings.current_index))
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// 次のカードへ（末尾から先頭へ循環）。空なら false
    pub fn go_next(&mut self) -> bool {
        let len = self.cards.len();
        if len == 0 {
            return false;
        }
        self.settings.current_index = (self.clamp_index(self.settings.current_index) + 1) % len;
        self.flipped = false;
        true
    }

    /// 前のカードへ（先頭から末尾へ循環）。空なら false
    pub fn go_prev(&mut self) -> bool {
        let len = self.cards.len();
        if len == 0 {
            return false;
        }
        self.settings.current_index = (self.clamp_index(self.settings.current_index) + len - 1) % len;
        self.flipped = false;
        true
    }

    /// Fisher–Yates でその場シャッフルし、先頭に戻る
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.settings.current_index = 0;
        self.flipped = false;
    }

    pub fn swap_direction(&mut self) {
        self.settings.direction = self.settings.direction.toggled();
        self.flipped = false;
    }

    pub fn toggle_pinyin(&mut self) {
        self.settings.show_pinyin = !self.settings.show_pinyin;
    }

    /// カードを先頭に追加する
    ///
    /// 前後の空白を除去したうえで中国語・英語のどちらかが空なら何もしない。
    /// 追加に成功すると保留中の編集は破棄される。
    pub fn add_card<R: Rng + ?Sized>(&mut self, draft: &CardDraft, rng: &mut R) -> bool {
        let draft = draft.trimmed();
        if !draft.is_submittable() {
            return false;
        }
        let card = Card::with_id(
            crate::types::new_card_id(rng),
            &draft.cn,
            &draft.en,
            &draft.pinyin,
            &draft.notes,
        );
        tracing::debug!(id = %card.id, "card added");
        self.cards.insert(0, card);
        self.settings.current_index = 0;
        self.flipped = false;
        self.pending_edit = None;
        true
    }

    /// IDで削除する。見つからなければ false
    pub fn delete_card(&mut self, id: &str) -> bool {
        let Some(pos) = self.position_of(id) else {
            return false;
        };
        self.cards.remove(pos);
        self.settings.current_index = self.clamp_index(self.settings.current_index);
        self.flipped = false;
        true
    }

    /// 現在のカードを削除する
    pub fn delete_current(&mut self) -> bool {
        let Some(id) = self.current_card().map(|c| c.id.clone()) else {
            return false;
        };
        self.delete_card(&id)
    }

    /// 指定カードへジャンプする
    pub fn study(&mut self, id: &str) -> bool {
        let Some(pos) = self.position_of(id) else {
            return false;
        };
        self.settings.current_index = pos;
        self.flipped = false;
        true
    }

    /// 編集のためにカードを取り出し、フォームに戻す値を返す
    ///
    /// 取り出したカードは `pending_edit` に保持され、`cancel_edit` で戻せる。
    /// 別の編集が保留中なら、先にそれを元の位置へ戻す。
    pub fn extract_for_edit(&mut self, id: &str) -> Option<CardDraft> {
        if self.pending_edit.as_ref().is_some_and(|p| p.card.id != id) {
            self.cancel_edit();
        }
        let pos = self.position_of(id)?;
        let previous_index = self.settings.current_index;
        let card = self.cards.remove(pos);
        let draft = card.to_draft();
        if self.settings.current_index >= self.cards.len() {
            self.settings.current_index = self.cards.len().saturating_sub(1);
        }
        self.pending_edit = Some(PendingEdit {
            card,
            position: pos,
            previous_index,
            index_after_extract: self.settings.current_index,
        });
        Some(draft)
    }

    /// 保留中の編集を取り消し、カードを元の位置へ戻す
    ///
    /// 編集中に移動していなければ、取り出す前に見ていたカードに戻る。
    /// 移動していれば、いま見ているカードを指したままにする。
    pub fn cancel_edit(&mut self) -> bool {
        let Some(pending) = self.pending_edit.take() else {
            return false;
        };
        let was_empty = self.cards.is_empty();
        let position = pending.position.min(self.cards.len());
        self.cards.insert(position, pending.card);

        self.settings.current_index = if self.settings.current_index == pending.index_after_extract {
            pending.previous_index
        } else if !was_empty && position <= self.settings.current_index {
            self.settings.current_index + 1
        } else {
            self.settings.current_index
        };
        self.settings.current_index = self.clamp_index(self.settings.current_index);
        true
    }

    /// 全カードを削除する（呼び出し前にユーザー確認が必要）
    pub fn clear_all(&mut self) {
        self.cards.clear();
        self.settings.current_index = 0;
        self.flipped = false;
        self.pending_edit = None;
    }
}
