//! コマンドハンドラ
//!
//! ユーザー操作を `AppState` に適用し、必要なら永続化して
//! どの範囲を再描画すべきかを返す。

use crate::deck::AppState;
use crate::storage::KeyValueStore;
use crate::types::CardDraft;
use rand::Rng;

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Flip,
    Shuffle,
    SwapDirection,
    TogglePinyin,
    Add(CardDraft),
    Study(String),
    Edit(String),
    CancelEdit,
    Delete(String),
    DeleteCurrent,
    /// 呼び出し側で確認ダイアログを通してから送ること
    ClearAll,
}

/// 再描画の範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// 変更なし
    None,
    /// 学習カードのみ
    Study,
    /// 学習カードとデッキ一覧
    All,
}

/// コマンドの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub render: Render,
    /// Edit で取り出したカードの値（フォームに戻す）
    pub draft: Option<CardDraft>,
}

impl Outcome {
    fn render(render: Render) -> Self {
        Self {
            render,
            draft: None,
        }
    }

    fn unchanged() -> Self {
        Self::render(Render::None)
    }

    pub fn changed(&self) -> bool {
        self.render != Render::None
    }
}

/// コマンドを実行する（乱数はスレッドローカルのもの）
pub fn dispatch<S>(state: &mut AppState, store: &mut S, command: Command) -> Outcome
where
    S: KeyValueStore + ?Sized,
{
    dispatch_with_rng(state, store, command, &mut rand::thread_rng())
}

/// コマンドを実行する
///
/// 状態が変わった場合のみ永続化する。Flip は表示状態だけなので保存しない。
pub fn dispatch_with_rng<S, R>(
    state: &mut AppState,
    store: &mut S,
    command: Command,
    rng: &mut R,
) -> Outcome
where
    S: KeyValueStore + ?Sized,
    R: Rng + ?Sized,
{
    tracing::debug!(?command, "dispatch");

    let outcome = match command {
        Command::Flip => {
            state.flip();
            return Outcome::render(Render::Study);
        }
        Command::Next => when(state.go_next(), Render::Study),
        Command::Prev => when(state.go_prev(), Render::Study),
        Command::Shuffle => {
            state.shuffle(rng);
            Outcome::render(Render::All)
        }
        Command::SwapDirection => {
            state.swap_direction();
            Outcome::render(Render::Study)
        }
        Command::TogglePinyin => {
            state.toggle_pinyin();
            Outcome::render(Render::Study)
        }
        Command::Add(draft) => when(state.add_card(&draft, rng), Render::All),
        Command::Study(id) => when(state.study(&id), Render::All),
        Command::Edit(id) => {
            let had_pending = state.pending_edit.is_some();
            match state.extract_for_edit(&id) {
                Some(draft) => Outcome {
                    render: Render::All,
                    draft: Some(draft),
                },
                // 対象が無くても保留中の編集は戻されている場合がある
                None => when(had_pending && state.pending_edit.is_none(), Render::All),
            }
        }
        Command::CancelEdit => when(state.cancel_edit(), Render::All),
        Command::Delete(id) => when(state.delete_card(&id), Render::All),
        Command::DeleteCurrent => when(state.delete_current(), Render::All),
        Command::ClearAll => {
            state.clear_all();
            Outcome::render(Render::All)
        }
    };

    if outcome.changed() {
        state.persist(store);
    }
    outcome
}

fn when(applied: bool, render: Render) -> Outcome {
    if applied {
        Outcome::render(render)
    } else {
        Outcome::unchanged()
    }
}
