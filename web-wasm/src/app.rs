//! メインアプリケーションコンポーネント

use leptos::html;
use leptos::prelude::*;
use crate::components::{
    header::Header,
    study_card::StudyCard,
    add_form::AddForm,
    deck_list::DeckList,
    contact_form::ContactFormPanel,
};
use crate::storage::LocalStore;
use hanzi_cards_common::{dispatch, AppState, CardDraft, Command, Outcome, RequestGeneration};

/// 追加フォームの入力欄
///
/// 入力内容が入れ替わるたびに翻訳の世代を進め、古い翻訳結果を捨てる。
#[derive(Clone, Copy)]
pub struct CardForm {
    pub cn: RwSignal<String>,
    pub en: RwSignal<String>,
    pub pinyin: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub generation: RwSignal<RequestGeneration>,
    pub cn_ref: NodeRef<html::Input>,
}

impl CardForm {
    pub fn new() -> Self {
        Self {
            cn: RwSignal::new(String::new()),
            en: RwSignal::new(String::new()),
            pinyin: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            generation: RwSignal::new(RequestGeneration::new()),
            cn_ref: NodeRef::new(),
        }
    }

    pub fn draft(&self) -> CardDraft {
        CardDraft {
            cn: self.cn.get_untracked(),
            en: self.en.get_untracked(),
            pinyin: self.pinyin.get_untracked(),
            notes: self.notes.get_untracked(),
        }
    }

    /// 編集対象の値を入れて中国語欄にフォーカスする
    pub fn fill(&self, draft: &CardDraft) {
        self.generation.update(|g| g.invalidate());
        self.cn.set(draft.cn.clone());
        self.en.set(draft.en.clone());
        self.pinyin.set(draft.pinyin.clone());
        self.notes.set(draft.notes.clone());
        if let Some(input) = self.cn_ref.get_untracked() {
            let _ = input.focus();
        }
    }

    pub fn reset(&self) {
        self.fill(&CardDraft::default());
    }
}

/// コマンドを実行して localStorage に保存する
pub fn run_command(state: RwSignal<AppState>, command: Command) -> Outcome {
    state
        .try_update(|s| dispatch(s, &mut LocalStore, command))
        .unwrap_or_else(|| Outcome {
            render: hanzi_cards_common::Render::None,
            draft: None,
        })
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 起動時にストアから復元（初期デッキはここで保存される）
    let state = RwSignal::new(AppState::hydrate(&mut LocalStore));
    let form = CardForm::new();
    let card_ref = NodeRef::<html::Div>::new();

    gloo::console::log!(format!(
        "deck loaded: {} cards",
        state.with_untracked(|s| s.len())
    ));

    view! {
        <div class="container">
            <Header />

            <StudyCard state=state card_ref=card_ref />

            <AddForm state=state form=form />

            <DeckList state=state form=form card_ref=card_ref />

            <ContactFormPanel />
        </div>
    }
}
