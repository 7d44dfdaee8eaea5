//! 端末向けの描画
//!
//! 共通ライブラリのビューを文字列に整形する。

use hanzi_cards_common::contact::ContactOutcome;
use hanzi_cards_common::{AppState, DeckListView, Render, StudyView};

/// 学習カードを整形
///
/// 裏返していない場合は裏面を伏せる。
pub fn format_study(view: &StudyView) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}]\n", view.count_label));

    let (sub, tag) = if view.flipped {
        (&view.back_sub, &view.back_tag)
    } else {
        (&view.front_sub, &view.front_tag)
    };
    out.push_str(&format!("{}  {}\n", tag, view.visible_text()));
    if !sub.is_empty() {
        out.push_str(&format!("    {}\n", sub));
    }

    if !view.is_empty && !view.flipped {
        out.push_str(&format!("{}  ???\n", view.back_tag));
    }
    out
}

/// デッキ一覧を整形
pub fn format_deck_list(view: &DeckListView) -> String {
    if let Some(message) = view.empty_message() {
        return format!("{}\n", message);
    }

    let mut out = String::new();
    for row in &view.rows {
        let marker = if row.is_current { "▶" } else { " " };
        let mut line1 = format!("{} 中文 {}", marker, row.cn);
        if !row.pinyin.is_empty() {
            line1.push_str(&format!(" ({})", row.pinyin));
        }
        let mut line2 = format!("  EN   {}", row.en);
        if !row.notes.is_empty() {
            line2.push_str(&format!(" • {}", row.notes));
        }
        out.push_str(&format!("{}\n{}\n  id: {}\n", line1, line2, row.id));
    }
    out
}

/// 再描画範囲に応じた表示
///
/// # Arguments
/// * `state` - コマンド適用後の状態
/// * `render` - コマンドが返した再描画範囲
///
/// # Returns
/// 学習カード（`All` ならデッキ一覧も続けて）。`None` なら空文字
pub fn format_outcome(state: &AppState, render: Render) -> String {
    match render {
        Render::None => String::new(),
        Render::Study => format_study(&StudyView::project(state)),
        Render::All => format!(
            "{}\n{}",
            format_study(&StudyView::project(state)),
            format_deck_list(&DeckListView::project(state))
        ),
    }
}

/// お問い合わせフォームの検証結果を整形
pub fn format_contact(outcome: &ContactOutcome) -> String {
    match outcome.success_message() {
        Some(message) => format!("✔ {}\n", message),
        None => outcome
            .errors()
            .iter()
            .map(|e| format!("✖ {}\n", e))
            .collect(),
    }
}
