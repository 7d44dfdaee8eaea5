use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hanzi-cards")]
#[command(about = "中国語・英語の単語カード学習ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カード保存先JSONファイル（設定より優先）
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 現在のカードを表示
    Show {
        /// 裏面を表示
        #[arg(long)]
        flip: bool,
    },

    /// 次のカードへ
    Next,

    /// 前のカードへ
    Prev,

    /// 現在のカードを裏返して表示
    Flip,

    /// デッキをシャッフル
    Shuffle,

    /// 学習方向を切り替え（中文→English / English→中文）
    Swap,

    /// ピンイン表示を切り替え
    Pinyin,

    /// デッキ一覧を表示
    List,

    /// 指定カードへジャンプ
    Study {
        /// カードID（先頭一致可）
        #[arg(required = true)]
        id: String,
    },

    /// カードを追加
    Add {
        /// 中国語
        #[arg(long, default_value = "")]
        cn: String,

        /// 英語
        #[arg(long, default_value = "")]
        en: String,

        /// ピンイン
        #[arg(short, long, default_value = "")]
        pinyin: String,

        /// メモ
        #[arg(short, long, default_value = "")]
        notes: String,

        /// 空欄を翻訳APIで補完
        #[arg(short = 't', long)]
        auto_translate: bool,
    },

    /// カードを編集（取り出して再入力）
    Edit {
        /// カードID（先頭一致可）
        #[arg(required = true)]
        id: String,
    },

    /// カードを削除
    Delete {
        /// カードID（先頭一致可）
        #[arg(required = true)]
        id: String,
    },

    /// 現在のカードを削除
    DeleteCurrent,

    /// 全カードを削除
    Clear {
        /// 確認を省略
        #[arg(short, long)]
        yes: bool,
    },

    /// テキストを翻訳（既定: 中文→English）
    Translate {
        /// 翻訳するテキスト
        #[arg(required = true)]
        text: String,

        /// English→中文 で翻訳
        #[arg(short, long)]
        reverse: bool,
    },

    /// お問い合わせフォームを検証
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,
    },

    /// 設定を表示/編集
    Config {
        /// 翻訳APIのエンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// IDまたはID先頭からカードを特定する
pub fn resolve_card_id(
    state: &hanzi_cards_common::AppState,
    query: &str,
) -> crate::error::Result<String> {
    if state.position_of(query).is_some() {
        return Ok(query.to_string());
    }
    let mut matches = state.cards.iter().filter(|c| c.id.starts_with(query));
    match (matches.next(), matches.next()) {
        (Some(card), None) if !query.is_empty() => Ok(card.id.clone()),
        _ => Err(crate::error::CardsError::CardNotFound(query.to_string())),
    }
}
