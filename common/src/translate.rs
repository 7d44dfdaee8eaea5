//! 翻訳APIクライアントの共通部分
//!
//! リクエストURLの組み立て、レスポンスのパース、自動入力の判定、
//! 古いレスポンスを捨てるための世代カウンタ。
//! 実際の通信はフロントエンドごとの `Translator` 実装が行う。

use crate::error::{Error, Result};
use serde_json::Value;

/// 既定の翻訳エンドポイント（MyMemory）
pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

pub const AUTOFILL_LABEL: &str = "Auto-translate (API)";
pub const AUTOFILL_BUSY_LABEL: &str = "Translating...";
pub const TRANSLATE_FAILED_MESSAGE: &str = "Could not translate right now. Try again later.";

/// 言語ペア（`source|target`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LangPair {
    pub source: &'static str,
    pub target: &'static str,
}

impl LangPair {
    pub const ZH_TO_EN: LangPair = LangPair {
        source: "zh-CN",
        target: "en",
    };
    pub const EN_TO_ZH: LangPair = LangPair {
        source: "en",
        target: "zh-CN",
    };
}

impl std::fmt::Display for LangPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.source, self.target)
    }
}

/// 翻訳プロバイダ
///
/// ブラウザ（fetch）とCLI（reqwest）で実装が分かれる。
/// WASMのFutureはSendでないため、Send境界は付けない。
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate(&self, text: &str, pair: LangPair) -> Result<String>;
}

/// 翻訳リクエストURLを組み立てる
///
/// # Arguments
/// * `endpoint` - エンドポイントURL（クエリなし）
/// * `text` - 翻訳する文字列
/// * `pair` - 言語ペア
///
/// # Returns
/// `q` と `langpair` をパーセントエンコードしたURL
pub fn build_translate_url(endpoint: &str, text: &str, pair: LangPair) -> String {
    format!(
        "{}?q={}&langpair={}",
        endpoint,
        urlencoding::encode(text),
        urlencoding::encode(&pair.to_string())
    )
}

/// レスポンス本文から `responseData.translatedText` を取り出す
///
/// 本文がJSONでなければエラー。パスが無い・文字列でない場合は空文字。
pub fn parse_translate_response(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;
    Ok(translated_text(&value))
}

/// パース済みJSONから訳文を取り出す
pub fn translated_text(value: &Value) -> String {
    value
        .pointer("/responseData/translatedText")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// HTTPステータスの検査
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Translate(format!("request failed with status {}", status)))
    }
}

/// 自動入力の書き込み先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Chinese,
    English,
}

/// 自動入力の計画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFill {
    pub text: String,
    pub pair: LangPair,
    pub target: FormField,
}

/// 中国語・英語欄の入力状況から自動入力の内容を決める
///
/// 片方だけが埋まっている場合のみ翻訳する。両方・どちらも空なら None。
pub fn plan_autofill(cn: &str, en: &str) -> Option<AutoFill> {
    let cn = cn.trim();
    let en = en.trim();
    match (cn.is_empty(), en.is_empty()) {
        (false, true) => Some(AutoFill {
            text: cn.to_string(),
            pair: LangPair::ZH_TO_EN,
            target: FormField::English,
        }),
        (true, false) => Some(AutoFill {
            text: en.to_string(),
            pair: LangPair::EN_TO_ZH,
            target: FormField::Chinese,
        }),
        _ => None,
    }
}

/// リクエスト世代カウンタ
///
/// 発行済みチケットより新しい操作があった場合、そのレスポンスは適用しない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいリクエストのチケットを発行する（以前のチケットは無効になる）
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    /// 未完了のチケットをすべて無効にする
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}
