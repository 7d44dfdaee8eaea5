//! 翻訳APIクライアント（reqwest）

use hanzi_cards_common::translate::{build_translate_url, check_status, translated_text};
use hanzi_cards_common::{plan_autofill, CardDraft, Error, FormField, LangPair, Translator};

pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, pair: LangPair) -> hanzi_cards_common::Result<String> {
        let url = build_translate_url(&self.endpoint, text, pair);
        tracing::debug!(%pair, "translate request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Translate(e.to_string()))?;
        check_status(response.status().as_u16())?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Translate(e.to_string()))?;
        Ok(translated_text(&body))
    }
}

/// 中国語・英語の片方が空なら翻訳で埋める
///
/// 両方埋まっている・両方空の場合は何もしない。
pub async fn autofill_draft<T: Translator>(
    translator: &T,
    draft: &CardDraft,
) -> hanzi_cards_common::Result<CardDraft> {
    let Some(plan) = plan_autofill(&draft.cn, &draft.en) else {
        return Ok(draft.clone());
    };
    let translated = translator.translate(&plan.text, plan.pair).await?;
    let mut filled = draft.clone();
    match plan.target {
        FormField::English => filled.en = translated,
        FormField::Chinese => filled.cn = translated,
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 固定の訳文を返す翻訳器
    struct Echo;

    impl Translator for Echo {
        async fn translate(&self, text: &str, pair: LangPair) -> hanzi_cards_common::Result<String> {
            Ok(format!("{}:{}", pair, text))
        }
    }

    struct Failing;

    impl Translator for Failing {
        async fn translate(&self, _text: &str, _pair: LangPair) -> hanzi_cards_common::Result<String> {
            Err(Error::Translate("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_autofill_fills_english() {
        let draft = CardDraft::new("猫", "", "māo", "");
        let filled = autofill_draft(&Echo, &draft).await.unwrap();
        assert_eq!(filled.en, "zh-CN|en:猫");
        assert_eq!(filled.pinyin, "māo");
    }

    #[tokio::test]
    async fn test_autofill_fills_chinese() {
        let draft = CardDraft::new("", "cat", "", "");
        let filled = autofill_draft(&Echo, &draft).await.unwrap();
        assert_eq!(filled.cn, "en|zh-CN:cat");
    }

    #[tokio::test]
    async fn test_autofill_both_filled_is_noop() {
        let draft = CardDraft::new("猫", "cat", "", "");
        assert_eq!(autofill_draft(&Failing, &draft).await.unwrap(), draft);
    }

    #[tokio::test]
    async fn test_autofill_failure_propagates() {
        let draft = CardDraft::new("猫", "", "", "");
        assert!(autofill_draft(&Failing, &draft).await.is_err());
    }
}
