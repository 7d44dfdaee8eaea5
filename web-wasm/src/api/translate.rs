//! 翻訳API連携（fetch）

use hanzi_cards_common::translate::{build_translate_url, translated_text};
use hanzi_cards_common::{Error, LangPair, Translator, DEFAULT_ENDPOINT};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザの fetch で翻訳する
pub struct FetchTranslator {
    endpoint: String,
}

impl Default for FetchTranslator {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Translator for FetchTranslator {
    async fn translate(&self, text: &str, pair: LangPair) -> hanzi_cards_common::Result<String> {
        let url = build_translate_url(&self.endpoint, text, pair);
        let body = fetch_json(&url)
            .await
            .map_err(|e| Error::Translate(format!("{:?}", e)))?;
        Ok(translated_text(&body))
    }
}

/// GETしてJSONを返す（2xx以外はエラー）
async fn fetch_json(url: &str) -> Result<serde_json::Value, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let value: serde_json::Value = serde_wasm_bindgen::from_value(json)?;
    Ok(value)
}
