use hanzi_cards::translator::HttpTranslator;
use hanzi_cards_common::{LangPair, Translator, DEFAULT_ENDPOINT};

#[tokio::test]
async fn mymemory_translate_integration() {
    if std::env::var("HANZI_CARDS_LIVE_TEST").is_err() {
        eprintln!("HANZI_CARDS_LIVE_TEST not set; skipping integration test");
        return;
    }

    let translator = HttpTranslator::new(DEFAULT_ENDPOINT);
    let text = translator
        .translate("谢谢", LangPair::ZH_TO_EN)
        .await
        .expect("request failed");

    assert!(!text.is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_is_an_error() {
    let translator = HttpTranslator::new("http://127.0.0.1:9/get");
    let result = translator.translate("你好", LangPair::ZH_TO_EN).await;
    assert!(result.is_err());
}
