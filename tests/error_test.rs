//! エラーケーステスト

use hanzi_cards::error::CardsError;

/// CardsErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CardsError::Config("テスト設定エラー".to_string()),
        CardsError::CardNotFound("abc".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CardsError = io_err.into();

    assert!(matches!(err, CardsError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CardsError = json_err.into();

    assert!(matches!(err, CardsError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = hanzi_cards_common::Error::Translate("status 500".to_string());
    let err: CardsError = common_err.into();

    assert!(matches!(err, CardsError::Common(_)));
    assert_eq!(format!("{}", err), "Translation failed: status 500");
}
