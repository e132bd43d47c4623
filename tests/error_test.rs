//! エラーケーステスト
//!
//! 各種エラーの表示文言と変換を検証

use label_lens::error::LabelLensError;

/// LabelLensErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        LabelLensError::FileNotFound("label.jpg".to_string()),
        LabelLensError::NothingToSubmit,
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
    let err: LabelLensError = io_err.into();

    assert!(matches!(err, LabelLensError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: LabelLensError = json_err.into();

    assert!(matches!(err, LabelLensError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = label_lens_common::Error::Parse("expected value".to_string());
    let err: LabelLensError = common_err.into();

    assert!(matches!(err, LabelLensError::Common(_)));
    assert!(err.to_string().contains("expected value"));
}

/// 解析系のエラーは分類ごとの固定文言になる
#[test]
fn test_user_messages() {
    use label_lens_common::Error;

    let cases = [
        (Error::NotAnImage("text/plain".into()), "Please upload an image file"),
        (Error::Extraction("exit 1".into()), "Error extracting text from image"),
        (Error::MissingApiKey, "API key is not set. Please check your environment variables."),
        (Error::Config("config.json".into()), "The configuration could not be read."),
        (Error::Remote("503".into()), "An error occurred while processing the ingredients"),
        (Error::Parse("not json".into()), "An error occurred while processing the ingredients"),
    ];

    for (common, expected) in cases {
        let err: LabelLensError = common.into();
        assert_eq!(err.user_message(), expected);
    }
}

/// パイプライン外のエラーは詳細をそのまま表示
#[test]
fn test_user_message_for_file_errors() {
    let err = LabelLensError::FileNotFound("/tmp/missing.json".into());
    assert!(err.user_message().contains("/tmp/missing.json"));
}
