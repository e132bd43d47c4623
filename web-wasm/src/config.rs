//! ビルド時設定
//!
//! APIキーはビルド時の環境変数 GEMINI_API_KEY から埋め込む

/// 未設定なら None。空文字は analyzer 側で未設定扱い
pub fn api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY")
}
