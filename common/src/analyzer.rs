//! 原材料解析（LLM呼び出し）
//!
//! プロンプト生成 → LLM呼び出し → 厳密パースまでを行う。
//! 通信は `CompletionClient` の実装（CLI: reqwest、Web: fetch）に任せる。
//! リトライはしない。

use std::future::Future;

use crate::error::{Error, Result};
use crate::parser::parse_analysis_response;
use crate::prompts::build_analysis_prompt;
use crate::types::AnalysisResult;

/// LLMのテキスト補完エンドポイント
pub trait CompletionClient {
    /// プロンプト1本を送り、応答テキストを1本受け取る
    fn complete(&self, api_key: &str, prompt: &str) -> impl Future<Output = Result<String>>;
}

/// APIキーを検証する。未設定・空白のみは MissingApiKey
pub fn require_api_key(api_key: Option<&str>) -> Result<&str> {
    match api_key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(Error::MissingApiKey),
    }
}

/// 抽出テキストを解析して AnalysisResult を返す
///
/// APIキーがなければ通信せずにエラーを返す
pub async fn analyze_ingredients<C: CompletionClient>(
    client: &C,
    extracted_text: &str,
    api_key: Option<&str>,
) -> Result<AnalysisResult> {
    let api_key = require_api_key(api_key)?;

    let prompt = build_analysis_prompt(extracted_text);
    let response = client.complete(api_key, &prompt).await?;

    parse_analysis_response(&response)
}
