//! Gemini API連携（fetch）

use gloo::console;
use label_lens_common::gemini::{endpoint_url, GeminiRequest, GeminiResponse, GEMINI_MODEL};
use label_lens_common::{CompletionClient, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct GeminiClient {
    model_name: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self {
            model_name: GEMINI_MODEL.to_string(),
        }
    }
}

fn remote_error(e: JsValue) -> Error {
    Error::Remote(format!("{:?}", e))
}

/// リクエストボディ（JSON文字列）
pub fn request_body(prompt: &str) -> Result<String> {
    Ok(serde_json::to_string(&GeminiRequest::for_prompt(prompt))?)
}

/// Gemini API呼び出し（共通処理）
async fn call_gemini_api(url: &str, body: &str) -> std::result::Result<JsValue, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    JsFuture::from(resp.json()?).await
}

impl CompletionClient for GeminiClient {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        console::log!("Prompt:", prompt.to_string());

        let body = request_body(prompt)?;
        let url = endpoint_url(&self.model_name, api_key);
        let json = call_gemini_api(&url, &body).await.map_err(remote_error)?;

        let response: GeminiResponse = serde_wasm_bindgen::from_value(json)
            .map_err(|e| Error::Remote(e.to_string()))?;
        let text = response.into_text()?;

        console::log!("Response:", text.clone());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_asks_for_json() {
        let body = request_body("Extracted text: Sugar").unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "Extracted text: Sugar"
        );
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }
}
