//! Gemini API クライアント（reqwest）

use label_lens_common::gemini::{endpoint_url, GeminiRequest, GeminiResponse, GEMINI_MODEL};
use label_lens_common::{CompletionClient, Error, Result};
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    model_name: String,
    client: Client,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(GEMINI_MODEL)
    }
}

impl GeminiClient {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            client: Client::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl CompletionClient for GeminiClient {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        let url = endpoint_url(&self.model_name, api_key);
        let request = GeminiRequest::for_prompt(prompt);

        tracing::debug!(model = %self.model_name, prompt_chars = prompt.len(), "sending prompt to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // URLにAPIキーが含まれるので外す
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                Error::Remote(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(Error::Remote(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            Error::Remote(format!("Failed to parse LLM response: {}", e))
        })?;

        let text = gemini_response.into_text()?;
        let preview: String = text.chars().take(500).collect();
        tracing::debug!(response = %preview, "Gemini API response");
        Ok(text)
    }
}
