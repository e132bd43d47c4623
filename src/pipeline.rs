//! 画像 → OCR → (編集) → LLM解析 → 結果 の一連の処理
//!
//! 状態は label_lens_common::Session が持ち、ここでは非同期処理を順番に待つだけ

use crate::acquire::acquire_image;
use crate::error::{LabelLensError, Result};
use crate::ocr::TextExtractor;
use label_lens_common::{analyze_ingredients, CompletionClient, Route, Session};
use std::path::Path;

pub struct Pipeline<E, C> {
    extractor: E,
    client: C,
    api_key: Option<String>,
    session: Session,
}

impl<E: TextExtractor, C: CompletionClient> Pipeline<E, C> {
    pub fn new(extractor: E, client: C, api_key: Option<String>) -> Self {
        Self {
            extractor,
            client,
            api_key,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// 画像を受け付けてテキスト抽出まで行う
    pub async fn load_image(&mut self, path: &Path) -> Result<&str> {
        let image = match acquire_image(path) {
            Ok(image) => image,
            Err(LabelLensError::Common(e)) => {
                self.session.reject_file(&e);
                return Err(e.into());
            }
            Err(e) => return Err(e),
        };

        let ticket = self.session.load_image(image.clone());
        match self.extractor.extract(&image).await {
            Ok(text) => self.session.extraction_succeeded(ticket, text),
            Err(e) => {
                self.session.extraction_failed(ticket, &e);
                return Err(e.into());
            }
        }

        // 空白だけの結果は Session 側で失敗扱いになる
        match self.session.error() {
            Some(_) => Err(label_lens_common::Error::Extraction("no text recognized".into()).into()),
            None => Ok(self.session.extracted_text()),
        }
    }

    pub fn edit_text(&mut self, text: String) {
        self.session.edit_text(text);
    }

    /// 抽出テキストを送信し、結果画面への遷移先を返す
    pub async fn submit(&mut self) -> Result<Route> {
        let text = self.session.begin_submit().ok_or(LabelLensError::NothingToSubmit)?;

        match analyze_ingredients(&self.client, &text, self.api_key.as_deref()).await {
            Ok(result) => {
                tracing::info!(ingredients = result.len(), "analysis finished");
                Ok(self.session.submit_succeeded(result))
            }
            Err(e) => {
                tracing::error!("Error calling Gemini API: {}", e);
                self.session.submit_failed(&e);
                Err(e.into())
            }
        }
    }
}
