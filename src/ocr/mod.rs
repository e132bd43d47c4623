//! テキスト抽出（OCR）
//!
//! 英語モデル固定。認識ごとにワーカーを取得し、成否にかかわらず解放する

mod worker;

pub use worker::OcrWorker;

use label_lens_common::{Error, Result, UploadedImage};
use std::future::Future;

/// OCR言語（英語固定）
pub const OCR_LANGUAGE: &str = "eng";

/// 画像からテキストを取り出す
pub trait TextExtractor {
    fn extract(&self, image: &UploadedImage) -> impl Future<Output = Result<String>>;
}

/// tesseract コマンドによる抽出
#[derive(Debug, Clone)]
pub struct TesseractExtractor {
    binary: String,
}

impl TesseractExtractor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl TextExtractor for TesseractExtractor {
    async fn extract(&self, image: &UploadedImage) -> Result<String> {
        let worker = OcrWorker::acquire(&self.binary, OCR_LANGUAGE)?;
        let result = worker.recognize(image).await;
        drop(worker);

        match result {
            Ok(text) if text.trim().is_empty() => {
                Err(Error::Extraction("no text recognized".into()))
            }
            Ok(text) => {
                tracing::debug!(chars = text.len(), "text extracted");
                Ok(text)
            }
            Err(e) => {
                tracing::error!("Text extraction error: {}", e);
                Err(e)
            }
        }
    }
}
