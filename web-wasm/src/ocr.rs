//! tesseract.js 連携（wasm-bindgen 経由）
//!
//! ワーカーは1回の抽出ごとに作って認識後に必ず終了させる

use gloo::console;
use label_lens_common::{Error, Result, UploadedImage};
use wasm_bindgen::prelude::*;

/// 英語モデル固定
pub const OCR_LANGUAGE: &str = "eng";

#[wasm_bindgen(module = "/js/ocr_bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn create_worker(lang: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn recognize(
        worker: &JsValue,
        bytes: &[u8],
        mime_type: &str,
    ) -> std::result::Result<JsValue, JsValue>;

    fn terminate(worker: &JsValue);
}

fn engine_error(e: JsValue) -> Error {
    Error::Extraction(format!("{:?}", e))
}

/// tesseract.js ワーカーのハンドル。Drop で終了させる
pub struct OcrWorker {
    handle: JsValue,
}

impl OcrWorker {
    pub async fn acquire(language: &str) -> Result<Self> {
        let handle = create_worker(language).await.map_err(engine_error)?;
        Ok(Self { handle })
    }

    pub async fn recognize(&self, image: &UploadedImage) -> Result<String> {
        let text = recognize(&self.handle, &image.bytes, &image.mime_type)
            .await
            .map_err(engine_error)?;
        text.as_string()
            .ok_or_else(|| Error::Extraction("OCR returned non-string result".into()))
    }
}

impl Drop for OcrWorker {
    fn drop(&mut self) {
        terminate(&self.handle);
        console::debug!("OCR worker terminated");
    }
}

/// 画像からテキストを抽出。空白だけの結果は失敗扱い
pub async fn extract_text(image: &UploadedImage) -> Result<String> {
    let text = {
        let worker = OcrWorker::acquire(OCR_LANGUAGE).await?;
        worker.recognize(image).await?
    };

    if text.trim().is_empty() {
        return Err(Error::Extraction("no text recognized".into()));
    }

    console::log!("Extracted Text:", text.clone());
    Ok(text)
}
