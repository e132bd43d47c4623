//! Tesseract ワーカー
//!
//! 1回の認識ごとに取得し、使い終わったら必ず解放する。
//! 作業ディレクトリは TempDir なので drop で削除され、
//! 実行中の tesseract プロセスは kill_on_drop で終了する。

use label_lens_common::{Error, Result, UploadedImage};
use std::path::PathBuf;
use std::process::Stdio;
use tempfile::TempDir;
use tokio::process::Command;

pub struct OcrWorker {
    binary: String,
    language: &'static str,
    scratch: TempDir,
}

impl OcrWorker {
    pub fn acquire(binary: &str, language: &'static str) -> Result<Self> {
        let scratch = tempfile::Builder::new()
            .prefix("label-lens-ocr-")
            .tempdir()
            .map_err(|e| Error::Extraction(format!("作業ディレクトリを作成できません: {}", e)))?;

        tracing::debug!(dir = %scratch.path().display(), language, "OCR worker acquired");

        Ok(Self {
            binary: binary.to_string(),
            language,
            scratch,
        })
    }

    #[cfg(test)]
    fn scratch_dir(&self) -> &std::path::Path {
        self.scratch.path()
    }

    /// 画像1枚を認識してテキストを返す
    pub async fn recognize(&self, image: &UploadedImage) -> Result<String> {
        let input = self.stage(image).await?;

        let output = Command::new(&self.binary)
            .arg(&input)
            .arg("stdout")
            .args(["-l", self.language])
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::Extraction(format!("{} を実行できません: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Extraction(format!(
                "tesseract failed (code {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::Extraction(format!("Invalid UTF-8 output: {}", e)))
    }

    async fn stage(&self, image: &UploadedImage) -> Result<PathBuf> {
        let extension = image
            .mime_type
            .strip_prefix("image/")
            .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or("img");
        let path = self.scratch.path().join(format!("input.{}", extension));

        tokio::fs::write(&path, &image.bytes)
            .await
            .map_err(|e| Error::Extraction(format!("画像を書き出せません: {}", e)))?;
        Ok(path)
    }
}

impl Drop for OcrWorker {
    fn drop(&mut self) {
        tracing::debug!(dir = %self.scratch.path().display(), "OCR worker released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> UploadedImage {
        UploadedImage {
            file_name: "label.png".into(),
            mime_type: "image/png".into(),
            display_ref: "label.png".into(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[tokio::test]
    async fn test_release_after_failure() {
        let worker = OcrWorker::acquire("/nonexistent/tesseract-12345", "eng").unwrap();
        let dir = worker.scratch_dir().to_path_buf();
        assert!(dir.exists());

        let result = worker.recognize(&png()).await;
        assert!(matches!(result, Err(Error::Extraction(_))));

        drop(worker);
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_stage_uses_mime_extension() {
        let worker = OcrWorker::acquire("tesseract", "eng").unwrap();
        let staged = worker.stage(&png()).await.unwrap();
        assert_eq!(staged.file_name().unwrap(), "input.png");
        assert_eq!(std::fs::read(&staged).unwrap(), png().bytes);
    }
}
