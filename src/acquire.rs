//! 画像ファイルの受け付け
//!
//! MIMEタイプは拡張子より中身（マジックバイト）を優先して判定する

use crate::error::{LabelLensError, Result};
use image::ImageFormat;
use label_lens_common::{accept_image, UploadedImage};
use std::path::Path;

const UNKNOWN_MIME: &str = "application/octet-stream";

/// 画像ファイルを読み込み、画像でなければ NotAnImage で拒否する
pub fn acquire_image(path: &Path) -> Result<UploadedImage> {
    if !path.is_file() {
        return Err(LabelLensError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let mime_type = detect_mime(path, &bytes);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    tracing::debug!(file = %file_name, mime = %mime_type, size = bytes.len(), "image candidate");

    let image = accept_image(file_name, mime_type, path.display().to_string(), bytes)?;
    Ok(image)
}

/// 中身から判定できなければ拡張子で判定
pub fn detect_mime(path: &Path, bytes: &[u8]) -> String {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MIME.to_string())
}
