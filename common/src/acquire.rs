//! 画像受け付け
//!
//! ドロップ・ファイル選択どちらの経路でも MIME タイプが `image/` で始まるものだけ受け付ける

use crate::error::{Error, Result};
use crate::types::UploadedImage;

/// MIMEタイプが画像かどうか
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// 画像を受け付ける。画像以外は NotAnImage
pub fn accept_image(
    file_name: impl Into<String>,
    mime_type: impl Into<String>,
    display_ref: impl Into<String>,
    bytes: Vec<u8>,
) -> Result<UploadedImage> {
    let mime_type = mime_type.into();
    if !is_image_mime(&mime_type) {
        return Err(Error::NotAnImage(mime_type));
    }

    Ok(UploadedImage {
        file_name: file_name.into(),
        mime_type,
        display_ref: display_ref.into(),
        bytes,
    })
}
