//! Label Lens CLI
//!
//! ラベル画像 → OCR → Gemini 解析 → カード表示

pub mod acquire;
pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod ocr;
pub mod pipeline;
pub mod render;
