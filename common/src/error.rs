//! エラー型定義

use thiserror::Error;

use crate::messages;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("API key is not set")]
    MissingApiKey,

    #[error("Not an image: {0}")]
    NotAnImage(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("LLM request failed: {0}")]
    Remote(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid ingredient at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// ユーザーに見せるエラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    InputValidation,
    Extraction,
    Configuration,
    Processing,
}

impl Error {
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::NotAnImage(_) => ErrorClass::InputValidation,
            Error::Extraction(_) => ErrorClass::Extraction,
            Error::MissingApiKey | Error::Config(_) => ErrorClass::Configuration,
            Error::Json(_)
            | Error::Remote(_)
            | Error::Parse(_)
            | Error::InvalidRecord { .. } => ErrorClass::Processing,
        }
    }

    /// エラーバナーに表示する一文
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Config(_) => messages::CONFIG_ERROR,
            _ => self.class().user_message(),
        }
    }
}

impl ErrorClass {
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorClass::InputValidation => messages::NOT_AN_IMAGE,
            ErrorClass::Extraction => messages::EXTRACTION_FAILED,
            ErrorClass::Configuration => messages::MISSING_API_KEY,
            ErrorClass::Processing => messages::PROCESSING_FAILED,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
