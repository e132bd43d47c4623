use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelLensError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("解析するテキストがありません")]
    NothingToSubmit,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] label_lens_common::Error),
}

impl LabelLensError {
    /// 画面に出す1行のメッセージ
    ///
    /// 解析パイプラインのエラーは分類ごとの固定文言、それ以外は詳細をそのまま出す
    pub fn user_message(&self) -> String {
        match self {
            LabelLensError::Common(e) => e.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelLensError>;
