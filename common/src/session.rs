//! 解析画面の状態遷移
//!
//! Idle → ImageLoaded → TextExtracted ⇄ TextEdited → Submitting → ResultsShown
//!
//! エラーは直前の操作可能な状態に戻し、データは消さない。
//! エラー文言は常に1つだけ保持し、新しいエラーで置き換える。

use crate::error::Error;
use crate::navigation::Route;
use crate::types::{AnalysisResult, UploadedImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    ImageLoaded,
    TextExtracted,
    TextEdited,
    Submitting,
    ResultsShown,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::ImageLoaded => "image-loaded",
            Phase::TextExtracted => "text-extracted",
            Phase::TextEdited => "text-edited",
            Phase::Submitting => "submitting",
            Phase::ResultsShown => "results-shown",
        }
    }
}

/// 読み込みごとの番号。古い画像の抽出結果を見分けるのに使う
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    phase: Phase,
    /// 送信失敗時に戻る状態
    resume_phase: Phase,
    image: Option<UploadedImage>,
    extracted_text: String,
    error: Option<String>,
    is_loading: bool,
    load_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// 送信ボタンを押せるか。テキストが空、または処理中なら不可
    pub fn can_submit(&self) -> bool {
        !self.is_loading
            && !self.extracted_text.trim().is_empty()
            && matches!(self.phase, Phase::TextExtracted | Phase::TextEdited)
    }

    /// 画像以外が渡された。状態は変えずエラーだけ表示
    pub fn reject_file(&mut self, error: &Error) {
        self.error = Some(error.user_message().to_string());
    }

    /// ファイルの読み込みを始める前に処理中にする。すでに処理中なら false
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error = None;
        true
    }

    /// 画像にたどり着く前に読み込みが失敗した。前の画像とテキストは残す
    pub fn load_aborted(&mut self, error: &Error) {
        self.error = Some(error.user_message().to_string());
        self.is_loading = false;
    }

    /// 新しい画像を受け付けてテキスト抽出を始める。前の画像とテキストは破棄
    pub fn load_image(&mut self, image: UploadedImage) -> LoadTicket {
        self.load_seq += 1;
        self.image = Some(image);
        self.extracted_text.clear();
        self.error = None;
        self.phase = Phase::ImageLoaded;
        self.is_loading = true;
        LoadTicket(self.load_seq)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.load_seq
    }

    /// 抽出結果を反映。空白だけのテキストは失敗として扱う。古い画像の結果は捨てる
    pub fn extraction_succeeded(&mut self, ticket: LoadTicket, text: String) {
        if !self.is_current(ticket) {
            return;
        }
        if text.trim().is_empty() {
            self.extraction_failed(ticket, &Error::Extraction("no text recognized".into()));
            return;
        }
        self.extracted_text = text;
        self.phase = Phase::TextExtracted;
        self.is_loading = false;
    }

    pub fn extraction_failed(&mut self, ticket: LoadTicket, error: &Error) {
        if !self.is_current(ticket) {
            return;
        }
        self.extracted_text.clear();
        self.error = Some(error.user_message().to_string());
        self.phase = Phase::ImageLoaded;
        self.is_loading = false;
    }

    /// ユーザーによるテキスト編集。抽出前や送信中は無視
    pub fn edit_text(&mut self, text: String) {
        if matches!(self.phase, Phase::TextExtracted | Phase::TextEdited) && !self.is_loading {
            self.extracted_text = text;
            self.phase = Phase::TextEdited;
        }
    }

    /// 送信開始。送信できる状態なら送るテキストを返す
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.resume_phase = self.phase;
        self.phase = Phase::Submitting;
        self.is_loading = true;
        Some(self.extracted_text.clone())
    }

    pub fn submit_failed(&mut self, error: &Error) {
        self.error = Some(error.user_message().to_string());
        self.phase = self.resume_phase;
        self.is_loading = false;
    }

    /// 解析成功。結果画面への遷移先を返す
    pub fn submit_succeeded(&mut self, result: AnalysisResult) -> Route {
        self.error = None;
        self.phase = Phase::ResultsShown;
        self.is_loading = false;
        Route::Ingredients(Some(result))
    }
}
