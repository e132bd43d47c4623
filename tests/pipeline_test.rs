//! パイプライン結合テスト
//!
//! OCRとLLMをスタブに差し替えて、画像受け付けから結果表示までを検証

use label_lens::error::LabelLensError;
use label_lens::ocr::TextExtractor;
use label_lens::pipeline::Pipeline;
use label_lens::render::render_results;
use label_lens_common::{CompletionClient, Error, Phase, Result, Route, UploadedImage};
use std::cell::Cell;
use std::rc::Rc;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
const SUGAR: &str = r#"{"ingredients":[{"ingredient":"Sugar","ingredientDescription":"Sweetener","rating":3,"threat":false}]}"#;

/// 呼び出し回数。スタブをパイプラインに渡した後も読めるよう共有する
type CallCount = Rc<Cell<usize>>;

struct StubExtractor {
    text: Option<&'static str>,
    calls: CallCount,
}

impl StubExtractor {
    fn reading(text: &'static str) -> Self {
        Self { text: Some(text), calls: CallCount::default() }
    }

    fn broken() -> Self {
        Self { text: None, calls: CallCount::default() }
    }

    fn calls(&self) -> CallCount {
        Rc::clone(&self.calls)
    }
}

impl TextExtractor for StubExtractor {
    async fn extract(&self, _image: &UploadedImage) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.text
            .map(str::to_string)
            .ok_or_else(|| Error::Extraction("engine crashed".into()))
    }
}

struct StubClient {
    response: &'static str,
    calls: CallCount,
}

impl StubClient {
    fn replying(response: &'static str) -> Self {
        Self { response, calls: CallCount::default() }
    }

    fn calls(&self) -> CallCount {
        Rc::clone(&self.calls)
    }
}

impl CompletionClient for StubClient {
    async fn complete(&self, _api_key: &str, _prompt: &str) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.response.to_string())
    }
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write file");
    path
}

fn pipeline(
    extractor: StubExtractor,
    response: &'static str,
    api_key: Option<&str>,
) -> Pipeline<StubExtractor, StubClient> {
    Pipeline::new(extractor, StubClient::replying(response), api_key.map(str::to_string))
}

async fn loaded(path: &Path, response: &'static str, api_key: Option<&str>) -> Pipeline<StubExtractor, StubClient> {
    let mut p = pipeline(StubExtractor::reading("Sugar"), response, api_key);
    p.load_image(path).await.expect("extraction failed");
    p
}

/// 画像を読み取って解析し、カードが1枚表示される
#[tokio::test]
async fn test_sugar_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = write_file(&dir, "label.png", PNG_HEADER);

    let mut p = loaded(&image, SUGAR, Some("key")).await;
    assert_eq!(p.session().phase(), Phase::TextExtracted);

    let route = p.submit().await.expect("analysis failed");
    let result = route.payload().expect("payload missing");
    assert_eq!(result.len(), 1);
    assert_eq!(result.ingredients[0].ingredient, "Sugar");
    assert_eq!(result.ingredients[0].rating, 3);
    assert!(!result.ingredients[0].threat);
    assert_eq!(p.session().phase(), Phase::ResultsShown);

    let view = render_results(route.payload());
    assert_eq!(view.matches("Generally Safe").count(), 1);
    assert!(view.contains("Rating: 3/10"));
}

/// 画像以外は抽出を呼ばずに拒否
#[tokio::test]
async fn test_non_image_is_rejected_without_extraction() {
    let dir = tempdir().expect("Failed to create temp dir");
    let text_file = write_file(&dir, "notes.txt", b"just some notes");

    let extractor = StubExtractor::reading("Sugar");
    let ocr_calls = extractor.calls();
    let mut p = pipeline(extractor, SUGAR, Some("key"));
    let err = p.load_image(&text_file).await.unwrap_err();

    assert!(matches!(err, LabelLensError::Common(Error::NotAnImage(_))));
    assert_eq!(ocr_calls.get(), 0);
    assert_eq!(p.session().error(), Some("Please upload an image file"));
    assert_eq!(p.session().phase(), Phase::Idle);
    assert_eq!(p.session().extracted_text(), "");
}

/// 画像なら抽出テキストかエラーのどちらかが必ず残る
#[tokio::test]
async fn test_extraction_failure_is_surfaced() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = write_file(&dir, "label.png", PNG_HEADER);

    let mut p = pipeline(StubExtractor::broken(), SUGAR, Some("key"));
    let err = p.load_image(&image).await.unwrap_err();

    assert_eq!(err.user_message(), "Error extracting text from image");
    assert_eq!(p.session().extracted_text(), "");
    assert_eq!(p.session().error(), Some("Error extracting text from image"));
    assert!(!p.session().can_submit());
}

/// 空白だけの抽出結果もエラー扱い
#[tokio::test]
async fn test_blank_extraction_is_surfaced() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = write_file(&dir, "label.png", PNG_HEADER);

    let mut p = pipeline(StubExtractor::reading("  \n"), SUGAR, Some("key"));
    assert!(p.load_image(&image).await.is_err());
    assert!(p.session().error().is_some());
}

/// APIキーがなければ通信しない
#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = write_file(&dir, "label.png", PNG_HEADER);

    let client = StubClient::replying(SUGAR);
    let llm_calls = client.calls();
    let mut p = Pipeline::new(StubExtractor::reading("Sugar"), client, None);
    p.load_image(&image).await.expect("extraction failed");
    let err = p.submit().await.unwrap_err();

    assert!(matches!(err, LabelLensError::Common(Error::MissingApiKey)));
    assert_eq!(llm_calls.get(), 0);
    assert_eq!(
        p.session().error(),
        Some("API key is not set. Please check your environment variables.")
    );
    assert_eq!(p.session().phase(), Phase::TextExtracted);
}

/// JSONでない応答は結果画面に遷移しない
#[tokio::test]
async fn test_not_json_does_not_navigate() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = write_file(&dir, "label.png", PNG_HEADER);

    let mut p = loaded(&image, "not json", Some("key")).await;
    let result = p.submit().await;

    assert!(result.is_err());
    assert_eq!(
        p.session().error(),
        Some("An error occurred while processing the ingredients")
    );
    assert_ne!(p.session().phase(), Phase::ResultsShown);
    assert!(p.session().can_submit());
}

/// 編集したテキストが送信される
#[tokio::test]
async fn test_edited_text_is_submitted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = write_file(&dir, "label.png", PNG_HEADER);

    let mut p = loaded(&image, SUGAR, Some("key")).await;
    p.edit_text("Sugar, Salt".into());
    assert_eq!(p.session().phase(), Phase::TextEdited);

    let route = p.submit().await.expect("analysis failed");
    assert!(matches!(route, Route::Ingredients(Some(_))));
}

/// テキストを空にすると送信できない
#[tokio::test]
async fn test_empty_text_cannot_be_submitted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = write_file(&dir, "label.png", PNG_HEADER);

    let mut p = loaded(&image, SUGAR, Some("key")).await;
    p.edit_text(String::new());
    let err = p.submit().await.unwrap_err();
    assert!(matches!(err, LabelLensError::NothingToSubmit));
}

/// 結果なしで結果画面を開いても空表示
#[test]
fn test_results_without_payload() {
    let view = render_results(Route::from_path("/ingredients").payload());
    assert!(view.contains("No ingredients data available."));
}
