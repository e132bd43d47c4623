//! Label Lens Common Library
//!
//! CLIとWeb(WASM)で共有される型と解析パイプライン

pub mod acquire;
pub mod analyzer;
pub mod error;
pub mod gemini;
pub mod messages;
pub mod navigation;
pub mod parser;
pub mod presenter;
pub mod prompts;
pub mod session;
pub mod types;

pub use acquire::{accept_image, is_image_mime};
pub use analyzer::{analyze_ingredients, require_api_key, CompletionClient};
pub use error::{Error, ErrorClass, Result};
pub use navigation::Route;
pub use parser::parse_analysis_response;
pub use presenter::{present, IngredientCard, ResultsView, ThreatStatus};
pub use prompts::{analysis_response_schema, build_analysis_prompt};
pub use session::{LoadTicket, Phase, Session};
pub use types::{AnalysisResult, IngredientRecord, UploadedImage};
