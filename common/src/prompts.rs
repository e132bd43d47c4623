//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト生成ロジック:
//! - build_analysis_prompt: OCRテキストを末尾に埋め込んだ原材料解析プロンプト
//! - analysis_response_schema: Gemini の responseSchema

use serde_json::json;

/// 固定の指示文。OCRテキストはこの後ろに連結する
const ANALYSIS_INSTRUCTIONS: &str = r#"This is generated by OCR AI from an image taken from the back of the product. Please provide the ingredients in the following JSON format:
    {
      "ingredients": [
        {
          "ingredient": "<ingredient_name>",
          "ingredientDescription": "<description_of_ingredient>",
          "rating": <rating_from_1_to_10>,
          "threat": <true_or_false>
        }
      ]
    }

    **Details:**
    - **ingredient**: The name of the ingredient.
    - **ingredientDescription**: A description of the ingredient.
    - **rating**: A number from 1 to 10 indicating how dangerous the ingredient is, with 1 being the least dangerous and 10 being the most.
    - **threat**: Boolean value indicating whether the ingredient is harmful (true) or not (false).

    Please ensure the response is a valid JSON string with the exact format shown above. If the response is not in the correct JSON format, return an empty JSON object ({})."#;

/// 原材料解析プロンプト生成
///
/// # Arguments
/// * `extracted_text` - OCRで抽出（ユーザーが編集済みの場合あり）したテキスト
///
/// # Returns
/// Gemini に送るプロンプト文字列
pub fn build_analysis_prompt(extracted_text: &str) -> String {
    format!("{ANALYSIS_INSTRUCTIONS}\n    \n    Extracted text: {extracted_text}")
}

/// AnalysisResult の JSON スキーマ（Gemini の generationConfig.responseSchema 用）
pub fn analysis_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "ingredientDescription": { "type": "string" },
                        "rating": { "type": "integer" },
                        "threat": { "type": "boolean" }
                    },
                    "required": ["ingredient", "ingredientDescription", "rating", "threat"]
                }
            }
        }
    })
}
