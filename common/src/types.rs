//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - IngredientRecord: LLMが返す原材料1件
//! - AnalysisResult: `{ "ingredients": [...] }` 全体

use serde::{Deserialize, Serialize};

/// 危険度の下限
pub const MIN_RATING: u8 = 1;
/// 危険度の上限
pub const MAX_RATING: u8 = 10;

/// 原材料1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    pub ingredient: String,
    pub ingredient_description: String,
    /// 1（安全）〜10（危険）
    pub rating: u8,
    /// true = 有害の可能性あり
    pub threat: bool,
}

/// 原材料解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ingredients: Vec<IngredientRecord>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }
}

/// 画像の表示参照と元データ
///
/// Webではobject URL、CLIではファイルパスが `display_ref` に入る
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime_type: String,
    pub display_ref: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_keys() {
        let record = IngredientRecord {
            ingredient: "Sugar".into(),
            ingredient_description: "Sweetener".into(),
            rating: 3,
            threat: false,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"ingredient":"Sugar","ingredientDescription":"Sweetener","rating":3,"threat":false}"#
        );
    }

    #[test]
    fn test_result_preserves_order() {
        let json = r#"{"ingredients":[
            {"ingredient":"Water","ingredientDescription":"Solvent","rating":1,"threat":false},
            {"ingredient":"Aspartame","ingredientDescription":"Sweetener","rating":6,"threat":true},
            {"ingredient":"Water","ingredientDescription":"Again","rating":1,"threat":false}
        ]}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let names: Vec<_> = result.ingredients.iter().map(|r| r.ingredient.as_str()).collect();
        assert_eq!(names, vec!["Water", "Aspartame", "Water"]);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_default_result_is_empty() {
        assert!(AnalysisResult::default().is_empty());
    }
}
