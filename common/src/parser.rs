//! APIレスポンスパーサー
//!
//! LLMのテキスト応答を1つのJSONドキュメントとして厳密にパースし、
//! AnalysisResult のスキーマを検証する。コードフェンス除去などの修復はしない。

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, IngredientRecord, MAX_RATING, MIN_RATING};

/// 解析レスポンスをパース
///
/// - 応答全体（前後の空白を除く）が JSON でなければエラー
/// - `{}` はプロンプトで指示した「対応不可」応答なので空の結果として扱う
/// - それ以外は `ingredients` 配列の各要素を検証する
///
/// # Examples
/// ```
/// use label_lens_common::parse_analysis_response;
///
/// let text = r#"{"ingredients":[{"ingredient":"Sugar","ingredientDescription":"Sweetener","rating":3,"threat":false}]}"#;
/// let result = parse_analysis_response(text).unwrap();
/// assert_eq!(result.ingredients[0].rating, 3);
/// ```
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult> {
    let value: Value = serde_json::from_str(response.trim())
        .map_err(|e| Error::Parse(format!("response is not valid JSON: {}", e)))?;

    let Value::Object(map) = value else {
        return Err(Error::Parse("top-level JSON value is not an object".into()));
    };

    if map.is_empty() {
        return Ok(AnalysisResult::default());
    }

    let ingredients = match map.get("ingredients") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(Error::Parse("\"ingredients\" is not an array".into())),
        None => return Err(Error::Parse("missing \"ingredients\" key".into())),
    };

    let records = ingredients
        .iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect::<Result<Vec<_>>>()?;

    Ok(AnalysisResult { ingredients: records })
}

fn parse_record(index: usize, item: &Value) -> Result<IngredientRecord> {
    let invalid = |reason: String| Error::InvalidRecord { index, reason };

    let Value::Object(map) = item else {
        return Err(invalid("entry is not an object".into()));
    };

    let ingredient = get_string(map, "ingredient").map_err(invalid)?;
    let ingredient_description = get_string(map, "ingredientDescription").map_err(invalid)?;
    let threat = match map.get("threat") {
        Some(Value::Bool(b)) => *b,
        Some(other) => return Err(invalid(format!("\"threat\" must be a boolean, got {}", other))),
        None => return Err(invalid("missing \"threat\"".into())),
    };

    let rating = match map.get("rating") {
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| invalid(format!("\"rating\" must be an integer, got {}", n)))?,
        Some(other) => return Err(invalid(format!("\"rating\" must be an integer, got {}", other))),
        None => return Err(invalid("missing \"rating\"".into())),
    };
    if !(i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating) {
        return Err(invalid(format!(
            "rating {} is outside {}..={}",
            rating, MIN_RATING, MAX_RATING
        )));
    }

    Ok(IngredientRecord {
        ingredient,
        ingredient_description,
        rating: rating as u8,
        threat,
    })
}

fn get_string(map: &Map<String, Value>, key: &str) -> std::result::Result<String, String> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("\"{}\" must be a string, got {}", key, other)),
        None => Err(format!("missing \"{}\"", key)),
    }
}
