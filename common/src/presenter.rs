//! 結果表示のビューモデル
//!
//! 画面の描画自体は CLI / Web が行う。ここでは AnalysisResult を
//! 表示順そのままのカード列に変換するだけ。

use crate::messages;
use crate::types::{AnalysisResult, IngredientRecord, MAX_RATING};

/// カードの状態表示。`threat` だけで決まり、rating は見ない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatStatus {
    Safe,
    Harmful,
}

impl ThreatStatus {
    pub fn from_threat(threat: bool) -> Self {
        if threat {
            ThreatStatus::Harmful
        } else {
            ThreatStatus::Safe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThreatStatus::Safe => "Generally Safe",
            ThreatStatus::Harmful => "Potentially Harmful",
        }
    }

    /// CSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatStatus::Safe => "safe",
            ThreatStatus::Harmful => "harmful",
        }
    }
}

/// 原材料カード1枚分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientCard {
    pub title: String,
    pub description: String,
    pub status: ThreatStatus,
    pub rating: u8,
}

impl IngredientCard {
    pub fn rating_label(&self) -> String {
        format!("Rating: {}/{}", self.rating, MAX_RATING)
    }
}

impl From<&IngredientRecord> for IngredientCard {
    fn from(record: &IngredientRecord) -> Self {
        Self {
            title: record.ingredient.clone(),
            description: record.ingredient_description.clone(),
            status: ThreatStatus::from_threat(record.threat),
            rating: record.rating,
        }
    }
}

/// 結果画面の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Empty,
    Cards(Vec<IngredientCard>),
}

impl ResultsView {
    pub fn empty_message() -> &'static str {
        messages::NO_INGREDIENTS
    }
}

/// 遷移で受け取った結果（なければ None）から表示内容を作る
pub fn present(payload: Option<&AnalysisResult>) -> ResultsView {
    match payload {
        Some(result) if !result.is_empty() => {
            ResultsView::Cards(result.ingredients.iter().map(IngredientCard::from).collect())
        }
        _ => ResultsView::Empty,
    }
}
