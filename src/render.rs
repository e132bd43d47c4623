//! 結果のターミナル表示

use label_lens_common::messages;
use label_lens_common::{present, AnalysisResult, ResultsView, ThreatStatus};
use std::fmt::Write;

fn badge(status: ThreatStatus) -> String {
    match status {
        ThreatStatus::Safe => format!("✔ {}", status.label()),
        ThreatStatus::Harmful => format!("⚠ {}", status.label()),
    }
}

/// 結果画面を文字列で組み立てる。結果がなければ空表示
pub fn render_results(payload: Option<&AnalysisResult>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", messages::RESULTS_TITLE);

    match present(payload) {
        ResultsView::Empty => {
            let _ = writeln!(out, "{}", ResultsView::empty_message());
        }
        ResultsView::Cards(cards) => {
            for (i, card) in cards.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, card.title);
                let _ = writeln!(out, "   {}", card.description);
                let _ = writeln!(out, "   [{}]  {}", badge(card.status), card.rating_label());
                let _ = writeln!(out);
            }
        }
    }

    out
}
