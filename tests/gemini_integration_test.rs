use label_lens::gemini::GeminiClient;
use label_lens_common::analyze_ingredients;

#[tokio::test]
async fn gemini_analysis_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let client = GeminiClient::default();
    let result = analyze_ingredients(
        &client,
        "INGREDIENTS: SUGAR, WATER, CITRIC ACID, SODIUM BENZOATE",
        Some(&api_key),
    )
    .await
    .expect("analysis failed");

    assert!(!result.is_empty());
    for record in &result.ingredients {
        assert!((1..=10).contains(&record.rating));
        assert!(!record.ingredient.is_empty());
    }
}
