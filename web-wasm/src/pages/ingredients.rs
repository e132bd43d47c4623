//! 結果画面

use crate::app::Navigator;
use crate::components::ingredient_card::IngredientCard;
use leptos::prelude::*;
use label_lens_common::{messages, present, AnalysisResult, ResultsView, Route};

#[component]
pub fn IngredientsPage(payload: Option<AnalysisResult>, navigator: Navigator) -> impl IntoView {
    let body = match present(payload.as_ref()) {
        ResultsView::Empty => view! {
            <p class="empty-state">{ResultsView::empty_message()}</p>
        }
        .into_any(),
        ResultsView::Cards(cards) => view! {
            <div class="card-grid">
                {cards
                    .into_iter()
                    .map(|card| view! { <IngredientCard card=card /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="ingredients-page">
            <h2>{messages::RESULTS_TITLE}</h2>
            {body}
            <button class="btn" on:click=move |_| navigator.go(Route::Home)>
                {messages::BACK_TO_HOME}
            </button>
        </section>
    }
}
