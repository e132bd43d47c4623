//! 原材料カード

use leptos::prelude::*;
use label_lens_common::IngredientCard as Card;

#[component]
pub fn IngredientCard(card: Card) -> impl IntoView {
    let status = card.status;
    let rating = card.rating_label();

    view! {
        <article class=format!("ingredient-card {}", status.as_str())>
            <h3>{card.title}</h3>
            <p class="description">{card.description}</p>
            <div class="card-footer">
                <span class=format!("badge {}", status.as_str())>{status.label()}</span>
                <span class="rating">{rating}</span>
            </div>
        </article>
    }
}
