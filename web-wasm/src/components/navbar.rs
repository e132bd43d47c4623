//! ナビゲーションバー

use crate::app::Navigator;
use leptos::prelude::*;
use label_lens_common::Route;
use web_sys::MouseEvent;

#[component]
pub fn Navbar(navigator: Navigator) -> impl IntoView {
    let link_class = move |path: &'static str| {
        if navigator.current_path() == path {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let go_home = move |ev: MouseEvent| {
        ev.prevent_default();
        navigator.go(Route::Home);
    };

    view! {
        <nav class="navbar">
            <a class="brand" href={Route::HOME_PATH} on:click=go_home>"Label Lens"</a>
            <div class="nav-links">
                <a class=move || link_class(Route::HOME_PATH) href={Route::HOME_PATH} on:click=go_home>
                    "Home"
                </a>
                <a
                    class=move || link_class(Route::INGREDIENTS_PATH)
                    href={Route::INGREDIENTS_PATH}
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        navigator.go(Route::Ingredients(None));
                    }
                >
                    "Ingredients"
                </a>
            </div>
        </nav>
    }
}
