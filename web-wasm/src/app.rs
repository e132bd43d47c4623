//! メインアプリケーションコンポーネント
//!
//! 画面は Route で切り替える。結果画面への受け渡しは Route の中身だけ

use crate::components::navbar::Navbar;
use crate::pages::{home::HomePage, ingredients::IngredientsPage};
use gloo::events::EventListener;
use leptos::prelude::*;
use label_lens_common::Route;
use wasm_bindgen::JsValue;

/// 画面遷移。履歴（URL）も合わせて更新する
#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
}

impl Navigator {
    pub fn new(route: RwSignal<Route>) -> Self {
        Self { route }
    }

    pub fn go(&self, next: Route) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(next.path()));
        }
        self.route.set(next);
    }

    pub fn current_path(&self) -> &'static str {
        self.route.with(|r| r.path())
    }
}

fn location_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let route = RwSignal::new(location_route());
    let navigator = Navigator::new(route);

    // 戻る/進む。履歴には結果を載せないので結果画面は空表示になる
    if let Some(window) = web_sys::window() {
        EventListener::new(&window, "popstate", move |_| {
            route.set(location_route());
        })
        .forget();
    }

    view! {
        <div class="app">
            <Navbar navigator=navigator />

            <main class="container">
                {move || match route.get() {
                    Route::Home => view! { <HomePage navigator=navigator /> }.into_any(),
                    Route::Ingredients(payload) => {
                        view! { <IngredientsPage payload=payload navigator=navigator /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
