//! 解析画面
//!
//! 画像の受け付け → OCR → テキスト編集 → 解析依頼。状態は Session 1つで持ち、
//! 画面を離れると破棄される。離れた後に完了した処理の結果は try_update で捨てる

use crate::api::gemini::GeminiClient;
use crate::app::Navigator;
use crate::components::upload_area::UploadArea;
use crate::{config, ocr};
use gloo::console;
use js_sys::Uint8Array;
use leptos::prelude::*;
use leptos::task::spawn_local;
use label_lens_common::{
    accept_image, analyze_ingredients, is_image_mime, messages, Error, Phase, Result, Session,
    UploadedImage,
};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

/// ファイルを読み込み、プレビュー用のオブジェクトURLを作る
async fn read_image(file: &File) -> Result<UploadedImage> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| Error::Extraction(format!("{:?}", e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    let display_ref = Url::create_object_url_with_blob(file)
        .map_err(|e| Error::Extraction(format!("{:?}", e)))?;

    accept_image(file.name(), file.type_(), display_ref, bytes)
}

/// 画像以外は弾く。画像なら処理中にして true（すでに処理中なら false）
fn admit_file(session: &mut Session, mime_type: &str) -> bool {
    if !is_image_mime(mime_type) {
        session.reject_file(&Error::NotAnImage(mime_type.to_string()));
        return false;
    }
    session.begin_load()
}

fn revoke(url: &str) {
    let _ = Url::revoke_object_url(url);
}

#[component]
pub fn HomePage(navigator: Navigator) -> impl IntoView {
    let session = RwSignal::new(Session::new());

    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let preview = move || session.with(|s| s.image().map(|i| i.display_ref.clone()));
    let error = move || session.with(|s| s.error().map(str::to_string));
    let text = move || session.with(|s| s.extracted_text().to_string());
    let has_text = move || {
        session.with(|s| matches!(s.phase(), Phase::TextExtracted | Phase::TextEdited | Phase::Submitting))
    };
    let is_extracting = move || session.with(|s| s.phase() == Phase::ImageLoaded && s.is_loading());

    on_cleanup(move || {
        let current = session.try_with_untracked(|s| s.image().map(|i| i.display_ref.clone()));
        if let Some(Some(url)) = current {
            revoke(&url);
        }
    });

    let on_file = move |file: File| {
        let mime_type = file.type_();
        let admitted = session.try_update(|s| admit_file(s, &mime_type)).unwrap_or(false);
        if !admitted {
            console::warn!("File not accepted:", mime_type);
            return;
        }

        spawn_local(async move {
            let image = match read_image(&file).await {
                Ok(image) => image,
                Err(e) => {
                    console::error!("Error reading image:", e.to_string());
                    session.try_update(|s| s.load_aborted(&e));
                    return;
                }
            };

            let new_url = image.display_ref.clone();
            let loaded = session.try_update(|s| {
                let previous = s.image().map(|i| i.display_ref.clone());
                (s.load_image(image.clone()), previous)
            });
            let ticket = match loaded {
                Some((ticket, previous)) => {
                    if let Some(previous) = previous {
                        revoke(&previous);
                    }
                    ticket
                }
                None => {
                    revoke(&new_url);
                    return;
                }
            };

            let outcome = ocr::extract_text(&image).await;
            session.try_update(|s| match outcome {
                Ok(text) => s.extraction_succeeded(ticket, text),
                Err(e) => {
                    console::error!("Error extracting text:", e.to_string());
                    s.extraction_failed(ticket, &e);
                }
            });
        });
    };

    let on_submit = move |_| {
        let Some(text) = session.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            match analyze_ingredients(&GeminiClient::default(), &text, config::api_key()).await {
                Ok(result) => {
                    console::log!("Parsed result:", format!("{} ingredients", result.len()));
                    if let Some(route) = session.try_update(|s| s.submit_succeeded(result)) {
                        navigator.go(route);
                    }
                }
                Err(e) => {
                    console::error!("Error calling Gemini API:", e.to_string());
                    session.try_update(|s| s.submit_failed(&e));
                }
            }
        });
    };

    view! {
        <section class="home-page">
            <h2>{messages::HOME_TITLE}</h2>

            <UploadArea disabled=is_loading on_file=on_file />

            <Show when=move || error().is_some()>
                <div class="error-banner">{move || error().unwrap_or_default()}</div>
            </Show>

            <Show when=move || preview().is_some()>
                <img class="preview" src=move || preview().unwrap_or_default() alt="Uploaded label" />
            </Show>

            <Show when=is_extracting>
                <p class="status">{messages::PROCESSING_BUTTON}</p>
            </Show>

            <Show when=has_text>
                <div class="extracted-text">
                    <h3>{messages::EXTRACTED_TEXT_HEADING}</h3>
                    <textarea
                        rows="10"
                        prop:value=text
                        prop:disabled=move || is_loading.get()
                        on:input=move |ev| {
                            let edited = event_target_value(&ev);
                            session.update(|s| s.edit_text(edited));
                        }
                    />
                    <button
                        class="btn primary"
                        disabled=move || !session.with(|s| s.can_submit())
                        on:click=on_submit
                    >
                        {move || {
                            if is_loading.get() {
                                messages::PROCESSING_BUTTON
                            } else {
                                messages::ANALYZE_BUTTON
                            }
                        }}
                    </button>
                </div>
            </Show>
        </section>
    }
}
