//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはクリックで1ファイルだけ受け付ける。種類の判定は呼び出し側

use leptos::html;
use leptos::prelude::*;
use label_lens_common::messages;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, MouseEvent};

fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|files| files.get(0))
}

#[component]
pub fn UploadArea<F>(
    #[prop(into)] disabled: Signal<bool>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + Clone + Send + Sync + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if disabled.get_untracked() {
                return;
            }
            if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            on_file(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if disabled.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                class="hidden"
                on:click=|ev: MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
            <div class="upload-icon">"📷"</div>
            <p>{messages::DROP_HINT}</p>
            <button type="button" class="btn secondary">{messages::SELECT_IMAGE}</button>
        </div>
    }
}
