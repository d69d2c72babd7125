//! アップロードエリアコンポーネント
//!
//! ドロップ対象のラベルと非表示の file input。複数ファイルが来ても
//! 先頭の1枚だけを渡す。

use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

use bill_checker_common::{Page, ACCEPT_EXTENSIONS};

fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|files| files.get(0))
}

#[component]
pub fn UploadArea<F>(
    page: ReadSignal<Page>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_loading = move || page.with(|p| p.is_loading());
    let selected = move || page.with(|p| p.selected().cloned());

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            set_is_dragover.set(false);

            if is_loading() {
                return;
            }

            if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
                on_file_selected(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !is_loading() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);
    };

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |ev: leptos::ev::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = first_file(input.files()) {
                on_file_selected(file);
            }
            // 同じファイルを選び直しても change が発火するように
            input.set_value("");
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if is_loading() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragenter=on_dragover
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input
                type="file"
                id="file-upload"
                class="hidden"
                accept=ACCEPT_EXTENSIONS
                disabled=is_loading
                on:change=on_change
            />
            <label for="file-upload" class="upload-label">
                <div class="upload-icon">"⬆"</div>
                {move || match selected() {
                    Some(file) => view! {
                        <div class="file-info">
                            <p class="file-name">{file.name().to_string()}</p>
                            <p class="text-muted">{file.size_label()}</p>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="file-info">
                            <p class="file-name">"Drop your bill here or click to browse"</p>
                            <p class="text-muted">"Supports JPG, PNG, and PDF files (max 10MB)"</p>
                        </div>
                    }.into_any(),
                }}
            </label>
        </div>
    }
}
