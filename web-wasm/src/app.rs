//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::webhook::{file_meta, upload_bill};
use crate::components::{
    analyze_button::AnalyzeButton,
    bill_result::BillResult,
    header::Header,
    loading::LoadingIndicator,
    toast::{ToastRegion, Toaster},
    upload_area::UploadArea,
};
use bill_checker_common::{Error, Notification, Page, UploadConfig};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = UploadConfig::default();

    // 画面状態（Idle / FileSelected / Loading / ResultShown）
    let page = RwSignal::new(Page::default());
    // 受付済みファイルの実体。Page にはメタデータだけを持たせる
    let selected_file = StoredValue::new_local(None::<File>);
    let toaster = Toaster::new(config.toast_duration_ms);

    // ファイル選択ハンドラ
    let on_file_selected = {
        let config = config.clone();
        move |file: File| {
            let meta = file_meta(&file);
            let outcome = page
                .try_update(|p| p.select(meta, &config))
                .unwrap_or(Err(Error::Busy));

            match outcome {
                Ok(()) => selected_file.set_value(Some(file)),
                Err(e) => {
                    console::debug!(format!("file rejected: {}", e));
                    if let Some(note) = Notification::from_error(&e) {
                        toaster.push(note);
                    }
                }
            }
        }
    };

    // 解析開始ハンドラ
    let on_analyze = move |_: ()| {
        let Some(Some(accepted)) = page.try_update(Page::submit) else {
            return;
        };

        let Some(file) = selected_file.get_value() else {
            // Page と実体がずれた場合も Loading に残さない
            let outcome = Err(Error::UploadFailed("selected file is missing".into()));
            if let Some(note) = page.try_update(|p| p.finish(outcome)).flatten() {
                toaster.push(note);
            }
            return;
        };

        console::log!(format!("uploading {} ({})", accepted.name(), accepted.size_label()));

        let config = config.clone();
        spawn_local(async move {
            let outcome = upload_bill(&file, &config).await;
            match &outcome {
                Ok(record) => console::log!(format!("analysis received: {} fields", record.present_count())),
                Err(e) => console::warn!(format!("{}", e)),
            }

            if let Some(note) = page.try_update(|p| p.finish(outcome)).flatten() {
                toaster.push(note);
            }
        });
    };

    let page_view = page.read_only();

    view! {
        <div class="container">
            <Header />

            <section class="card upload-card">
                <UploadArea page=page_view on_file_selected=on_file_selected />

                <AnalyzeButton page=page_view on_analyze=on_analyze />

                <Show when=move || page.with(|p| p.is_loading())>
                    <LoadingIndicator />
                </Show>
            </section>

            {move || {
                page.with(|p| p.result().cloned())
                    .map(|record| view! { <BillResult record=record /> })
            }}

            <ToastRegion toaster=toaster />
        </div>
    }
}
