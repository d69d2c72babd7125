//! 解析開始ボタンコンポーネント
//!
//! 送信可能な状態（ファイル選択済み・結果表示中）でだけ表示する。
//! Loading 中は消えるので二重送信はできない。

use leptos::prelude::*;
use bill_checker_common::Page;

#[component]
pub fn AnalyzeButton<FA>(
    page: ReadSignal<Page>,
    on_analyze: FA,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
{
    view! {
        <div class="analyze-row" class:hidden=move || !page.with(|p| p.can_submit())>
            <button
                class="btn btn-primary"
                disabled=move || !page.with(|p| p.can_submit())
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                "⚡ Analyze Bill"
            </button>
        </div>
    }
}
