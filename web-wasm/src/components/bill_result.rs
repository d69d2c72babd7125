//! 解析結果カードコンポーネント

use leptos::prelude::*;
use bill_checker_common::{present, BillRecord};

#[component]
pub fn BillResult(record: BillRecord) -> impl IntoView {
    let tiles = present(&record);

    view! {
        <section class="card result-card">
            <h2 class="result-title">"Bill Analysis Results"</h2>
            <div class="result-grid">
                {tiles
                    .into_iter()
                    .map(|tile| {
                        let class = tile.class();
                        view! {
                            <div class=class>
                                <div class="tile-label">
                                    <span class="tile-icon">{tile.def.icon}</span>
                                    <span>{tile.def.label}</span>
                                </div>
                                <p class="tile-value">{tile.value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
