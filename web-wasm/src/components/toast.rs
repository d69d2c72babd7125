//! トースト通知コンポーネント

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use bill_checker_common::Notification;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub note: Notification,
}

/// 表示中の通知キュー
///
/// 各通知は一定時間で自動的に消える
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl Toaster {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn push(&self, note: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| t.push(Toast { id, note }));

        let toaster = *self;
        Timeout::new(self.duration_ms, move || toaster.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

#[component]
pub fn ToastRegion(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-region">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.note.level.as_str())
                            role="status"
                            on:click=move |_| toaster.dismiss(id)
                        >
                            <p class="toast-title">{toast.note.title}</p>
                            <p class="toast-description">{toast.note.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
