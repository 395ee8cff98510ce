use crate::global_state::toasts::{use_toast, Toast};
use leptos::prelude::*;

#[component]
pub fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toast();
    let class = toast.level.class();
    let message = toast.message.clone();
    let id = toast.id;

    view! {
        <div class=class role="status">
            <div class="toast-message">{message}</div>
            <button
                class="toast-close"
                aria-label="Close"
                on:click=move |_| {
                    if let Some(toasts) = toasts {
                        toasts.remove(id);
                    }
                }
            >
                "×"
            </button>
        </div>
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-container" aria-live="polite">
            {toasts.map(|toasts| {
                view! {
                    <For
                        each=move || toasts.0.get()
                        key=|toast| toast.id
                        children=|toast| view! { <ToastItem toast /> }
                    />
                }
            })}
        </div>
    }
}
