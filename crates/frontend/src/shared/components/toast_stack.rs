use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, ToastKind};
use leptos::prelude::*;

/// Стек тостов в правом верхнем углу
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.toasts()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div
                            class="toast"
                            class:toast--success=toast.kind == ToastKind::Success
                            class:toast--error=toast.kind == ToastKind::Error
                            role="status"
                        >
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| notifications.dismiss(&id)
                                title="Dismiss"
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
