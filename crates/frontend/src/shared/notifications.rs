//! Toast notifications.
//!
//! `NotificationCenter` is provided once in `App` and implements the
//! contracts `Notifier`, so list operations report through it directly.

use contracts::shared::list_view::Notifier;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Время жизни тоста, мс
const TOAST_TTL_MS: u32 = 3_000;
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    toasts: RwSignal<Vec<Toast>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn dismiss(&self, id: &str) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id: id.clone(),
                kind,
                message: message.to_string(),
            });
            let overflow = toasts.len().saturating_sub(MAX_TOASTS);
            toasts.drain(..overflow);
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            this.dismiss(&id);
        });
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn success(&self, message: &str) {
        log::info!("{}", message);
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
        self.push(ToastKind::Error, message);
    }
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().expect("NotificationCenter not found in component tree")
}
