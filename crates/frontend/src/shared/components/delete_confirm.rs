//! Подтверждение удаления и последовательное удаление выбранных записей.

use super::confirm_dialog::ConfirmDialog;
use crate::shared::api::RestApi;
use crate::shared::list_controller::ListController;
use crate::shared::notifications::use_notifications;
use contracts::shared::list_view::{delete_sequentially, ListRecord, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ожидающий подтверждения набор id
#[derive(Clone, Copy)]
pub struct DeleteRequest {
    open: RwSignal<bool>,
    pending: RwSignal<Vec<String>>,
}

impl DeleteRequest {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            pending: RwSignal::new(Vec::new()),
        }
    }

    /// Одно подтверждение на все ids
    pub fn request(&self, ids: Vec<String>) {
        if ids.is_empty() {
            return;
        }
        self.pending.set(ids);
        self.open.set(true);
    }

    fn take(&self) -> Vec<String> {
        let ids = self.pending.get_untracked();
        self.pending.set(Vec::new());
        ids
    }
}

impl Default for DeleteRequest {
    fn default() -> Self {
        Self::new()
    }
}

pub fn confirm_message(entity: &str, count: usize) -> String {
    if count == 1 {
        format!(
            "Are you sure you want to delete this {}? This action cannot be undone.",
            entity.to_lowercase()
        )
    } else {
        format!(
            "Are you sure you want to delete {} records? This action cannot be undone.",
            count
        )
    }
}

/// Диалог подтверждения; после "Delete" удаляет записи через `api`
/// по одной и убирает удалённые из `controller`.
///
/// `A` - ресурс на бэкенде, `R` - записи списка (у покупателей это разные типы с общими id).
#[component]
pub fn DeleteConfirm<A, R>(
    request: DeleteRequest,
    api: RestApi<A>,
    controller: ListController<R>,
) -> impl IntoView
where
    A: Resource,
    R: ListRecord + PartialEq + Send + Sync,
{
    let notifications = use_notifications();

    let message = Signal::derive(move || {
        request
            .pending
            .with(|ids| confirm_message(A::LABEL, ids.len()))
    });

    let on_confirm = Callback::new(move |_| {
        let ids = request.take();
        spawn_local(async move {
            let report = delete_sequentially::<A, _, _, _>(&api, &ids, &notifications, |id| {
                controller.remove(id)
            })
            .await;
            log::debug!(
                "{}: deleted {}, failed {}",
                A::LABEL,
                report.deleted.len(),
                report.failed.len()
            );
        });
    });

    view! {
        <ConfirmDialog
            open=request.open
            title="Confirm delete"
            message=message
            on_confirm=on_confirm
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_message() {
        assert_eq!(
            confirm_message("Booking", 1),
            "Are you sure you want to delete this booking? This action cannot be undone."
        );
        assert!(confirm_message("Product", 3).contains("delete 3 records"));
    }
}
