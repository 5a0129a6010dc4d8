//! Панель над таблицей списка: поиск, массовые действия, колонки, обновление.

use super::bulk_action_select::BulkActionSelect;
use super::column_picker::ColumnPicker;
use crate::shared::export::download_table;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use crate::shared::notifications::use_notifications;
use contracts::shared::export::ExcelExportable;
use contracts::shared::list_view::{plan_bulk_action, BulkAction, BulkCommand, ListRecord, Notifier};
use leptos::prelude::*;

#[component]
pub fn ListToolbar<R>(
    controller: ListController<R>,
    /// Пункты select массовых действий
    actions: Vec<BulkAction>,
    /// Базовое имя файла экспорта, например "Products"
    export_name: &'static str,
    /// Edit с ровно одной выбранной строкой
    #[prop(optional)]
    on_edit: Option<Callback<String>>,
    /// Delete: ids уходят на подтверждение
    #[prop(optional)]
    on_delete: Option<Callback<Vec<String>>>,
    on_refresh: Callback<()>,
    /// Дополнительные кнопки справа (например, "Add")
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView
where
    R: ListRecord + ExcelExportable + PartialEq + Send + Sync,
{
    let notifications = use_notifications();

    let on_action = Callback::new(move |action: BulkAction| {
        let selected = controller.state.with_untracked(|s| s.selected.clone());
        let command = controller
            .records
            .with_untracked(|rows| plan_bulk_action(action, &selected, rows));
        match command {
            BulkCommand::Ignore => {
                log::debug!("{}: {} ignored for {} selected", R::LABEL, action.as_str(), selected.len())
            }
            BulkCommand::NavigateToEdit(id) => match on_edit {
                Some(cb) => cb.run(id),
                None => log::debug!("{}: edit is not available", R::LABEL),
            },
            BulkCommand::ConfirmDelete(ids) => match on_delete {
                Some(cb) => cb.run(ids),
                None => log::debug!("{}: delete is not available", R::LABEL),
            },
            BulkCommand::Export(table) => match download_table(&table, export_name) {
                Ok(()) => notifications.success(&format!("Exported {} rows", table.rows.len())),
                Err(e) => notifications.error(&format!("Export failed: {}", e)),
            },
        }
    });

    view! {
        <div class="list-toolbar">
            <div class="list-toolbar__left">
                <SearchInput
                    value=Signal::derive(move || controller.state.with(|s| s.query.clone()))
                    on_change=Callback::new(move |q: String| controller.set_query(q))
                />
                <BulkActionSelect
                    actions=actions
                    selected_count=Signal::derive(move || controller.state.with(|s| s.selected.len()))
                    on_action=on_action
                />
            </div>
            <div class="list-toolbar__right">
                <ColumnPicker controller=controller />
                <button
                    class="button button--secondary"
                    on:click=move |_| on_refresh.run(())
                    disabled=move || controller.loading.get()
                    title="Refresh"
                >
                    {icon("refresh")}
                </button>
                {children.map(|c| c())}
            </div>
        </div>
    }
}
