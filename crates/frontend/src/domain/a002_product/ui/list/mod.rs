use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::api::RestApi;
use crate::shared::components::delete_confirm::{DeleteConfirm, DeleteRequest};
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::pagination_controls::ListPagination;
use crate::shared::components::table::{CellOverride, RecordTable};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::context::use_session;
use contracts::domain::a002_product::aggregate::{Product, FIELD_IS_ACTIVE, FIELD_NEW_ARRIVAL};
use contracts::shared::list_view::{toggle_flag, BulkAction, ListRecord, RecordApi};
use leptos::prelude::*;
use leptos::task::spawn_local;

const LIST_KEY: &str = "a002_product";

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let api = RestApi::<Product>::new(use_session());
    let controller = ListController::<Product>::new();
    let delete_request = DeleteRequest::new();
    // "id:field" переключателей, ожидающих ответа
    let toggling = RwSignal::new(Vec::<String>::new());

    let load = move || controller.load_with(notifications, move || async move { api.list().await });

    Effect::new(move |_| {
        if ctx.is_active(LIST_KEY) {
            load();
        }
    });

    let open_details = move |id: Option<String>| {
        let title = match &id {
            Some(id) => controller
                .records
                .with_untracked(|rows| rows.iter().find(|r| &r.id == id).map(|r| r.name.clone()))
                .unwrap_or_else(|| id.clone()),
            None => "New".to_string(),
        };
        ctx.open_tab(
            &detail_tab_key(LIST_KEY, id.as_deref()),
            &detail_tab_label(Product::LABEL, &title),
        );
    };

    // Локальная запись меняется только после ответа сервера
    let toggle = move |id: String, field: &'static str, value: bool| {
        let busy_key = format!("{}:{}", id, field);
        if toggling.with_untracked(|t| t.contains(&busy_key)) {
            return;
        }
        toggling.update(|t| t.push(busy_key.clone()));
        spawn_local(async move {
            let toggled = toggle_flag::<Product, _, _, _>(
                &api,
                &id,
                field,
                value,
                &notifications,
                |id, field, value| controller.patch_flag(id, field, value),
            )
            .await;
            // Ошибка уже показана через notifier, запись не менялась
            if let Err(e) = toggled {
                log::debug!("product {}: {} unchanged: {}", id, field, e);
            }
            toggling.try_update(|t| t.retain(|k| k != &busy_key));
        });
    };

    let cell_override: CellOverride<Product> = Callback::new(move |(product, key): (Product, &'static str)| {
        let (value, on, off) = match key {
            FIELD_IS_ACTIVE => (product.is_active, "Active", "Inactive"),
            FIELD_NEW_ARRIVAL => (product.new_arrival, "New Arrival", "Standard"),
            _ => return None,
        };
        let busy_key = format!("{}:{}", product.id, key);
        let id = product.id;
        Some(
            view! {
                <button
                    class="toggle-button"
                    class:toggle-button--on=value
                    disabled=move || toggling.with(|t| t.contains(&busy_key))
                    title="Click to switch"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        toggle(id.clone(), key, !value);
                    }
                >
                    {if value { on } else { off }}
                </button>
            }
            .into_any(),
        )
    });

    let row_actions = Callback::new(move |product: Product| {
        let edit_id = product.id.clone();
        let delete_id = product.id;
        view! {
            <div class="table__actions">
                <button class="button button--icon" title="Edit" on:click=move |_| open_details(Some(edit_id.clone()))>
                    {icon("edit")}
                </button>
                <button
                    class="button button--icon button--danger"
                    title="Delete"
                    on:click=move |_| delete_request.request(vec![delete_id.clone()])
                >
                    {icon("trash")}
                </button>
            </div>
        }
        .into_any()
    });

    view! {
        <PageFrame entity=LIST_KEY category=PageCategory::List>
            <div class="header">
                <h1 class="header__title">"Products"</h1>
            </div>

            {move || controller.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <ListToolbar
                controller=controller
                actions=BulkAction::ALL.to_vec()
                export_name="Products"
                on_edit=Callback::new(move |id| open_details(Some(id)))
                on_delete=Callback::new(move |ids| delete_request.request(ids))
                on_refresh=Callback::new(move |_| load())
            >
                <button class="button button--primary" on:click=move |_| open_details(None)>
                    {icon("plus")}
                    "Add Product"
                </button>
            </ListToolbar>

            <RecordTable controller=controller row_actions=row_actions cell_override=cell_override />
            <ListPagination controller=controller />

            <DeleteConfirm request=delete_request api=api controller=controller />
        </PageFrame>
    }
}
