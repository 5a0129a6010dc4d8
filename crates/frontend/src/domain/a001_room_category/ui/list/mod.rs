use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::api::RestApi;
use crate::shared::components::delete_confirm::{DeleteConfirm, DeleteRequest};
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::pagination_controls::ListPagination;
use crate::shared::components::table::RecordTable;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::context::use_session;
use contracts::domain::a001_room_category::aggregate::RoomCategory;
use contracts::shared::list_view::{BulkAction, ListRecord, RecordApi};
use leptos::prelude::*;

const LIST_KEY: &str = "a001_room_category";

#[component]
pub fn RoomCategoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let api = RestApi::<RoomCategory>::new(use_session());
    let controller = ListController::<RoomCategory>::new();
    let delete_request = DeleteRequest::new();

    let load = move || controller.load_with(notifications, move || async move { api.list().await });

    // Перезагрузка при каждой активации таба: после сохранения в форме список актуален
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
            &detail_tab_label(RoomCategory::LABEL, &title),
        );
    };

    let row_actions = Callback::new(move |room: RoomCategory| {
        let edit_id = room.id.clone();
        let delete_id = room.id;
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
                <h1 class="header__title">"Room Categories"</h1>
            </div>

            {move || controller.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <ListToolbar
                controller=controller
                actions=BulkAction::ALL.to_vec()
                export_name="RoomCategories"
                on_edit=Callback::new(move |id| open_details(Some(id)))
                on_delete=Callback::new(move |ids| delete_request.request(ids))
                on_refresh=Callback::new(move |_| load())
            >
                <button class="button button--primary" on:click=move |_| open_details(None)>
                    {icon("plus")}
                    "Add Room Category"
                </button>
            </ListToolbar>

            <RecordTable controller=controller row_actions=row_actions />
            <ListPagination controller=controller />

            <DeleteConfirm request=delete_request api=api controller=controller />
        </PageFrame>
    }
}
