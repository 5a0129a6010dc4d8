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
use contracts::domain::a003_booking::aggregate::Booking;
use contracts::shared::list_view::{BulkAction, ListRecord, RecordApi};
use leptos::prelude::*;

pub const LIST_KEY: &str = "a003_booking";

/// Открывает карточку бронирования (используется и списком покупателей)
pub fn open_booking_tab(ctx: AppGlobalContext, id: &str, guest: &str) {
    ctx.open_tab(
        &detail_tab_key(LIST_KEY, Some(id)),
        &detail_tab_label(Booking::LABEL, if guest.is_empty() { id } else { guest }),
    );
}

#[component]
pub fn BookingList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let api = RestApi::<Booking>::new(use_session());
    let controller = ListController::<Booking>::new();
    let delete_request = DeleteRequest::new();

    let load = move || controller.load_with(notifications, move || async move { api.list().await });

    Effect::new(move |_| {
        if ctx.is_active(LIST_KEY) {
            load();
        }
    });

    let open_by_id = move |id: String| {
        let guest = controller
            .records
            .with_untracked(|rows| rows.iter().find(|r| r.id == id).map(Booking::full_name))
            .unwrap_or_default();
        open_booking_tab(ctx, &id, &guest);
    };

    let row_actions = Callback::new(move |booking: Booking| {
        let view_id = booking.id.clone();
        let delete_id = booking.id;
        view! {
            <div class="table__actions">
                <button class="button button--icon" title="View" on:click=move |_| open_by_id(view_id.clone())>
                    {icon("eye")}
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
                <h1 class="header__title">"Bookings"</h1>
            </div>

            {move || controller.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <ListToolbar
                controller=controller
                actions=BulkAction::ALL.to_vec()
                export_name="Bookings"
                on_edit=Callback::new(open_by_id)
                on_delete=Callback::new(move |ids| delete_request.request(ids))
                on_refresh=Callback::new(move |_| load())
            />

            <RecordTable
                controller=controller
                row_actions=row_actions
                on_row_click=Callback::new(move |b: Booking| open_by_id(b.id))
            />
            <ListPagination controller=controller />

            <DeleteConfirm request=delete_request api=api controller=controller />
        </PageFrame>
    }
}
