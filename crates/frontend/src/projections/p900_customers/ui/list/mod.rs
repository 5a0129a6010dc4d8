//! Покупатели: список строится из бронирований на клиенте.

use crate::domain::a003_booking::ui::list::open_booking_tab;
use crate::layout::global_context::AppGlobalContext;
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
use contracts::projections::p900_customers::dto::Customer;
use contracts::projections::p900_customers::projection::derive_customers;
use contracts::shared::error::ApiError;
use contracts::shared::list_view::{BulkAction, RecordApi};
use leptos::prelude::*;

const LIST_KEY: &str = "p900_customers";

#[component]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let bookings_api = RestApi::<Booking>::new(use_session());
    let controller = ListController::<Customer>::new();
    // Удаление покупателя удаляет его бронирование (id совпадают)
    let delete_request = DeleteRequest::new();

    let load = move || {
        controller.load_with(notifications, move || async move {
            let bookings = bookings_api.list().await?;
            Ok::<_, ApiError>(derive_customers(&bookings))
        })
    };

    Effect::new(move |_| {
        if ctx.is_active(LIST_KEY) {
            load();
        }
    });

    let view_customer = move |id: String| {
        let name = controller
            .records
            .with_untracked(|rows| rows.iter().find(|c| c.id == id).map(Customer::full_name))
            .unwrap_or_default();
        open_booking_tab(ctx, &id, &name);
    };

    let row_actions = Callback::new(move |customer: Customer| {
        let view_id = customer.id.clone();
        let delete_id = customer.id;
        view! {
            <div class="table__actions">
                <button class="button button--icon" title="View booking" on:click=move |_| view_customer(view_id.clone())>
                    {icon("eye")}
                </button>
                <button
                    class="button button--icon button--danger"
                    title="Delete booking"
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
                <h1 class="header__title">"Customers"</h1>
            </div>

            {move || controller.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <ListToolbar
                controller=controller
                actions=vec![BulkAction::Delete, BulkAction::ExportExcel]
                export_name="Customers"
                on_delete=Callback::new(move |ids| delete_request.request(ids))
                on_refresh=Callback::new(move |_| load())
            />

            <RecordTable controller=controller row_actions=row_actions />
            <ListPagination controller=controller />

            <DeleteConfirm request=delete_request api=bookings_api controller=controller />
        </PageFrame>
    }
}
