use super::model::booking_sections;
use super::view_model::BookingDetailsViewModel;
use crate::shared::api::RestApi;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::delete_confirm::confirm_message;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use thaw::*;

/// Карточка бронирования (только просмотр)
#[component]
pub fn BookingDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let vm = BookingDetailsViewModel::new(RestApi::new(use_session()), id);
    vm.load(notifications);

    let confirm_open = RwSignal::new(false);

    let content = move || {
        let Some(booking) = vm.booking.get() else {
            return vm
                .error
                .get()
                .map(|e| view! { <div class="warning-box">"Booking not found: " {e}</div> })
                .into_any();
        };
        let paid = booking.payment_status;
        let payment_label = booking.payment_label();
        view! {
            <div class="details-header">
                <h3>"Booking Details"</h3>
                <Badge
                    appearance=BadgeAppearance::Tint
                    color=if paid { BadgeColor::Success } else { BadgeColor::Warning }
                >
                    {payment_label}
                </Badge>
            </div>
            <div class="details-sections">
                {booking_sections(&booking).into_iter().map(|(title, rows)| view! {
                    <section class="details-section">
                        <h4>{title}</h4>
                        <dl class="details-list">
                            {rows.into_iter().map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            }).collect_view()}
                        </dl>
                    </section>
                }).collect_view()}
            </div>
            <div class="details-meta">
                {format!(
                    "Created {} · Updated {}",
                    format_datetime(&booking.created_at),
                    format_datetime(&booking.updated_at)
                )}
            </div>
            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || vm.busy.get()
                    on:click=move |_| vm.toggle_payment_command(notifications)
                >
                    {icon("wallet")}
                    {if paid { "Mark as Unpaid" } else { "Mark as Paid" }}
                </button>
                <button
                    class="btn btn-danger"
                    disabled=move || vm.busy.get()
                    on:click=move |_| confirm_open.set(true)
                >
                    {icon("trash")}
                    "Delete"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    "Close"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <PageFrame entity="a003_booking" category=PageCategory::Detail>
            <div class="details-container">
                <Show when=move || vm.loading.get()>
                    <div class="details-loading">"Loading..."</div>
                </Show>
                {content}
            </div>
            <ConfirmDialog
                open=confirm_open
                title="Confirm delete"
                message=Signal::derive(|| confirm_message("Booking", 1))
                on_confirm=Callback::new(move |_| vm.delete_command(notifications, on_close))
            />
        </PageFrame>
    }
}
