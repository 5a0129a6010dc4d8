//! Дашборд бронирований: карточки итогов, три графика, последние бронирования.

mod series;

use self::series::{payment_points, recent_bookings, revenue_points, room_points, RECENT_LIMIT};
use crate::domain::a003_booking::ui::list::open_booking_tab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::RestApi;
use crate::shared::components::charts::{BarChart, LineChart, PieChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::context::use_session;
use contracts::dashboards::d400_booking_summary::summary::summarize;
use contracts::domain::a003_booking::aggregate::Booking;
use contracts::shared::list_view::{format_inr, Notifier, RecordApi};
use leptos::prelude::*;
use leptos::task::spawn_local;

const TAB_KEY: &str = "d400_booking_summary";

#[component]
pub fn BookingSummaryDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let api = RestApi::<Booking>::new(use_session());

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let summary = Memo::new(move |_| bookings.with(|b| summarize(b)));

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api.list().await {
                Ok(rows) => {
                    log::debug!("dashboard: {} bookings", rows.len());
                    bookings.try_set(rows);
                }
                Err(e) => {
                    log::error!("dashboard: failed to load bookings: {}", e);
                    notifications.error("Failed to fetch bookings");
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        if ctx.is_active(TAB_KEY) {
            load();
        }
    });

    let totals = move || summary.with(|s| s.totals.clone());

    view! {
        <PageFrame entity=TAB_KEY category=PageCategory::Dashboard>
            <div class="header">
                <h1 class="header__title">"Admin Dashboard"</h1>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| load()
                        disabled=move || loading.get()
                        title="Refresh"
                    >
                        {icon("refresh")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <div class="dashboard__cards">
                <StatCard
                    label="Total Bookings"
                    icon_name="calendar"
                    value=Signal::derive(move || totals().bookings.to_string())
                    accent="stat-card--primary"
                />
                <StatCard
                    label="Total Rooms"
                    icon_name="bed"
                    value=Signal::derive(move || totals().rooms.to_string())
                    subtitle=Signal::derive(|| Some("Distinct rooms booked".to_string()))
                />
                <StatCard
                    label="Total Customers"
                    icon_name="users"
                    value=Signal::derive(move || totals().customers.to_string())
                    accent="stat-card--success"
                />
                <StatCard
                    label="Revenue"
                    icon_name="wallet"
                    value=Signal::derive(move || format_inr(totals().revenue))
                    accent="stat-card--warning"
                />
            </div>

            <div class="dashboard__charts">
                <LineChart
                    title="Monthly Revenue"
                    points=Signal::derive(move || summary.with(revenue_points))
                />
                <BarChart
                    title="Bookings by Room"
                    points=Signal::derive(move || summary.with(room_points))
                />
                <PieChart
                    title="Payment Status"
                    points=Signal::derive(move || summary.with(payment_points))
                />
            </div>

            <div class="dashboard__recent">
                <h2>"Recent Bookings"</h2>
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Guest"</th>
                            <th class="table__header-cell">"Room"</th>
                            <th class="table__header-cell">"Check-in"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = bookings.with(|b| recent_bookings(b, RECENT_LIMIT));
                            if rows.is_empty() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="5">"No bookings yet"</td></tr>
                                }
                                .into_any();
                            }
                            rows.into_iter().map(|row| {
                                let id = row.id.clone();
                                let guest = row.guest.clone();
                                view! {
                                    <tr
                                        class="table__row table__row--clickable"
                                        on:click=move |_| open_booking_tab(ctx, &id, &guest)
                                    >
                                        <td class="table__cell">{row.guest}</td>
                                        <td class="table__cell">{row.room}</td>
                                        <td class="table__cell">{row.check_in}</td>
                                        <td class="table__cell">{row.amount}</td>
                                        <td class="table__cell">{if row.paid { "Paid" } else { "Unpaid" }}</td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
