//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::tab_labels::parse_detail_key;
use crate::dashboards::d400_booking_summary::ui::BookingSummaryDashboard;
use crate::domain::a001_room_category::ui::details::RoomCategoryDetails;
use crate::domain::a001_room_category::ui::list::RoomCategoryList;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_booking::ui::details::BookingDetails;
use crate::domain::a003_booking::ui::list::BookingList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_customers::ui::list::CustomerList;
use leptos::prelude::*;

/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "d400_booking_summary" => view! { <BookingSummaryDashboard /> }.into_any(),
        "a001_room_category" => view! { <RoomCategoryList /> }.into_any(),
        "a002_product" => view! { <ProductList /> }.into_any(),
        "a003_booking" => view! { <BookingList /> }.into_any(),
        "p900_customers" => view! { <CustomerList /> }.into_any(),
        k => {
            let key_for_close = k.to_string();
            let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));
            match parse_detail_key(k) {
                Some(("a001_room_category", id)) => view! {
                    <RoomCategoryDetails id=id.map(str::to_string) on_close=on_close />
                }
                .into_any(),
                Some(("a002_product", id)) => view! {
                    <ProductDetails id=id.map(str::to_string) on_close=on_close />
                }
                .into_any(),
                Some(("a003_booking", Some(id))) => view! {
                    <BookingDetails id=id.to_string() on_close=on_close />
                }
                .into_any(),
                _ => {
                    log::warn!("unknown tab key: {}", k);
                    view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
                }
            }
        }
    }
}
