//! TabPage component - wrapper для отображения контента таба

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Рендерит контент таба через `registry::render_tab_content` один раз при открытии,
/// неактивные табы только скрываются.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = move || key.with_value(|k| tabs_store.is_active(k));

    log::debug!("tab page created: {}", tab.key);
    let key_for_cleanup = tab.key.clone();
    on_cleanup(move || log::debug!("tab page destroyed: {}", key_for_cleanup));

    let content = render_tab_content(&tab.key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key
        >
            {content}
        </div>
    }
}
