use contracts::shared::list_view::BulkAction;
use leptos::prelude::*;

/// Select массовых действий. После выбора сбрасывается в пустое значение.
#[component]
pub fn BulkActionSelect(
    /// Доступные действия
    actions: Vec<BulkAction>,
    /// Сколько строк выбрано (0 блокирует select)
    #[prop(into)]
    selected_count: Signal<usize>,
    on_action: Callback<BulkAction>,
) -> impl IntoView {
    let select_ref = NodeRef::<leptos::html::Select>::new();

    view! {
        <div class="bulk-actions">
            <select
                node_ref=select_ref
                class="bulk-actions__select"
                disabled=move || selected_count.get() == 0
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    match value.parse::<BulkAction>() {
                        Ok(action) => on_action.run(action),
                        Err(e) => log::debug!("{}", e),
                    }
                    if let Some(select) = select_ref.get() {
                        select.set_value("");
                    }
                }
            >
                <option value="" selected=true>"Bulk actions"</option>
                {actions.into_iter().map(|action| view! {
                    <option value=action.as_str()>{action.label()}</option>
                }).collect_view()}
            </select>
            <span class="bulk-actions__count">
                {move || match selected_count.get() {
                    0 => String::new(),
                    n => format!("{} selected", n),
                }}
            </span>
        </div>
    }
}
