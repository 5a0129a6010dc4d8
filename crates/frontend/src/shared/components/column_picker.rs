use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use contracts::shared::list_view::ListRecord;
use leptos::prelude::*;

/// Выпадающий список колонок с чекбоксами видимости
#[component]
pub fn ColumnPicker<R>(controller: ListController<R>) -> impl IntoView
where
    R: ListRecord + PartialEq + Send + Sync,
{
    let open = RwSignal::new(false);

    view! {
        <div class="column-picker">
            <button
                class="button button--secondary"
                on:click=move |_| open.update(|o| *o = !*o)
                title="Show or hide columns"
            >
                {icon("columns")}
                "Columns"
            </button>
            <Show when=move || open.get()>
                <div class="column-picker__menu">
                    {R::columns().into_iter().map(|column| {
                        let key = column.key;
                        view! {
                            <label class="column-picker__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || controller.state.with(|s| s.columns.is_visible(key))
                                    on:change=move |_| controller.toggle_column(key)
                                />
                                <span>{column.title}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
