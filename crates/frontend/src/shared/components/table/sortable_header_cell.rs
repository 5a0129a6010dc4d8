//! Сортируемая ячейка заголовка таблицы

use crate::shared::list_utils::get_sort_indicator;
use contracts::shared::list_view::SortSpec;
use leptos::prelude::*;

/// Добавляет индикатор сортировки (▲▼⇅); клик отдаёт ключ колонки в `on_sort`.
/// Несортируемая колонка рендерится как обычный заголовок.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    label: &'static str,

    /// Ключ колонки
    column: &'static str,

    sortable: bool,

    #[prop(into)]
    sort: Signal<SortSpec>,

    on_sort: Callback<&'static str>,
) -> impl IntoView {
    if !sortable {
        return view! { <th class="table__header-cell">{label}</th> }.into_any();
    }

    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            class:table__header-cell--sorted=move || sort.get().column == column
            on:click=move |_| on_sort.run(column)
            title="Sort"
        >
            {label}
            <span class="table__sort-indicator">
                {move || get_sort_indicator(&sort.get(), column)}
            </span>
        </th>
    }
    .into_any()
}
