use contracts::shared::list_view::SortSpec;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Задержка перед применением поиска, мс
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Поле поиска с debounce
///
/// Пока пользователь печатает, фильтр не пересчитывается; `on_change`
/// вызывается один раз через `SEARCH_DEBOUNCE_MS` после последнего ввода.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    // Each keystroke bumps the generation; only the latest timer fires
    let generation = StoredValue::new(0_u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let issued = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(issued) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                class="search-input__field"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: &SortSpec, column: &str) -> &'static str {
    if sort.column == column {
        sort.direction.indicator()
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortSpec::desc("price");
        assert_eq!(get_sort_indicator(&sort, "price"), " ▼");
        assert_eq!(get_sort_indicator(&SortSpec::asc("price"), "price"), " ▲");
        assert_eq!(get_sort_indicator(&sort, "name"), " ⇅");
    }
}
