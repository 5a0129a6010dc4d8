//! Чекбокс в заголовке таблицы для выбора всех видимых строк
//!
//! # Пример
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     visible_ids=Signal::derive(move || controller.visible_ids())
//!     selected=Signal::derive(move || controller.state.with(|s| s.selected.clone()))
//!     on_toggle=Callback::new(move |_| controller.toggle_select_all())
//! />
//! ```

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

fn checkbox_state(visible_ids: &[String], selected: &[String]) -> CheckboxState {
    let selected_count = visible_ids
        .iter()
        .filter(|id| selected.contains(id))
        .count();
    if visible_ids.is_empty() || selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == visible_ids.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Три состояния: unchecked, checked, indeterminate (часть страницы выбрана).
///
/// Клик всегда уходит в `on_toggle`: всё выбрано -> снять, иначе выбрать страницу.
#[component]
pub fn TableHeaderCheckbox(
    /// Id строк текущей страницы
    #[prop(into)]
    visible_ids: Signal<Vec<String>>,

    /// Выбранные ID
    #[prop(into)]
    selected: Signal<Vec<String>>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    let state = Signal::derive(move || {
        visible_ids.with(|ids| selected.with(|sel| checkbox_state(ids, sel)))
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Select page"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |_| on_toggle.run(())
            />
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_checkbox_state() {
        let page = ids(&["a", "b"]);
        assert_eq!(checkbox_state(&page, &[]), CheckboxState::Unchecked);
        assert_eq!(checkbox_state(&page, &ids(&["b"])), CheckboxState::Indeterminate);
        assert_eq!(checkbox_state(&page, &ids(&["a", "b", "z"])), CheckboxState::Checked);
        assert_eq!(checkbox_state(&[], &ids(&["a"])), CheckboxState::Unchecked);
    }
}
