//! Поле формы деталей, привязанное к одному полю структуры формы.

use leptos::prelude::*;

#[component]
pub fn FormField<F>(
    form: RwSignal<F>,
    id: &'static str,
    label: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    /// "text" по умолчанию
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)]
    placeholder: &'static str,
    /// textarea вместо input
    #[prop(optional)]
    multiline: bool,
    #[prop(optional)]
    required: bool,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    let value = move || form.with(get);
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        form.update(|f| set(f, text));
    };

    let control = if multiline {
        view! {
            <textarea id=id prop:value=value on:input=on_input placeholder=placeholder rows="3" />
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type.unwrap_or("text")
                id=id
                prop:value=value
                on:input=on_input
                placeholder=placeholder
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=id>
                {label}
                {required.then_some(" *")}
            </label>
            {control}
        </div>
    }
}

/// Чекбокс формы
#[component]
pub fn FormCheckbox<F>(
    form: RwSignal<F>,
    id: &'static str,
    label: &'static str,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <div class="form-group form-group--checkbox">
            <input
                type="checkbox"
                id=id
                prop:checked=move || form.with(get)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| set(f, checked));
                }
            />
            <label for=id>{label}</label>
        </div>
    }
}
