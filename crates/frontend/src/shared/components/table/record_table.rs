//! Универсальная таблица списка поверх `ListController`.
//!
//! Колонки берутся из `ListRecord::columns()` с учётом видимости,
//! строки из текущего среза (filter -> sort -> paginate).

use super::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::list_controller::ListController;
use contracts::shared::list_view::{CellValue, ListRecord};
use leptos::prelude::*;
use thaw::*;

/// Своя отрисовка ячейки: `(record, column_key)`. `None` -> стандартная.
pub type CellOverride<R> = Callback<(R, &'static str), Option<AnyView>>;

fn render_cell(value: CellValue) -> AnyView {
    match value {
        CellValue::Image(Some(url)) => {
            view! { <img class="table__thumb" src=url alt="" /> }.into_any()
        }
        CellValue::Image(None) => {
            view! { <span class="table__muted">"No image"</span> }.into_any()
        }
        CellValue::Flag { value, on, off } => {
            let color = if value {
                BadgeColor::Success
            } else {
                BadgeColor::Informative
            };
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>
                    {if value { on } else { off }}
                </Badge>
            }
            .into_any()
        }
        other => other.display().into_any(),
    }
}

#[component]
pub fn RecordTable<R>(
    controller: ListController<R>,

    /// Кнопки в последней колонке "Actions"
    #[prop(optional)]
    row_actions: Option<Callback<R, AnyView>>,

    #[prop(optional)]
    cell_override: Option<CellOverride<R>>,

    #[prop(optional)]
    on_row_click: Option<Callback<R>>,
) -> impl IntoView
where
    R: ListRecord + PartialEq + Send + Sync,
{
    let has_actions = row_actions.is_some();
    let sort = Signal::derive(move || controller.state.with(|s| s.sort));
    let on_sort = Callback::new(move |column: &'static str| controller.toggle_sort(column));

    let header = move || {
        controller
            .visible_columns()
            .into_iter()
            .map(|col| {
                view! {
                    <SortableHeaderCell
                        label=col.title
                        column=col.key
                        sortable=col.sortable
                        sort=sort
                        on_sort=on_sort
                    />
                }
            })
            .collect_view()
    };

    let body = move || {
        let slice = controller.slice().get();
        let columns = controller.visible_columns();
        let colspan = (columns.len() + 1 + usize::from(has_actions)).to_string();

        if slice.rows.is_empty() {
            let text = if controller.loading.get() {
                "Loading..."
            } else {
                "No records found"
            };
            return view! {
                <tr class="table__row">
                    <td class="table__cell table__cell--empty" colspan=colspan>{text}</td>
                </tr>
            }
            .into_any();
        }

        slice
            .rows
            .into_iter()
            .map(|record| {
                let id = record.record_id().to_string();
                let selected_id = id.clone();
                let is_selected =
                    Signal::derive(move || controller.state.with(|s| s.is_selected(&selected_id)));

                let cells = columns
                    .iter()
                    .map(|col| {
                        let custom = cell_override.and_then(|f| f.run((record.clone(), col.key)));
                        let content = custom.unwrap_or_else(|| render_cell(col.cell(&record)));
                        view! { <td class="table__cell">{content}</td> }
                    })
                    .collect_view();

                let actions = row_actions.map(|f| {
                    let content = f.run(record.clone());
                    view! {
                        <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                            {content}
                        </td>
                    }
                });

                let clicked = record.clone();
                view! {
                    <tr
                        class="table__row"
                        class:table__row--selected=is_selected
                        class:table__row--clickable=on_row_click.is_some()
                        on:click=move |_| {
                            if let Some(cb) = on_row_click {
                                cb.run(clicked.clone());
                            }
                        }
                    >
                        <TableCellCheckbox
                            item_id=id
                            checked=is_selected
                            on_change=Callback::new(move |(id, checked): (String, bool)| {
                                controller.set_selected(&id, checked)
                            })
                        />
                        {cells}
                        {actions}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <TableHeaderCheckbox
                            visible_ids=Signal::derive(move || controller.visible_ids())
                            selected=Signal::derive(move || controller.state.with(|s| s.selected.clone()))
                            on_toggle=Callback::new(move |_| controller.toggle_select_all())
                        />
                        {header}
                        {has_actions.then(|| view! {
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
