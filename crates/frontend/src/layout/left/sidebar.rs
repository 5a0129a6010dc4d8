//! Боковое меню: группы разделов, клик по пункту открывает таб.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
}

fn menu_item(key: &'static str, icon_name: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon_name)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "d400_booking_summary",
            label: tab_label_for_key("d400_booking_summary"),
            icon: "bar-chart",
            items: vec![],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "package",
            items: vec![
                menu_item("a001_room_category", "bed"),
                menu_item("a002_product", "package"),
            ],
        },
        MenuGroup {
            id: "bookings",
            label: "Bookings",
            icon: "calendar",
            items: vec![
                menu_item("a003_booking", "calendar"),
                menu_item("p900_customers", "users"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["catalog".to_string(), "bookings".to_string()]);

    let toggle_group = move |gid: &str| {
        expanded_groups.update(|items| {
            if let Some(pos) = items.iter().position(|x| x == gid) {
                items.remove(pos);
            } else {
                items.push(gid.to_string());
            }
        });
    };

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let MenuGroup { id, label, icon: group_icon, items } = group;
                let has_children = !items.is_empty();

                let children = has_children.then(|| {
                    view! {
                        <Show when=move || expanded_groups.with(|g| g.iter().any(|x| x == id))>
                            <div class="app-sidebar__children">
                                {items.clone().into_iter().map(|(key, item_label, icon_name)| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.is_active(key)
                                        on:click=move |_| ctx.open_tab(key, item_label)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{item_label}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    }
                });

                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || !has_children && ctx.is_active(id)
                            on:click=move |_| {
                                if has_children {
                                    toggle_group(id);
                                } else {
                                    ctx.open_tab(id, label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group_icon)}
                                <span>{label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|g| g.iter().any(|x| x == id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>
                        {children}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
