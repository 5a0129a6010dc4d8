//! PageFrame: корневая обёртка каждой страницы внутри таба.
//!
//! Root element gets `id = "{tab key}--{category}"` and `data-page-category`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    List,
    Detail,
    Dashboard,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::Dashboard => "dashboard",
        }
    }

    fn class(self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::Dashboard => "page page--dashboard",
        }
    }
}

#[component]
pub fn PageFrame(
    /// Ключ таба, например `"a002_product"`
    entity: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=format!("{}--{}", entity, category.as_str())
            class=category.class()
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}
