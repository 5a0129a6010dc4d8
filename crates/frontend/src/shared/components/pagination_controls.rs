use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use contracts::shared::list_view::{ListRecord, PAGE_SIZES};
use leptos::prelude::*;

/// "Showing X to Y of Z entries"; для пустого результата "Showing 0 to 0 of 0 entries"
pub fn showing_label(range: (usize, usize), total: usize) -> String {
    format!("Showing {} to {} of {} entries", range.0, range.1, total)
}

/// PaginationControls component - reusable pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Records after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    /// First and last shown record, 1-based
    #[prop(into)]
    range: Signal<(usize, usize)>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination">
            <span class="pagination-info">
                {move || showing_label(range.get(), total_count.get())}
            </span>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=is_first
                    title="First page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=is_first
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-page">
                    {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=is_last
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(total_pages.get().max(1))
                    disabled=is_last
                    title="Last page"
                >
                    {icon("chevrons-right")}
                </button>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_page_size_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {PAGE_SIZES.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}

/// PaginationControls, подключённые к `ListController`
#[component]
pub fn ListPagination<R>(controller: ListController<R>) -> impl IntoView
where
    R: ListRecord + PartialEq + Send + Sync,
{
    let slice = controller.slice();
    let page_size = Signal::derive(move || controller.state.with(|s| s.page_size));

    view! {
        <PaginationControls
            current_page=Signal::derive(move || slice.with(|s| s.page))
            total_pages=Signal::derive(move || slice.with(|s| s.total_pages))
            total_count=Signal::derive(move || slice.with(|s| s.total))
            range=Signal::derive(move || slice.with(|s| s.range(page_size.get())))
            page_size=page_size
            on_page_change=Callback::new(move |page| controller.set_page(page))
            on_page_size_change=Callback::new(move |size| controller.set_page_size(size))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing_label() {
        assert_eq!(showing_label((11, 20), 25), "Showing 11 to 20 of 25 entries");
        assert_eq!(showing_label((0, 0), 0), "Showing 0 to 0 of 0 entries");
    }
}
