//! Клиентская модель списков: фильтр, сортировка, пагинация, видимость
//! колонок, выбор строк и массовые операции.
//!
//! Всё здесь чистое и не зависит от браузера; фронтенд только хранит
//! `ViewState` в сигнале и пересчитывает `visible_slice` при изменениях.

pub mod api;
pub mod bulk;
pub mod cell;
pub mod columns;
pub mod notify;
pub mod pipeline;
pub mod record;
pub mod view_state;

pub use api::{RecordApi, Resource};
pub use bulk::{
    apply_flag, delete_sequentially, plan_bulk_action, toggle_flag, BulkAction, BulkCommand,
    BulkDeleteReport,
};
pub use cell::{format_inr, CellValue};
pub use columns::ColumnVisibility;
pub use notify::Notifier;
pub use pipeline::{
    clamp_page, filter_records, paginate, sort_records, total_pages, visible_slice, VisibleSlice,
};
pub use record::{ColumnDef, ListRecord};
pub use view_state::{SortDirection, SortSpec, ViewState, DEFAULT_PAGE_SIZE, PAGE_SIZES};

#[cfg(test)]
pub(crate) mod test_support;
