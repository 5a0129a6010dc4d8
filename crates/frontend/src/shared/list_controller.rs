//! Реактивная обёртка над чистым list-view ядром из contracts.
//!
//! Один `ListController<R>` на экран списка: записи, `ViewState`,
//! флаги загрузки. Видимый срез пересчитывается через `visible_slice`
//! при любом изменении записей или состояния.

use std::future::Future;

use contracts::shared::error::ApiError;
use contracts::shared::list_view::{
    apply_flag, clamp_page, filter_records, visible_slice, ColumnDef, ListRecord, Notifier,
    ViewState, VisibleSlice,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct ListController<R: Send + Sync + 'static> {
    pub records: RwSignal<Vec<R>>,
    pub state: RwSignal<ViewState>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    slice: Memo<VisibleSlice<R>>,
}

impl<R: Send + Sync + 'static> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListController<R> {}

impl<R> ListController<R>
where
    R: ListRecord + PartialEq + Send + Sync,
{
    pub fn new() -> Self {
        let records = RwSignal::new(Vec::<R>::new());
        let state = RwSignal::new(ViewState::new::<R>());
        let slice = Memo::new(move |_| {
            let view_state = state.get();
            records.with(|rows| visible_slice(rows, &view_state))
        });
        Self {
            records,
            state,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            slice,
        }
    }

    /// Текущая страница после filter -> sort -> paginate
    pub fn slice(&self) -> Memo<VisibleSlice<R>> {
        self.slice
    }

    pub fn visible_columns(&self) -> Vec<ColumnDef<R>> {
        let schema = R::columns();
        self.state.with(|s| s.columns.visible_columns(&schema))
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.slice.with(|s| s.ids())
    }

    /// Выбранные записи в порядке хранения
    pub fn selected_records(&self) -> Vec<R> {
        let Some(selected) = self.state.try_with_untracked(|s| s.selected.clone()) else {
            return Vec::new();
        };
        self.records
            .try_with_untracked(|rows| {
                rows.iter()
                    .filter(|r| selected.iter().any(|id| id == r.record_id()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Экран закрыт, сигналы уже освобождены
    pub fn is_disposed(&self) -> bool {
        self.records.is_disposed() || self.state.is_disposed()
    }

    pub fn set_records(&self, records: Vec<R>) {
        if self.records.try_update(|rows| *rows = records).is_some() {
            self.settle();
        }
    }

    pub fn remove(&self, id: &str) {
        let removed = self
            .records
            .try_update(|rows| rows.retain(|r| r.record_id() != id));
        if removed.is_some() {
            self.settle();
        }
    }

    /// Replaces the record with the same id, or prepends a new one
    pub fn upsert(&self, record: R) {
        let updated = self.records.try_update(|rows| {
            match rows.iter_mut().find(|r| r.record_id() == record.record_id()) {
                Some(existing) => *existing = record,
                None => rows.insert(0, record),
            }
        });
        if updated.is_some() {
            self.settle();
        }
    }

    pub fn patch_flag(&self, id: &str, field: &str, value: bool) {
        let patched = self
            .records
            .try_update(|rows| apply_flag(rows, id, field, value));
        if patched == Some(false) {
            log::warn!("{}: no flag {} on record {}", R::LABEL, field, id);
        }
    }

    /// Убирает из выбора исчезнувшие id и возвращает страницу в допустимый диапазон.
    fn settle(&self) {
        let Some(query) = self.state.try_with_untracked(|s| s.query.clone()) else {
            return;
        };
        let Some((ids, filtered)) = self.records.try_with_untracked(|rows| {
            let ids: Vec<String> = rows.iter().map(|r| r.record_id().to_string()).collect();
            let filtered = if query.trim().is_empty() {
                rows.len()
            } else {
                filter_records(rows, &query).len()
            };
            (ids, filtered)
        }) else {
            return;
        };
        self.state.try_update(|s| {
            s.prune_selection(ids.iter().map(String::as_str));
            s.page = clamp_page(s.page, filtered, s.page_size);
        });
    }

    /// Загружает записи через переданный запрос; ошибка попадает в `error` и в уведомления.
    /// Предыдущий набор записей при ошибке остаётся на экране.
    pub fn load_with<N, F, Fut>(&self, notifier: N, fetch: F)
    where
        N: Notifier + 'static,
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<R>, ApiError>> + 'static,
    {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        spawn_local(async move {
            let result = fetch().await;
            this.finish_load(result, &notifier);
        });
    }

    fn finish_load<N: Notifier>(&self, result: Result<Vec<R>, ApiError>, notifier: &N) {
        if self.is_disposed() {
            log::debug!("{}: list closed before load finished", R::LABEL);
            return;
        }
        match result {
            Ok(records) => {
                log::debug!("{}: loaded {} records", R::LABEL, records.len());
                self.set_records(records);
            }
            Err(e) => {
                log::error!("{}: failed to load: {}", R::LABEL, e);
                let message = format!("Failed to load data: {}", e);
                notifier.error(&message);
                self.error.try_update(|e| *e = Some(message));
            }
        }
        self.loading.try_update(|l| *l = false);
    }

    pub fn set_query(&self, query: String) {
        self.state.update(|s| s.set_query(query));
    }

    pub fn toggle_sort(&self, column: &'static str) {
        self.state.update(|s| s.toggle_sort(column));
    }

    pub fn set_page(&self, page: usize) {
        let Some(total_pages) = self.slice.try_with_untracked(|s| s.total_pages) else {
            return;
        };
        self.state.try_update(|s| s.set_page(page.min(total_pages)));
    }

    pub fn set_page_size(&self, size: usize) {
        self.state.update(|s| {
            if !s.set_page_size(size) {
                log::warn!("page size {} is not allowed", size);
            }
        });
    }

    pub fn toggle_column(&self, key: &'static str) {
        self.state.update(|s| s.columns.toggle(key));
    }

    pub fn set_selected(&self, id: &str, checked: bool) {
        self.state.update(|s| s.set_selected(id, checked));
    }

    pub fn toggle_select_all(&self) {
        let ids = self.slice.with_untracked(|s| s.ids());
        self.state.update(|s| s.toggle_select_all(&ids));
    }

    pub fn clear_selection(&self) {
        self.state.update(|s| s.clear_selection());
    }
}

impl<R> Default for ListController<R>
where
    R: ListRecord + PartialEq + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_room_category::aggregate::RoomCategory;
    use leptos::reactive::owner::Owner;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, _message: &str) {}

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn room(id: &str, name: &str) -> RoomCategory {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "price": 1000,
            "occupancy": 2,
            "createdAt": "2025-03-01T10:00:00.000Z",
            "updatedAt": "2025-03-01T10:00:00.000Z"
        }))
        .unwrap()
    }

    /// r01..rNN; первые `deluxe` называются "Deluxe NN", остальные "Suite NN"
    fn rooms(count: usize, deluxe: usize) -> Vec<RoomCategory> {
        (1..=count)
            .map(|i| {
                let kind = if i <= deluxe { "Deluxe" } else { "Suite" };
                room(&format!("r{:02}", i), &format!("{} {:02}", kind, i))
            })
            .collect()
    }

    fn page(controller: &ListController<RoomCategory>) -> usize {
        controller.state.with_untracked(|s| s.page)
    }

    #[test]
    fn test_page_clamps_after_records_removed() {
        Owner::new().with(|| {
            let controller = ListController::<RoomCategory>::new();
            controller.set_records(rooms(25, 25));
            controller.set_page(3);
            assert_eq!(page(&controller), 3);

            for id in ["r20", "r21", "r22", "r23", "r24", "r25"] {
                controller.remove(id);
            }
            assert_eq!(page(&controller), 2);
            assert_eq!(controller.slice().with_untracked(|s| s.rows.len()), 9);
        });
    }

    #[test]
    fn test_set_page_capped_at_last_page() {
        Owner::new().with(|| {
            let controller = ListController::<RoomCategory>::new();
            controller.set_records(rooms(25, 25));
            controller.set_page(7);
            assert_eq!(page(&controller), 3);
        });
    }

    #[test]
    fn test_removed_id_is_pruned_from_selection() {
        Owner::new().with(|| {
            let controller = ListController::<RoomCategory>::new();
            controller.set_records(rooms(5, 5));
            controller.set_selected("r02", true);
            controller.set_selected("r03", true);

            controller.remove("r03");
            let selected = controller.state.with_untracked(|s| s.selected.clone());
            assert_eq!(selected, vec!["r02".to_string()]);
            assert_eq!(controller.selected_records().len(), 1);
        });
    }

    #[test]
    fn test_clamp_uses_filtered_count() {
        Owner::new().with(|| {
            let controller = ListController::<RoomCategory>::new();
            controller.set_records(rooms(25, 22));
            controller.set_query("deluxe".to_string());
            controller.set_page(3);
            assert_eq!(page(&controller), 3);

            // 22 записей без фильтра всё ещё дают 3 страницы, с фильтром только 2
            for id in ["r20", "r21", "r22"] {
                controller.remove(id);
            }
            assert_eq!(page(&controller), 2);
        });
    }

    #[test]
    fn test_failed_load_keeps_previous_records() {
        Owner::new().with(|| {
            let controller = ListController::<RoomCategory>::new();
            let notifier = RecordingNotifier::default();
            controller.set_records(rooms(3, 3));

            controller.finish_load(Err(ApiError::Network("offline".to_string())), &notifier);

            assert_eq!(controller.records.with_untracked(Vec::len), 3);
            assert_eq!(
                controller.error.get_untracked().as_deref(),
                Some("Failed to load data: network error: offline")
            );
            assert!(!controller.loading.get_untracked());
            assert_eq!(notifier.errors.borrow().len(), 1);
        });
    }

    #[test]
    fn test_closed_list_ignores_late_results() {
        let owner = Owner::new();
        let controller = owner.with(ListController::<RoomCategory>::new);
        owner.cleanup();
        assert!(controller.is_disposed());

        let notifier = RecordingNotifier::default();
        controller.set_records(rooms(2, 2));
        controller.remove("r01");
        controller.upsert(room("r09", "Suite 09"));
        controller.patch_flag("r01", "isActive", true);
        controller.set_page(2);
        controller.finish_load(Ok(rooms(4, 4)), &notifier);
        controller.finish_load(Err(ApiError::NotFound), &notifier);
        assert!(controller.selected_records().is_empty());
        assert!(notifier.errors.borrow().is_empty());
    }
}
