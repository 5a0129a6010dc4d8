use serde::{Deserialize, Serialize};

use super::columns::ColumnVisibility;
use super::record::ListRecord;

/// Допустимые размеры страницы
pub const PAGE_SIZES: [usize; 6] = [10, 20, 30, 50, 100, 500];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}

/// Состояние представления списка
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub sort: SortSpec,
    /// Номер страницы, начиная с 1
    pub page: usize,
    pub page_size: usize,
    pub columns: ColumnVisibility,
    /// Выбранные id в порядке выбора
    pub selected: Vec<String>,
}

impl ViewState {
    pub fn new<R: ListRecord>() -> Self {
        Self {
            query: String::new(),
            sort: R::default_sort(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            columns: ColumnVisibility::from_schema(&R::columns()),
            selected: Vec::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Клик по заголовку: та же колонка меняет направление, новая начинает с Asc
    pub fn toggle_sort(&mut self, column: &'static str) {
        if self.sort.column == column {
            self.sort.direction = self.sort.direction.flip();
        } else {
            self.sort = SortSpec::asc(column);
        }
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Returns false (and changes nothing) for sizes outside [`PAGE_SIZES`].
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page = 1;
        true
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn toggle_selected(&mut self, id: &str) {
        let checked = !self.is_selected(id);
        self.set_selected(id, checked);
    }

    pub fn set_selected(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.is_selected(id) {
                self.selected.push(id.to_string());
            }
        } else {
            self.selected.retain(|s| s != id);
        }
    }

    /// Все видимые уже выбраны -> снять выбор, иначе выбрать видимые.
    pub fn toggle_select_all(&mut self, visible_ids: &[String]) {
        if self.all_selected(visible_ids) {
            self.selected.clear();
        } else {
            self.selected = visible_ids.to_vec();
        }
    }

    pub fn all_selected(&self, visible_ids: &[String]) -> bool {
        !visible_ids.is_empty() && visible_ids.iter().all(|id| self.is_selected(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Drops selected ids that no longer exist in the record set.
    pub fn prune_selection<'a, I>(&mut self, existing: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let existing: std::collections::HashSet<&str> = existing.into_iter().collect();
        self.selected.retain(|id| existing.contains(id.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_support::Item;

    #[test]
    fn test_defaults_from_schema() {
        let state = ViewState::new::<Item>();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 10);
        assert_eq!(state.sort, SortSpec::asc("name"));
        assert!(!state.columns.is_visible("createdAt"));
        assert!(state.columns.is_visible("name"));
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ViewState::new::<Item>();
        state.toggle_sort("name");
        assert_eq!(state.sort, SortSpec::desc("name"));
        state.toggle_sort("price");
        assert_eq!(state.sort, SortSpec::asc("price"));
    }

    #[test]
    fn test_query_and_page_size_reset_page() {
        let mut state = ViewState::new::<Item>();
        state.set_page(3);
        state.set_query("abc");
        assert_eq!(state.page, 1);

        state.set_page(4);
        assert!(!state.set_page_size(25));
        assert_eq!(state.page, 4);
        assert_eq!(state.page_size, 10);

        assert!(state.set_page_size(50));
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn test_selection() {
        let mut state = ViewState::new::<Item>();
        let visible = vec!["a".to_string(), "b".to_string()];

        state.toggle_selected("b");
        state.toggle_selected("c");
        assert_eq!(state.selected, vec!["b", "c"]);
        state.toggle_selected("b");
        assert_eq!(state.selected, vec!["c"]);

        state.toggle_select_all(&visible);
        assert_eq!(state.selected, visible);
        assert!(state.all_selected(&visible));

        state.toggle_select_all(&visible);
        assert!(state.selected.is_empty());
        assert!(!state.all_selected(&[]));
    }

    #[test]
    fn test_prune_selection() {
        let mut state = ViewState::new::<Item>();
        state.set_selected("a", true);
        state.set_selected("b", true);
        state.set_selected("a", true);
        state.prune_selection(["b", "z"]);
        assert_eq!(state.selected, vec!["b"]);
    }
}
