use super::cell::CellValue;
use super::view_state::SortSpec;

/// Описание колонки таблицы списка.
pub struct ColumnDef<R> {
    /// Ключ колонки (имя поля на проводе, например `createdAt`)
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    pub hidden_by_default: bool,
    pub value: fn(&R) -> CellValue,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnDef<R> {}

impl<R> std::fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("hidden_by_default", &self.hidden_by_default)
            .finish()
    }
}

impl<R> ColumnDef<R> {
    pub fn new(key: &'static str, title: &'static str, value: fn(&R) -> CellValue) -> Self {
        Self {
            key,
            title,
            sortable: true,
            hidden_by_default: false,
            value,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden_by_default = true;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn cell(&self, record: &R) -> CellValue {
        (self.value)(record)
    }
}

/// Запись, которую умеет показывать универсальный список.
pub trait ListRecord: Clone + 'static {
    /// Human-readable singular name used in notices ("Room category")
    const LABEL: &'static str;

    fn record_id(&self) -> &str;

    /// Поля, по которым работает строка поиска
    fn search_fields(&self) -> Vec<&str>;

    fn columns() -> Vec<ColumnDef<Self>>;

    fn default_sort() -> SortSpec;

    /// Applies a boolean patch locally. Returns false for unknown fields.
    fn set_flag(&mut self, _field: &str, _value: bool) -> bool {
        false
    }

    /// Success notice after a flag was switched on the server.
    fn flag_message(_field: &str, _value: bool) -> String {
        format!("{} updated", Self::LABEL)
    }

    fn flag_error_message(_field: &str) -> String {
        format!("Failed to update {}", Self::LABEL.to_lowercase())
    }

    fn column(key: &str) -> Option<ColumnDef<Self>> {
        Self::columns().into_iter().find(|c| c.key == key)
    }
}
