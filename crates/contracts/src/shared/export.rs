//! Табличная проекция записей для выгрузки в Excel (CSV).
//!
//! Сам файл формирует фронтенд (Blob + скачивание), здесь только
//! плоская таблица и сериализация в CSV, понятный Excel.

/// Trait для типов, которые могут быть экспортированы в Excel
pub trait ExcelExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Преобразует объект в массив значений для CSV
    fn to_csv_row(&self) -> Vec<String>;
}

/// Flattened table handed to the file generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn from_records<'a, T, I>(records: I) -> Self
    where
        T: ExcelExportable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            headers: T::headers(),
            rows: records.into_iter().map(|r| r.to_csv_row()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// CSV с BOM и разделителем `;`, чтобы Excel корректно открыл UTF-8.
    pub fn to_csv(&self) -> String {
        let mut csv_content = String::new();
        csv_content.push('\u{FEFF}');

        csv_content.push_str(&self.headers.join(";"));
        csv_content.push('\n');

        for row in &self.rows {
            let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
            csv_content.push_str(&escaped_row.join(";"));
            csv_content.push('\n');
        }

        csv_content
    }
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

/// Display string for boolean export columns.
pub fn flag_label(value: bool, on: &'static str, off: &'static str) -> String {
    if value { on } else { off }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        active: bool,
    }

    impl ExcelExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Status"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![
                self.name.to_string(),
                flag_label(self.active, "Active", "Inactive"),
            ]
        }
    }

    #[test]
    fn test_to_csv_escapes_and_maps_flags() {
        let rows = [
            Row { name: "Deluxe; sea view", active: true },
            Row { name: "Plain", active: false },
        ];
        let table = ExportTable::from_records(rows.iter());
        let csv = table.to_csv();

        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines[0], "Name;Status");
        assert_eq!(lines[1], "\"Deluxe; sea view\";Active");
        assert_eq!(lines[2], "Plain;Inactive");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_csv_cell(r#"say "hi""#), r#""say ""hi""""#);
        assert_eq!(escape_csv_cell("plain"), "plain");
    }
}
