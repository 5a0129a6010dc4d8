//! Фильтр, сортировка и пагинация. Каждый вызов пересчитывает всё заново.

use super::cell::CellValue;
use super::record::ListRecord;
use super::view_state::{SortDirection, SortSpec, ViewState};

/// Результат конвейера для текущей страницы
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSlice<R> {
    pub rows: Vec<R>,
    /// Количество записей после фильтра
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl<R: ListRecord> VisibleSlice<R> {
    pub fn ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.record_id().to_string()).collect()
    }

    /// 1-based range shown in "Showing X to Y of Z entries"
    pub fn range(&self, page_size: usize) -> (usize, usize) {
        if self.rows.is_empty() {
            return (0, 0);
        }
        let start = (self.page - 1) * page_size + 1;
        (start, start + self.rows.len() - 1)
    }
}

/// Записи, у которых хотя бы одно поле поиска содержит запрос (без учёта регистра).
pub fn filter_records<R: ListRecord>(records: &[R], query: &str) -> Vec<R> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            r.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort by the column value, record id breaks ties.
///
/// Cell values are computed once per record. Unknown columns leave the order untouched.
pub fn sort_records<R: ListRecord>(records: &mut [R], sort: &SortSpec) {
    let Some(column) = R::column(sort.column) else {
        return;
    };
    let mut keyed: Vec<(CellValue, R)> = records
        .iter()
        .map(|r| (column.cell(r), r.clone()))
        .collect();
    keyed.sort_by(|(ka, a), (kb, b)| {
        let ord = ka
            .compare(kb)
            .then_with(|| a.record_id().cmp(b.record_id()));
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    for (slot, (_, record)) in records.iter_mut().zip(keyed) {
        *slot = record;
    }
}

/// Срез `[(page-1)*size, page*size)`. Страница за пределами даёт пустой срез.
pub fn paginate<R: Clone>(rows: &[R], page: usize, page_size: usize) -> Vec<R> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(rows.len());
    rows[start..end].to_vec()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Последняя допустимая страница, если текущая ушла за край.
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(count, page_size))
}

pub fn visible_slice<R: ListRecord>(records: &[R], state: &ViewState) -> VisibleSlice<R> {
    let mut filtered = filter_records(records, &state.query);
    sort_records(&mut filtered, &state.sort);
    VisibleSlice {
        rows: paginate(&filtered, state.page, state.page_size),
        total: filtered.len(),
        total_pages: total_pages(filtered.len(), state.page_size),
        page: state.page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_support::{alphabet, item, Item};

    fn names(rows: &[Item]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = alphabet(5);
        assert_eq!(filter_records(&records, ""), records);
        assert_eq!(filter_records(&records, "   "), records);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let records = vec![
            item("1", "Deluxe Room", 10.0),
            item("2", "Suite", 20.0),
            item("3", "deluxe twin", 30.0),
        ];
        let found = filter_records(&records, "DELUXE");
        assert_eq!(names(&found), vec!["Deluxe Room", "deluxe twin"]);
        assert!(filter_records(&records, "penthouse").is_empty());
    }

    #[test]
    fn test_reverse_direction_is_exact_reverse() {
        let mut asc = vec![
            item("1", "b", 3.0),
            item("2", "a", 1.0),
            item("3", "c", 2.0),
        ];
        let mut desc = asc.clone();
        sort_records(&mut asc, &SortSpec::asc("price"));
        sort_records(&mut desc, &SortSpec::desc("price"));
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(asc, reversed);
        assert_eq!(names(&asc), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_name_sort_uppercase_first() {
        let mut rows = vec![
            item("1", "apple", 1.0),
            item("2", "Banana", 2.0),
            item("3", "Cherry", 3.0),
        ];
        sort_records(&mut rows, &SortSpec::asc("name"));
        assert_eq!(names(&rows), vec!["Banana", "Cherry", "apple"]);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let mut rows = vec![
            item("3", "x", 1.0),
            item("1", "y", 1.0),
            item("2", "z", 1.0),
        ];
        sort_records(&mut rows, &SortSpec::asc("price"));
        let ids: Vec<&str> = rows.iter().map(|r| r.record_id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_pages_concatenate_to_full_list() {
        let records = alphabet(23);
        let mut state = ViewState::new::<Item>();
        state.set_page_size(10);

        let mut expected = filter_records(&records, &state.query);
        sort_records(&mut expected, &state.sort);

        let mut joined = Vec::new();
        for page in 1..=total_pages(records.len(), 10) {
            state.set_page(page);
            joined.extend(visible_slice(&records, &state).rows);
        }
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_twenty_five_records_page_size_ten() {
        let records = alphabet(25);
        let mut state = ViewState::new::<Item>();

        let first = visible_slice(&records, &state);
        assert_eq!(
            names(&first.rows),
            vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
        );
        assert_eq!(first.total, 25);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.range(10), (1, 10));

        state.set_page(3);
        let last = visible_slice(&records, &state);
        assert_eq!(names(&last.rows), vec!["Y"]);
        assert_eq!(last.range(10), (21, 21));
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let records = alphabet(12);
        let mut state = ViewState::new::<Item>();
        state.set_query("a");
        assert_eq!(visible_slice(&records, &state), visible_slice(&records, &state));
    }

    #[test]
    fn test_out_of_range_page() {
        let records = alphabet(5);
        assert!(paginate(&records, 4, 10).is_empty());
        assert!(paginate(&records, 0, 10).is_empty());
        assert_eq!(clamp_page(4, 5, 10), 1);
        assert_eq!(clamp_page(3, 25, 10), 3);
        assert_eq!(clamp_page(3, 20, 10), 2);
        assert_eq!(total_pages(0, 10), 1);
    }
}
