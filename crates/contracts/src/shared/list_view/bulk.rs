//! Массовые действия над выбранными строками и переключатели флагов.

use std::str::FromStr;

use super::api::{RecordApi, Resource};
use super::notify::Notifier;
use super::record::ListRecord;
use crate::shared::error::ApiError;
use crate::shared::export::{ExcelExportable, ExportTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Edit,
    Delete,
    ExportExcel,
}

impl BulkAction {
    pub const ALL: [BulkAction; 3] = [BulkAction::Edit, BulkAction::Delete, BulkAction::ExportExcel];

    pub fn as_str(self) -> &'static str {
        match self {
            BulkAction::Edit => "edit",
            BulkAction::Delete => "delete",
            BulkAction::ExportExcel => "exportExcel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BulkAction::Edit => "Edit",
            BulkAction::Delete => "Delete",
            BulkAction::ExportExcel => "Export Excel",
        }
    }
}

impl FromStr for BulkAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(BulkAction::Edit),
            "delete" => Ok(BulkAction::Delete),
            "exportExcel" => Ok(BulkAction::ExportExcel),
            other => Err(format!("unknown bulk action: {}", other)),
        }
    }
}

/// Что должен сделать экран после выбора действия
#[derive(Debug, Clone, PartialEq)]
pub enum BulkCommand {
    /// Preconditions not met, nothing happens
    Ignore,
    NavigateToEdit(String),
    /// One confirmation for all ids, then [`delete_sequentially`]
    ConfirmDelete(Vec<String>),
    Export(ExportTable),
}

pub fn plan_bulk_action<R>(action: BulkAction, selected: &[String], records: &[R]) -> BulkCommand
where
    R: ListRecord + ExcelExportable,
{
    match action {
        BulkAction::Edit => match selected {
            [id] => BulkCommand::NavigateToEdit(id.clone()),
            _ => BulkCommand::Ignore,
        },
        BulkAction::Delete if !selected.is_empty() => BulkCommand::ConfirmDelete(selected.to_vec()),
        BulkAction::ExportExcel if !selected.is_empty() => {
            let table = ExportTable::from_records(
                records
                    .iter()
                    .filter(|r| selected.iter().any(|id| id == r.record_id())),
            );
            if table.is_empty() {
                BulkCommand::Ignore
            } else {
                BulkCommand::Export(table)
            }
        }
        _ => BulkCommand::Ignore,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkDeleteReport {
    pub deleted: Vec<String>,
    pub failed: Vec<String>,
}

/// Удаляет записи по одной, по порядку, дожидаясь каждого ответа.
///
/// Успех сразу убирает запись через `on_removed`; ошибка только
/// сообщается, уже удалённые не восстанавливаются.
pub async fn delete_sequentially<R, A, N, F>(
    api: &A,
    ids: &[String],
    notifier: &N,
    mut on_removed: F,
) -> BulkDeleteReport
where
    R: Resource,
    A: RecordApi<R> + ?Sized,
    N: Notifier + ?Sized,
    F: FnMut(&str),
{
    let mut report = BulkDeleteReport::default();
    for id in ids {
        match api.delete(id).await {
            Ok(()) => {
                log::debug!("{} {} deleted", R::LABEL, id);
                on_removed(id);
                notifier.success(&format!("{} deleted successfully!", R::LABEL));
                report.deleted.push(id.clone());
            }
            Err(e) => {
                log::warn!("failed to delete {} {}: {}", R::LABEL, id, e);
                notifier.error(&format!("Failed to delete {} {}: {}", R::LABEL, id, e));
                report.failed.push(id.clone());
            }
        }
    }
    report
}

/// Меняет флаг на сервере; локальная запись патчится только после успеха.
pub async fn toggle_flag<R, A, N, F>(
    api: &A,
    id: &str,
    field: &str,
    value: bool,
    notifier: &N,
    apply: F,
) -> Result<(), ApiError>
where
    R: Resource,
    A: RecordApi<R> + ?Sized,
    N: Notifier + ?Sized,
    F: FnOnce(&str, &str, bool),
{
    match api.set_field(id, field, value).await {
        Ok(()) => {
            apply(id, field, value);
            notifier.success(&R::flag_message(field, value));
            Ok(())
        }
        Err(e) => {
            log::warn!("failed to set {}={} on {} {}: {}", field, value, R::LABEL, id, e);
            notifier.error(&R::flag_error_message(field));
            Err(e)
        }
    }
}

/// Локальный патч флага; false, если нет такой записи или поля.
pub fn apply_flag<R: ListRecord>(records: &mut [R], id: &str, field: &str, value: bool) -> bool {
    records
        .iter_mut()
        .find(|r| r.record_id() == id)
        .map(|r| r.set_flag(field, value))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_support::{alphabet, item, FakeApi, Item, RecordingNotifier};
    use futures::executor::block_on;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("edit".parse::<BulkAction>(), Ok(BulkAction::Edit));
        assert_eq!("exportExcel".parse::<BulkAction>(), Ok(BulkAction::ExportExcel));
        assert!("archive".parse::<BulkAction>().is_err());
        for action in BulkAction::ALL {
            assert_eq!(action.as_str().parse::<BulkAction>(), Ok(action));
        }
    }

    #[test]
    fn test_edit_requires_exactly_one() {
        let records = alphabet(3);
        assert_eq!(
            plan_bulk_action(BulkAction::Edit, &ids(&["id-01"]), &records),
            BulkCommand::NavigateToEdit("id-01".to_string())
        );
        assert_eq!(
            plan_bulk_action(BulkAction::Edit, &ids(&["id-01", "id-02"]), &records),
            BulkCommand::Ignore
        );
        assert_eq!(
            plan_bulk_action(BulkAction::Delete, &[], &records),
            BulkCommand::Ignore
        );
    }

    #[test]
    fn test_export_selected_only() {
        let records = vec![
            item("1", "Deluxe", 10.0),
            item("2", "Suite", 20.0),
            item("3", "Twin", 30.0),
        ];
        let command = plan_bulk_action(BulkAction::ExportExcel, &ids(&["3", "1"]), &records);
        let BulkCommand::Export(table) = command else {
            panic!("expected export");
        };
        assert_eq!(table.headers, vec!["_id", "Name", "Status"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "Deluxe", "Inactive"]);
        assert_eq!(table.rows[1][0], "3");
    }

    #[test]
    fn test_bulk_delete_with_one_failure() {
        let api = FakeApi::new(alphabet(5));
        api.fail_on("id-03");
        let notifier = RecordingNotifier::default();
        let mut local = alphabet(5);

        let selected = ids(&["id-01", "id-03", "id-05"]);
        let report = block_on(delete_sequentially::<Item, _, _, _>(&api, &selected, &notifier, |id| {
            local.retain(|r: &Item| r.record_id() != id)
        }));

        assert_eq!(report.deleted, ids(&["id-01", "id-05"]));
        assert_eq!(report.failed, ids(&["id-03"]));
        assert_eq!(local.len(), 3);
        assert!(local.iter().any(|r| r.record_id() == "id-03"));
        assert_eq!(notifier.successes().len(), 2);
        assert_eq!(notifier.errors().len(), 1);
        assert_eq!(api.delete_calls(), selected);
    }

    #[test]
    fn test_failed_toggle_leaves_state() {
        let api = FakeApi::new(alphabet(2));
        api.fail_on("id-01");
        let notifier = RecordingNotifier::default();
        let mut local = alphabet(2);

        let result = block_on(toggle_flag::<Item, _, _, _>(&api, "id-01", "active", true, &notifier, |id, f, v| {
            apply_flag(&mut local, id, f, v);
        }));

        assert!(result.is_err());
        assert!(!local[0].active);
        assert_eq!(local[0].status_label(), "Inactive");
        assert_eq!(notifier.errors(), vec!["Failed to update item status"]);
        assert!(notifier.successes().is_empty());
    }

    #[test]
    fn test_successful_toggle_patches_record() {
        let api = FakeApi::new(alphabet(2));
        let notifier = RecordingNotifier::default();
        let mut local = alphabet(2);

        let result = block_on(toggle_flag::<Item, _, _, _>(&api, "id-02", "active", true, &notifier, |id, f, v| {
            apply_flag(&mut local, id, f, v);
        }));

        assert!(result.is_ok());
        assert!(local[1].active);
        assert_eq!(notifier.successes(), vec!["Item is now Active"]);
        assert!(!apply_flag(&mut local, "missing", "active", true));
        assert!(!apply_flag(&mut local, "id-01", "unknown", true));
    }
}
