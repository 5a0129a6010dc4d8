//! Тестовая запись, in-memory API и уведомитель для unit-тестов списков.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use super::api::{RecordApi, Resource};
use super::cell::CellValue;
use super::notify::Notifier;
use super::record::{ColumnDef, ListRecord};
use super::view_state::SortSpec;
use crate::shared::error::ApiError;
use crate::shared::export::{flag_label, ExcelExportable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

impl ListRecord for Item {
    const LABEL: &'static str = "Item";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("name", "Name", |r: &Item| CellValue::text(&r.name)),
            ColumnDef::new("price", "Price", |r: &Item| CellValue::Money(r.price)),
            ColumnDef::new("active", "Status", |r: &Item| {
                CellValue::flag(r.active, "Active", "Inactive")
            }),
            ColumnDef::new("createdAt", "Created At", |r: &Item| CellValue::Date(r.created_at)).hidden(),
        ]
    }

    fn default_sort() -> SortSpec {
        SortSpec::asc("name")
    }

    fn set_flag(&mut self, field: &str, value: bool) -> bool {
        match field {
            "active" => {
                self.active = value;
                true
            }
            _ => false,
        }
    }

    fn flag_message(_field: &str, value: bool) -> String {
        format!("Item is now {}", if value { "Active" } else { "Inactive" })
    }

    fn flag_error_message(_field: &str) -> String {
        "Failed to update item status".to_string()
    }
}

impl Resource for Item {
    type Draft = ();
    const RESOURCE: &'static str = "/items";
}

impl ExcelExportable for Item {
    fn headers() -> Vec<&'static str> {
        vec!["_id", "Name", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            flag_label(self.active, "Active", "Inactive"),
        ]
    }
}

pub fn item(id: &str, name: &str, price: f64) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        price,
        active: false,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// `n` записей с именами "A", "B", ... и id "id-01", "id-02", ...
pub fn alphabet(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            let letter = char::from(b'A' + i as u8).to_string();
            let mut record = item(&format!("id-{:02}", i + 1), &letter, (n - i) as f64);
            record.created_at += Duration::days(i as i64);
            record
        })
        .collect()
}

#[derive(Default)]
pub struct FakeApi {
    records: RefCell<Vec<Item>>,
    failing: RefCell<Vec<String>>,
    deletes: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new(records: Vec<Item>) -> Self {
        Self {
            records: RefCell::new(records),
            ..Default::default()
        }
    }

    pub fn fail_on(&self, id: &str) {
        self.failing.borrow_mut().push(id.to_string());
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.deletes.borrow().clone()
    }

    fn check(&self, id: &str) -> Result<(), ApiError> {
        if self.failing.borrow().iter().any(|f| f == id) {
            return Err(ApiError::from_status(500, "internal error"));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl RecordApi<Item> for FakeApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        Ok(self.records.borrow().clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Item, ApiError> {
        self.records
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create(&self, _draft: &()) -> Result<Item, ApiError> {
        Err(ApiError::from_status(405, "not supported"))
    }

    async fn update(&self, _id: &str, _draft: &()) -> Result<Item, ApiError> {
        Err(ApiError::from_status(405, "not supported"))
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.deletes.borrow_mut().push(id.to_string());
        self.check(id)?;
        self.records.borrow_mut().retain(|r| r.id != id);
        Ok(())
    }

    async fn set_field(&self, id: &str, field: &str, value: bool) -> Result<(), ApiError> {
        self.check(id)?;
        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::NotFound)?;
        record.set_flag(field, value);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
