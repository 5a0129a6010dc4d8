use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::export::ExcelExportable;
use crate::shared::list_view::{CellValue, ColumnDef, ListRecord, SortSpec};

/// Покупатель (гость), выведенный из списка бронирований.
///
/// `id` совпадает с id первого бронирования этого гостя, поэтому
/// "просмотр" покупателя открывает это бронирование.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl ListRecord for Customer {
    const LABEL: &'static str = "Customer";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ]
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("fullName", "Guest Name", |r: &Self| CellValue::text(r.full_name())),
            ColumnDef::new("email", "Email", |r: &Self| CellValue::text(&r.email)),
            ColumnDef::new("phone", "Phone", |r: &Self| CellValue::text(&r.phone)),
            ColumnDef::new("createdAt", "Created At", |r: &Self| CellValue::Date(r.created_at)),
            ColumnDef::new("updatedAt", "Updated At", |r: &Self| CellValue::Date(r.updated_at))
                .hidden(),
        ]
    }

    fn default_sort() -> SortSpec {
        SortSpec::desc("createdAt")
    }
}

impl ExcelExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec!["_id", "First Name", "Last Name", "Email", "Phone"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}
