use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::export::{flag_label, ExcelExportable};
use crate::shared::list_view::{CellValue, ColumnDef, ListRecord, Resource, SortSpec};

pub const FIELD_IS_ACTIVE: &str = "isActive";
pub const FIELD_NEW_ARRIVAL: &str = "newArrival";

// ============================================================================
// Category reference
// ============================================================================

/// Ссылка на категорию: бэкенд отдаёт либо id строкой, либо populate-объект.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl CategoryRef {
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Populated { id, .. } => id,
        }
    }

    pub fn display(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Populated { id, name } => name.as_deref().unwrap_or(id),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub new_arrival: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            stock: self.stock,
            category: self.category.as_ref().map(|c| c.id().to_string()),
            image_url: self.image_url.clone(),
            is_active: self.is_active,
            new_arrival: self.new_arrival,
        }
    }
}

impl ListRecord for Product {
    const LABEL: &'static str = "Product";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("name", "Name", |r: &Self| CellValue::text(&r.name)),
            ColumnDef::new("description", "Description", |r: &Self| {
                CellValue::text(&r.description)
            }),
            ColumnDef::new("price", "Price", |r: &Self| CellValue::Money(r.price)),
            ColumnDef::new("stock", "Stock", |r: &Self| CellValue::Number(r.stock as f64)).hidden(),
            ColumnDef::new("imageUrl", "Image", |r: &Self| CellValue::Image(r.image_url.clone()))
                .unsortable(),
            ColumnDef::new(FIELD_NEW_ARRIVAL, "New Arrival", |r: &Self| {
                CellValue::flag(r.new_arrival, "New Arrival", "Standard")
            }),
            ColumnDef::new(FIELD_IS_ACTIVE, "Status", |r: &Self| {
                CellValue::flag(r.is_active, "Active", "Inactive")
            }),
            ColumnDef::new("createdAt", "Created At", |r: &Self| CellValue::Date(r.created_at))
                .hidden(),
            ColumnDef::new("updatedAt", "Updated At", |r: &Self| CellValue::Date(r.updated_at))
                .hidden(),
        ]
    }

    fn default_sort() -> SortSpec {
        SortSpec::asc("name")
    }

    fn set_flag(&mut self, field: &str, value: bool) -> bool {
        match field {
            FIELD_IS_ACTIVE => self.is_active = value,
            FIELD_NEW_ARRIVAL => self.new_arrival = value,
            _ => return false,
        }
        true
    }

    fn flag_message(field: &str, value: bool) -> String {
        match (field, value) {
            (FIELD_IS_ACTIVE, true) => "Product is now Active".to_string(),
            (FIELD_IS_ACTIVE, false) => "Product is now Inactive".to_string(),
            (FIELD_NEW_ARRIVAL, true) => "Product added to New Arrivals".to_string(),
            (FIELD_NEW_ARRIVAL, false) => "Product removed from New Arrivals".to_string(),
            _ => "Product updated".to_string(),
        }
    }

    fn flag_error_message(field: &str) -> String {
        match field {
            FIELD_NEW_ARRIVAL => "Failed to update new arrival status".to_string(),
            _ => "Failed to update product status".to_string(),
        }
    }
}

impl Resource for Product {
    type Draft = ProductDto;
    const RESOURCE: &'static str = "/products";
}

impl ExcelExportable for Product {
    fn headers() -> Vec<&'static str> {
        vec!["_id", "ProductName", "isActive", "newArrival", "Description"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            flag_label(self.is_active, "Active", "Inactive"),
            flag_label(self.new_arrival, "Yes", "No"),
            self.description.clone(),
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_active: bool,
    pub new_arrival: bool,
}

impl ProductDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be zero or greater".into());
        }
        if self.stock < 0 {
            return Err("Stock cannot be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{apply_flag, plan_bulk_action, BulkAction, BulkCommand, ViewState};

    fn product(id: &str, name: &str, is_active: bool, new_arrival: bool) -> Product {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "description": format!("{} description", name),
            "price": 250.0,
            "stock": 12,
            "category": { "_id": "c1", "name": "Toiletries" },
            "isActive": is_active,
            "newArrival": new_arrival,
            "createdAt": "2025-01-05T00:00:00Z",
            "updatedAt": "2025-01-06T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_category_forms() {
        let p = product("p1", "Soap", true, false);
        assert_eq!(p.category.as_ref().map(|c| c.id()), Some("c1"));
        assert_eq!(p.category.as_ref().map(|c| c.display()), Some("Toiletries"));

        let plain: CategoryRef = serde_json::from_str(r#""c2""#).unwrap();
        assert_eq!(plain.id(), "c2");
        assert_eq!(p.to_dto().category.as_deref(), Some("c1"));
    }

    #[test]
    fn test_default_hidden_columns() {
        let state = ViewState::new::<Product>();
        for key in ["stock", "createdAt", "updatedAt"] {
            assert!(!state.columns.is_visible(key), "{} should be hidden", key);
        }
        assert!(state.columns.is_visible(FIELD_IS_ACTIVE));
    }

    #[test]
    fn test_flag_patch_and_messages() {
        let mut records = vec![product("p1", "Soap", false, false)];
        assert!(apply_flag(&mut records, "p1", FIELD_IS_ACTIVE, true));
        assert!(apply_flag(&mut records, "p1", FIELD_NEW_ARRIVAL, true));
        assert!(records[0].is_active && records[0].new_arrival);
        assert!(!apply_flag(&mut records, "p1", "stock", true));

        assert_eq!(
            Product::flag_message(FIELD_NEW_ARRIVAL, false),
            "Product removed from New Arrivals"
        );
        assert_eq!(Product::flag_message(FIELD_IS_ACTIVE, true), "Product is now Active");
    }

    #[test]
    fn test_export_mapping() {
        let records = vec![
            product("p1", "Soap", true, false),
            product("p2", "Towel", false, true),
        ];
        let selected = vec!["p2".to_string()];
        let BulkCommand::Export(table) =
            plan_bulk_action(BulkAction::ExportExcel, &selected, &records)
        else {
            panic!("expected export");
        };
        assert_eq!(
            table.rows,
            vec![vec!["p2", "Towel", "Inactive", "Yes", "Towel description"]]
        );
    }
}
