use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::export::ExcelExportable;
use crate::shared::list_view::{CellValue, ColumnDef, ListRecord, Resource, SortSpec};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория номеров (тип комнаты)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    /// Максимальное количество гостей
    #[serde(default)]
    pub occupancy: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoomCategory {
    pub fn to_dto(&self) -> RoomCategoryDto {
        RoomCategoryDto {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            occupancy: self.occupancy,
            image_url: self.image_url.clone(),
        }
    }
}

impl ListRecord for RoomCategory {
    const LABEL: &'static str = "Room category";

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
            ColumnDef::new("occupancy", "Occupancy", |r: &Self| {
                CellValue::Number(r.occupancy as f64)
            }),
            ColumnDef::new("imageUrl", "Image", |r: &Self| CellValue::Image(r.image_url.clone()))
                .unsortable(),
            ColumnDef::new("createdAt", "Created At", |r: &Self| CellValue::Date(r.created_at))
                .hidden(),
            ColumnDef::new("updatedAt", "Updated At", |r: &Self| CellValue::Date(r.updated_at))
                .hidden(),
        ]
    }

    fn default_sort() -> SortSpec {
        SortSpec::asc("name")
    }
}

impl Resource for RoomCategory {
    type Draft = RoomCategoryDto;
    const RESOURCE: &'static str = "/room-category";
}

impl ExcelExportable for RoomCategory {
    fn headers() -> Vec<&'static str> {
        vec!["_id", "Name", "Description", "Price", "Occupancy"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            format!("{:.2}", self.price),
            self.occupancy.to_string(),
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории номеров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomCategoryDto {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub occupancy: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl RoomCategoryDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be zero or greater".into());
        }
        if self.occupancy == 0 {
            return Err("Occupancy must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{visible_slice, ViewState};

    const SAMPLE: &str = r#"{
        "_id": "66a1",
        "name": "Deluxe",
        "description": "Sea view",
        "price": 4500,
        "occupancy": 2,
        "imageUrl": "https://cdn.example.com/deluxe.jpg",
        "createdAt": "2025-03-01T10:00:00.000Z",
        "updatedAt": "2025-03-02T10:00:00.000Z"
    }"#;

    #[test]
    fn test_deserialize_wire_format() {
        let room: RoomCategory = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(room.id, "66a1");
        assert_eq!(room.price, 4500.0);
        assert_eq!(room.image_url.as_deref(), Some("https://cdn.example.com/deluxe.jpg"));
    }

    #[test]
    fn test_hidden_columns_by_default() {
        let state = ViewState::new::<RoomCategory>();
        assert!(!state.columns.is_visible("createdAt"));
        assert!(!state.columns.is_visible("updatedAt"));
        assert!(state.columns.is_visible("occupancy"));
    }

    #[test]
    fn test_search_by_name() {
        let room: RoomCategory = serde_json::from_str(SAMPLE).unwrap();
        let mut suite = room.clone();
        suite.id = "66a2".into();
        suite.name = "Suite".into();

        let mut state = ViewState::new::<RoomCategory>();
        state.set_query("sui");
        let slice = visible_slice(&[room, suite], &state);
        assert_eq!(slice.total, 1);
        assert_eq!(slice.rows[0].name, "Suite");
    }

    #[test]
    fn test_validate() {
        let mut dto = RoomCategoryDto {
            name: "Deluxe".into(),
            price: 100.0,
            occupancy: 2,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.price = -1.0;
        assert!(dto.validate().is_err());
        dto.price = 1.0;
        dto.name = "  ".into();
        assert_eq!(dto.validate(), Err("Name is required".to_string()));
    }
}
