use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::export::{flag_label, ExcelExportable};
use crate::shared::list_view::{
    format_inr, CellValue, ColumnDef, ListRecord, Resource, SortSpec,
};

pub const FIELD_PAYMENT_STATUS: &str = "paymentStatus";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Бронирование номера гостем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    #[serde(default)]
    pub nights_count: u32,
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub room_name: String,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub sub_total: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub total_amount: f64,
    /// true = оплачено
    #[serde(default)]
    pub payment_status: bool,
    #[serde(default)]
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn payment_label(&self) -> &'static str {
        if self.payment_status {
            "Paid"
        } else {
            "Unpaid"
        }
    }
}

impl ListRecord for Booking {
    const LABEL: &'static str = "Booking";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.room_name.as_str(),
        ]
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("fullName", "Guest Name", |r: &Self| CellValue::text(r.full_name())),
            ColumnDef::new("email", "Email", |r: &Self| CellValue::text(&r.email)),
            ColumnDef::new("phone", "Phone", |r: &Self| CellValue::text(&r.phone)),
            ColumnDef::new("checkInDate", "Check-in Date", |r: &Self| {
                CellValue::Date(r.check_in_date)
            }),
            ColumnDef::new("checkOutDate", "Check-out Date", |r: &Self| {
                CellValue::Date(r.check_out_date)
            }),
            ColumnDef::new("nightsCount", "Nights", |r: &Self| {
                CellValue::Number(r.nights_count as f64)
            }),
            ColumnDef::new("roomName", "Room", |r: &Self| CellValue::text(&r.room_name)),
            ColumnDef::new("basePrice", "Base Price", |r: &Self| CellValue::Money(r.base_price)),
            ColumnDef::new("subTotal", "Subtotal", |r: &Self| CellValue::Money(r.sub_total)).hidden(),
            ColumnDef::new("tax", "Tax", |r: &Self| CellValue::Money(r.tax)).hidden(),
            ColumnDef::new("totalAmount", "Total Amount", |r: &Self| {
                CellValue::Money(r.total_amount)
            }),
            ColumnDef::new(FIELD_PAYMENT_STATUS, "Payment Status", |r: &Self| {
                CellValue::flag(r.payment_status, "Paid", "Unpaid")
            }),
            ColumnDef::new("paymentMethod", "Payment Method", |r: &Self| {
                CellValue::text(&r.payment_method)
            }),
            ColumnDef::new("createdAt", "Created At", |r: &Self| CellValue::Date(r.created_at))
                .hidden(),
            ColumnDef::new("updatedAt", "Updated At", |r: &Self| CellValue::Date(r.updated_at))
                .hidden(),
        ]
    }

    fn default_sort() -> SortSpec {
        SortSpec::desc("checkInDate")
    }

    fn set_flag(&mut self, field: &str, value: bool) -> bool {
        if field == FIELD_PAYMENT_STATUS {
            self.payment_status = value;
            return true;
        }
        false
    }

    fn flag_message(_field: &str, value: bool) -> String {
        format!("Booking marked as {}", if value { "Paid" } else { "Unpaid" })
    }

    fn flag_error_message(_field: &str) -> String {
        "Failed to update payment status".to_string()
    }
}

impl Resource for Booking {
    type Draft = BookingDto;
    const RESOURCE: &'static str = "/booking-room";
}

impl ExcelExportable for Booking {
    fn headers() -> Vec<&'static str> {
        vec![
            "_id",
            "Guest Name",
            "Email",
            "Phone",
            "Check-in",
            "Check-out",
            "Nights",
            "Room",
            "Total Amount",
            "Payment Status",
            "Payment Method",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.full_name(),
            self.email.clone(),
            self.phone.clone(),
            self.check_in_date.format("%Y-%m-%d").to_string(),
            self.check_out_date.format("%Y-%m-%d").to_string(),
            self.nights_count.to_string(),
            self.room_name.clone(),
            format_inr(self.total_amount),
            flag_label(self.payment_status, "Paid", "Unpaid"),
            self.payment_method.clone(),
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Изменяемые администратором поля бронирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub payment_status: bool,
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{filter_records, visible_slice, ViewState};

    fn booking(id: &str, first: &str, email: &str, check_in: &str) -> Booking {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "firstName": first,
            "lastName": "Sharma",
            "email": email,
            "phone": "9800000000",
            "checkInDate": check_in,
            "checkOutDate": check_in,
            "nightsCount": 2,
            "roomId": "r1",
            "roomName": "Deluxe",
            "basePrice": 2000,
            "subTotal": 4000,
            "tax": 480,
            "totalAmount": 4480,
            "paymentStatus": false,
            "paymentMethod": "UPI",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_default_sort_is_latest_check_in_first() {
        let records = vec![
            booking("b1", "Asha", "a@x.in", "2025-04-01T12:00:00Z"),
            booking("b2", "Ravi", "r@x.in", "2025-06-10T12:00:00Z"),
            booking("b3", "Meera", "m@x.in", "2025-05-03T12:00:00Z"),
        ];
        let slice = visible_slice(&records, &ViewState::new::<Booking>());
        let ids: Vec<&str> = slice.rows.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "b3", "b1"]);
    }

    #[test]
    fn test_search_across_fields() {
        let records = vec![
            booking("b1", "Asha", "asha@mail.in", "2025-04-01T12:00:00Z"),
            booking("b2", "Ravi", "ravi@mail.in", "2025-04-02T12:00:00Z"),
        ];
        assert_eq!(filter_records(&records, "RAVI@").len(), 1);
        assert_eq!(filter_records(&records, "sharma").len(), 2);
        assert_eq!(filter_records(&records, "deluxe").len(), 2);
    }

    #[test]
    fn test_hidden_columns_and_labels() {
        let state = ViewState::new::<Booking>();
        for key in ["createdAt", "updatedAt", "tax", "subTotal"] {
            assert!(!state.columns.is_visible(key));
        }
        let b = booking("b1", "Asha", "a@x.in", "2025-04-01T12:00:00Z");
        assert_eq!(b.payment_label(), "Unpaid");
        assert_eq!(b.full_name(), "Asha Sharma");
        let total = Booking::column("totalAmount").unwrap().cell(&b).display();
        assert_eq!(total, "₹4,480");
    }
}
