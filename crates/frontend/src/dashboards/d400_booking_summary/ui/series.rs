//! Сводка -> точки графиков и строки "Recent Bookings"

use crate::shared::components::charts::ChartPoint;
use crate::shared::date_utils::format_date;
use contracts::dashboards::d400_booking_summary::dto::BookingSummary;
use contracts::domain::a003_booking::aggregate::Booking;
use contracts::shared::list_view::format_inr;

pub const RECENT_LIMIT: usize = 5;

pub fn revenue_points(summary: &BookingSummary) -> Vec<ChartPoint> {
    summary
        .monthly
        .iter()
        .map(|m| ChartPoint {
            label: m.month.clone(),
            value: m.revenue,
            hint: format_inr(m.revenue),
        })
        .collect()
}

pub fn room_points(summary: &BookingSummary) -> Vec<ChartPoint> {
    summary
        .rooms
        .iter()
        .map(|r| ChartPoint {
            label: r.name.clone(),
            value: r.bookings as f64,
            hint: r.bookings.to_string(),
        })
        .collect()
}

pub fn payment_points(summary: &BookingSummary) -> Vec<ChartPoint> {
    summary
        .payments
        .iter()
        .map(|p| ChartPoint {
            label: p.name.clone(),
            value: p.count as f64,
            hint: format!("{}: {} ({})", p.name, p.count, format_inr(p.value)),
        })
        .collect()
}

/// Строка таблицы последних бронирований
#[derive(Debug, Clone, PartialEq)]
pub struct RecentRow {
    pub id: String,
    pub guest: String,
    pub room: String,
    pub check_in: String,
    pub amount: String,
    pub paid: bool,
}

/// Последние созданные бронирования, новые сверху
pub fn recent_bookings(bookings: &[Booking], limit: usize) -> Vec<RecentRow> {
    let mut sorted: Vec<&Booking> = bookings.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
        .into_iter()
        .take(limit)
        .map(|b| RecentRow {
            id: b.id.clone(),
            guest: b.full_name(),
            room: b.room_name.clone(),
            check_in: format_date(&b.check_in_date),
            amount: format_inr(b.total_amount),
            paid: b.payment_status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_booking_summary::summary::summarize;

    fn booking(id: &str, room: &str, created: &str, amount: f64, paid: bool) -> Booking {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "firstName": "Guest",
            "lastName": id,
            "email": format!("{}@example.com", id),
            "checkInDate": "2025-04-02T12:00:00.000Z",
            "checkOutDate": "2025-04-03T12:00:00.000Z",
            "roomName": room,
            "totalAmount": amount,
            "paymentStatus": paid,
            "createdAt": created,
            "updatedAt": created
        }))
        .unwrap()
    }

    #[test]
    fn test_points_follow_summary() {
        let bookings = vec![
            booking("a", "Deluxe", "2025-03-01T00:00:00Z", 1000.0, true),
            booking("b", "Suite", "2025-03-02T00:00:00Z", 2500.0, false),
            booking("c", "Deluxe", "2025-03-03T00:00:00Z", 1500.0, false),
        ];
        let summary = summarize(&bookings);

        let revenue = revenue_points(&summary);
        assert_eq!(revenue.len(), 1);
        assert_eq!(revenue[0].label, "Apr-2025");
        assert_eq!(revenue[0].hint, "₹5,000");

        let rooms = room_points(&summary);
        assert_eq!(rooms[0].label, "Deluxe");
        assert_eq!(rooms[0].value, 2.0);

        let payments = payment_points(&summary);
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[1].hint, "Unpaid: 2 (₹4,000)");
    }

    #[test]
    fn test_recent_bookings_newest_first() {
        let bookings = vec![
            booking("old", "Deluxe", "2025-01-01T00:00:00Z", 100.0, true),
            booking("new", "Suite", "2025-02-01T00:00:00Z", 200.0, false),
        ];
        let rows = recent_bookings(&bookings, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "new");
        assert_eq!(rows[0].guest, "Guest new");
        assert!(!rows[0].paid);
    }
}
