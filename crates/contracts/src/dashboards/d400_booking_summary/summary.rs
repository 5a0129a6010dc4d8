use chrono::Datelike;
use std::collections::{BTreeMap, HashSet};

use super::dto::{BookingSummary, MonthlyBucket, PaymentSlice, RoomBucket, SummaryTotals};
use crate::domain::a003_booking::aggregate::Booking;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Метка месяца вида "Apr-2025"
pub fn month_label(year: i32, month: u32) -> String {
    let idx = month.clamp(1, 12) as usize - 1;
    format!("{}-{}", MONTH_ABBR[idx], year)
}

/// Сводка для дашборда по списку бронирований.
pub fn summarize(bookings: &[Booking]) -> BookingSummary {
    // (year, month) -> (count, revenue); BTreeMap даёт хронологический порядок
    let mut by_month: BTreeMap<(i32, u32), (usize, f64)> = BTreeMap::new();
    let mut rooms: Vec<RoomBucket> = Vec::new();
    let mut paid = PaymentSlice {
        name: "Paid".to_string(),
        count: 0,
        value: 0.0,
    };
    let mut unpaid = PaymentSlice {
        name: "Unpaid".to_string(),
        count: 0,
        value: 0.0,
    };
    let mut emails: HashSet<&str> = HashSet::new();
    let mut revenue = 0.0;

    for booking in bookings {
        let key = (booking.check_in_date.year(), booking.check_in_date.month());
        let entry = by_month.entry(key).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += booking.total_amount;

        match rooms.iter_mut().find(|r| r.name == booking.room_name) {
            Some(room) => {
                room.bookings += 1;
                room.revenue += booking.total_amount;
            }
            None => rooms.push(RoomBucket {
                name: booking.room_name.clone(),
                bookings: 1,
                revenue: booking.total_amount,
            }),
        }

        let slice = if booking.payment_status {
            &mut paid
        } else {
            &mut unpaid
        };
        slice.count += 1;
        slice.value += booking.total_amount;

        emails.insert(booking.email.as_str());
        revenue += booking.total_amount;
    }

    let monthly = by_month
        .into_iter()
        .map(|((year, month), (count, sum))| MonthlyBucket {
            month: month_label(year, month),
            year,
            month_number: month,
            bookings: count,
            revenue: sum,
        })
        .collect();

    BookingSummary {
        totals: SummaryTotals {
            bookings: bookings.len(),
            revenue,
            customers: emails.len(),
            rooms: rooms.len(),
        },
        monthly,
        rooms,
        payments: vec![paid, unpaid],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(room: &str, email: &str, check_in: &str, total: f64, paid: bool) -> Booking {
        serde_json::from_value(serde_json::json!({
            "_id": format!("{}-{}", email, check_in),
            "firstName": "Guest",
            "email": email,
            "checkInDate": check_in,
            "checkOutDate": check_in,
            "roomName": room,
            "totalAmount": total,
            "paymentStatus": paid,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2025, 4), "Apr-2025");
        assert_eq!(month_label(2024, 12), "Dec-2024");
    }

    #[test]
    fn test_summarize() {
        let bookings = vec![
            booking("Suite", "a@x.in", "2025-05-02T10:00:00Z", 5000.0, true),
            booking("Deluxe", "b@x.in", "2024-12-20T10:00:00Z", 3000.0, false),
            booking("Suite", "a@x.in", "2025-05-20T10:00:00Z", 2000.0, false),
            booking("Standard", "c@x.in", "2025-01-07T10:00:00Z", 1000.0, true),
        ];
        let summary = summarize(&bookings);

        let months: Vec<&str> = summary.monthly.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["Dec-2024", "Jan-2025", "May-2025"]);
        assert_eq!(summary.monthly[2].bookings, 2);
        assert_eq!(summary.monthly[2].revenue, 7000.0);

        let rooms: Vec<&str> = summary.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(rooms, vec!["Suite", "Deluxe", "Standard"]);
        assert_eq!(summary.rooms[0].bookings, 2);

        assert_eq!(summary.payments[0].name, "Paid");
        assert_eq!(summary.payments[0].count, 2);
        assert_eq!(summary.payments[0].value, 6000.0);
        assert_eq!(summary.payments[1].count, 2);
        assert_eq!(summary.payments[1].value, 5000.0);

        assert_eq!(summary.totals.bookings, 4);
        assert_eq!(summary.totals.revenue, 11000.0);
        assert_eq!(summary.totals.customers, 3);
        assert_eq!(summary.totals.rooms, 3);
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(&[]);
        assert!(summary.monthly.is_empty());
        assert!(summary.rooms.is_empty());
        assert_eq!(summary.totals, SummaryTotals::default());
        assert_eq!(summary.payments.len(), 2);
        assert!(summary.payments.iter().all(|p| p.count == 0 && p.value == 0.0));
    }
}
