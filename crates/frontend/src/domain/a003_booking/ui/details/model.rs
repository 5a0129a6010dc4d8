use crate::shared::date_utils::format_date;
use contracts::domain::a003_booking::aggregate::Booking;
use contracts::shared::list_view::format_inr;

/// Строки карточки бронирования: (группа, [(подпись, значение)])
pub fn booking_sections(b: &Booking) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
    vec![
        (
            "Guest",
            vec![
                ("Name", b.full_name()),
                ("Email", b.email.clone()),
                ("Phone", b.phone.clone()),
            ],
        ),
        (
            "Stay",
            vec![
                ("Room", b.room_name.clone()),
                ("Check-in", format_date(&b.check_in_date)),
                ("Check-out", format_date(&b.check_out_date)),
                ("Nights", b.nights_count.to_string()),
            ],
        ),
        (
            "Payment",
            vec![
                ("Base price", format_inr(b.base_price)),
                ("Subtotal", format_inr(b.sub_total)),
                ("Tax", format_inr(b.tax)),
                ("Total", format_inr(b.total_amount)),
                ("Method", b.payment_method.clone()),
                ("Status", b.payment_label().to_string()),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_sections() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "_id": "b1",
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.com",
            "checkInDate": "2025-04-02T12:00:00.000Z",
            "checkOutDate": "2025-04-04T12:00:00.000Z",
            "nightsCount": 2,
            "roomName": "Deluxe",
            "totalAmount": 10500,
            "paymentStatus": false,
            "createdAt": "2025-03-30T10:00:00.000Z",
            "updatedAt": "2025-03-30T10:00:00.000Z"
        }))
        .unwrap();

        let sections = booking_sections(&booking);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].1[0], ("Name", "Asha Rao".to_string()));
        assert_eq!(sections[1].1[1], ("Check-in", "02-APR-2025".to_string()));
        let payment = &sections[2].1;
        assert!(payment.contains(&("Total", "₹10,500".to_string())));
        assert!(payment.contains(&("Status", "Unpaid".to_string())));
    }
}
