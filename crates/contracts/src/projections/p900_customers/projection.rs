use std::collections::HashSet;

use super::dto::Customer;
use crate::domain::a003_booking::aggregate::Booking;

/// Один покупатель на email; берётся первое бронирование в порядке ответа API.
///
/// Email сравнивается как есть, без нормализации регистра.
pub fn derive_customers(bookings: &[Booking]) -> Vec<Customer> {
    let mut seen: HashSet<&str> = HashSet::new();
    bookings
        .iter()
        .filter(|b| seen.insert(b.email.as_str()))
        .map(|b| Customer {
            id: b.id.clone(),
            first_name: b.first_name.clone(),
            last_name: b.last_name.clone(),
            email: b.email.clone(),
            phone: b.phone.clone(),
            created_at: b.created_at,
            updated_at: b.updated_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{visible_slice, ViewState};

    fn booking(id: &str, first: &str, email: &str, created: &str) -> Booking {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "firstName": first,
            "lastName": "Rao",
            "email": email,
            "phone": "9000000000",
            "checkInDate": "2025-04-01T12:00:00Z",
            "checkOutDate": "2025-04-03T12:00:00Z",
            "createdAt": created,
            "updatedAt": created
        }))
        .unwrap()
    }

    #[test]
    fn test_first_booking_per_email_wins() {
        let bookings = vec![
            booking("b1", "Kiran", "kiran@mail.in", "2025-01-01T00:00:00Z"),
            booking("b2", "Anil", "anil@mail.in", "2025-01-02T00:00:00Z"),
            booking("b3", "Kiran K", "kiran@mail.in", "2025-01-03T00:00:00Z"),
            booking("b4", "KIRAN", "KIRAN@mail.in", "2025-01-04T00:00:00Z"),
        ];
        let customers = derive_customers(&bookings);
        let ids: Vec<&str> = customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2", "b4"]);
        assert_eq!(customers[0].first_name, "Kiran");
    }

    #[test]
    fn test_default_sort_newest_first() {
        let customers = derive_customers(&[
            booking("b1", "Kiran", "kiran@mail.in", "2025-01-01T00:00:00Z"),
            booking("b2", "Anil", "anil@mail.in", "2025-02-01T00:00:00Z"),
        ]);
        let slice = visible_slice(&customers, &ViewState::new::<Customer>());
        assert_eq!(slice.rows[0].id, "b2");
        assert!(derive_customers(&[]).is_empty());
    }
}
