//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Detail-табы имеют ключ `<list key>_detail_<id>`, для новой записи `<list key>_detail_new`.

use contracts::domain::a001_room_category::aggregate::RoomCategory;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_booking::aggregate::Booking;
use contracts::shared::list_view::ListRecord;

const DETAIL_MARKER: &str = "_detail_";
const NEW_RECORD: &str = "new";

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_booking_summary" => "Dashboard",
        "a001_room_category" => "Room Categories",
        "a002_product" => "Products",
        "a003_booking" => "Bookings",
        "p900_customers" => "Customers",
        _ => "",
    }
}

/// Название одной записи для detail-таба
pub fn entity_element_name(list_key: &str) -> &'static str {
    match list_key {
        "a001_room_category" => RoomCategory::LABEL,
        "a002_product" => Product::LABEL,
        "a003_booking" => Booking::LABEL,
        _ => "",
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// `None` -> таб создания новой записи
pub fn detail_tab_key(list_key: &str, id: Option<&str>) -> String {
    format!("{}{}{}", list_key, DETAIL_MARKER, id.unwrap_or(NEW_RECORD))
}

/// Разбирает ключ detail-таба на (list key, id); id = None для новой записи.
pub fn parse_detail_key(key: &str) -> Option<(&str, Option<&str>)> {
    let (list_key, id) = key.split_once(DETAIL_MARKER)?;
    if id.is_empty() || entity_element_name(list_key).is_empty() {
        return None;
    }
    Some((list_key, (id != NEW_RECORD).then_some(id)))
}

/// Заголовок для любого известного ключа (используется при восстановлении из URL)
pub fn title_for_key(key: &str) -> Option<String> {
    let label = tab_label_for_key(key);
    if !label.is_empty() {
        return Some(label.to_string());
    }
    let (list_key, id) = parse_detail_key(key)?;
    Some(detail_tab_label(
        entity_element_name(list_key),
        id.unwrap_or("New"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_roundtrip() {
        let key = detail_tab_key("a002_product", Some("66f0"));
        assert_eq!(key, "a002_product_detail_66f0");
        assert_eq!(parse_detail_key(&key), Some(("a002_product", Some("66f0"))));

        let new_key = detail_tab_key("a001_room_category", None);
        assert_eq!(parse_detail_key(&new_key), Some(("a001_room_category", None)));
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(parse_detail_key("a002_product"), None);
        assert_eq!(parse_detail_key("x_detail_1"), None);
        assert_eq!(title_for_key("nope"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(title_for_key("a003_booking").as_deref(), Some("Bookings"));
        assert_eq!(
            title_for_key("a003_booking_detail_b1").as_deref(),
            Some("Booking · b1")
        );
        assert_eq!(
            title_for_key("a001_room_category_detail_new").as_deref(),
            Some("Room category · New")
        );
    }
}
