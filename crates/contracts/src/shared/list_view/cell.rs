use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Typed value of one table cell.
///
/// Sorting compares these values, rendering calls [`CellValue::display`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    /// Amount in rupees
    Money(f64),
    Date(DateTime<Utc>),
    Flag {
        value: bool,
        on: &'static str,
        off: &'static str,
    },
    Image(Option<String>),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn flag(value: bool, on: &'static str, off: &'static str) -> Self {
        CellValue::Flag { value, on, off }
    }

    /// Text shown in the table cell.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{:.0}", n)
                } else {
                    format!("{:.2}", n)
                }
            }
            CellValue::Money(amount) => format_inr(*amount),
            CellValue::Date(dt) => dt.format("%d-%b-%Y").to_string().to_uppercase(),
            CellValue::Flag { value, on, off } => {
                if *value {
                    on.to_string()
                } else {
                    off.to_string()
                }
            }
            CellValue::Image(Some(url)) => url.clone(),
            CellValue::Image(None) => "No image".to_string(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Flag { .. } => 1,
            CellValue::Number(_) | CellValue::Money(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
            CellValue::Image(_) => 5,
        }
    }

    /// Natural ascending order of two cells.
    pub fn compare(&self, other: &Self) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a.cmp(b),
            (Number(a) | Money(a), Number(b) | Money(b)) => a.total_cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (Flag { value: a, .. }, Flag { value: b, .. }) => a.cmp(b),
            (Image(a), Image(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Форматирует сумму в рупиях с индийской группировкой разрядов:
/// 1234567.4 -> "₹12,34,567"
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, last3) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            groups.push(right);
            rest = left;
        }
        if !rest.is_empty() {
            groups.push(rest);
        }
        groups.reverse();
        format!("{},{}", groups.join(","), last3)
    };

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(123456.0), "₹1,23,456");
        assert_eq!(format_inr(1234567.4), "₹12,34,567");
        assert_eq!(format_inr(-2500.0), "-₹2,500");
    }

    #[test]
    fn test_text_compare_is_case_sensitive() {
        let lower = CellValue::text("apple");
        let upper = CellValue::text("Banana");
        // Uppercase letters come first, as in plain byte order
        assert_eq!(upper.compare(&lower), Ordering::Less);
        assert_eq!(lower.compare(&upper), Ordering::Greater);
        assert_eq!(
            CellValue::text("Deluxe").compare(&CellValue::text("Suite")),
            Ordering::Less
        );
    }

    #[test]
    fn test_numbers_and_empty() {
        assert_eq!(
            CellValue::Money(10.0).compare(&CellValue::Number(9.5)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Empty.compare(&CellValue::text("a")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::flag(false, "Yes", "No").compare(&CellValue::flag(true, "Yes", "No")),
            Ordering::Less
        );
    }

    #[test]
    fn test_display() {
        let date = Utc.with_ymd_and_hms(2025, 4, 3, 10, 0, 0).unwrap();
        assert_eq!(CellValue::Date(date).display(), "03-APR-2025");
        assert_eq!(CellValue::flag(true, "Paid", "Unpaid").display(), "Paid");
        assert_eq!(CellValue::Image(None).display(), "No image");
        assert_eq!(CellValue::Number(2.0).display(), "2");
        assert_eq!(CellValue::Number(2.5).display(), "2.50");
    }
}
