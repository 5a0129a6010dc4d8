use serde::{Deserialize, Serialize};

/// Aggregated booking dashboard, computed on the client from the booking list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub totals: SummaryTotals,
    /// Sorted chronologically by check-in month
    pub monthly: Vec<MonthlyBucket>,
    /// Rooms in order of first appearance
    pub rooms: Vec<RoomBucket>,
    /// Always two slices: "Paid" then "Unpaid"
    pub payments: Vec<PaymentSlice>,
}

/// Headline numbers for the stat cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub bookings: usize,
    pub revenue: f64,
    /// Distinct guest emails
    pub customers: usize,
    /// Distinct room names
    pub rooms: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Label in format "Apr-2025"
    pub month: String,
    pub year: i32,
    pub month_number: u32,
    pub bookings: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomBucket {
    pub name: String,
    pub bookings: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSlice {
    /// "Paid" or "Unpaid"
    pub name: String,
    pub count: usize,
    pub value: f64,
}
