pub mod d400_booking_summary;

pub use d400_booking_summary::ui::BookingSummaryDashboard;
