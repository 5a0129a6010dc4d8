//! Booking details: просмотр бронирования, смена статуса оплаты, удаление

mod model;
mod view;
mod view_model;

pub use view::BookingDetails;
