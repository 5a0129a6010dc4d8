pub mod a001_room_category;
pub mod a002_product;
pub mod a003_booking;
