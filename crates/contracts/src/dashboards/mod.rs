pub mod d400_booking_summary;
