pub mod envelope;
pub mod error;
pub mod export;
pub mod list_view;
