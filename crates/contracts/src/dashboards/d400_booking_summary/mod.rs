pub mod dto;
pub mod summary;
