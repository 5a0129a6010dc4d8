pub mod dto;
pub mod projection;
