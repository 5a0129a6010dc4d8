//! Сессия администратора: токен в local storage, состояние в Leptos context.

pub mod api;
pub mod context;
pub mod storage;
