//! Room category details UI Module
//!
//! MVVM:
//! - model.rs: форма и вызовы API
//! - view_model.rs: состояние и команды
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::RoomCategoryDetails;
pub use view_model::RoomCategoryDetailsViewModel;
