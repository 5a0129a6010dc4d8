//! Product details: model (форма + API), view_model, view

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
