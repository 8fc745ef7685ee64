pub mod rest;
pub mod view;

pub use rest::{ApiState, RestApi};
pub use view::{ItemCard, ItemDetail, PLACEHOLDER_IMAGE};
