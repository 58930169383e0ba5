//! Field-level business rules shared by the entity model

pub mod validation;

pub use validation::{validate_email, validate_name, validate_price, validate_quantity};
