//! Shopline Core - entity model and shared facilities
//!
//! This crate provides:
//! - Customer, Product, Order and OrderLine models with validated fields
//! - Field validation rules (names, emails, prices, quantities)
//! - The canonical error facility (`ExError`, `ExErrorKind`, `ShopError`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

/// Re-exported so the logging macros can name schema constants from any crate
pub use shopline_core_types as core_types;

// Re-export commonly used types
pub use errors::{ErrorCategory, ExError, ExErrorKind, Result, ShopError};
pub use model::{Customer, EntityId, Order, OrderLine, Product};
