//! Shopline Engine - Service layer
//!
//! Enforces the rules that span entities (an order needs an existing
//! customer, a line needs an existing order and product), turns failed
//! lookups into not-found errors and owns lifecycle logging for every
//! operation.

pub mod commands;

pub use commands::customer::{create_customer, delete_customer, list_customers, update_customer};
pub use commands::order::{add_order_line, create_order, delete_order, list_orders};
pub use commands::product::{create_product, delete_product, list_products, update_product};
