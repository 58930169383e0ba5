//! Repository layer
//!
//! One narrow facade per entity type. Each forwards to the gateway
//! primitives with the entity type fixed and carries no business rules.

#![allow(clippy::result_large_err)]

pub mod customer_repo;
pub mod order_line_repo;
pub mod order_repo;
pub mod product_repo;

pub use customer_repo::CustomerRepo;
pub use order_line_repo::OrderLineRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
