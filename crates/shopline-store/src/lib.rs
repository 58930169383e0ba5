//! Shopline Store - SQLite persistence for the shop entities
//!
//! Provides:
//! - Connection setup and embedded schema migrations
//! - The persistence gateway (save, remove, get, list)
//! - One repository per entity type over the gateway

pub mod db;
pub mod errors;
pub mod gateway;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use gateway::{Gateway, Loadable, Persistable};
pub use repo::{CustomerRepo, OrderLineRepo, OrderRepo, ProductRepo};
