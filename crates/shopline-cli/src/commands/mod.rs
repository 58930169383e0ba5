//! Menu operation handlers, one module per aggregate
//!
//! Each handler prompts for its inputs, calls exactly one service operation
//! and prints the outcome.

pub mod customer;
pub mod order;
pub mod product;
