//! Service operations, one module per aggregate.
//!
//! Every public function follows the same shape: `log_op_start!` at entry,
//! the work in a private `*_impl`, then `log_op_end!` or `log_op_error!`.
//! Lower layers (store, core) use only `tracing::debug!()`.

pub mod customer;
pub mod order;
pub mod product;
