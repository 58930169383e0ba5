//! Entity model
//!
//! Plain records for the four persisted entities. Every field with a business
//! rule is private and only reachable through a validating constructor or
//! setter, so an invalid value is never held in memory.

pub mod customer;
pub mod order;
pub mod order_line;
pub mod product;

pub use customer::Customer;
pub use order::Order;
pub use order_line::OrderLine;
pub use product::Product;

use crate::errors::{Result, ShopError};

/// Store-generated surrogate identity
pub type EntityId = i64;

/// Record `id` as the identity held in `slot`
///
/// Assigning the same identity twice is a no-op; assigning a different one to
/// an entity that already has an identity fails.
pub(crate) fn assign_identity(
    slot: &mut Option<EntityId>,
    entity: &'static str,
    id: EntityId,
) -> Result<()> {
    match *slot {
        Some(current) if current != id => Err(ShopError::IdentityReassigned {
            entity,
            current,
            requested: id,
        }),
        _ => {
            *slot = Some(id);
            Ok(())
        }
    }
}

/// Render an optional identity for diagnostics
pub(crate) struct DisplayId(pub Option<EntityId>);

impl std::fmt::Display for DisplayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "new"),
        }
    }
}
