//! Repository for orders

use crate::errors::Result;
use crate::gateway::Gateway;
use shopline_core::{EntityId, Order};

/// Access to persisted orders
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order, returning its generated identity
    pub fn add(gateway: &Gateway, order: &mut Order) -> Result<EntityId> {
        gateway.save(order)
    }

    /// Every order in identity order
    pub fn list_all(gateway: &Gateway) -> Result<Vec<Order>> {
        gateway.list()
    }

    pub fn find_by_id(gateway: &Gateway, id: EntityId) -> Result<Option<Order>> {
        gateway.get(id)
    }

    /// Write the current state of a persisted order
    pub fn update(gateway: &Gateway, order: &mut Order) -> Result<EntityId> {
        gateway.save(order)
    }

    pub fn delete(gateway: &Gateway, order: &Order) -> Result<()> {
        gateway.remove(order)
    }
}
