//! Repository for customers

use crate::errors::Result;
use crate::gateway::Gateway;
use shopline_core::{Customer, EntityId};

/// Access to persisted customers
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning its generated identity
    pub fn add(gateway: &Gateway, customer: &mut Customer) -> Result<EntityId> {
        gateway.save(customer)
    }

    /// Every customer in identity order
    pub fn list_all(gateway: &Gateway) -> Result<Vec<Customer>> {
        gateway.list()
    }

    pub fn find_by_id(gateway: &Gateway, id: EntityId) -> Result<Option<Customer>> {
        gateway.get(id)
    }

    /// Write the current state of a persisted customer
    pub fn update(gateway: &Gateway, customer: &mut Customer) -> Result<EntityId> {
        gateway.save(customer)
    }

    pub fn delete(gateway: &Gateway, customer: &Customer) -> Result<()> {
        gateway.remove(customer)
    }
}
