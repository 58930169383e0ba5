//! Repository for products

use crate::errors::Result;
use crate::gateway::Gateway;
use shopline_core::{EntityId, Product};

/// Access to persisted products
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning its generated identity
    pub fn add(gateway: &Gateway, product: &mut Product) -> Result<EntityId> {
        gateway.save(product)
    }

    /// Every product in identity order
    pub fn list_all(gateway: &Gateway) -> Result<Vec<Product>> {
        gateway.list()
    }

    pub fn find_by_id(gateway: &Gateway, id: EntityId) -> Result<Option<Product>> {
        gateway.get(id)
    }

    /// Write the current state of a persisted product
    pub fn update(gateway: &Gateway, product: &mut Product) -> Result<EntityId> {
        gateway.save(product)
    }

    pub fn delete(gateway: &Gateway, product: &Product) -> Result<()> {
        gateway.remove(product)
    }
}
