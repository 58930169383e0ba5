use std::fmt;

use super::{assign_identity, DisplayId, EntityId};
use crate::errors::{Result, ShopError};
use crate::rules::validation::{validate_name, validate_price};

/// A sellable product with a unit price
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Option<EntityId>,
    name: String,
    price: f64,
}

impl Product {
    pub const ENTITY: &'static str = "product";

    /// Create a transient product
    ///
    /// # Errors
    /// * `EmptyName` - If `name` is empty
    /// * `NonPositivePrice` - If `price` is not strictly positive
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self> {
        let name = name.into();
        validate_name(Self::ENTITY, &name)?;
        validate_price(price)?;

        Ok(Self {
            id: None,
            name,
            price,
        })
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// # Errors
    /// * `NotPersisted` - If the product was never saved
    pub fn require_id(&self) -> Result<EntityId> {
        self.id.ok_or(ShopError::NotPersisted {
            entity: Self::ENTITY,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// # Errors
    /// * `EmptyName` - If `name` is empty
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(Self::ENTITY, &name)?;
        self.name = name;
        Ok(())
    }

    /// # Errors
    /// * `NonPositivePrice` - If `price` is not strictly positive
    pub fn set_price(&mut self, price: f64) -> Result<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// # Errors
    /// * `IdentityReassigned` - If a different identity is already held
    pub fn assign_id(&mut self, id: EntityId) -> Result<()> {
        assign_identity(&mut self.id, Self::ENTITY, id)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(id={}, name={}, price={})",
            DisplayId(self.id),
            self.name,
            self.price
        )
    }
}
