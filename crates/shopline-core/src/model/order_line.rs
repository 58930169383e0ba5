use std::fmt;

use super::{assign_identity, DisplayId, EntityId, Product};
use crate::errors::Result;
use crate::rules::validation::validate_quantity;

/// One product/quantity entry of an order
///
/// Lines have no lifecycle of their own: they are created through
/// [`Order::add_line`](super::Order::add_line) and saved with their order.
/// The referenced product is always loaded so the line can be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    id: Option<EntityId>,
    order_id: Option<EntityId>,
    product_id: EntityId,
    product: Product,
    quantity: i64,
}

impl OrderLine {
    pub const ENTITY: &'static str = "order_line";

    /// Create a transient line for a persisted product
    ///
    /// # Errors
    /// * `NonPositiveQuantity` - If `quantity` is zero or negative
    /// * `NotPersisted` - If `product` has no identity yet
    pub fn new(product: Product, quantity: i64) -> Result<Self> {
        validate_quantity(quantity)?;
        let product_id = product.require_id()?;

        Ok(Self {
            id: None,
            order_id: None,
            product_id,
            product,
            quantity,
        })
    }

    /// Rebuild a line read back from the store
    ///
    /// # Errors
    /// Same as [`OrderLine::new`].
    pub fn restore(
        id: EntityId,
        order_id: EntityId,
        product: Product,
        quantity: i64,
    ) -> Result<Self> {
        let mut line = Self::new(product, quantity)?;
        line.assign_id(id)?;
        line.assign_order(order_id)?;
        Ok(line)
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Owning order, `None` until the order has been saved
    pub fn order_id(&self) -> Option<EntityId> {
        self.order_id
    }

    pub fn product_id(&self) -> EntityId {
        self.product_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// # Errors
    /// * `IdentityReassigned` - If a different identity is already held
    pub fn assign_id(&mut self, id: EntityId) -> Result<()> {
        assign_identity(&mut self.id, Self::ENTITY, id)
    }

    /// Bind the line to its owning order; the binding never changes afterwards
    ///
    /// # Errors
    /// * `IdentityReassigned` - If the line already belongs to another order
    pub fn assign_order(&mut self, order_id: EntityId) -> Result<()> {
        assign_identity(&mut self.order_id, "order_line.order", order_id)
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderLine(id={}, product={}, quantity={})",
            DisplayId(self.id),
            self.product.name(),
            self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShopError;

    fn saved_product() -> Product {
        let mut product = Product::new("Widget", 9.99).unwrap();
        product.assign_id(5).unwrap();
        product
    }

    #[test]
    fn test_new_line() {
        let line = OrderLine::new(saved_product(), 2).unwrap();
        assert_eq!(line.product_id(), 5);
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.order_id(), None);
        assert!(!line.is_persisted());
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert_eq!(
            OrderLine::new(saved_product(), 0),
            Err(ShopError::NonPositiveQuantity { quantity: 0 })
        );
        assert!(OrderLine::new(saved_product(), -1).is_err());
    }

    #[test]
    fn test_requires_persisted_product() {
        let product = Product::new("Widget", 9.99).unwrap();
        assert_eq!(
            OrderLine::new(product, 1),
            Err(ShopError::NotPersisted { entity: "product" })
        );
    }

    #[test]
    fn test_order_binding_is_fixed() {
        let mut line = OrderLine::restore(1, 10, saved_product(), 3).unwrap();
        assert_eq!(line.order_id(), Some(10));
        assert!(line.assign_order(11).is_err());
        assert_eq!(line.order_id(), Some(10));
    }

    #[test]
    fn test_display_uses_product_name() {
        let line = OrderLine::restore(4, 1, saved_product(), 2).unwrap();
        assert_eq!(line.to_string(), "OrderLine(id=4, product=Widget, quantity=2)");
    }
}
