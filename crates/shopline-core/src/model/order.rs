use std::fmt;

use super::{assign_identity, Customer, DisplayId, EntityId, OrderLine, Product};
use crate::errors::{Result, ShopError};

/// An order placed by a customer
///
/// The customer is fixed at creation. Lines are kept in append order and
/// can only grow one at a time through [`Order::add_line`].
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: Option<EntityId>,
    customer_id: EntityId,
    customer: Customer,
    lines: Vec<OrderLine>,
}

impl Order {
    pub const ENTITY: &'static str = "order";

    /// Create a transient order with no lines
    ///
    /// # Errors
    /// * `NotPersisted` - If `customer` has no identity yet
    pub fn new(customer: Customer) -> Result<Self> {
        let customer_id = customer.require_id()?;
        Ok(Self {
            id: None,
            customer_id,
            customer,
            lines: Vec::new(),
        })
    }

    /// Rebuild an order read back from the store
    ///
    /// # Errors
    /// * `NotPersisted` - If `customer` has no identity
    /// * `IdentityReassigned` - If a line belongs to a different order
    pub fn restore(id: EntityId, customer: Customer, lines: Vec<OrderLine>) -> Result<Self> {
        let mut order = Self::new(customer)?;
        order.assign_id(id)?;
        for mut line in lines {
            line.assign_order(id)?;
            order.lines.push(line);
        }
        Ok(order)
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// # Errors
    /// * `NotPersisted` - If the order was never saved
    pub fn require_id(&self) -> Result<EntityId> {
        self.id.ok_or(ShopError::NotPersisted {
            entity: Self::ENTITY,
        })
    }

    pub fn customer_id(&self) -> EntityId {
        self.customer_id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Lines the store has not written yet
    pub fn unsaved_lines_mut(&mut self) -> impl Iterator<Item = &mut OrderLine> {
        self.lines.iter_mut().filter(|line| !line.is_persisted())
    }

    /// Append a new line for `product`
    ///
    /// The order is unchanged when the quantity or product is rejected.
    ///
    /// # Errors
    /// * `NonPositiveQuantity` - If `quantity` is zero or negative
    /// * `NotPersisted` - If `product` has no identity yet
    pub fn add_line(&mut self, product: Product, quantity: i64) -> Result<&OrderLine> {
        let mut line = OrderLine::new(product, quantity)?;
        if let Some(order_id) = self.id {
            line.assign_order(order_id)?;
        }
        self.lines.push(line);
        let index = self.lines.len() - 1;
        Ok(&self.lines[index])
    }

    /// Record the identity generated by the store
    ///
    /// Lines already appended are bound to the order at the same time.
    ///
    /// # Errors
    /// * `IdentityReassigned` - If a different identity is already held
    pub fn assign_id(&mut self, id: EntityId) -> Result<()> {
        assign_identity(&mut self.id, Self::ENTITY, id)?;
        for line in &mut self.lines {
            line.assign_order(id)?;
        }
        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(id={}, customer={})",
            DisplayId(self.id),
            self.customer.name()
        )
    }
}
