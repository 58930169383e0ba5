use std::fmt;

use super::{assign_identity, DisplayId, EntityId};
use crate::errors::{Result, ShopError};
use crate::rules::validation::{validate_email, validate_name};

/// A customer who can place orders
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: Option<EntityId>,
    name: String,
    email: String,
}

impl Customer {
    pub const ENTITY: &'static str = "customer";

    /// Create a transient customer
    ///
    /// # Errors
    /// * `EmptyName` - If `name` is empty
    /// * `InvalidEmail` - If `email` does not contain '@'
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        validate_name(Self::ENTITY, &name)?;
        validate_email(&email)?;

        Ok(Self {
            id: None,
            name,
            email,
        })
    }

    /// Identity assigned by the store, `None` while transient
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Identity of a persisted customer
    ///
    /// # Errors
    /// * `NotPersisted` - If the customer was never saved
    pub fn require_id(&self) -> Result<EntityId> {
        self.id.ok_or(ShopError::NotPersisted {
            entity: Self::ENTITY,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the name; the previous name is kept on failure
    ///
    /// # Errors
    /// * `EmptyName` - If `name` is empty
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(Self::ENTITY, &name)?;
        self.name = name;
        Ok(())
    }

    /// Replace the email; the previous email is kept on failure
    ///
    /// # Errors
    /// * `InvalidEmail` - If `email` does not contain '@'
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        Ok(())
    }

    /// Record the identity generated by the store
    ///
    /// # Errors
    /// * `IdentityReassigned` - If a different identity is already held
    pub fn assign_id(&mut self, id: EntityId) -> Result<()> {
        assign_identity(&mut self.id, Self::ENTITY, id)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer(id={}, name={}, email={})",
            DisplayId(self.id),
            self.name,
            self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_is_transient() {
        let customer = Customer::new("Ana", "ana@example.com").unwrap();

        assert_eq!(customer.id(), None);
        assert!(!customer.is_persisted());
        assert_eq!(customer.name(), "Ana");
        assert_eq!(customer.email(), "ana@example.com");
        assert_eq!(
            customer.require_id(),
            Err(ShopError::NotPersisted { entity: "customer" })
        );
    }

    #[test]
    fn test_new_customer_rejects_invalid_fields() {
        assert_eq!(
            Customer::new("", "ana@example.com"),
            Err(ShopError::EmptyName { entity: "customer" })
        );
        assert_eq!(
            Customer::new("Ana", "ana.example.com"),
            Err(ShopError::InvalidEmail)
        );
    }

    #[test]
    fn test_setters_keep_previous_value_on_failure() {
        let mut customer = Customer::new("Ana", "ana@example.com").unwrap();

        assert!(customer.set_name("").is_err());
        assert!(customer.set_email("nope").is_err());
        assert_eq!(customer.name(), "Ana");
        assert_eq!(customer.email(), "ana@example.com");

        customer.set_name("Ana Maria").unwrap();
        customer.set_email("am@example.com").unwrap();
        assert_eq!(customer.name(), "Ana Maria");
        assert_eq!(customer.email(), "am@example.com");
    }

    #[test]
    fn test_assign_id_is_one_way() {
        let mut customer = Customer::new("Ana", "ana@example.com").unwrap();
        customer.assign_id(7).unwrap();
        customer.assign_id(7).unwrap();

        assert_eq!(customer.require_id(), Ok(7));
        assert_eq!(
            customer.assign_id(8),
            Err(ShopError::IdentityReassigned {
                entity: "customer",
                current: 7,
                requested: 8,
            })
        );
        assert_eq!(customer.id(), Some(7));
    }

    #[test]
    fn test_display() {
        let mut customer = Customer::new("Ana", "ana@example.com").unwrap();
        assert_eq!(
            customer.to_string(),
            "Customer(id=new, name=Ana, email=ana@example.com)"
        );

        customer.assign_id(1).unwrap();
        assert_eq!(
            customer.to_string(),
            "Customer(id=1, name=Ana, email=ana@example.com)"
        );
    }
}
