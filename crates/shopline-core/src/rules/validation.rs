use crate::errors::{Result, ShopError};

/// Validate a name field
///
/// Names must be non-empty. Whitespace is kept as given.
/// Whitespace-only names are accepted.
///
/// # Errors
/// * `EmptyName` - If the name is the empty string
pub fn validate_name(entity: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ShopError::EmptyName { entity });
    }
    Ok(())
}

/// Validate an email address
///
/// The only structural requirement is the presence of an '@'.
///
/// # Errors
/// * `InvalidEmail` - If the address does not contain '@'
pub fn validate_email(email: &str) -> Result<()> {
    if !email.contains('@') {
        return Err(ShopError::InvalidEmail);
    }
    Ok(())
}

/// Validate a unit price
///
/// A price must be a finite number greater than zero.
///
/// # Errors
/// * `NonPositivePrice` - If the price is zero, negative, infinite or NaN
pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ShopError::NonPositivePrice { price });
    }
    Ok(())
}

/// Validate an order line quantity
///
/// # Errors
/// * `NonPositiveQuantity` - If the quantity is zero or negative
pub fn validate_quantity(quantity: i64) -> Result<()> {
    if quantity <= 0 {
        return Err(ShopError::NonPositiveQuantity { quantity });
    }
    Ok(())
}
