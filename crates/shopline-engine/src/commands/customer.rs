//! Customer operations with boundary logging.
//!
//! Emails are personal data and only reach the log wrapped in `Sensitive`.

#![allow(clippy::result_large_err)]

use shopline_core::errors::ShopError;
use shopline_core::{log_op_end, log_op_error, log_op_start, Customer, EntityId};
use shopline_core_types::Sensitive;
use shopline_store::errors::Result;
use shopline_store::{CustomerRepo, Gateway};

/// Load a customer or fail with not-found
pub(crate) fn require_customer(gateway: &Gateway, customer_id: EntityId) -> Result<Customer> {
    let customer = CustomerRepo::find_by_id(gateway, customer_id)?
        .ok_or(ShopError::CustomerNotFound { customer_id })?;
    Ok(customer)
}

/// Create and persist a new customer
///
/// ## Returns
///
/// The saved customer, carrying its generated identity
///
/// ## Errors
///
/// - `InvalidName`: `name` is empty
/// - `InvalidEmail`: `email` has no '@'
/// - `Persistence`: Database error
pub fn create_customer(name: &str, email: &str, gateway: &Gateway) -> Result<Customer> {
    log_op_start!("create_customer", email = %Sensitive::new(email));
    let start = std::time::Instant::now();

    let customer = create_customer_impl(name, email, gateway).map_err(|e| {
        log_op_error!(
            "create_customer",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "create_customer",
        duration_ms = start.elapsed().as_millis() as u64,
        customer_id = customer.id()
    );

    Ok(customer)
}

fn create_customer_impl(name: &str, email: &str, gateway: &Gateway) -> Result<Customer> {
    let mut customer = Customer::new(name, email)?;
    CustomerRepo::add(gateway, &mut customer)?;
    Ok(customer)
}

/// List every customer in the order the store yields them
///
/// ## Errors
///
/// - `Persistence`: Database error
pub fn list_customers(gateway: &Gateway) -> Result<Vec<Customer>> {
    log_op_start!("list_customers");
    let start = std::time::Instant::now();

    let customers = CustomerRepo::list_all(gateway).map_err(|e| {
        log_op_error!(
            "list_customers",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "list_customers",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = customers.len()
    );

    Ok(customers)
}

/// Replace the name and email of an existing customer
///
/// ## Errors
///
/// - `NotFound`: No customer with `customer_id`
/// - `InvalidName` / `InvalidEmail`: Validation failed; nothing is written
/// - `Persistence`: Database error
pub fn update_customer(
    customer_id: EntityId,
    name: &str,
    email: &str,
    gateway: &Gateway,
) -> Result<Customer> {
    log_op_start!(
        "update_customer",
        customer_id = customer_id,
        email = %Sensitive::new(email)
    );
    let start = std::time::Instant::now();

    let customer = update_customer_impl(customer_id, name, email, gateway).map_err(|e| {
        log_op_error!(
            "update_customer",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            customer_id = customer_id
        );
        e
    })?;

    log_op_end!(
        "update_customer",
        duration_ms = start.elapsed().as_millis() as u64,
        customer_id = customer_id
    );

    Ok(customer)
}

fn update_customer_impl(
    customer_id: EntityId,
    name: &str,
    email: &str,
    gateway: &Gateway,
) -> Result<Customer> {
    let mut customer = require_customer(gateway, customer_id)?;
    customer.set_name(name)?;
    customer.set_email(email)?;
    CustomerRepo::update(gateway, &mut customer)?;
    Ok(customer)
}

/// Delete an existing customer
///
/// ## Errors
///
/// - `NotFound`: No customer with `customer_id`
/// - `Persistence`: Database error, including a customer still referenced by
///   an order
pub fn delete_customer(customer_id: EntityId, gateway: &Gateway) -> Result<()> {
    log_op_start!("delete_customer", customer_id = customer_id);
    let start = std::time::Instant::now();

    delete_customer_impl(customer_id, gateway).map_err(|e| {
        log_op_error!(
            "delete_customer",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            customer_id = customer_id
        );
        e
    })?;

    log_op_end!(
        "delete_customer",
        duration_ms = start.elapsed().as_millis() as u64,
        customer_id = customer_id
    );

    Ok(())
}

fn delete_customer_impl(customer_id: EntityId, gateway: &Gateway) -> Result<()> {
    let customer = require_customer(gateway, customer_id)?;
    CustomerRepo::delete(gateway, &customer)
}
