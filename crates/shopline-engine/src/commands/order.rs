//! Order operations with boundary logging.
//!
//! Lookups always run before any validation or write, so a missing
//! customer, order or product never leaves a row behind.

#![allow(clippy::result_large_err)]

use super::customer::require_customer;
use super::product::require_product;
use shopline_core::errors::ShopError;
use shopline_core::{log_op_end, log_op_error, log_op_start, EntityId, Order};
use shopline_store::errors::Result;
use shopline_store::{Gateway, OrderRepo};

fn require_order(gateway: &Gateway, order_id: EntityId) -> Result<Order> {
    let order =
        OrderRepo::find_by_id(gateway, order_id)?.ok_or(ShopError::OrderNotFound { order_id })?;
    Ok(order)
}

/// Create an empty order for an existing customer
///
/// ## Errors
///
/// - `NotFound`: No customer with `customer_id`; no row is written
/// - `Persistence`: Database error
pub fn create_order(customer_id: EntityId, gateway: &Gateway) -> Result<Order> {
    log_op_start!("create_order", customer_id = customer_id);
    let start = std::time::Instant::now();

    let order = create_order_impl(customer_id, gateway).map_err(|e| {
        log_op_error!(
            "create_order",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            customer_id = customer_id
        );
        e
    })?;

    log_op_end!(
        "create_order",
        duration_ms = start.elapsed().as_millis() as u64,
        order_id = order.id(),
        customer_id = customer_id
    );

    Ok(order)
}

fn create_order_impl(customer_id: EntityId, gateway: &Gateway) -> Result<Order> {
    let customer = require_customer(gateway, customer_id)?;
    let mut order = Order::new(customer)?;
    OrderRepo::add(gateway, &mut order)?;
    Ok(order)
}

/// Append a line to an existing order and persist it
///
/// ## Returns
///
/// The order as saved; the new line is last.
///
/// ## Errors
///
/// - `NotFound`: No order with `order_id` or no product with `product_id`
/// - `InvalidQuantity`: `quantity` is zero or negative; nothing is written
/// - `Persistence`: Database error
pub fn add_order_line(
    order_id: EntityId,
    product_id: EntityId,
    quantity: i64,
    gateway: &Gateway,
) -> Result<Order> {
    log_op_start!(
        "add_order_line",
        order_id = order_id,
        product_id = product_id,
        quantity = quantity
    );
    let start = std::time::Instant::now();

    let order = add_order_line_impl(order_id, product_id, quantity, gateway).map_err(|e| {
        log_op_error!(
            "add_order_line",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            order_id = order_id
        );
        e
    })?;

    log_op_end!(
        "add_order_line",
        duration_ms = start.elapsed().as_millis() as u64,
        order_id = order_id,
        line_count = order.lines().len()
    );

    Ok(order)
}

fn add_order_line_impl(
    order_id: EntityId,
    product_id: EntityId,
    quantity: i64,
    gateway: &Gateway,
) -> Result<Order> {
    let mut order = require_order(gateway, order_id)?;
    let product = require_product(gateway, product_id)?;

    order.add_line(product, quantity)?;
    OrderRepo::update(gateway, &mut order)?;
    Ok(order)
}

/// List every order with its customer and lines loaded
///
/// ## Errors
///
/// - `Persistence`: Database error
pub fn list_orders(gateway: &Gateway) -> Result<Vec<Order>> {
    log_op_start!("list_orders");
    let start = std::time::Instant::now();

    let orders = OrderRepo::list_all(gateway).map_err(|e| {
        log_op_error!(
            "list_orders",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "list_orders",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = orders.len()
    );

    Ok(orders)
}

/// Delete an existing order together with its lines
///
/// ## Errors
///
/// - `NotFound`: No order with `order_id`
/// - `Persistence`: Database error
pub fn delete_order(order_id: EntityId, gateway: &Gateway) -> Result<()> {
    log_op_start!("delete_order", order_id = order_id);
    let start = std::time::Instant::now();

    delete_order_impl(order_id, gateway).map_err(|e| {
        log_op_error!(
            "delete_order",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            order_id = order_id
        );
        e
    })?;

    log_op_end!(
        "delete_order",
        duration_ms = start.elapsed().as_millis() as u64,
        order_id = order_id
    );

    Ok(())
}

fn delete_order_impl(order_id: EntityId, gateway: &Gateway) -> Result<()> {
    let order = require_order(gateway, order_id)?;
    OrderRepo::delete(gateway, &order)
}
