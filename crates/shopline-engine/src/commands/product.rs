//! Product operations with boundary logging.

#![allow(clippy::result_large_err)]

use shopline_core::errors::ShopError;
use shopline_core::{log_op_end, log_op_error, log_op_start, EntityId, Product};
use shopline_store::errors::Result;
use shopline_store::{Gateway, ProductRepo};

/// Load a product or fail with not-found
pub(crate) fn require_product(gateway: &Gateway, product_id: EntityId) -> Result<Product> {
    let product = ProductRepo::find_by_id(gateway, product_id)?
        .ok_or(ShopError::ProductNotFound { product_id })?;
    Ok(product)
}

/// Create and persist a new product
///
/// ## Errors
///
/// - `InvalidName`: `name` is empty
/// - `InvalidPrice`: `price` is zero or negative
/// - `Persistence`: Database error
pub fn create_product(name: &str, price: f64, gateway: &Gateway) -> Result<Product> {
    log_op_start!("create_product", name = name, price = price);
    let start = std::time::Instant::now();

    let product = create_product_impl(name, price, gateway).map_err(|e| {
        log_op_error!(
            "create_product",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "create_product",
        duration_ms = start.elapsed().as_millis() as u64,
        product_id = product.id()
    );

    Ok(product)
}

fn create_product_impl(name: &str, price: f64, gateway: &Gateway) -> Result<Product> {
    let mut product = Product::new(name, price)?;
    ProductRepo::add(gateway, &mut product)?;
    Ok(product)
}

/// List every product in the order the store yields them
///
/// ## Errors
///
/// - `Persistence`: Database error
pub fn list_products(gateway: &Gateway) -> Result<Vec<Product>> {
    log_op_start!("list_products");
    let start = std::time::Instant::now();

    let products = ProductRepo::list_all(gateway).map_err(|e| {
        log_op_error!(
            "list_products",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "list_products",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = products.len()
    );

    Ok(products)
}

/// Replace the name and price of an existing product
///
/// ## Errors
///
/// - `NotFound`: No product with `product_id`
/// - `InvalidName` / `InvalidPrice`: Validation failed; nothing is written
/// - `Persistence`: Database error
pub fn update_product(
    product_id: EntityId,
    name: &str,
    price: f64,
    gateway: &Gateway,
) -> Result<Product> {
    log_op_start!("update_product", product_id = product_id, price = price);
    let start = std::time::Instant::now();

    let product = update_product_impl(product_id, name, price, gateway).map_err(|e| {
        log_op_error!(
            "update_product",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            product_id = product_id
        );
        e
    })?;

    log_op_end!(
        "update_product",
        duration_ms = start.elapsed().as_millis() as u64,
        product_id = product_id
    );

    Ok(product)
}

fn update_product_impl(
    product_id: EntityId,
    name: &str,
    price: f64,
    gateway: &Gateway,
) -> Result<Product> {
    let mut product = require_product(gateway, product_id)?;
    product.set_name(name)?;
    product.set_price(price)?;
    ProductRepo::update(gateway, &mut product)?;
    Ok(product)
}

/// Delete an existing product
///
/// ## Errors
///
/// - `NotFound`: No product with `product_id`
/// - `Persistence`: Database error, including a product still referenced by
///   an order line
pub fn delete_product(product_id: EntityId, gateway: &Gateway) -> Result<()> {
    log_op_start!("delete_product", product_id = product_id);
    let start = std::time::Instant::now();

    delete_product_impl(product_id, gateway).map_err(|e| {
        log_op_error!(
            "delete_product",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            product_id = product_id
        );
        e
    })?;

    log_op_end!(
        "delete_product",
        duration_ms = start.elapsed().as_millis() as u64,
        product_id = product_id
    );

    Ok(())
}

fn delete_product_impl(product_id: EntityId, gateway: &Gateway) -> Result<()> {
    let product = require_product(gateway, product_id)?;
    ProductRepo::delete(gateway, &product)
}
